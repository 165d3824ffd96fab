use crate::content::{Content, ContentKind};
use crate::error::{Result, SendError};
use crate::link::chat_link;
use phonecast_core::PhoneAddress;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use url::Url;

/// Hands content to one recipient. Implementations get a single attempt per
/// recipient and report failure through the returned error.
pub trait Deliver {
    fn name(&self) -> &'static str;

    fn supports(&self, _kind: ContentKind) -> bool {
        true
    }

    /// Runs once before the first recipient.
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    /// Returns the chat link used for the recipient.
    fn deliver(&mut self, address: &PhoneAddress, content: &Content) -> Result<Url>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunEntry {
    pub address: PhoneAddress,
    pub link: Url,
    pub image: Option<PathBuf>,
}

/// Records what would be sent without touching anything outside the process.
#[derive(Debug, Clone)]
pub struct DryRun {
    base_url: String,
    pub entries: Vec<DryRunEntry>,
}

impl DryRun {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            entries: Vec::new(),
        }
    }
}

impl Deliver for DryRun {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn deliver(&mut self, address: &PhoneAddress, content: &Content) -> Result<Url> {
        let link = chat_link(&self.base_url, address, content.text())?;
        self.entries.push(DryRunEntry {
            address: address.clone(),
            link: link.clone(),
            image: content.image().map(|path| path.to_path_buf()),
        });
        Ok(link)
    }
}

/// Opens each chat link with a system opener (`xdg-open`, `open`, ...).
///
/// The message text travels in the link; attachments cannot, so image
/// content is not supported.
#[derive(Debug, Clone)]
pub struct OpenCommand {
    base_url: String,
    program: String,
    args: Vec<String>,
}

impl OpenCommand {
    /// `opener` is split on whitespace into a program and leading arguments.
    /// `None` selects the platform default.
    pub fn new(base_url: impl Into<String>, opener: Option<&str>) -> Result<Self> {
        let (program, args) = match opener {
            Some(raw) => {
                let mut parts = raw.split_whitespace().map(str::to_string);
                let program = parts
                    .next()
                    .ok_or_else(|| SendError::Command("empty opener command".to_string()))?;
                (program, parts.collect())
            }
            None => platform_opener(),
        };
        Ok(Self {
            base_url: base_url.into(),
            program,
            args,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn open(&self, target: &str) -> Result<()> {
        debug!(program = %self.program, target, "running opener");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("{} exited with status {}", self.program, output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(SendError::Command(message));
        }
        Ok(())
    }
}

impl Deliver for OpenCommand {
    fn name(&self) -> &'static str {
        "opener"
    }

    fn supports(&self, kind: ContentKind) -> bool {
        kind == ContentKind::Text
    }

    fn prepare(&mut self) -> Result<()> {
        let base = Url::parse(&self.base_url)?;
        self.open(base.as_str())
    }

    fn deliver(&mut self, address: &PhoneAddress, content: &Content) -> Result<Url> {
        if !self.supports(content.kind()) {
            return Err(SendError::UnsupportedContent {
                deliverer: self.name(),
                kind: content.kind().label(),
            });
        }
        let link = chat_link(&self.base_url, address, content.text())?;
        self.open(link.as_str())?;
        Ok(link)
    }
}

#[cfg(target_os = "macos")]
fn platform_opener() -> (String, Vec<String>) {
    ("open".to_string(), Vec::new())
}

#[cfg(target_os = "windows")]
fn platform_opener() -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new()],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener() -> (String, Vec<String>) {
    ("xdg-open".to_string(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::{Deliver, DryRun, OpenCommand};
    use crate::content::{Content, ContentKind};
    use crate::error::SendError;
    use phonecast_core::normalize_phone;

    const BASE_URL: &str = "https://web.whatsapp.com";

    #[test]
    fn dry_run_records_links() {
        let mut deliverer = DryRun::new(BASE_URL);
        let content = Content::new(Some("hi".to_string()), None).unwrap();
        let address = normalize_phone("0505815487").unwrap();

        let link = deliverer.deliver(&address, &content).unwrap();
        assert_eq!(deliverer.entries.len(), 1);
        assert_eq!(deliverer.entries[0].link, link);
        assert_eq!(deliverer.entries[0].address, address);
    }

    #[test]
    fn opener_splits_program_and_args() {
        let opener = OpenCommand::new(BASE_URL, Some("firefox --new-tab")).unwrap();
        assert_eq!(opener.program(), "firefox");
        assert_eq!(opener.args, vec!["--new-tab".to_string()]);
        assert!(opener.supports(ContentKind::Text));
        assert!(!opener.supports(ContentKind::Image));
    }

    #[test]
    fn opener_rejects_blank_command() {
        let err = OpenCommand::new(BASE_URL, Some("   ")).unwrap_err();
        assert!(matches!(err, SendError::Command(_)));
    }

    #[cfg(unix)]
    #[test]
    fn opener_reports_failing_command() {
        let mut opener = OpenCommand::new(BASE_URL, Some("false")).unwrap();
        let content = Content::new(Some("hi".to_string()), None).unwrap();
        let address = normalize_phone("0505815487").unwrap();
        let err = opener.deliver(&address, &content).unwrap_err();
        assert!(matches!(err, SendError::Command(_)));
    }

    #[cfg(unix)]
    #[test]
    fn opener_succeeds_with_true() {
        let mut opener = OpenCommand::new(BASE_URL, Some("true")).unwrap();
        let content = Content::new(Some("hi".to_string()), None).unwrap();
        let address = normalize_phone("0505815487").unwrap();
        let link = opener.deliver(&address, &content).unwrap();
        assert!(link.as_str().starts_with("https://web.whatsapp.com/send?"));
        opener.prepare().unwrap();
    }
}
