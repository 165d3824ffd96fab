pub mod content;
pub mod deliver;
pub mod error;
pub mod link;
pub mod pacing;
pub mod run;

pub use content::{Content, ContentKind};
pub use deliver::{Deliver, DryRun, OpenCommand};
pub use error::{Result, SendError};
pub use link::chat_link;
pub use pacing::{NoSleep, Pacing, Sleeper, ThreadSleeper};
pub use run::{send_all, DeliveryStatus, RecipientOutcome, SendReport};
