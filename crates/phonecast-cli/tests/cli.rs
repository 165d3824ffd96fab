use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run(config_dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("phonecast")
        .env("XDG_CONFIG_HOME", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(config_dir: &Path, args: &[&str]) -> String {
    let output = run(config_dir, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_json(config_dir: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(config_dir, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_contacts(dir: &Path) -> String {
    let path = dir.join("contacts.csv");
    fs::write(
        &path,
        "Name,Phone Number,Email\n\
         Ada,0505815487,ada@example.com\n\
         Grace,+966 54 155 6250,grace@example.com\n\
         Ada again,+966505815487,\n\
         Nobody,12345,\n\
         Blank,,\n",
    )
    .expect("write csv");
    path.to_str().expect("path").to_string()
}

#[test]
fn normalize_prints_canonical_or_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(temp.path(), &["normalize", "0505815487", "+96650581548"]);
    assert_eq!(
        stdout,
        "0505815487 -> +966505815487\n+96650581548 -> rejected\n"
    );

    let json = run_json(temp.path(), &["normalize", "966505815487", "abc"]);
    let items = json.as_array().expect("array");
    assert_eq!(items[0]["address"], "+966505815487");
    assert!(items[1]["address"].is_null());
}

#[test]
fn detect_reports_keyword_and_fallback() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let json = run_json(temp.path(), &["detect", &contacts]);
    assert_eq!(json["selected"]["name"], "Phone Number");
    assert_eq!(json["selected"]["matched"]["kind"], "keyword");
    assert_eq!(json["selected"]["matched"]["keyword"], "phone");

    let plain = temp.path().join("plain.csv");
    fs::write(&plain, "Name,Email\nAda,ada@example.com\n").expect("write csv");
    let stdout = run_ok(temp.path(), &["detect", plain.to_str().expect("path")]);
    assert!(stdout.contains("Name"));
    assert!(stdout.contains("using first column"));
}

#[test]
fn extract_dedupes_and_reports() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let stdout = run_ok(temp.path(), &["extract", &contacts]);
    assert_eq!(stdout, "+966505815487\n+966541556250\n");

    let json = run_json(temp.path(), &["extract", &contacts]);
    assert_eq!(json["column"]["name"], "Phone Number");
    assert_eq!(json["total"], 5);
    assert_eq!(json["blank"], 1);
    assert_eq!(json["duplicates"], 1);
    assert_eq!(json["rejected"][0], "12345");

    let out = temp.path().join("out").join("numbers.txt");
    run_ok(
        temp.path(),
        &["extract", &contacts, "--out", out.to_str().expect("path")],
    );
    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written, "+966505815487\n+966541556250\n");
}

#[test]
fn extract_without_valid_numbers_fails_with_samples() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("bad.csv");
    fs::write(&path, "phone\n123\nabc\n").expect("write csv");

    let output = run(temp.path(), &["extract", path.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no valid phone numbers found in column 'phone'"));
    assert!(stderr.contains("123, abc"));
}

#[test]
fn missing_input_file_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.csv");
    let output = run(temp.path(), &["extract", missing.to_str().expect("path")]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn send_dry_run_lists_links() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let json = run_json(
        temp.path(),
        &["send", &contacts, "--dry-run", "-m", "Hello there"],
    );
    assert_eq!(json["sent"], 2);
    assert_eq!(json["failed"], 0);
    assert_eq!(json["kind"], "text");
    let outcomes = json["outcomes"].as_array().expect("array");
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["address"], "+966505815487");
    assert_eq!(
        outcomes[0]["link"],
        "https://web.whatsapp.com/send?phone=%2B966505815487&text=Hello+there"
    );
}

#[test]
fn send_requires_content() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let output = run(temp.path(), &["send", &contacts, "--dry-run"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn send_uses_configured_base_url() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let config = temp.path().join("phonecast.toml");
    fs::write(&config, "[send]\nbase_url = \"https://chat.example.com\"\n").expect("write config");

    let json = run_json(
        temp.path(),
        &[
            "--config",
            config.to_str().expect("path"),
            "send",
            &contacts,
            "--dry-run",
            "-m",
            "hi",
        ],
    );
    let link = json["outcomes"][0]["link"].as_str().expect("link");
    assert!(link.starts_with("https://chat.example.com/send?"));
}

#[test]
fn send_merges_manual_numbers_with_file() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());

    let json = run_json(
        temp.path(),
        &[
            "send",
            &contacts,
            "--to",
            "0541556250",
            "--to",
            "+966 55 123 4567",
            "--dry-run",
            "-m",
            "hi",
        ],
    );
    assert_eq!(json["column"], "Phone Number");
    let outcomes = json["outcomes"].as_array().expect("array");
    let addresses: Vec<&str> = outcomes
        .iter()
        .map(|outcome| outcome["address"].as_str().expect("address"))
        .collect();
    assert_eq!(
        addresses,
        vec!["+966505815487", "+966541556250", "+966551234567"]
    );
}

#[test]
fn send_accepts_manual_numbers_without_file() {
    let temp = TempDir::new().expect("temp dir");
    let json = run_json(
        temp.path(),
        &["send", "--to", "966505815487", "--to", "0505815487", "--dry-run", "-m", "hi"],
    );
    assert!(json["column"].is_null());
    assert_eq!(json["sent"], 1);
    assert_eq!(json["outcomes"][0]["address"], "+966505815487");
}

#[test]
fn send_rejects_invalid_manual_number() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(
        temp.path(),
        &["send", "--to", "0505815487", "--to", "12345", "--dry-run", "-m", "hi"],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("12345"));
}

#[cfg(unix)]
fn write_quiet_config(dir: &Path) -> String {
    let config = dir.join("phonecast.toml");
    fs::write(
        &config,
        "[send]\nopener = \"true\"\nstartup_secs = 0\nbetween_secs = 0\nafter_failure_secs = 0\nfinal_settle_secs = 0\n",
    )
    .expect("write config");
    config.to_str().expect("path").to_string()
}

#[cfg(unix)]
#[test]
fn send_opens_each_chat_with_opener() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let config = write_quiet_config(temp.path());

    let stdout = run_ok(
        temp.path(),
        &["--config", &config, "send", &contacts, "-m", "hi"],
    );
    assert!(stdout.contains("[1/2] +966505815487"));
    assert!(stdout.contains("Opened 2 of 2 chats"));
}

#[cfg(unix)]
#[test]
fn send_aborts_when_opener_cannot_start_session() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let config = write_quiet_config(temp.path());

    let output = run(
        temp.path(),
        &[
            "--config", &config, "send", &contacts, "-m", "hi", "--opener", "false",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(!stdout.contains("[1/2]"));
}

#[cfg(unix)]
#[test]
fn send_reports_failed_recipients_and_exits_nonzero() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = write_contacts(temp.path());
    let config = write_quiet_config(temp.path());
    let script = temp.path().join("opener.sh");
    fs::write(
        &script,
        "case \"$1\" in\n  *541556250*) exit 7 ;;\nesac\nexit 0\n",
    )
    .expect("write script");
    let opener = format!("sh {}", script.to_str().expect("path"));

    let output = run(
        temp.path(),
        &[
            "--config", &config, "send", &contacts, "-m", "hi", "--opener", &opener,
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("[1/2] +966505815487\n  ok\n"));
    assert!(stdout.contains("[2/2] +966541556250\n  failed: "));
    assert!(stdout.contains("Opened 1 of 2 chats (column 'Phone Number'), failed 1"));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("1 of 2 deliveries failed"));
}

#[test]
fn completions_generate_script() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_ok(temp.path(), &["completions", "bash"]);
    assert!(stdout.contains("phonecast"));
}
