#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pat() -> Command {
    cargo_bin_cmd!("pattiyal")
}

/// Create a unique output file path inside the system temp dir and remove
/// any existing file.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pattiyal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path for a per-test config file. Pointing --config at a missing file
/// makes the CLI run on defaults without touching the user's real config.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pattiyal.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small event file with both lists, a footer, and one fully blank
/// grocery row (which sanitation must drop).
pub fn write_event_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pattiyal_event.json", name));

    let content = r#"{
  "title": "Wedding",
  "date": "2025-01-15",
  "footer": "நன்றி!",
  "grocery": [
    { "name": "அரிசி", "kg": 25, "gram": 0, "alavu": "" },
    { "name": "Sugar", "kg": 5.5, "gram": 0, "alavu": "" },
    { "name": "Salt", "kg": 0, "gram": 500, "alavu": "" },
    { "name": "", "kg": 0, "gram": 0, "alavu": "" },
    { "name": "Elakkai", "kg": 0, "gram": 50, "alavu": "பாக்கெட்" }
  ],
  "vegetable": [
    { "name": "Carrot", "kg": 2, "gram": 0, "alavu": "" }
  ]
}
"#;

    fs::write(&path, content).expect("write event file");
    path.to_string_lossy().to_string()
}

/// Event file with an unparseable date.
pub fn write_bad_date_event_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pattiyal_baddate.json", name));

    let content = r#"{ "title": "Wedding", "date": "15-01-2025", "grocery": [] }"#;
    fs::write(&path, content).expect("write event file");
    path.to_string_lossy().to_string()
}
