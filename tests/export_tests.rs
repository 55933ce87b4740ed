mod common;
use common::{pat, temp_config, temp_out, write_event_file};
use std::fs;

#[test]
fn test_export_html_grocery() {
    let event = write_event_file("export_html_grocery");
    let cfg = temp_config("export_html_grocery");
    let out = temp_out("export_html_grocery", "html");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--type", "grocery", "--format", "html", "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("Wedding"));
    assert!(content.contains("மளிகை பட்டியல்"));
    assert!(content.contains("அரிசி"));
    // Footer from the event file appears on the page.
    assert!(content.contains("நன்றி!"));
    // The blank input row was dropped; renumbering stops at 4.
    assert!(content.contains("<tr><td>4</td><td>Elakkai</td>"));
    assert!(content.contains("<tr><td>5</td><td></td>"));
}

#[test]
fn test_export_html_vegetable() {
    let event = write_event_file("export_html_vegetable");
    let cfg = temp_config("export_html_vegetable");
    let out = temp_out("export_html_vegetable", "html");

    pat()
        .args([
            "--config",
            &cfg,
            "export",
            &event,
            "--type",
            "vegetable",
            "--format",
            "html",
            "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("காய்கறி பட்டியல்"));
    assert!(content.contains("Carrot"));
    assert!(!content.contains("அரிசி"));
}

#[test]
fn test_export_json_drops_blank_rows() {
    let event = write_event_file("export_json");
    let cfg = temp_config("export_json");
    let out = temp_out("export_json", "json");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--type", "grocery", "--format", "json", "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");

    // 5 input rows, one fully blank: 4 survive, renumbered 1..=4.
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["s_no"], 1);
    assert_eq!(rows[0]["name"], "அரிசி");
    assert_eq!(rows[3]["s_no"], 4);
    assert_eq!(rows[3]["name"], "Elakkai");
}

#[test]
fn test_export_csv() {
    let event = write_event_file("export_csv");
    let cfg = temp_config("export_csv");
    let out = temp_out("export_csv", "csv");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--type", "grocery", "--format", "csv", "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("s_no,name,kg,gram,alavu"));
    assert!(content.contains("2,Sugar,5.5,"));
}

#[test]
fn test_export_custom_header_via_flags() {
    let event = write_event_file("export_custom_header");
    let cfg = temp_config("export_custom_header");
    let out = temp_out("export_custom_header", "html");

    pat()
        .args([
            "--config",
            &cfg,
            "export",
            &event,
            "--format",
            "html",
            "--design",
            "custom",
            "--design-url",
            "https://example.com/banner.png",
            "--out",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("class=\"custom-header-img\""));
    assert!(content.contains("https://example.com/banner.png"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let event = write_event_file("export_no_force");
    let cfg = temp_config("export_no_force");
    let out = temp_out("export_no_force", "html");

    fs::write(&out, "existing").expect("seed existing file");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--format", "html", "--out", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    // Untouched.
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");
}

#[test]
fn test_export_overwrites_with_force() {
    let event = write_event_file("export_force");
    let cfg = temp_config("export_force");
    let out = temp_out("export_force", "html");

    fs::write(&out, "existing").expect("seed existing file");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--format", "html", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("Wedding"));
}

#[test]
fn test_export_footer_flag_overrides_event_footer() {
    let event = write_event_file("export_footer_flag");
    let cfg = temp_config("export_footer_flag");
    let out = temp_out("export_footer_flag", "html");

    pat()
        .args([
            "--config", &cfg, "export", &event, "--format", "html", "--footer",
            "Custom footer", "--out", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("Custom footer"));
    assert!(!content.contains("நன்றி!"));
}

#[test]
fn test_export_rejects_overlong_footer() {
    let event = write_event_file("export_long_footer");
    let cfg = temp_config("export_long_footer");
    let out = temp_out("export_long_footer", "html");

    let long_footer = "x".repeat(200);

    pat()
        .args([
            "--config", &cfg, "export", &event, "--format", "html", "--footer", &long_footer,
            "--out", &out,
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_missing_event_file_fails() {
    let cfg = temp_config("export_missing_file");

    pat()
        .args(["--config", &cfg, "export", "/nonexistent/event.json"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid event file"));
}
