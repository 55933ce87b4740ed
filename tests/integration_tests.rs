mod common;
use common::{pat, temp_config, write_bad_date_event_file, write_event_file};
use std::env;
use std::fs;

#[test]
fn test_init_creates_config_file() {
    let cfg = temp_config("init_creates");

    pat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Config file created"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("Your Business"));
    assert!(content.contains("header_design"));
}

#[test]
fn test_init_keeps_existing_config() {
    let cfg = temp_config("init_keeps");

    pat().args(["--config", &cfg, "init"]).assert().success();
    fs::write(&cfg, "profile:\n  name: Kumar Catering\n").expect("edit config");

    pat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicates::str::contains("already exists"));

    assert!(fs::read_to_string(&cfg).unwrap().contains("Kumar Catering"));
}

#[test]
fn test_config_print() {
    let cfg = temp_config("config_print");
    pat().args(["--config", &cfg, "init"]).assert().success();

    pat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Your Business"));
}

#[test]
fn test_config_check_reports_missing_fields() {
    let cfg = temp_config("config_check");
    fs::write(
        &cfg,
        "profile:\n  name: ''\n  mobile: ''\nheader_design: custom\n",
    )
    .expect("write config");

    pat()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(predicates::str::contains("profile.name is empty"))
        .stdout(predicates::str::contains("custom_design_url is not set"));
}

#[test]
fn test_preview_prints_rows_and_page_count() {
    let event = write_event_file("preview_rows");
    let cfg = temp_config("preview_rows");

    pat()
        .args(["--config", &cfg, "preview", &event, "--type", "grocery"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Wedding"))
        .stdout(predicates::str::contains("அரிசி"))
        .stdout(predicates::str::contains("4 row(s), 1 page(s)"));
}

#[test]
fn test_invalid_event_date_is_rejected() {
    let event = write_bad_date_event_file("bad_date");
    let cfg = temp_config("bad_date");

    pat()
        .args(["--config", &cfg, "preview", &event])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid date format"));
}

#[test]
fn test_export_derives_output_filename() {
    let event = write_event_file("derived_name");
    let cfg = temp_config("derived_name");

    let workdir = env::temp_dir().join("pattiyal_derived_name_wd");
    fs::remove_dir_all(&workdir).ok();
    fs::create_dir_all(&workdir).expect("create workdir");

    pat()
        .current_dir(&workdir)
        .args(["--config", &cfg, "export", &event, "--format", "html"])
        .assert()
        .success();

    let produced: Vec<String> = fs::read_dir(&workdir)
        .expect("read workdir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert_eq!(produced.len(), 1);
    let name = &produced[0];
    assert!(
        name.starts_with("wedding_maligai_") && name.ends_with(".html"),
        "unexpected derived filename: {name}"
    );
}
