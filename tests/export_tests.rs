mod common;
use common::{rat, setup_sheet, temp_dir, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all_rows() {
    let sheet = setup_sheet("export_csv_all");
    let out = temp_out("export_csv_all", "csv");

    rat()
        .args(["--sheet", &sheet, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Student ID,Name,Year Level,Total Hours,\
         Orientation - Time In,Orientation - Time Out,Orientation - Hours,\
         Seminar - Time In,Seminar - Time Out,Seminar - Hours,\
         Foundation Day - Time In,Foundation Day - Time Out,Foundation Day - Hours"
    );
    assert_eq!(lines[1], "2024-0001,Ana Cruz,1,4.00,No,No,2,Yes,No,2,Yes,Yes,0");
    assert_eq!(lines[2], "2024-0002,Ben Reyes,2,6.00,No,No,2,No,No,4,,,");
    assert_eq!(lines[3], "2023-0003,Carla Santos,10,1.00,Yes,No,1,,,,,,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_csv_only_visible_rows() {
    let sheet = setup_sheet("export_csv_filtered");
    let out = temp_out("export_csv_filtered", "csv");

    rat()
        .args([
            "--sheet",
            &sheet,
            "export",
            "--file",
            &out,
            "--academic-year",
            "2025-2026",
            "--semester",
            "1",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Ana Cruz"));
    assert!(content.contains("Ben Reyes"));
    assert!(!content.contains("Carla Santos"));
}

#[test]
fn test_export_nothing_visible_writes_header_only() {
    let sheet = setup_sheet("export_empty");
    let out = temp_out("export_empty", "csv");

    rat()
        .args(["--sheet", &sheet, "export", "--file", &out, "--name", "zzz"])
        .assert()
        .success()
        .stdout(contains("No visible rows"))
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Student ID,Name,Year Level,Total Hours,"));
}

#[test]
fn test_export_json_nothing_visible_writes_empty_array() {
    let sheet = setup_sheet("export_empty_json");
    let out = temp_out("export_empty_json", "json");

    rat()
        .args([
            "--sheet", &sheet, "export", "--format", "json", "--file", &out, "--year-level", "4",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value.as_array().unwrap().is_empty());
}

#[test]
fn test_export_default_file_name() {
    let sheet = setup_sheet("export_default_name");
    let dir = temp_dir("export_default_name");
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    rat()
        .current_dir(&dir)
        .args(["--sheet", &sheet, "export"])
        .assert()
        .success();

    let expected = dir.join(format!("attendance_data_{today}.csv"));
    assert!(expected.exists(), "missing {}", expected.display());
}

#[test]
fn test_export_json() {
    let sheet = setup_sheet("export_json");
    let out = temp_out("export_json", "json");

    rat()
        .args([
            "--sheet", &sheet, "export", "--format", "json", "--file", &out, "--year-level", "2",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_id"], "2024-0002");
    assert_eq!(rows[0]["total_hours"].as_f64(), Some(6.0));
    assert_eq!(rows[0]["tier"], "full");
    assert_eq!(rows[0]["events"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_xlsx() {
    let sheet = setup_sheet("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    rat()
        .args(["--sheet", &sheet, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_existing_file_needs_force() {
    let sheet = setup_sheet("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    rat()
        .args(["--sheet", &sheet, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rat()
        .args(["--sheet", &sheet, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Student ID"));
}
