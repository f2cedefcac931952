#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_SHEET: &str = r#"{
  "events": [
    { "id": 1, "name": "Orientation", "date": "2025-08-04", "required_hours": 2.0, "semester_id": "1" },
    { "id": 2, "name": "Seminar", "date": "2025-09-12", "required_hours": 4.0, "semester_id": "1" },
    { "id": 3, "name": "Foundation Day", "date": "2025-10-03", "required_hours": 3.0, "semester_id": "1" }
  ],
  "students": [
    {
      "student_id": "2024-0001", "name": "Ana Cruz", "year_level": "1",
      "academic_year": "2025-2026", "semester_id": "1",
      "attendance": [
        { "id": 101, "event_id": 1, "timed_in": false, "timed_out": false, "hours": 2.0 },
        { "id": 102, "event_id": 2, "timed_in": true, "timed_out": false, "hours": 2.0 },
        { "id": 103, "event_id": 3, "timed_in": true, "timed_out": true, "hours": 0.0 }
      ]
    },
    {
      "student_id": "2024-0002", "name": "Ben Reyes", "year_level": "2",
      "academic_year": "2025-2026", "semester_id": "1",
      "attendance": [
        { "id": 201, "event_id": 1, "timed_in": false, "timed_out": false, "hours": 2.0 },
        { "id": 202, "event_id": 2, "timed_in": false, "timed_out": false, "hours": 4.0 }
      ]
    },
    {
      "student_id": "2023-0003", "name": "Carla Santos", "year_level": "10",
      "academic_year": "2024-2025", "semester_id": "2",
      "attendance": [
        { "id": 301, "event_id": 1, "timed_in": true, "timed_out": false, "hours": 1.0 }
      ]
    }
  ],
  "history": [
    {
      "attendance_id": 102, "student_id": "2024-0001", "event_id": 2,
      "old_hours": 4.0, "new_hours": 2.0, "changed_by": "registrar",
      "changed_at": "2025-01-15T09:30:00+00:00",
      "reason": "Manual adjustment via attendance dashboard"
    }
  ]
}"#;

pub fn rat() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.arg("--no-color");
    cmd
}

/// Write the sample sheet to a unique path inside the system temp dir
pub fn setup_sheet(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.json", name));
    fs::write(&path, SAMPLE_SHEET).expect("write sample sheet");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn read_sheet(path: &str) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read sheet");
    serde_json::from_str(&content).expect("parse sheet")
}

/// Stored state of a cell as `(timed_in, timed_out, hours)`.
pub fn cell(sheet: &serde_json::Value, attendance_id: i64) -> (bool, bool, f64) {
    sheet["students"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|s| s["attendance"].as_array().unwrap().iter())
        .find(|c| c["id"].as_i64() == Some(attendance_id))
        .map(|c| {
            (
                c["timed_in"].as_bool().unwrap(),
                c["timed_out"].as_bool().unwrap(),
                c["hours"].as_f64().unwrap(),
            )
        })
        .expect("cell present")
}
