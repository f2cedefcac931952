use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::sheet::AttendanceSheet;
use crate::store;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Attendance sheet snapshot (JSON)
    pub sheet: String,
    /// Name recorded as `changed_by` in the adjustment history
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Directory for exports written without an explicit --file
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Colour tiers in the terminal table
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_operator() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "admin".to_string())
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: Self::sheet_file().to_string_lossy().to_string(),
            operator: default_operator(),
            export_dir: default_export_dir(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the default path of the attendance sheet
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("attendance.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn sheet_path(&self) -> PathBuf {
        expand_tilde(&self.sheet)
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Initialize configuration file and an empty attendance sheet.
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_sheet: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        // sheet name: user provided or default
        let sheet_path = match custom_sheet {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::sheet_file(),
        };

        let config = Config {
            sheet: sheet_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !sheet_path.exists() {
            if let Some(parent) = sheet_path.parent() {
                fs::create_dir_all(parent)?;
            }
            store::save_sheet(&sheet_path, &AttendanceSheet::default())?;
        }

        success(format!("Sheet:       {}", sheet_path.display()));
        Ok(())
    }
}
