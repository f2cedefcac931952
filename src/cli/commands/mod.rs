pub mod config;
pub mod export;
pub mod history;
pub mod hours;
pub mod init;
pub mod show;
pub mod toggle;

use std::path::PathBuf;

use crate::config::Config;
use crate::core::controller::SheetController;
use crate::core::submit::ApplySummary;
use crate::errors::AppResult;
use crate::models::sheet::AttendanceSheet;
use crate::store;
use crate::ui::messages::info;
use crate::utils::date;

/// Sheet loaded for a command, with its controller bound to it.
pub(crate) struct Session {
    pub path: PathBuf,
    pub sheet: AttendanceSheet,
    pub controller: SheetController,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let path = cfg.sheet_path();
        let sheet = store::load_sheet(&path)?;
        let controller = SheetController::load(&sheet);
        Ok(Self {
            path,
            sheet,
            controller,
        })
    }

    /// Submit the controller state: apply it to the sheet, write the file,
    /// then clear the changed markers.
    pub fn commit(&mut self, cfg: &Config) -> AppResult<ApplySummary> {
        let changed = self.controller.changed_count();
        let payload = self.controller.submit();
        info(format!(
            "Submitting {} form fields ({} changed cells).",
            payload.fields().len(),
            changed
        ));
        let summary = payload.apply(&mut self.sheet, &cfg.operator, date::now());
        store::save_sheet(&self.path, &self.sheet)?;
        self.controller.finish_submit();
        Ok(summary)
    }
}
