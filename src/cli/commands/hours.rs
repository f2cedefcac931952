use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours::format_hours;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordKey;
use crate::ui::dashboard;
use crate::ui::messages::{info, success, warning};

/// Manual hours edit: type the value, leave the field (clamp), submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        student,
        event,
        value,
        dry_run,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        let key = RecordKey::new(student.as_str(), *event);

        session.controller.input_hours(&key, value)?;
        if session.controller.blur_hours(&key)? {
            let required = session
                .controller
                .record(&key)
                .map(|r| r.required_hours)
                .unwrap_or_default();
            warning(format!(
                "{value} exceeds the required hours, capped at {}",
                format_hours(required)
            ));
        }

        let row = session
            .controller
            .row(student)
            .ok_or_else(|| AppError::StudentNotFound(student.clone()))?;
        print!("{}", dashboard::render_row(&session.controller, row, cfg.color));

        if *dry_run {
            info("Dry run: nothing saved.");
            return Ok(());
        }

        let summary = session.commit(cfg)?;
        success(format!(
            "Attendance saved ({} cells, {} hour adjustments).",
            summary.cells, summary.adjustments
        ));
    }
    Ok(())
}
