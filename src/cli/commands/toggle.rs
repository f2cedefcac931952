use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours::format_hours;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordKey;
use crate::ui::dashboard;
use crate::ui::messages::{info, success};

/// Toggle (or set with `--set`) a time-in / time-out mark, then submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle {
        student,
        event,
        mark,
        set,
        dry_run,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        let key = RecordKey::new(student.as_str(), *event);

        let (hours, verb) = match set {
            Some(checked) => (
                session.controller.set_checkbox(&key, *mark, *checked)?,
                if *checked { "checked" } else { "unchecked" },
            ),
            None => (session.controller.toggle(&key, *mark)?, "toggled"),
        };
        info(format!(
            "{} of {} / {} {}: {} h",
            mark.label(),
            student,
            session.sheet.event_name(*event),
            verb,
            format_hours(hours)
        ));

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
