use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RowFilter;
use crate::errors::AppResult;
use crate::ui::dashboard;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { filters } = cmd {
        let session = Session::open(cfg)?;
        let filter = RowFilter::from(filters);
        let controller = &session.controller;

        let visible = controller.visible_rows(&filter).count();
        if visible == 0 {
            info("No students match the selected filters.");
            return Ok(());
        }

        header(format!(
            "Attendance ({visible} of {} students, {} events)",
            controller.rows().len(),
            controller.events().len()
        ));
        print!("{}", dashboard::render(controller, &filter, cfg.color));
    }
    Ok(())
}
