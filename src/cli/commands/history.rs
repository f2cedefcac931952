use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{HistoryFilter, HistoryWindow};
use crate::errors::AppResult;
use crate::store;
use crate::ui::history;
use crate::ui::messages::{header, info};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { window, search } = cmd {
        let filter = HistoryFilter {
            window: window.parse::<HistoryWindow>()?,
            search: search.clone(),
        };
        let sheet = store::load_sheet(&cfg.sheet_path())?;

        match history::render(&sheet, &filter, date::today(), cfg.color) {
            Some(table) => {
                header("Attendance history");
                print!("{table}");
            }
            None => info("No history entries for the selected filters."),
        }
    }
    Ok(())
}
