use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RowFilter;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let session = Session::open(cfg)?;
        let filter = RowFilter::from(filters);
        ExportLogic::export(
            &session.controller,
            &filter,
            *format,
            file.as_deref(),
            &cfg.export_path(),
            *force,
        )?;
    }
    Ok(())
}
