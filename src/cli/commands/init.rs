use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command: config directory, config file (unless in
/// test mode) and an empty sheet when none exists yet.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rattendance…");
    Config::init_all(cli.sheet.clone(), cli.test)?;
    println!("🎉 rattendance initialization completed!");
    Ok(())
}
