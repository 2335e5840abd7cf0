use crate::cli::{Cli, Commands};
use crate::services::byline;
use crate::services::output::print_one;

pub fn handle_byline_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Some(Commands::Byline { aloud }) = &cli.command else {
        return Ok(false);
    };

    let report = byline::byline_report()?;
    print_one(cli.json, report, |r| r.text.clone())?;
    if *aloud {
        byline::read_byline_aloud()?;
    }
    Ok(true)
}
