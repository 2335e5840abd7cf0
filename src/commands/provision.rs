use std::time::Duration;

use crate::cli::{Cli, Commands};
use crate::domain::models::{JsonOut, ProvisionReport, RunReport};
use crate::services::output::print_one;
use crate::services::provision;

pub fn handle_provision_commands(cli: &Cli) -> anyhow::Result<bool> {
    let report = match &cli.command {
        None | Some(Commands::Run) => {
            let steps = provision::run_demo(&cli.root)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: RunReport { steps }
                    })?
                );
            } else {
                for step in &steps {
                    println!("{}\t{}", step.operation, step.count);
                }
                println!("demonstration run complete");
            }
            return Ok(true);
        }
        Some(Commands::Range { start, end }) => ProvisionReport::new(
            "range",
            &cli.root,
            provision::create_folders_for_range(&cli.root, *start, *end)?,
        ),
        Some(Commands::List { names }) => ProvisionReport::new(
            "list",
            &cli.root,
            provision::create_folders_from_list(&cli.root, names)?,
        ),
        Some(Commands::Prefixed { prefix, names }) => ProvisionReport::new(
            "prefixed",
            &cli.root,
            provision::create_prefixed_folders(&cli.root, names, prefix)?,
        ),
        Some(Commands::Periodic { delay_secs }) => {
            let delay = Duration::from_secs_f64(delay_secs.max(0.0));
            ProvisionReport::new(
                "periodic",
                &cli.root,
                provision::create_folders_periodically(&cli.root, delay)?,
            )
        }
        Some(Commands::Standardized {
            lowercase,
            strip_spaces,
            names,
        }) => ProvisionReport::new(
            "standardized",
            &cli.root,
            provision::create_standardized_folders(&cli.root, names, *lowercase, *strip_spaces)?,
        ),
        Some(_) => return Ok(false),
    };

    print_one(cli.json, report, |r| {
        format!("created {} folders under {}", r.count, r.root)
    })?;
    Ok(true)
}
