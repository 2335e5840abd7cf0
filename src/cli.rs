use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "provis", version, about = "Workspace folder provisioning CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Root directory folders are created under"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Log file path (defaults to provis.log under the root)"
    )]
    pub log_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level filter (env-filter syntax)"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Run,
    Range {
        start: i64,
        end: i64,
    },
    List {
        names: Vec<String>,
    },
    Prefixed {
        #[arg(long)]
        prefix: String,
        names: Vec<String>,
    },
    Periodic {
        #[arg(long, default_value_t = 5.0)]
        delay_secs: f64,
    },
    Standardized {
        #[arg(long)]
        lowercase: bool,
        #[arg(long)]
        strip_spaces: bool,
        names: Vec<String>,
    },
    Byline {
        #[arg(long)]
        aloud: bool,
    },
}
