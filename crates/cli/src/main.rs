mod state;

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use aistudio_types::Route;
use aistudio_util::{default_log_path, load_config};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

/// Browse the AIStudio site in your terminal.
#[derive(Debug, Parser)]
#[command(name = "aistudio", version, about)]
struct Args {
    /// Start route: `/`, `/genservices` or `/specservices`.
    #[arg(long, default_value = "/")]
    route: Route,

    /// Configuration file; overrides `AISTUDIO_CONFIG_PATH`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file used while the terminal UI is running.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the derived navigation state for the start route as JSON and exit.
    #[arg(long)]
    print_state: bool,
}

enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_target = match (&args.log_file, args.print_state) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::File(default_log_path()),
    };
    init_tracing(log_target)?;

    let loaded = load_config(args.config.as_deref()).context("failed to load configuration")?;
    let content = aistudio_content::embedded().context("embedded site content is invalid")?;
    info!(route = %args.route, config = ?loaded.source, "starting");

    if args.print_state {
        let state = state::snapshot(content, &loaded.config, &args.route);
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }
    aistudio_tui::run(content, loaded.config, args.route).await
}

fn init_tracing(target: LogTarget) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn route_flag_parses_paths() {
        let args = Args::try_parse_from(["aistudio", "--route", "/specservices", "--print-state"]).unwrap();
        assert_eq!(args.route, Route::SpecificServices);
        assert!(args.print_state);

        let args = Args::try_parse_from(["aistudio"]).unwrap();
        assert_eq!(args.route, Route::Home);

        assert!(Args::try_parse_from(["aistudio", "--route", "specservices"]).is_err());
    }
}
