//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use pillbar_core::RowWidth;
use pillbar_core::config::Config;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "pillbar")]
#[command(version = "0.1")]
#[command(about = "Responsive pill-row fit estimation for terminal UIs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the row width policy ("auto" or a column count)
    #[arg(long, value_name = "WIDTH")]
    width: Option<RowWidth>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the interactive demo (default)
    Demo,

    /// Estimate how many labels fit in a given width
    Fit {
        /// A pill label; repeat for each pill, in display order
        #[arg(short, long = "label", value_name = "LABEL", required = true)]
        labels: Vec<String>,

        /// Available row width
        #[arg(long)]
        width: u16,

        /// Width reserved for the overflow counter
        #[arg(long, default_value_t = 0)]
        suffix: u16,

        /// Per-pill overhead beyond the label text
        #[arg(long)]
        overhead: Option<u16>,

        /// Measure in pixels (proportional font) instead of terminal columns
        #[arg(long)]
        px: bool,

        /// Font size for pixel measurement
        #[arg(long, default_value_t = 12.0)]
        font_size: f32,

        /// Emit a JSON object instead of a bare count
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the demo
    let Some(command) = cli.command else {
        let _guard = logging::init_file("info")?;
        return commands::demo::run(&config, cli.width);
    };

    match command {
        Commands::Demo => {
            let _guard = logging::init_file("info")?;
            commands::demo::run(&config, cli.width)
        }

        Commands::Fit {
            labels,
            width,
            suffix,
            overhead,
            px,
            font_size,
            json,
        } => {
            logging::init_stderr("warn");
            commands::fit::run(commands::fit::FitOptions {
                labels: &labels,
                width,
                suffix,
                overhead,
                px,
                font_size,
                json,
            })
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
