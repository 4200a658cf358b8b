use anyhow::Result;
use clap::Parser;

use tierbill_cli::{exit_code, run, Command};
use tierbill_core::{OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "tierbill")]
#[command(about = "Inspect subscription tier prices and names")]
#[command(version)]
struct Cli {
    /// Output format (text, json); overrides the config file
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load();
    if let Some(format) = cli.format {
        settings.display.format = format;
    }

    match run(&cli.command, &settings) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}
