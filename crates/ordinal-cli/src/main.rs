//! Ordinal CLI - Command-line interface for the Ordinal ordering engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{apply, check, order};

#[derive(Parser)]
#[command(name = "ordinal")]
#[command(about = "Resolve first/last/before/after constraints into a single order", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose logging (overridden by ORDINAL_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved order of an item file
    Order {
        /// Path to item file
        file: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Validate the constraints in an item file
    Check {
        /// Path to item file
        file: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Rewrite an item file in resolved order with positions removed
    Apply {
        /// Path to item file
        file: String,

        /// Write to this path instead of the input file
        #[arg(short, long)]
        output: Option<String>,

        /// Print the rewritten file without saving it
        #[arg(long)]
        dry_run: bool,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("ORDINAL_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("ordinal_cli=debug,ordinal_order=trace,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Order { file, format } => order::run(&file, &format),
        Commands::Check { file, format } => check::run(&file, &format),
        Commands::Apply {
            file,
            output,
            dry_run,
        } => apply::run(apply::ApplyArgs {
            file,
            output,
            dry_run,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), "json");
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn test_cli_parses_apply() {
        let cli =
            Cli::try_parse_from(["ordinal", "-v", "apply", "items.toml", "--dry-run"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Apply { ref file, dry_run: true, output: None } if file == "items.toml"
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["ordinal", "order", "items.toml", "--format", "xml"]);
        assert!(result.is_err());
    }
}
