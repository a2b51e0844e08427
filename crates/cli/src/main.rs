// StockSync CLI - reconcile an ecommerce inventory export against the
// warehouse stock list and emit an apply-ready update file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use stocksync_cli::exit_codes::EXIT_SUCCESS;
use stocksync_cli::{cmd_inspect, cmd_run, cmd_validate, CliError};
use stocksync_engine::Side;

#[derive(Parser)]
#[command(name = "stocksync")]
#[command(about = "Reconcile ecommerce inventory against the warehouse stock list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile both exports and write the apply + audit artifacts
    #[command(after_help = "\
Exit codes: 3 input unreadable, 4 required column missing, 5 negative final
quantity (nothing written), 6 artifact write failure.

Examples:
  stocksync run --ecommerce export.csv --warehouse cedi.xlsx \\
      --apply apply.csv --audit audit.csv
  stocksync run --ecommerce export.csv --warehouse cedi.xlsx \\
      --apply apply.xlsx --audit audit.xlsx --config stocksync.toml
  stocksync run ... --quiet --json | jq .summary")]
    Run {
        /// Ecommerce export (Matrixify style), delimited text or spreadsheet
        #[arg(long)]
        ecommerce: PathBuf,

        /// Warehouse stock list (CEDI), delimited text or spreadsheet
        #[arg(long)]
        warehouse: PathBuf,

        /// Apply-ready update file to write (.csv or .xlsx)
        #[arg(long)]
        apply: PathBuf,

        /// Audit trail file to write (.csv or .xlsx)
        #[arg(long)]
        audit: PathBuf,

        /// TOML config overriding column aliases and header scanning
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Print the full result as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress the stderr summary
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Show how one input file loads: header row, headers, column matches
    #[command(after_help = "\
Examples:
  stocksync inspect cedi.xlsx --side warehouse
  stocksync inspect export.csv --side ecommerce --json")]
    Inspect {
        /// Input file to examine
        file: PathBuf,

        /// Which side's aliases and header scanning to apply
        #[arg(long)]
        side: SideArg,

        /// TOML config overriding column aliases and header scanning
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Machine-readable report on stdout
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate a config file without running
    Validate {
        /// TOML config to check
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Ecommerce,
    Warehouse,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Ecommerce => Side::Ecommerce,
            SideArg::Warehouse => Side::Warehouse,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { ecommerce, warehouse, apply, audit, config, json, output, quiet } => {
            cmd_run(ecommerce, warehouse, apply, audit, config, json, output, quiet)
        }
        Commands::Inspect { file, side, config, json } => {
            cmd_inspect(file, side.into(), config, json)
        }
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}
