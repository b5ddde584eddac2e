use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dbgsym::commands::{
    dump_command, info_command, list_functions_command, lookup_command, symbols_command,
    SymbolsOptions,
};
use dbgsym_core::config::ExportFormat;
use dbgsym_core::CODE_AREA_KEY;

/// Inform debug-file symbol extractor.
///
/// This CLI is a thin wrapper around `dbgsym-core` (exposed in code as `dbgsym_core`).
/// All parsing and normalization lives in the library so it can be tested thoroughly
/// and reused from build scripts.
#[derive(Parser, Debug)]
#[command(
    name = "dbgsym",
    version,
    about = "Extract address-to-name symbol maps from Inform debug files",
    long_about = None
)]
struct Cli {
    /// Log parser progress (same as RUST_LOG=debug).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show versions, SHA-256 digest, and table sizes of a debug file.
    Info {
        /// Path to the debug file (e.g. gameinfo.dbg).
        #[arg(long)]
        input: PathBuf,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List every routine described by the debug file.
    Functions {
        /// Path to the debug file.
        #[arg(long)]
        input: PathBuf,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Produce the absolute address to identifier map.
    ///
    /// Function addresses are offset by the code-area base and names are
    /// reduced to ASCII letters and digits.
    Symbols {
        /// Path to the debug file.
        #[arg(long)]
        input: PathBuf,

        /// Optional export config JSON (base_key, variable_name, format).
        #[arg(long)]
        config: Option<String>,

        /// Named-address entry holding the code base. Overrides the config.
        #[arg(long)]
        base_key: Option<String>,

        /// Variable name for the js format. Overrides the config.
        #[arg(long)]
        variable: Option<String>,

        /// Output format: js, json, or yaml. Overrides the config.
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },

    /// Find the routine containing an absolute address.
    Lookup {
        /// Path to the debug file.
        #[arg(long)]
        input: PathBuf,

        /// Absolute address, decimal or 0x-prefixed hex.
        #[arg(long)]
        address: String,

        /// Named-address entry holding the code base.
        #[arg(long, default_value = CODE_AREA_KEY)]
        base_key: String,
    },

    /// Print the full entity registry.
    Dump {
        /// Path to the debug file.
        #[arg(long)]
        input: PathBuf,

        /// Output format: json or yaml.
        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Info { input, json } => info_command(&input, json)?,
        Command::Functions { input, json } => list_functions_command(&input, json)?,
        Command::Symbols { input, config, base_key, variable, format, output } => {
            let options = SymbolsOptions { config, base_key, variable, format, output };
            symbols_command(&input, &options)?
        }
        Command::Lookup { input, address, base_key } => {
            lookup_command(&input, &address, &base_key)?
        }
        Command::Dump { input, format } => dump_command(&input, format)?,
    }

    Ok(())
}
