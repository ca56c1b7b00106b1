//! buildmatrix CLI: inspect the cross-compilation targets of a project.

mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "buildmatrix", version, about = "Cross-compilation target matrix")]
struct Cli {
    /// Log skipped targets and toolchain probing
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the targets of the builds in buildmatrix.toml
    List {
        /// Only list the build with this id
        #[arg(long)]
        build: Option<String>,
        /// Use this version output instead of running the toolchain (e.g. "go1.18.0")
        #[arg(long)]
        go_version: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show every os/arch pair the toolchain supports
    Catalog {
        /// Toolchain version to evaluate gates against (default: newest gate)
        #[arg(long)]
        go_version: Option<String>,
    },
    /// Write a template buildmatrix.toml
    Init,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::List {
            build,
            go_version,
            format,
        } => commands::list::run(&cwd, build.as_deref(), go_version.as_deref(), format),
        Commands::Catalog { go_version } => commands::catalog::run(go_version.as_deref()),
        Commands::Init => commands::init::run(&cwd),
    }
}
