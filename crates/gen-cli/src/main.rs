//! Primer module generator CLI
//!
//! Resolves the options for a new Primer CSS module from positional
//! arguments, flags, and interactive prompts, then reports them.

mod cli;
mod engine;
mod error;
mod probe;
mod report;

use colored::Colorize;
use gen_resolve::Resolver;
use gen_schema::SchemaRegistry;
use tracing_subscriber::EnvFilter;

use engine::DialoguerEngine;
use error::Result;
use probe::FsProbe;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout is reserved for the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let registry = SchemaRegistry::with_builtins();
    let matches = cli::build_command(&registry).get_matches();

    let verbose = matches.get_flag("verbose");
    init_tracing(verbose);
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let input = cli::collect_input(&matches, &registry);

    let mut engine = DialoguerEngine;
    let probe = FsProbe;
    let mut resolver = Resolver::new(&registry, &mut engine, &probe);
    let resolved = resolver.resolve(&input).await?;

    if matches.get_flag("json") {
        println!("{}", report::to_json(&resolved)?);
    } else {
        report::print_summary(&registry, &resolved);
    }

    Ok(())
}
