mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::RunContext;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    let result = RunContext::from_args(&args).and_then(|ctx| match &args.command {
        None | Some(Commands::Menu) => cli::commands::menu::execute(&ctx),
        Some(Commands::List { all }) => cli::commands::list::execute(&ctx, *all),
        Some(Commands::Trace(trace_args)) => cli::commands::trace::execute(&ctx, trace_args),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "elbtrace=debug,warn"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
