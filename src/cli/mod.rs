pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::models::load_balancer::LoadBalancerKind;

/// Reconstruct the private IP history of AWS load balancers from CloudTrail.
#[derive(Parser, Debug)]
#[command(name = "elbtrace", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run. Starts the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// AWS shared-config profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// AWS region (overrides profile and environment)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a load balancer interactively and show its IP history
    Menu,

    /// List load balancers
    List {
        /// Include network and gateway load balancers
        #[arg(long)]
        all: bool,
    },

    /// Show the private IP history of one load balancer
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Load balancer name
    pub name: String,

    /// Load balancer kind: app, net or gwy
    #[arg(long, default_value = "app")]
    pub kind: LoadBalancerKind,

    /// Only consider events since this date (ISO 8601)
    #[arg(long)]
    pub since: Option<String>,

    /// CloudTrail pages to read (50 events each)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Sort entries by event time instead of source order
    #[arg(long)]
    pub sort: bool,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Read events from a `aws cloudtrail lookup-events` export instead of CloudTrail
    #[arg(long)]
    pub events_file: Option<PathBuf>,
}
