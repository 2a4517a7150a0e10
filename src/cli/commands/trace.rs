use chrono::SecondsFormat;
use colored::Colorize;

use crate::adapters::event_sources::cloudtrail_source::CloudTrailEventSource;
use crate::adapters::event_sources::json_file_source::JsonFileEventSource;
use crate::cli::TraceArgs;
use crate::cli::context::{self, RunContext};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::ip_history::{self, IpHistoryEntry};
use crate::core::services::history_correlator::HistoryCorrelator;
use crate::core::traits::event_source::AuditEventSource;

/// Execute the `elbtrace trace` command.
///
/// Looks up interface creation events, keeps the ones that belong to the
/// named load balancer, and prints their time and private IP.
pub fn execute(ctx: &RunContext, args: &TraceArgs) -> Result<()> {
    let name = context::validate_lb_name(&args.name)?;
    let since = match &args.since {
        Some(date) => Some(context::parse_since(date)?),
        None => None,
    };
    let max_pages = ctx.max_pages(args.max_pages)?;

    let source: Box<dyn AuditEventSource> = match &args.events_file {
        Some(path) => Box::new(JsonFileEventSource::new(path)),
        None => Box::new(CloudTrailEventSource::new(ctx.aws_session()?, max_pages)),
    };

    let sp = output::spinner(&format!("Searching {} for {name}...", source.name()));
    let result = HistoryCorrelator::new(source.as_ref())
        .kind(args.kind)
        .since(since)
        .find_history(name);
    sp.finish_and_clear();
    let mut entries = result?;

    if args.sort || ctx.config.trace.sort_by_time {
        ip_history::sort_by_time(&mut entries);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(std::io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    print_history(name, &entries);
    if args.events_file.is_none() && max_pages == 1 && !entries.is_empty() {
        output::hint(
            "Only the latest page of CloudTrail events was searched. Use --max-pages to look further back.",
        );
    }
    Ok(())
}

/// Print the history as a numbered list.
pub fn print_history(name: &str, entries: &[IpHistoryEntry]) {
    if entries.is_empty() {
        output::header(&format!("IP address history of {name}"));
        output::warning(&format!("No interface creation events found for '{name}'"));
        output::hint("CloudTrail keeps 90 days of events; older load balancers may show nothing.");
        return;
    }

    output::header(&format!(
        "IP address history of {name} ({} entries)",
        entries.len()
    ));
    println!();
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {:>3}. {} {} {}",
            i + 1,
            format_time(entry).dimmed(),
            "│".dimmed(),
            display_ip(&entry.private_ip_address),
        );
    }
}

fn format_time(entry: &IpHistoryEntry) -> String {
    entry
        .event_time
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "—".to_string())
}

fn display_ip(ip: &str) -> String {
    if ip.is_empty() {
        "(no address recorded)".dimmed().to_string()
    } else {
        ip.cyan().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_time_as_rfc3339_utc() {
        let entry = IpHistoryEntry {
            event_time: Some(Utc.with_ymd_and_hms(2026, 10, 6, 1, 2, 3).unwrap()),
            private_ip_address: "10.0.0.5".into(),
        };
        assert_eq!(format_time(&entry), "2026-10-06T01:02:03Z");
    }

    #[test]
    fn missing_time_shows_dash() {
        let entry = IpHistoryEntry {
            event_time: None,
            private_ip_address: "10.0.0.5".into(),
        };
        assert_eq!(format_time(&entry), "—");
    }
}
