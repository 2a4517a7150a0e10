use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use crate::adapters::catalogs::elbv2_catalog::Elbv2Catalog;
use crate::adapters::event_sources::cloudtrail_source::CloudTrailEventSource;
use crate::cli::commands::{list, trace};
use crate::cli::context::RunContext;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::ip_history;
use crate::core::services::history_correlator::HistoryCorrelator;
use crate::core::traits::catalog::LoadBalancerCatalog;

const MAIN_ITEMS: [&str; 3] = ["Trace IP address history", "List load balancers", "Quit"];

/// Execute the interactive menu.
///
/// Failures inside a flow are printed and the menu starts over; only
/// configuration and terminal failures end the session.
pub fn execute(ctx: &RunContext) -> Result<()> {
    let session = ctx.aws_session()?;
    let catalog = Elbv2Catalog::new(session.clone());
    let source = CloudTrailEventSource::new(session, ctx.max_pages(None)?);
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an option")
            .items(&MAIN_ITEMS)
            .default(0)
            .interact_opt()?;

        let outcome = match choice {
            Some(0) => trace_flow(ctx, &catalog, &source, &theme),
            Some(1) => list_flow(ctx, &catalog),
            _ => return Ok(()),
        };

        if let Err(e) = outcome {
            output::error(&format!("Error: {e}"));
        }
    }
}

fn trace_flow(
    ctx: &RunContext,
    catalog: &Elbv2Catalog,
    source: &CloudTrailEventSource,
    theme: &ColorfulTheme,
) -> Result<()> {
    let sp = output::spinner("Listing load balancers...");
    let result = catalog.list();
    sp.finish_and_clear();
    let balancers = list::visible(result?, ctx.config.catalog.all_kinds);

    if balancers.is_empty() {
        output::warning("No load balancers found");
        return Ok(());
    }

    let labels: Vec<String> = balancers
        .iter()
        .map(|lb| format!("{} ({})", lb.name, lb.kind))
        .collect();
    let Some(index) = Select::with_theme(theme)
        .with_prompt("Select a load balancer (Esc to go back)")
        .items(&labels)
        .default(0)
        .max_length(20)
        .interact_opt()?
    else {
        return Ok(());
    };
    let lb = &balancers[index];

    let sp = output::spinner(&format!("Searching CloudTrail for {}...", lb.name));
    let result = HistoryCorrelator::new(source)
        .kind(lb.kind)
        .find_history(&lb.name);
    sp.finish_and_clear();
    let mut entries = result?;

    if ctx.config.trace.sort_by_time {
        ip_history::sort_by_time(&mut entries);
    }
    trace::print_history(&lb.name, &entries);
    if source.max_pages() == 1 && !entries.is_empty() {
        output::hint("Only the latest page of CloudTrail events was searched.");
    }
    Ok(())
}

fn list_flow(ctx: &RunContext, catalog: &Elbv2Catalog) -> Result<()> {
    let sp = output::spinner("Listing load balancers...");
    let result = catalog.list();
    sp.finish_and_clear();
    let all = ctx.config.catalog.all_kinds;
    list::print_balancers(&list::visible(result?, all), all);
    Ok(())
}
