use colored::Colorize;

use crate::adapters::catalogs::elbv2_catalog::Elbv2Catalog;
use crate::cli::context::RunContext;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::load_balancer::{LoadBalancer, LoadBalancerKind};
use crate::core::traits::catalog::LoadBalancerCatalog;

/// Execute the `elbtrace list` command.
pub fn execute(ctx: &RunContext, all: bool) -> Result<()> {
    let catalog = Elbv2Catalog::new(ctx.aws_session()?);
    let all = all || ctx.config.catalog.all_kinds;

    let sp = output::spinner("Listing load balancers...");
    let result = catalog.list();
    sp.finish_and_clear();

    print_balancers(&visible(result?, all), all);
    Ok(())
}

/// Print the catalog, one load balancer per line with its kind.
pub fn print_balancers(balancers: &[LoadBalancer], all: bool) {
    if balancers.is_empty() {
        output::header("Load balancers");
        output::warning("No load balancers found");
        if !all {
            output::hint(
                "Only application load balancers are shown. Try --all or set catalog.all_kinds.",
            );
        }
        return;
    }

    output::header(&format!("Load balancers ({})", balancers.len()));
    for lb in balancers {
        println!("  {}", row(lb));
    }
}

fn row(lb: &LoadBalancer) -> String {
    format!("{:<32} {}", lb.name, lb.kind.to_string().dimmed())
}

/// Application load balancers only, unless `all` is set.
pub fn visible(balancers: Vec<LoadBalancer>, all: bool) -> Vec<LoadBalancer> {
    balancers
        .into_iter()
        .filter(|lb| all || lb.kind == LoadBalancerKind::Application)
        .collect()
}
