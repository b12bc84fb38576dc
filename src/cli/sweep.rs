//! Sweep command - delete branches whose pull requests are done

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{CHECK, Stylize};
use anstream::println;
use gh_sweep::error::Result;
use gh_sweep::sweep::{SweepSummary, execute_sweep};
use gh_sweep::types::SweepOptions;

/// Run the sweep over every local branch except the default one
pub async fn run_sweep(options: SweepOptions) -> Result<()> {
    let ctx = CommandContext::new()?;

    if ctx.branches.is_empty() {
        println!(
            "{}",
            format!(
                "No local branches besides {} to check",
                ctx.identity().default_branch
            )
            .muted()
        );
        return Ok(());
    }

    println!(
        "{} {} in {}",
        "Checking".emphasis(),
        format!("{} branch(es)", ctx.branches.len()).accent(),
        ctx.identity().to_string().accent()
    );
    if options.safe {
        println!("{}", "Safe mode: nothing will be deleted".muted());
    }
    println!();

    let progress = CliProgress::new();
    let summary = execute_sweep(
        &ctx.branches,
        ctx.platform.as_ref(),
        &ctx.repo,
        options,
        &progress,
    )
    .await?;

    print_summary(&summary);
    Ok(())
}

/// One-line recap of the sweep
fn print_summary(summary: &SweepSummary) {
    println!();
    let mut parts = vec![format!("{} deleted", summary.deleted.len().accent())];
    if !summary.would_delete.is_empty() {
        parts.push(format!(
            "{} would be deleted",
            summary.would_delete.len().accent()
        ));
    }
    parts.push(format!("{} kept", summary.kept.len().accent()));
    parts.push(format!(
        "{} without pull requests",
        summary.without_prs.len().accent()
    ));
    if !summary.failed.is_empty() {
        parts.push(format!("{} failed", summary.failed.len().warn()));
    }

    println!(
        "{} {}",
        format!("{CHECK} Sweep complete:").success(),
        parts.join(", ")
    );
}
