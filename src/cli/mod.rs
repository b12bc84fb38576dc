//! CLI plumbing: setup, progress rendering, styling

pub mod context;
pub mod style;
pub mod sweep;

use anstream::println;
use gh_sweep::sweep::{SweepEvent, SweepProgress};
use indicatif::ProgressBar;
use std::ffi::OsString;
use std::sync::Mutex;
use std::time::Duration;
use style::{Stylize, arrow, check, spinner_style};

/// Printed under a closed pull request report
const FORCE_HINT: &str = "Use -force flag to delete branches with closed pull requests";

/// Accept the single-dash long flags (`-safe`, `-force`) older scripts use
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-safe") => OsString::from("--safe"),
            Some("-force") => OsString::from("--force"),
            _ => arg,
        })
        .collect()
}

/// Prints sweep events to stdout, with a spinner while GitHub is queried
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress printer with no active spinner
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_and_clear();
        }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

fn print_urls(urls: &[String]) {
    for url in urls {
        println!("    {} {url}", arrow());
    }
}

impl SweepProgress for CliProgress {
    fn on_event(&self, event: &SweepEvent) {
        self.clear_spinner();

        match event {
            SweepEvent::Checking { branch } => {
                self.start_spinner(format!("Checking {}...", branch.accent()));
            }
            SweepEvent::NoPullRequests { branch } => {
                println!(
                    "{}",
                    format!("No pull requests found for branch {branch}").muted()
                );
            }
            SweepEvent::ForcingClosed { branch } => {
                println!(
                    "{}",
                    format!("Deleting branch `{branch}` even with closed pull requests").warn()
                );
            }
            SweepEvent::Deleting { branch } => {
                println!("Deleting branch: {}", branch.accent());
            }
            SweepEvent::DeletionSkipped { .. } => {
                println!("  {}", "Safe mode enabled, skipping deletion...".muted());
            }
            SweepEvent::Deleted { branch } => {
                println!("  {} Deleted {}", check(), branch.accent());
            }
            SweepEvent::DeletionFailed { message, .. } => {
                println!("  {}", format!("⚠ {message}").warn());
            }
            SweepEvent::OpenPullRequests { branch, urls } => {
                println!("Branch {} has open pull requests:", branch.accent());
                print_urls(urls);
            }
            SweepEvent::ClosedPullRequests { branch, urls } => {
                println!("Branch {} has closed pull requests:", branch.accent());
                print_urls(urls);
                println!("  {}", FORCE_HINT.muted());
            }
        }
    }
}
