//! loader.rs
//!
//! One page load: placeholder, dual fetch, then a single render of both
//! regions from either live data or the static fallback. Acquisition
//! failures never leave this module; only region write errors do.

use anyhow::Result;
use tracing::{error, info};

use crate::fallback::{fallback_projects, fallback_stats};
use crate::github::{FetchError, ProfileSource};
use crate::html::{Dashboard, render_loading};
use crate::model::{ProfileSummary, RepositoryRecord};
use crate::projects::{ProjectView, select_projects};
use crate::regions::{Region, RegionSink};
use crate::stats::DerivedStats;

/// Which dataset ended up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Live { projects_shown: usize },
    Fallback,
}

pub struct Loader<S> {
    source: S,
}

impl<S: ProfileSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(&self, username: &str, regions: &mut impl RegionSink) -> Result<LoadOutcome> {
        regions.replace(Region::Projects, &render_loading())?;

        let (dashboard, outcome) = match self.source.fetch(username).await {
            Ok((profile, repos)) => {
                let dashboard = live_dashboard(username, &profile, &repos);
                info!(
                    username,
                    repositories = repos.len(),
                    projects_shown = dashboard.projects.len(),
                    "Loaded GitHub data"
                );
                let shown = dashboard.projects.len();
                (dashboard, LoadOutcome::Live { projects_shown: shown })
            }
            Err(e) => {
                log_fetch_failure(username, &e);
                (fallback_dashboard(), LoadOutcome::Fallback)
            }
        };

        render_dashboard(&dashboard, regions)?;
        Ok(outcome)
    }
}

pub fn live_dashboard(
    username: &str,
    profile: &ProfileSummary,
    repos: &[RepositoryRecord],
) -> Dashboard {
    Dashboard {
        stats: DerivedStats::compute(profile, repos).cards(),
        projects: select_projects(repos, username)
            .into_iter()
            .map(ProjectView::from_record)
            .collect(),
    }
}

pub fn fallback_dashboard() -> Dashboard {
    Dashboard {
        stats: fallback_stats(),
        projects: fallback_projects(),
    }
}

/// Writes both regions from one already-built dashboard.
pub fn render_dashboard(dashboard: &Dashboard, regions: &mut impl RegionSink) -> Result<()> {
    let rendered = dashboard.render();
    regions.replace(Region::Stats, &rendered.stats)?;
    regions.replace(Region::Projects, &rendered.projects)?;
    Ok(())
}

fn log_fetch_failure(username: &str, e: &FetchError) {
    error!(username, error = %e, "Error fetching GitHub data, showing fallback");
}
