use std::collections::HashSet;

use crate::model::{ProfileSummary, RepositoryRecord};

/// Aggregates over every fetched repository, forks included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedStats {
    pub total_repos: u32,
    pub total_stars: u64,
    pub total_forks: u64,
    pub distinct_language_count: usize,
}

impl DerivedStats {
    /// `total_repos` comes from the profile, not from `repos.len()`: the
    /// repository list is capped at one page.
    pub fn compute(profile: &ProfileSummary, repos: &[RepositoryRecord]) -> Self {
        let languages: HashSet<&str> = repos
            .iter()
            .filter_map(|r| r.primary_language.as_deref())
            .filter(|lang| !lang.is_empty())
            .collect();

        Self {
            total_repos: profile.public_repo_count,
            total_stars: repos.iter().map(|r| u64::from(r.star_count)).sum(),
            total_forks: repos.iter().map(|r| u64::from(r.fork_count)).sum(),
            distinct_language_count: languages.len(),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new(self.total_repos.to_string(), "Public Repos"),
            StatCard::new(self.total_stars.to_string(), "Total Stars"),
            StatCard::new(self.total_forks.to_string(), "Total Forks"),
            StatCard::new(self.distinct_language_count.to_string(), "Languages"),
        ]
    }
}

/// A number/label pair as shown in the stats region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub value: String,
    pub label: &'static str,
}

impl StatCard {
    pub fn new(value: impl Into<String>, label: &'static str) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}
