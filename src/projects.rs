//! projects.rs
//!
//! Turns the fetched repository list into the cards shown on the page:
//!   • forks and the account's own profile repository are dropped
//!   • most-starred first, newer update breaking ties
//!   • at most [`MAX_PROJECTS`] cards
//!
//! The stats region is computed elsewhere over the unfiltered list, so the
//! two regions intentionally disagree on counts.

use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::icons::language_icon;
use crate::model::RepositoryRecord;

pub const MAX_PROJECTS: usize = 12;
pub const MAX_TAGS: usize = 4;

const NO_DESCRIPTION: &str = "No description available";
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Display-ready card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub language_label: String,
    pub icon_class: &'static str,
    pub tags: Vec<String>,
    pub star_count: u32,
    pub fork_count: u32,
    pub updated_date_display: String,
    pub web_url: String,
}

impl ProjectView {
    pub fn from_record(repo: &RepositoryRecord) -> Self {
        let language = repo
            .primary_language
            .as_deref()
            .filter(|lang| !lang.is_empty());

        Self {
            title: repo.name.clone(),
            description: repo
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            language_label: language.unwrap_or(UNKNOWN_LANGUAGE).to_string(),
            icon_class: language_icon(language),
            tags: build_tags(&repo.topics, language),
            star_count: repo.star_count,
            fork_count: repo.fork_count,
            updated_date_display: display_date(repo.last_updated_at.date_naive()),
            web_url: repo.web_url.clone(),
        }
    }
}

/// Filters, orders and truncates the repositories that become project cards.
///
/// A repository named exactly like the account is the profile README
/// repository, not a project. The comparison is case-sensitive.
pub fn select_projects<'a>(
    repos: &'a [RepositoryRecord],
    username: &str,
) -> Vec<&'a RepositoryRecord> {
    let mut selected: Vec<&RepositoryRecord> = repos
        .iter()
        .filter(|r| !r.is_fork && r.name != username)
        .collect();

    // Stable sort keeps API order for full ties.
    selected.sort_by_key(|r| (Reverse(r.star_count), Reverse(r.last_updated_at)));
    selected.truncate(MAX_PROJECTS);
    selected
}

/// Topics then language, skipping blanks and repeats, capped at [`MAX_TAGS`].
pub fn build_tags(topics: &[String], language: Option<&str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);

    for tag in topics.iter().map(String::as_str).chain(language) {
        if tags.len() == MAX_TAGS {
            break;
        }
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }

    tags
}

/// en-US short date, e.g. `1/15/2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
