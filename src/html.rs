//! Markup fragments for the stats and projects regions. Every function here
//! is pure: same input, same output.

use crate::projects::ProjectView;
use crate::stats::StatCard;

/// Escapes text for both element content and double-quoted attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Stats cards and project cards rendered together, so a region can never
/// be left live while the other shows fallback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub projects: Vec<ProjectView>,
}

/// Markup for both regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDashboard {
    pub stats: String,
    pub projects: String,
}

impl Dashboard {
    pub fn render(&self) -> RenderedDashboard {
        RenderedDashboard {
            stats: render_stats(&self.stats),
            projects: render_projects(&self.projects),
        }
    }
}

pub fn render_stats(cards: &[StatCard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!(
            r#"<div class="stat-card">
    <div class="stat-number">{}</div>
    <div class="stat-label">{}</div>
</div>
"#,
            escape_html(&card.value),
            escape_html(card.label)
        ));
    }
    out
}

/// An empty list renders a message instead of an empty grid.
pub fn render_projects(projects: &[ProjectView]) -> String {
    if projects.is_empty() {
        return "<div class=\"error-message\">No repositories found.</div>\n".to_string();
    }

    projects.iter().map(render_project_card).collect()
}

pub fn render_loading() -> String {
    r#"<div class="loading">
    <div class="loading-spinner"></div>
    <p>Loading projects from GitHub...</p>
</div>
"#
    .to_string()
}

fn render_project_card(project: &ProjectView) -> String {
    let tags: String = project
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="project-tag">{}</span>"#, escape_html(tag)))
        .collect();

    format!(
        r#"<div class="project-card">
    <div class="project-header">
        <div class="project-icon" title="{language}">
            <i class="{icon}"></i>
        </div>
        <h3 class="project-title">{title}</h3>
    </div>

    <p class="project-description">{description}</p>

    <div class="project-stats">
        <div class="project-stat">
            <i class="fas fa-star"></i>
            <span>{stars}</span>
        </div>
        <div class="project-stat">
            <i class="fas fa-code-branch"></i>
            <span>{forks}</span>
        </div>
        <div class="project-stat">
            <i class="fas fa-calendar"></i>
            <span>{updated}</span>
        </div>
    </div>

    <div class="project-tags">{tags}</div>

    <a href="{url}" target="_blank" rel="noopener" class="project-link">
        <i class="fab fa-github"></i>
        View Code
    </a>
</div>
"#,
        icon = escape_html(project.icon_class),
        language = escape_html(&project.language_label),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        stars = project.star_count,
        forks = project.fork_count,
        updated = escape_html(&project.updated_date_display),
        tags = tags,
        url = escape_html(&project.web_url),
    )
}
