//! Static dataset shown when the live fetch fails.

use chrono::NaiveDate;

use crate::icons::language_icon;
use crate::projects::{ProjectView, build_tags, display_date};
use crate::stats::StatCard;

const PROFILE_URL: &str = "https://github.com/prachichoudhary2004";

pub fn fallback_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("25+", "Public Repos"),
        StatCard::new("50+", "Total Stars"),
        StatCard::new("20+", "Total Forks"),
        StatCard::new("8+", "Languages"),
    ]
}

/// Shown in this order; not re-sorted.
pub fn fallback_projects() -> Vec<ProjectView> {
    vec![
        card(
            "TeleRewards",
            "A comprehensive rewards and loyalty management system built with Java and Spring Boot",
            "Java",
            &["spring-boot", "rewards", "loyalty"],
            (15, 5),
            (2024, 1, 15),
        ),
        card(
            "SoulZen",
            "Mental health and wellness platform with AI-powered recommendations",
            "Python",
            &["ai", "mental-health", "wellness"],
            (12, 3),
            (2024, 1, 10),
        ),
        card(
            "Traffic-Policy-Management",
            "Smart traffic management system using machine learning algorithms",
            "Python",
            &["machine-learning", "traffic", "smart-city"],
            (20, 8),
            (2024, 1, 5),
        ),
        card(
            "Metro-Navigator",
            "Real-time metro navigation app with route optimization",
            "JavaScript",
            &["navigation", "metro", "optimization"],
            (18, 6),
            (2023, 12, 20),
        ),
        card(
            "Student-Database-Management",
            "Comprehensive student management system with advanced features",
            "Java",
            &["database", "management", "education"],
            (10, 4),
            (2023, 12, 15),
        ),
        card(
            "AI-Data-Analysis-Tool",
            "Advanced data analysis tool with machine learning capabilities",
            "Python",
            &["ai", "data-science", "analysis"],
            (25, 10),
            (2023, 12, 10),
        ),
    ]
}

fn card(
    title: &str,
    description: &str,
    language: &str,
    topics: &[&str],
    (stars, forks): (u32, u32),
    (year, month, day): (i32, u32, u32),
) -> ProjectView {
    let topics: Vec<String> = topics.iter().map(|t| t.to_string()).collect();
    let updated = NaiveDate::from_ymd_opt(year, month, day)
        .map(display_date)
        .unwrap_or_default();

    ProjectView {
        title: title.to_string(),
        description: description.to_string(),
        language_label: language.to_string(),
        icon_class: language_icon(Some(language)),
        tags: build_tags(&topics, Some(language)),
        star_count: stars,
        fork_count: forks,
        updated_date_display: updated,
        web_url: PROFILE_URL.to_string(),
    }
}
