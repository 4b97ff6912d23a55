//! Language name to Font Awesome class lookup for project cards.

pub const DEFAULT_ICON: &str = "fas fa-file-code";

const LANGUAGE_ICONS: &[(&str, &str)] = &[
    ("JavaScript", "fab fa-js-square"),
    ("TypeScript", "fab fa-js-square"),
    ("Python", "fab fa-python"),
    ("Java", "fab fa-java"),
    ("HTML", "fab fa-html5"),
    ("CSS", "fab fa-css3-alt"),
    ("React", "fab fa-react"),
    ("Vue", "fab fa-vuejs"),
    ("Angular", "fab fa-angular"),
    ("Node.js", "fab fa-node-js"),
    ("PHP", "fab fa-php"),
    ("C++", "fas fa-code"),
    ("C", "fas fa-code"),
    ("C#", "fas fa-code"),
    ("Go", "fas fa-code"),
    ("Rust", "fas fa-code"),
    ("Swift", "fab fa-swift"),
    ("Kotlin", "fas fa-code"),
    ("Dart", "fas fa-code"),
    ("Shell", "fas fa-terminal"),
    ("Dockerfile", "fab fa-docker"),
];

/// Exact, case-sensitive match; anything else gets [`DEFAULT_ICON`].
pub fn language_icon(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_ICONS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(DEFAULT_ICON)
}
