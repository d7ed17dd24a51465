use super::domain::Qualification;
use regex::Regex;
use std::sync::OnceLock;

/// Priority-ordered keyword rules; the first bucket with a matching keyword wins.
pub(crate) const QUALIFICATION_RULES: &[(Qualification, &[&str])] = &[
    (
        Qualification::Doctor,
        &["doctor", "phd", "ph.d", "doctorate"],
    ),
    (Qualification::Master, &["master", "mba", "msc", "ma "]),
    (
        Qualification::Degree,
        &[
            "degree",
            "bachelor",
            "university",
            "college",
            "bsc",
            "b.sc",
        ],
    ),
];

/// Skill vocabulary matched against title and snippet, in output order.
pub(crate) const SKILL_VOCABULARY: &[&str] = &[
    "Financial Analysis",
    "Excel",
    "Financial Modeling",
    "Risk Management",
    "Accounting",
    "Investment",
    "Portfolio Management",
    "Strategic Planning",
    "Leadership",
    "Management",
    "Analytics",
    "Reporting",
    "Budgeting",
    "Forecasting",
    "Compliance",
    "Audit",
    "Strategy",
    "Operations",
    "Business Development",
    "Project Management",
];

pub(crate) const DEFAULT_INDUSTRY_HINT: &str = "Professional Services";
pub(crate) const DEFAULT_COMPANY_HINT: &str = "Private Company";

pub(crate) const INDUSTRY_RULES: &[(&str, &[&str])] = &[
    ("Finance", &["finance", "financial", "bank"]),
    ("Technology", &["technology", "software", "tech"]),
    ("Healthcare", &["healthcare", "medical", "pharma"]),
    ("Marketing", &["marketing", "advertising"]),
    ("Consulting", &["consulting", "consultant"]),
    ("Manufacturing", &["manufacturing", "industrial"]),
    ("Retail", &["retail", "sales"]),
    ("Education", &["education", "academic"]),
];

static TITLE_COMPANY_PATTERN: OnceLock<Regex> = OnceLock::new();
static SNIPPET_COMPANY_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

pub(crate) fn qualification_for(lowered: &str) -> Qualification {
    QUALIFICATION_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(qualification, _)| *qualification)
        .unwrap_or(Qualification::BelowDegree)
}

pub(crate) fn skills_in(lowered: &str) -> Vec<&'static str> {
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .collect()
}

pub(crate) fn industry_for(lowered: &str) -> &'static str {
    INDUSTRY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY_HINT)
}

pub(crate) fn title_company_pattern() -> &'static Regex {
    TITLE_COMPANY_PATTERN.get_or_init(|| compile(r"(?i)\bat\s+([^|,\-]+)"))
}

pub(crate) fn snippet_company_patterns() -> &'static [Regex] {
    SNIPPET_COMPANY_PATTERNS.get_or_init(|| {
        [
            r"(?i)currently\s+at\s+([^,.]+)",
            r"(?i)works?\s+at\s+([^,.]+)",
            r"(?i)employed\s+at\s+([^,.]+)",
            r"\bat\s+([A-Z][a-zA-Z\s&]+(?:Ltd|Inc|Corp|Limited|Company)?)",
        ]
        .into_iter()
        .map(compile)
        .collect()
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid company pattern {pattern}: {err}"))
}
