use super::domain::{CandidateRecord, Qualification};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const FALLBACK_SIZE: usize = 25;

const TITLES: &[&str] = &[
    "Finance Director",
    "Senior Financial Analyst",
    "Investment Manager",
    "Risk Manager",
    "Portfolio Manager",
];
const COMPANIES: &[&str] = &[
    "Goldman Sachs",
    "JP Morgan",
    "HSBC",
    "Standard Chartered",
    "Citibank",
];
const INDUSTRIES: &[&str] = &[
    "Investment Banking",
    "Commercial Banking",
    "Asset Management",
    "Risk Management",
    "Corporate Finance",
];
const FALLBACK_SKILLS: &str = "Financial Analysis, Risk Management, Strategic Planning";
const FALLBACK_SNIPPET: &str =
    "Experienced finance professional with strong analytical skills and leadership experience.";

/// Synthetic dataset served when the sheet cannot be read.
pub fn synthetic_candidates() -> Vec<CandidateRecord> {
    generate(&mut StdRng::from_entropy())
}

/// Deterministic variant of [`synthetic_candidates`].
pub fn synthetic_candidates_seeded(seed: u64) -> Vec<CandidateRecord> {
    generate(&mut StdRng::seed_from_u64(seed))
}

fn generate(rng: &mut StdRng) -> Vec<CandidateRecord> {
    let qualifications = Qualification::ordered();

    (1..=FALLBACK_SIZE)
        .map(|n| {
            let score: f64 = rng.gen_range(60.0..=100.0);
            CandidateRecord {
                name: format!("Professional {n}"),
                current_job_title: pick(rng, TITLES),
                current_company: pick(rng, COMPANIES),
                industry: pick(rng, INDUSTRIES),
                fitting_score: score.round() as i32,
                years_experience: rng.gen_range(1..=20),
                qualification: *qualifications
                    .choose(rng)
                    .unwrap_or(&Qualification::BelowDegree),
                key_skills: FALLBACK_SKILLS.to_string(),
                linkedin_url: format!("https://linkedin.com/in/professional-{n}"),
                linkedin_snippet: FALLBACK_SNIPPET.to_string(),
                photo_url: None,
            }
        })
        .collect()
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}
