//! Candidate sheet ingestion: CSV tokenizing, field normalization, record
//! building, and the fetch-or-fallback data source.

mod builder;
pub mod domain;
mod fallback;
mod mapping;
pub mod normalizer;
pub mod parser;
mod source;

pub use builder::{from_csv_text, CandidateRecordBuilder, ColumnMap};
pub use domain::{
    CandidateRecord, CandidateSnapshot, DataOrigin, Qualification, NOT_SPECIFIED,
    PROFESSIONAL_SKILLS,
};
pub use fallback::{synthetic_candidates, synthetic_candidates_seeded, FALLBACK_SIZE};
pub use normalizer::{
    clean_text, extract_skills, infer_company, infer_industry, normalize_experience,
    normalize_qualification, normalize_score,
};
pub use parser::parse_line;
pub use source::{
    CandidateDataSource, CsvFeed, FeedError, FileCsvFeed, HttpCsvFeed, DEFAULT_SHEET_URL,
};
