//! Field extraction engine.
//!
//! Turns decoded resume text into a [`ParsedResume`]. Every sub-extractor reads
//! the same text independently and reports `None` when it finds nothing; the
//! coordinator converts `None` to the `"N/A"` sentinel at the record boundary.
//! Extraction never fails and holds no state beyond the static skill catalog.

pub mod catalog;
pub mod contact;
pub mod links;
pub mod sections;
pub mod skills;

use serde::Serialize;

use crate::extraction::contact::{extract_email, extract_name, extract_phone};
use crate::extraction::links::extract_links;
use crate::extraction::sections::{extract_section, Section};
use crate::extraction::skills::extract_skills;

/// Stored in place of any field that was not found.
pub const SENTINEL: &str = "N/A";

/// Normalized resume record. Serializes to exactly these eight keys, which is
/// also the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Comma-joined, sorted skill phrases.
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl ParsedResume {
    pub const FIELD_NAMES: [&'static str; 8] = [
        "name",
        "email",
        "phone",
        "skills",
        "education",
        "experience",
        "linkedin_url",
        "github_url",
    ];

    /// Field values in [`Self::FIELD_NAMES`] order.
    pub fn values(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.skills.as_str(),
            self.education.as_str(),
            self.experience.as_str(),
            self.linkedin_url.as_str(),
            self.github_url.as_str(),
        ]
    }
}

/// Runs every sub-extractor against `text` and assembles the record.
pub fn extract_fields(text: &str) -> ParsedResume {
    let links = extract_links(text);
    ParsedResume {
        name: or_sentinel(extract_name(text)),
        email: or_sentinel(extract_email(text)),
        phone: or_sentinel(extract_phone(text)),
        skills: or_sentinel(extract_skills(text)),
        education: or_sentinel(extract_section(text, Section::Education)),
        experience: or_sentinel(extract_section(text, Section::Experience)),
        linkedin_url: or_sentinel(links.linkedin),
        github_url: or_sentinel(links.github),
    }
}

fn or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| SENTINEL.to_string())
}
