use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::extraction::ParsedResume;

/// One stored parse: the extracted record plus the text it was extracted from.
#[derive(Debug, Clone, FromRow)]
pub struct ParsedResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub raw_text: String,
    pub source_kind: String,
    pub archive_key: Option<String>,
    pub parsed_on: DateTime<Utc>,
}

impl ParsedResumeRow {
    pub fn resume(&self) -> ParsedResume {
        ParsedResume {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self.skills.clone(),
            education: self.education.clone(),
            experience: self.experience.clone(),
            linkedin_url: self.linkedin_url.clone(),
            github_url: self.github_url.clone(),
        }
    }
}
