use anyhow::Context;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::ParsedResume;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// A rendered download: body, MIME type and suggested file name.
pub struct ExportFile {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub file_name: &'static str,
}

pub fn export_resume(resume: &ParsedResume, format: ExportFormat) -> Result<ExportFile, AppError> {
    match format {
        ExportFormat::Json => Ok(ExportFile {
            body: serde_json::to_vec_pretty(resume).context("Failed to serialize resume")?,
            content_type: "application/json",
            file_name: "parsed_resume.json",
        }),
        ExportFormat::Csv => Ok(ExportFile {
            body: to_csv(resume)?,
            content_type: "text/csv",
            file_name: "parsed_resume.csv",
        }),
    }
}

fn to_csv(resume: &ParsedResume) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ParsedResume::FIELD_NAMES)?;
    writer.write_record(resume.values())?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {e}"))
}
