use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ParsedResumeRow;
use crate::storage::{NewParse, ResumeStore};

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn save(&self, parse: NewParse<'_>) -> Result<ParsedResumeRow, AppError> {
        let NewParse {
            id,
            user_id,
            resume,
            raw_text,
            source_kind,
            archive_key,
        } = parse;

        let row = sqlx::query_as::<_, ParsedResumeRow>(
            r#"
            INSERT INTO parsed_resumes
                (id, user_id, name, email, phone, skills, education, experience,
                 linkedin_url, github_url, raw_text, source_kind, archive_key)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&resume.name)
        .bind(&resume.email)
        .bind(&resume.phone)
        .bind(&resume.skills)
        .bind(&resume.education)
        .bind(&resume.experience)
        .bind(&resume.linkedin_url)
        .bind(&resume.github_url)
        .bind(raw_text)
        .bind(source_kind.as_str())
        .bind(archive_key)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored parsed resume {id} for user {user_id}");
        Ok(row)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<ParsedResumeRow>, AppError> {
        Ok(sqlx::query_as::<_, ParsedResumeRow>(
            "SELECT * FROM parsed_resumes WHERE user_id = $1 ORDER BY parsed_on DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ParsedResumeRow>, AppError> {
        Ok(sqlx::query_as::<_, ParsedResumeRow>(
            "SELECT * FROM parsed_resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM parsed_resumes WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        info!(
            "Cleared {} parsed resumes for user {user_id}",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
