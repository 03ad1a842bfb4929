use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ParsedResumeRow;
use crate::storage::{NewParse, ResumeStore};

/// Volatile backend used by handler tests.
#[derive(Default)]
pub struct MemoryResumeStore {
    rows: RwLock<Vec<ParsedResumeRow>>,
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn save(&self, parse: NewParse<'_>) -> Result<ParsedResumeRow, AppError> {
        let resume = parse.resume;
        let row = ParsedResumeRow {
            id: parse.id,
            user_id: parse.user_id,
            name: resume.name.clone(),
            email: resume.email.clone(),
            phone: resume.phone.clone(),
            skills: resume.skills.clone(),
            education: resume.education.clone(),
            experience: resume.experience.clone(),
            linkedin_url: resume.linkedin_url.clone(),
            github_url: resume.github_url.clone(),
            raw_text: parse.raw_text.to_string(),
            source_kind: parse.source_kind.as_str().to_string(),
            archive_key: parse.archive_key.map(String::from),
            parsed_on: Utc::now(),
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<ParsedResumeRow>, AppError> {
        // Newest insert first so equal timestamps still come back most recent first.
        let mut rows: Vec<_> = self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.parsed_on.cmp(&a.parsed_on));
        Ok(rows)
    }

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ParsedResumeRow>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DocumentKind;
    use crate::extraction::extract_fields;

    async fn save_text(store: &MemoryResumeStore, user_id: Uuid, text: &str) -> ParsedResumeRow {
        let resume = extract_fields(text);
        store
            .save(NewParse {
                id: Uuid::new_v4(),
                user_id,
                resume: &resume,
                raw_text: text,
                source_kind: DocumentKind::Pdf,
                archive_key: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first_and_per_user() {
        let store = MemoryResumeStore::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        save_text(&store, alice, "First Resume").await;
        save_text(&store, bob, "Bob Resume").await;
        save_text(&store, alice, "Second Resume").await;

        let history = store.history(alice).await.unwrap();
        let names: Vec<_> = history.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Second Resume", "First Resume"]);
    }

    #[tokio::test]
    async fn test_get_is_scoped_to_owner() {
        let store = MemoryResumeStore::default();
        let owner = Uuid::new_v4();
        let row = save_text(&store, owner, "Jane Doe").await;

        assert!(store.get(owner, row.id).await.unwrap().is_some());
        assert!(store.get(Uuid::new_v4(), row.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_only_removes_that_user() {
        let store = MemoryResumeStore::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        save_text(&store, alice, "A1").await;
        save_text(&store, alice, "A2").await;
        save_text(&store, bob, "B1").await;

        assert_eq!(store.clear(alice).await.unwrap(), 2);
        assert!(store.history(alice).await.unwrap().is_empty());
        assert_eq!(store.history(bob).await.unwrap().len(), 1);
        assert_eq!(store.clear(alice).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_saved_row_keeps_record_and_raw_text() {
        let store = MemoryResumeStore::default();
        let text = "Jane Doe\njane@example.com";
        let row = save_text(&store, Uuid::new_v4(), text).await;
        assert_eq!(row.raw_text, text);
        assert_eq!(row.source_kind, "pdf");
        assert_eq!(row.resume(), extract_fields(text));
    }
}
