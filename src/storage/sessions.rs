use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_session_id, Storage, StorageError};
use crate::analysis::types::{Classification, EndpointHint, FileLinks};

/// Persisted summary of one processed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub query: String,
    pub endpoint: EndpointHint,
    pub classification: Classification,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<FileLinks>,
    pub created_at: DateTime<Utc>,
}

/// Entry in the session listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
}

impl Storage {
    fn record_path(&self, session_id: &str) -> Result<PathBuf, StorageError> {
        check_session_id(session_id)
            .map_err(|_| StorageError::SessionNotFound(session_id.to_string()))?;
        Ok(self.sessions_dir().join(format!("{session_id}.json")))
    }

    /// Write (or replace) `sessions/<id>.json`.
    pub fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        check_session_id(&record.id)?;
        let path = self.sessions_dir().join(format!("{}.json", record.id));
        let json = serde_json::to_vec_pretty(record)?;
        std::fs::write(&path, json)?;
        tracing::debug!(session_id = %record.id, "Session record saved");
        Ok(())
    }

    /// List ids of every `*.json` file in `sessions/`, sorted.
    ///
    /// A missing directory lists as empty.
    pub fn list_sessions(&self) -> Result<Vec<SessionSummary>, StorageError> {
        let entries = match std::fs::read_dir(self.sessions_dir()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();

        Ok(ids.into_iter().map(|id| SessionSummary { id }).collect())
    }

    /// Parsed contents of `sessions/<id>.json`.
    ///
    /// Returned untyped: any JSON document placed in the directory is
    /// served as-is.
    pub fn load_session(&self, session_id: &str) -> Result<serde_json::Value, StorageError> {
        let path = self.record_path(session_id)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::SessionNotFound(session_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Remove `sessions/<id>.json`. Generated files are left in place.
    pub fn delete_session(&self, session_id: &str) -> Result<(), StorageError> {
        let path = self.record_path(session_id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(session_id, "Session record deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::SessionNotFound(session_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::QueryComplexity;

    fn test_storage() -> (tempfile::TempDir, Storage) {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::init(tmp.path()).unwrap();
        (tmp, storage)
    }

    fn record(id: &str) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            query: "What is a resistor?".into(),
            endpoint: EndpointHint::Auto,
            classification: Classification {
                classification: QueryComplexity::Simple,
                confidence: 0.8,
                reasoning: "Contains 1 simple keywords".into(),
            },
            message: "A resistor is a passive electronic component that limits current flow.".into(),
            files: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn fresh_storage_lists_nothing() {
        let (_tmp, storage) = test_storage();
        assert!(storage.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn saved_sessions_are_listed_sorted() {
        let (_tmp, storage) = test_storage();
        storage.save_session(&record("b")).unwrap();
        storage.save_session(&record("a")).unwrap();

        let ids: Vec<String> = storage.list_sessions().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn non_json_files_are_ignored() {
        let (_tmp, storage) = test_storage();
        std::fs::write(storage.sessions_dir().join("notes.txt"), "x").unwrap();
        storage.save_session(&record("only")).unwrap();

        let sessions = storage.list_sessions().unwrap();
        assert_eq!(sessions, vec![SessionSummary { id: "only".into() }]);
    }

    #[test]
    fn missing_directory_lists_empty() {
        let (_tmp, storage) = test_storage();
        std::fs::remove_dir(storage.sessions_dir()).unwrap();
        assert!(storage.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn load_returns_saved_record() {
        let (_tmp, storage) = test_storage();
        let saved = record("s1");
        storage.save_session(&saved).unwrap();

        let value = storage.load_session("s1").unwrap();
        assert_eq!(value["id"], "s1");
        assert_eq!(value["classification"]["classification"], "simple");
        assert!(value.get("files").is_none());

        let typed: SessionRecord = serde_json::from_value(value).unwrap();
        assert_eq!(typed, saved);
    }

    #[test]
    fn load_serves_foreign_json_verbatim() {
        let (_tmp, storage) = test_storage();
        std::fs::write(storage.sessions_dir().join("legacy.json"), r#"{"anything": [1, 2]}"#).unwrap();
        let value = storage.load_session("legacy").unwrap();
        assert_eq!(value, serde_json::json!({"anything": [1, 2]}));
    }

    #[test]
    fn load_missing_is_not_found() {
        let (_tmp, storage) = test_storage();
        let err = storage.load_session("nope").unwrap_err();
        assert!(matches!(err, StorageError::SessionNotFound(_)));
    }

    #[test]
    fn load_corrupt_is_json_error() {
        let (_tmp, storage) = test_storage();
        std::fs::write(storage.sessions_dir().join("bad.json"), "{not json").unwrap();
        assert!(matches!(storage.load_session("bad").unwrap_err(), StorageError::Json(_)));
    }

    #[test]
    fn delete_removes_record_once() {
        let (_tmp, storage) = test_storage();
        storage.save_session(&record("gone")).unwrap();

        storage.delete_session("gone").unwrap();
        assert!(storage.list_sessions().unwrap().is_empty());

        let err = storage.delete_session("gone").unwrap_err();
        assert!(matches!(err, StorageError::SessionNotFound(_)));
    }

    #[test]
    fn traversal_ids_are_not_found() {
        let (_tmp, storage) = test_storage();
        assert!(matches!(
            storage.load_session("../files/x").unwrap_err(),
            StorageError::SessionNotFound(_)
        ));
        assert!(matches!(
            storage.delete_session("..").unwrap_err(),
            StorageError::SessionNotFound(_)
        ));
    }
}
