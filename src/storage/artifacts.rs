use std::path::PathBuf;

use super::{check_session_id, Storage, StorageError};
use crate::analysis::types::Artifact;

impl Storage {
    /// Directory holding one session's generated files.
    pub fn session_files_dir(&self, session_id: &str) -> PathBuf {
        self.files_dir().join(session_id)
    }

    /// Write artifacts to `files/<session_id>/`, creating the directory.
    ///
    /// Existing files with the same name are overwritten.
    pub fn write_artifacts(
        &self,
        session_id: &str,
        artifacts: &[Artifact],
    ) -> Result<Vec<PathBuf>, StorageError> {
        check_session_id(session_id)?;
        let dir = self.session_files_dir(session_id);
        std::fs::create_dir_all(&dir)?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = dir.join(artifact.file_name);
            std::fs::write(&path, artifact.contents.as_bytes())?;
            tracing::debug!(session_id, file = artifact.file_name, bytes = artifact.contents.len(), "Artifact written");
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &'static str, contents: &str) -> Artifact {
        Artifact {
            file_name: name,
            contents: contents.to_string(),
        }
    }

    #[test]
    fn writes_files_under_session_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::init(tmp.path()).unwrap();

        let paths = storage
            .write_artifacts(
                "s1",
                &[
                    artifact("analysis_report.txt", "# Report"),
                    artifact("summary_report.txt", "summary"),
                ],
            )
            .unwrap();

        assert_eq!(paths.len(), 2);
        let report = std::fs::read_to_string(tmp.path().join("files/s1/analysis_report.txt")).unwrap();
        assert_eq!(report, "# Report");
        let summary = std::fs::read_to_string(tmp.path().join("files/s1/summary_report.txt")).unwrap();
        assert_eq!(summary, "summary");
    }

    #[test]
    fn rewriting_overwrites_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::init(tmp.path()).unwrap();

        storage.write_artifacts("s1", &[artifact("a.txt", "version 1")]).unwrap();
        storage.write_artifacts("s1", &[artifact("a.txt", "version 2")]).unwrap();

        let contents = std::fs::read_to_string(storage.session_files_dir("s1").join("a.txt")).unwrap();
        assert_eq!(contents, "version 2");
    }

    #[test]
    fn no_artifacts_still_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::init(tmp.path()).unwrap();
        let paths = storage.write_artifacts("empty", &[]).unwrap();
        assert!(paths.is_empty());
        assert!(storage.session_files_dir("empty").is_dir());
    }

    #[test]
    fn traversal_ids_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Storage::init(tmp.path()).unwrap();
        let err = storage.write_artifacts("../escape", &[artifact("a.txt", "x")]).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSessionId(_)));
    }
}
