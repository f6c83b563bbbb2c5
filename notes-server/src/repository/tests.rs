//! Repository Tests
//!
//! MemoryRepository and seed file loading.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Note};
    use crate::repository::{load_seed, MemoryRepository, Repository};
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create seed file");
        file.write_all(contents.as_bytes()).expect("Failed to write seed file");
        file
    }

    #[tokio::test]
    async fn test_list_keeps_order() {
        let repo = MemoryRepository::new(vec![
            Note::new(2, "Call mom"),
            Note::new(1, "Buy milk"),
        ])
        .expect("Failed to build repo");

        let notes = repo.list().await.expect("List failed");
        assert_eq!(notes, vec![Note::new(2, "Call mom"), Note::new(1, "Buy milk")]);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = MemoryRepository::<Note>::new(Vec::new()).expect("Failed to build repo");

        assert_eq!(repo.len(), 0);
        assert!(repo.is_empty());
        assert!(repo.list().await.expect("List failed").is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = MemoryRepository::new(vec![Note::new(1, "a"), Note::new(1, "b")]);

        match result {
            Err(DomainError::Conflict(msg)) => assert!(msg.contains("duplicate id 1")),
            _ => panic!("expected conflict"),
        }
    }

    #[test]
    fn test_domain_error_messages() {
        assert_eq!(DomainError::Conflict("duplicate id 1".into()).to_string(), "Conflict: duplicate id 1");
        assert_eq!(DomainError::InvalidInput("bad".into()).to_string(), "Invalid input: bad");
    }

    #[test]
    fn test_load_seed() {
        let file = write_seed(r#"[{"id":10,"text":"Water plants"}]"#);

        let notes = load_seed(file.path()).expect("Failed to load seed");
        assert_eq!(notes, vec![Note::new(10, "Water plants")]);
    }

    #[test]
    fn test_load_seed_invalid_json() {
        let file = write_seed("not json");

        assert!(matches!(load_seed(file.path()), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create dir");

        let result = load_seed(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}
