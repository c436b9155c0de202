//! Startup seeding from a JSON source file.
//!
//! # Responsibility
//! - Parse the seed file into entry records and load them through the
//!   ingestion service.
//!
//! # Invariants
//! - Seeding only runs against an empty store; restarts with a persistent
//!   database are no-ops.
//! - A seed failure aborts startup rather than serving a partial store
//!   silently.

use crate::error::{ServerError, ServerResult};
use emojimap_core::{Entry, EntryRepository, IngestService, SqliteEntryRepository};
use log::info;
use rusqlite::Connection;
use std::path::Path;

/// Reads and parses a JSON seed file (an array of `{name, symbol}`
/// records, in load order).
pub fn load_seed_file(path: &Path) -> ServerResult<Vec<Entry>> {
    let data = std::fs::read_to_string(path).map_err(|err| ServerError::Seed {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    serde_json::from_str(&data).map_err(|err| ServerError::Seed {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Seeds the store from `path` when it holds no entries yet.
///
/// Returns the number of entries inserted (zero when the store was already
/// populated).
pub fn seed_if_empty(conn: &Connection, path: &Path) -> ServerResult<usize> {
    let repo = SqliteEntryRepository::new(conn);
    if repo.count_entries()? > 0 {
        info!("event=seed module=server status=skip reason=store_not_empty");
        return Ok(0);
    }

    let entries = load_seed_file(path)?;
    let count = IngestService::new(repo).seed_entries(&entries)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{load_seed_file, seed_if_empty};
    use emojimap_core::db::open_db_in_memory;
    use emojimap_core::{EntryRepository, SqliteEntryRepository};
    use std::io::Write;

    fn write_seed(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_well_formed_seed_file() {
        let (_dir, path) =
            write_seed(r#"[{"name":"rocket","symbol":"🚀"},{"name":"robot","symbol":"🤖"}]"#);

        let entries = load_seed_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "rocket");
    }

    #[test]
    fn malformed_seed_file_is_an_error() {
        let (_dir, path) = write_seed("not json");
        let err = load_seed_file(&path).unwrap_err();
        assert!(err.to_string().contains("seed file"));
    }

    #[test]
    fn seeding_is_idempotent_across_restarts() {
        let (_dir, path) = write_seed(r#"[{"name":"rocket","symbol":"🚀"}]"#);
        let conn = open_db_in_memory().unwrap();

        assert_eq!(seed_if_empty(&conn, &path).unwrap(), 1);
        assert_eq!(seed_if_empty(&conn, &path).unwrap(), 0);

        let repo = SqliteEntryRepository::new(&conn);
        assert_eq!(repo.count_entries().unwrap(), 1);
    }

    #[test]
    fn bundled_seed_asset_parses_and_satisfies_entry_rules() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/emojis.json");
        let entries = load_seed_file(&path).unwrap();
        assert!(!entries.is_empty());

        for entry in &entries {
            entry.validate().unwrap();
            emojimap_core::derive_prefix(&entry.name).unwrap();
        }
    }
}
