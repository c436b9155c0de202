use emojimap_core::db::open_db_in_memory;
use emojimap_core::{
    Entry, EntryRepository, IngestService, LookupService, RepoError, SqliteEntryRepository,
};

#[test]
fn seed_scenario_supports_lookup_and_suggestions() {
    let conn = open_db_in_memory().unwrap();
    let ingest = IngestService::new(SqliteEntryRepository::new(&conn));
    let lookup = LookupService::new(SqliteEntryRepository::new(&conn));

    let seeded = ingest
        .seed_entries(&[Entry::new("rocket", "🚀"), Entry::new("robot", "🤖")])
        .unwrap();
    assert_eq!(seeded, 2);

    assert_eq!(lookup.exact("rocket").unwrap(), vec!["🚀".to_string()]);

    let names = lookup.suggestions("ro").unwrap();
    assert!(names.contains(&"rocket".to_string()));
    assert!(names.contains(&"robot".to_string()));

    let err = lookup.exact("unknown").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn seed_aborts_on_first_failure_and_keeps_earlier_entries() {
    let conn = open_db_in_memory().unwrap();
    let ingest = IngestService::new(SqliteEntryRepository::new(&conn));
    let repo = SqliteEntryRepository::new(&conn);

    let batch = [
        Entry::new("rocket", "🚀"),
        Entry::new("ROCKET", "🚀"),
        Entry::new("robot", "🤖"),
    ];
    let err = ingest.seed_entries(&batch).unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // Entries before the failing record remain; the rest of the batch was
    // never attempted.
    assert!(repo.symbols_by_name("rocket").is_ok());
    assert!(matches!(
        repo.symbols_by_name("robot").unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn seed_order_matches_input_order() {
    let conn = open_db_in_memory().unwrap();
    let ingest = IngestService::new(SqliteEntryRepository::new(&conn));
    let lookup = LookupService::new(SqliteEntryRepository::new(&conn));

    ingest
        .seed_entries(&[
            Entry::new("robot", "🤖"),
            Entry::new("rocket", "🚀"),
        ])
        .unwrap();

    let names = lookup.suggestions("ro").unwrap();
    assert_eq!(names, vec!["robot".to_string(), "rocket".to_string()]);
}

#[test]
fn empty_seed_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let ingest = IngestService::new(SqliteEntryRepository::new(&conn));
    let repo = SqliteEntryRepository::new(&conn);

    assert_eq!(ingest.seed_entries(&[]).unwrap(), 0);
    assert_eq!(repo.count_entries().unwrap(), 0);
}
