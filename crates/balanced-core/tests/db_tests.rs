use balanced_core::models::{Category, CycleUnit, Method, Record};
use balanced_core::params::{NewEntry, NewTag, Page, UpdateEntry};
use balanced_core::schema::ENTRIES_TABLE;
use balanced_core::{Database, LedgerError, Query, Recurrence, TableSchema};
use jiff::{Timestamp, ToSpan};
use rusqlite::types::Value;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::open(temp_file.path()).expect("Failed to open test database");
    (temp_file, db)
}

/// A small side table for exercising the generic record surface.
fn notes_schema() -> TableSchema {
    TableSchema::new("notes")
        .field("id", "INTEGER PRIMARY KEY AUTOINCREMENT")
        .field("title", "TEXT NOT NULL")
        .field("body", "TEXT")
}

fn entry_at(amount: f64, first_time: Timestamp) -> NewEntry {
    NewEntry {
        amount,
        note: None,
        method: Method::Cash,
        category: Category::DailyExpense,
        tags: Vec::new(),
        recurrence: None,
        first_time,
    }
}

fn table_names(db: &Database) -> Vec<String> {
    let records = db
        .select(
            &Query::table("sqlite_master")
                .fields(["name"])
                .filter("type = 'table'"),
        )
        .expect("Failed to list tables");
    records
        .iter()
        .filter_map(|r| r.text("name").map(String::from))
        .collect()
}

#[test]
fn open_creates_registry_tables() {
    let (_temp_file, db) = create_test_db();

    let tables = table_names(&db);
    assert!(tables.iter().any(|t| t == "entries"));
    assert!(tables.iter().any(|t| t == "tags"));
}

#[test]
fn create_table_is_idempotent() {
    let (_temp_file, db) = create_test_db();

    db.create_table(&notes_schema())
        .expect("First creation failed");
    db.create_table(&notes_schema())
        .expect("Second creation failed");

    let tables = table_names(&db);
    assert_eq!(tables.iter().filter(|t| *t == "notes").count(), 1);
}

#[test]
fn insert_round_trips_by_returned_id() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");

    let record = Record::new()
        .with("title", "first".to_string())
        .with("body", "body text".to_string());
    let id = db
        .insert(&Query::table("notes"), &record)
        .expect("Insert failed");
    assert!(id > 0);

    let rows = db
        .select(&Query::table("notes").filter(format!("id = {id}")))
        .expect("Select failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].integer("id"), Some(id));
    assert_eq!(rows[0].text("title"), Some("first"));
    assert_eq!(rows[0].text("body"), Some("body text"));
}

#[test]
fn parameterized_insert_stores_metacharacters_literally() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");

    let hostile = "Robert'); DROP TABLE entries; --";
    let id = db
        .insert(
            &Query::table("notes"),
            &Record::new().with("title", hostile.to_string()),
        )
        .expect("Insert failed");

    let rows = db
        .select(&Query::table("notes").filter(format!("id = {id}")))
        .expect("Select failed");
    assert_eq!(rows[0].text("title"), Some(hostile));

    // The metacharacters never reached the statement text.
    assert!(table_names(&db).iter().any(|t| t == "entries"));
}

#[test]
fn select_with_empty_filter_reads_all_rows() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");

    for title in ["a", "b", "c"] {
        db.insert(
            &Query::table("notes"),
            &Record::new().with("title", title.to_string()),
        )
        .expect("Insert failed");
    }

    let all = db.select(&Query::table("notes")).expect("Select failed");
    assert_eq!(all.len(), 3);

    // A filter made of blank conditions is the same unconditioned read.
    let blank = db
        .select(&Query::table("notes").filters(["", "  "]))
        .expect("Select failed");
    assert_eq!(blank.len(), 3);
}

#[test]
fn fresh_queries_share_no_state() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");
    db.insert(
        &Query::table("notes"),
        &Record::new()
            .with("title", "only".to_string())
            .with("body", "kept".to_string()),
    )
    .expect("Insert failed");

    // A narrow projected, filtered query...
    let narrow = db
        .select(
            &Query::table("notes")
                .fields(["title"])
                .filter("title = 'absent'"),
        )
        .expect("Select failed");
    assert!(narrow.is_empty());

    // ...leaves a subsequent plain query reading all fields and all rows.
    let rows = db.select(&Query::table("notes")).expect("Select failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn update_without_filter_is_refused_before_storage() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");
    db.insert(
        &Query::table("notes"),
        &Record::new().with("title", "untouched".to_string()),
    )
    .expect("Insert failed");

    let changes = Record::new().with("title", "clobbered".to_string());
    match db.update(&Query::table("notes"), &changes) {
        Err(LedgerError::FilterRequired { action }) => assert_eq!(action, "update"),
        other => panic!("Expected FilterRequired, got {other:?}"),
    }

    // Blank conditions do not count as a filter either.
    assert!(matches!(
        db.update(&Query::table("notes").filter(""), &changes),
        Err(LedgerError::FilterRequired { .. })
    ));

    let rows = db.select(&Query::table("notes")).expect("Select failed");
    assert_eq!(rows[0].text("title"), Some("untouched"));
}

#[test]
fn delete_without_filter_is_refused_before_storage() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");
    db.insert(
        &Query::table("notes"),
        &Record::new().with("title", "kept".to_string()),
    )
    .expect("Insert failed");

    assert!(matches!(
        db.delete(&Query::table("notes")),
        Err(LedgerError::FilterRequired { .. })
    ));
    assert!(matches!(
        db.delete(&Query::table("notes").filters([""])),
        Err(LedgerError::FilterRequired { .. })
    ));

    let rows = db.select(&Query::table("notes")).expect("Select failed");
    assert_eq!(rows.len(), 1);
}

#[test]
fn update_with_filter_reports_affected_rows() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");
    for title in ["a", "a", "b"] {
        db.insert(
            &Query::table("notes"),
            &Record::new().with("title", title.to_string()),
        )
        .expect("Insert failed");
    }

    let affected = db
        .update(
            &Query::table("notes").filter("title = 'a'"),
            &Record::new().with("body", "patched".to_string()),
        )
        .expect("Update failed");
    assert_eq!(affected, 2);
}

#[test]
fn delete_then_select_returns_empty() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");
    let id = db
        .insert(
            &Query::table("notes"),
            &Record::new().with("title", "doomed".to_string()),
        )
        .expect("Insert failed");

    let affected = db
        .delete(&Query::table("notes").filter(format!("id = {id}")))
        .expect("Delete failed");
    assert_eq!(affected, 1);

    let rows = db
        .select(&Query::table("notes").filter(format!("id = {id}")))
        .expect("Select failed");
    assert!(rows.is_empty());
}

#[test]
fn drop_table_removes_table_and_rows() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");

    db.drop_table("notes").expect("Drop failed");

    assert!(!table_names(&db).iter().any(|t| t == "notes"));
    assert!(matches!(
        db.select(&Query::table("notes")),
        Err(LedgerError::Database { .. })
    ));
}

#[test]
fn insert_null_values_round_trip() {
    let (_temp_file, db) = create_test_db();
    db.create_table(&notes_schema()).expect("Creation failed");

    let id = db
        .insert(
            &Query::table("notes"),
            &Record::new()
                .with("title", "has null body".to_string())
                .with("body", Value::Null),
        )
        .expect("Insert failed");

    let rows = db
        .select(&Query::table("notes").filter(format!("id = {id}")))
        .expect("Select failed");
    assert_eq!(rows[0].get("body"), Some(&Value::Null));
}

#[test]
fn entries_page_is_newest_first_with_advancing_offset() {
    let (_temp_file, db) = create_test_db();

    let base = Timestamp::from_millisecond(1_750_000_000_000).unwrap();
    let mut ids = Vec::new();
    for i in 0..5 {
        let at = base + (i as i64).hours();
        let entry = db
            .insert_entry(&entry_at(-1.0, at))
            .expect("Insert failed");
        ids.push(entry.id);
    }

    let first = db
        .entries_page(&Page {
            limit: 2,
            offset: 0,
        })
        .expect("Page failed");
    let second = db
        .entries_page(&Page {
            limit: 2,
            offset: 2,
        })
        .expect("Page failed");
    let third = db
        .entries_page(&Page {
            limit: 2,
            offset: 4,
        })
        .expect("Page failed");

    let fetched: Vec<u64> = first
        .iter()
        .chain(second.iter())
        .chain(third.iter())
        .map(|e| e.id)
        .collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(fetched, expected);
    assert_eq!(third.len(), 1);
}

#[test]
fn totals_follow_sign_convention() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    db.insert_entry(&entry_at(1200.0, now)).expect("Insert failed");
    db.insert_entry(&entry_at(-200.5, now)).expect("Insert failed");
    db.insert_entry(&entry_at(-99.5, now)).expect("Insert failed");

    let totals = db.totals().expect("Totals failed");
    assert_eq!(totals.income, 1200.0);
    assert_eq!(totals.expense, 300.0);
    assert_eq!(totals.deposit, 900.0);
}

#[test]
fn totals_on_empty_table_are_zero() {
    let (_temp_file, db) = create_test_db();

    let totals = db.totals().expect("Totals failed");
    assert_eq!(totals.income, 0.0);
    assert_eq!(totals.expense, 0.0);
    assert_eq!(totals.deposit, 0.0);
}

#[test]
fn update_entry_leaves_other_fields_alone() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    let mut entry = entry_at(-10.0, now);
    entry.note = Some("lunch".to_string());
    let created = db.insert_entry(&entry).expect("Insert failed");

    let affected = db
        .update_entry(
            created.id,
            &UpdateEntry {
                amount: Some(-12.5),
                ..Default::default()
            },
        )
        .expect("Update failed");
    assert_eq!(affected, 1);

    let reloaded = db
        .get_entry(created.id)
        .expect("Get failed")
        .expect("Entry should exist");
    assert_eq!(reloaded.amount, -12.5);
    assert_eq!(reloaded.note.as_deref(), Some("lunch"));
    assert_eq!(reloaded.first_time, created.first_time);
}

#[test]
fn update_entry_with_no_changes_is_an_error() {
    let (_temp_file, db) = create_test_db();

    assert!(matches!(
        db.update_entry(1, &UpdateEntry::default()),
        Err(LedgerError::InvalidInput { .. })
    ));
}

#[test]
fn get_entry_missing_id_is_none() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.get_entry(424_242).expect("Get failed"), None);
}

#[test]
fn insert_entry_rejects_zero_cycle_count() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    let mut entry = entry_at(-5.0, now);
    entry.recurrence = Some(Recurrence {
        count: 0,
        unit: CycleUnit::Day,
    });

    match db.insert_entry(&entry) {
        Err(LedgerError::InvalidInput { field, .. }) => assert_eq!(field, "recurrence"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn recurring_insert_sets_next_trigger_one_cycle_out() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    let mut entry = entry_at(-30.0, now);
    entry.recurrence = Some(Recurrence {
        count: 1,
        unit: CycleUnit::Week,
    });
    let created = db.insert_entry(&entry).expect("Insert failed");

    let trigger = created.next_trigger.expect("Trigger should be set");
    assert!(trigger > now);

    let reloaded = db
        .get_entry(created.id)
        .expect("Get failed")
        .expect("Entry should exist");
    assert_eq!(reloaded.next_trigger, created.next_trigger);
    assert_eq!(reloaded.recurrence, entry.recurrence);
}

#[test]
fn materialize_due_creates_one_occurrence_per_elapsed_cycle() {
    let (_temp_file, mut db) = create_test_db();

    let now = Timestamp::now();
    // First occurred three and a quarter days ago; daily recurrence means
    // three elapsed triggers.
    let first_time = now - 78.hours();
    let mut template = entry_at(-8.0, first_time);
    template.note = Some("coffee".to_string());
    template.recurrence = Some(Recurrence {
        count: 1,
        unit: CycleUnit::Day,
    });
    let created = db.insert_entry(&template).expect("Insert failed");

    let occurrences = db.materialize_due(now).expect("Materialize failed");
    assert_eq!(occurrences.len(), 3);
    for occurrence in &occurrences {
        assert_eq!(occurrence.amount, -8.0);
        assert_eq!(occurrence.note.as_deref(), Some("coffee"));
        assert_eq!(occurrence.recurrence, None);
        assert_eq!(occurrence.next_trigger, None);
        assert!(occurrence.first_time <= now);
    }

    // The template's trigger has moved strictly past now.
    let reloaded = db
        .get_entry(created.id)
        .expect("Get failed")
        .expect("Entry should exist");
    assert!(reloaded.next_trigger.expect("Trigger should remain") > now);

    // A second run has nothing left to do.
    let again = db.materialize_due(now).expect("Materialize failed");
    assert!(again.is_empty());
}

#[test]
fn due_entries_ignores_plain_entries() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    db.insert_entry(&entry_at(-5.0, now)).expect("Insert failed");

    let due = db.due_entries(now + 1.hours()).expect("Due query failed");
    assert!(due.is_empty());
}

#[test]
fn tags_round_trip_in_creation_order() {
    let (_temp_file, db) = create_test_db();

    db.insert_tag(&NewTag {
        title: "food".to_string(),
    })
    .expect("Insert failed");
    db.insert_tag(&NewTag {
        title: "travel".to_string(),
    })
    .expect("Insert failed");

    let tags = db.list_tags().expect("List failed");
    let titles: Vec<&str> = tags.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["food", "travel"]);

    assert!(matches!(
        db.insert_tag(&NewTag {
            title: "   ".to_string()
        }),
        Err(LedgerError::InvalidInput { .. })
    ));
}

#[test]
fn entry_insert_round_trips_through_entries_table() {
    let (_temp_file, db) = create_test_db();
    let now = Timestamp::from_millisecond(1_750_000_000_000).unwrap();

    let mut entry = entry_at(-42.5, now);
    entry.note = Some("it's 50% off".to_string());
    entry.method = Method::Alipay;
    entry.category = Category::Clothing;
    entry.tags = vec!["sale".to_string(), "winter".to_string()];
    let created = db.insert_entry(&entry).expect("Insert failed");

    let rows = db
        .select(&Query::table(ENTRIES_TABLE).filter(format!("id = {}", created.id)))
        .expect("Select failed");
    assert_eq!(rows.len(), 1);

    let reloaded = db
        .get_entry(created.id)
        .expect("Get failed")
        .expect("Entry should exist");
    assert_eq!(reloaded, created);
}
