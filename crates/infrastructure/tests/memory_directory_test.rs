use std::sync::Arc;
use zone53_application::ports::{ChangeStatus, ZoneDirectory};
use zone53_application::use_cases::{
    CreateRecordOptions, CreateRecordUseCase, DeleteRecordUseCase, ImportOptions,
    ImportZoneUseCase, LookupZoneUseCase, PurgeRecordsUseCase,
};
use zone53_domain::{ChangeOperation, RecordSet, RecordType, ZoneError};
use zone53_infrastructure::directory::InMemoryZoneDirectory;
use zone53_infrastructure::zonefile::parse_zone_text;

fn a_set(name: &str, ttl: u32, value: &str) -> RecordSet {
    let mut set = RecordSet::new(name, RecordType::A);
    set.ttl = Some(ttl);
    set.values.push(value.to_string());
    set
}

#[tokio::test]
async fn new_zones_carry_the_default_auth_sets() {
    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");

    assert_eq!(zone.name, "example.com.");
    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert_eq!(sets.len(), 2);
    assert!(sets.iter().any(|s| s.rtype == RecordType::SOA));
    assert!(sets.iter().any(|s| s.rtype == RecordType::NS));
    assert!(sets.iter().all(|s| s.is_auth(&zone.name)));
}

#[tokio::test]
async fn unknown_zones_are_not_found() {
    let directory = InMemoryZoneDirectory::new();
    match directory.get_zone("Z0000000000000").await {
        Err(ZoneError::ZoneNotFound(_)) => {}
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn created_sets_are_listed_back() {
    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");

    let changes = [ChangeOperation::create(a_set(
        "www.example.com.",
        300,
        "192.0.2.1",
    ))];
    let token = directory.submit_changes(&zone.id, &changes).await.unwrap();
    assert_eq!(
        directory.change_status(&token).await.unwrap(),
        ChangeStatus::InSync
    );

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert!(sets.iter().any(|s| s.name == "www.example.com."));
}

#[tokio::test]
async fn duplicate_creates_are_rejected() {
    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");

    let set = a_set("www.example.com.", 300, "192.0.2.1");
    let create = [ChangeOperation::create(set.clone())];
    directory.submit_changes(&zone.id, &create).await.unwrap();

    match directory.submit_changes(&zone.id, &create).await {
        Err(ZoneError::Provider(msg)) => assert!(msg.contains("already exists"), "{msg}"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn deletes_must_match_existing_content() {
    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");

    let changes = [ChangeOperation::delete(a_set(
        "www.example.com.",
        300,
        "192.0.2.1",
    ))];
    match directory.submit_changes(&zone.id, &changes).await {
        Err(ZoneError::Provider(msg)) => assert!(msg.contains("not found"), "{msg}"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn failed_batches_leave_the_zone_untouched() {
    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");

    let changes = [
        ChangeOperation::create(a_set("www.example.com.", 300, "192.0.2.1")),
        ChangeOperation::delete(a_set("gone.example.com.", 300, "192.0.2.9")),
    ];
    assert!(directory.submit_changes(&zone.id, &changes).await.is_err());

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert!(!sets.iter().any(|s| s.name == "www.example.com."));
}

#[tokio::test]
async fn importing_the_same_zone_twice_with_replace_is_idempotent() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");

    let text = "\
www 300 IN A 192.0.2.1
www 300 IN A 192.0.2.2
mail 300 IN MX 10 smtp
";
    let records = parse_zone_text(text, &zone.name).unwrap();
    let import = ImportZoneUseCase::new(directory.clone());
    let opts = ImportOptions {
        replace: true,
        ..ImportOptions::default()
    };

    let first = import
        .execute(&zone, records.clone(), &opts)
        .await
        .unwrap();
    assert_eq!(first.creates, 2);
    assert_eq!(first.deletes, 0);

    let second = import.execute(&zone, records, &opts).await.unwrap();
    assert_eq!(second.changes, 0);
}

#[tokio::test]
async fn replace_import_deletes_sets_missing_from_the_file() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let import = ImportZoneUseCase::new(directory.clone());
    let opts = ImportOptions {
        replace: true,
        ..ImportOptions::default()
    };

    let before = parse_zone_text("www 300 IN A 192.0.2.1\nold 300 IN A 192.0.2.9\n", &zone.name)
        .unwrap();
    import.execute(&zone, before, &opts).await.unwrap();

    let after = parse_zone_text("www 300 IN A 192.0.2.1\n", &zone.name).unwrap();
    let summary = import.execute(&zone, after, &opts).await.unwrap();
    assert_eq!(summary.deletes, 1);

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert!(!sets.iter().any(|s| s.name == "old.example.com."));
}

#[tokio::test]
async fn import_never_touches_auth_sets_by_default() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let import = ImportZoneUseCase::new(directory.clone());

    let records = parse_zone_text("www 300 IN A 192.0.2.1\n", &zone.name).unwrap();
    let opts = ImportOptions {
        replace: true,
        ..ImportOptions::default()
    };
    import.execute(&zone, records, &opts).await.unwrap();

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert!(sets.iter().any(|s| s.rtype == RecordType::SOA));
    assert!(sets.iter().any(|s| s.rtype == RecordType::NS));
}

#[tokio::test]
async fn create_record_replaces_the_matching_set() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let create = CreateRecordUseCase::new(directory.clone());

    let first = parse_zone_text("www 300 IN A 192.0.2.1\n", &zone.name)
        .unwrap()
        .remove(0);
    create
        .execute(&zone, first, &CreateRecordOptions::default())
        .await
        .unwrap();

    let second = parse_zone_text("www 60 IN A 192.0.2.2\n", &zone.name)
        .unwrap()
        .remove(0);
    let opts = CreateRecordOptions {
        replace: true,
        ..CreateRecordOptions::default()
    };
    create.execute(&zone, second, &opts).await.unwrap();

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    let www: Vec<_> = sets.iter().filter(|s| s.name == "www.example.com.").collect();
    assert_eq!(www.len(), 1);
    assert_eq!(www[0].ttl, Some(60));
    assert_eq!(www[0].values, vec!["192.0.2.2".to_string()]);
}

#[tokio::test]
async fn delete_record_narrows_on_identifier() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let create = CreateRecordUseCase::new(directory.clone());

    for (value, id, weight) in [("192.0.2.1", "one", 1), ("192.0.2.2", "two", 2)] {
        let record = parse_zone_text(&format!("www 300 IN A {value}\n"), &zone.name)
            .unwrap()
            .remove(0);
        let opts = CreateRecordOptions {
            identifier: Some(id.to_string()),
            weight: Some(weight),
            ..CreateRecordOptions::default()
        };
        create.execute(&zone, record, &opts).await.unwrap();
    }

    let delete = DeleteRecordUseCase::new(directory.clone());
    let deleted = delete
        .execute(&zone, "www", RecordType::A, Some("one"), false)
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    let remaining: Vec<_> = sets.iter().filter(|s| s.name == "www.example.com.").collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].set_identifier.as_deref(), Some("two"));
}

#[tokio::test]
async fn purge_removes_everything_except_auth_sets() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let import = ImportZoneUseCase::new(directory.clone());

    let records = parse_zone_text(
        "www 300 IN A 192.0.2.1\nmail 300 IN MX 10 smtp\n",
        &zone.name,
    )
    .unwrap();
    import
        .execute(&zone, records, &ImportOptions::default())
        .await
        .unwrap();

    let purge = PurgeRecordsUseCase::new(directory.clone());
    assert_eq!(purge.execute(&zone, false).await.unwrap(), 2);

    let sets = directory.list_record_sets(&zone.id).await.unwrap();
    assert_eq!(sets.len(), 2);
    assert!(sets.iter().all(|s| s.rtype.is_auth()));
}

#[tokio::test]
async fn lookup_resolves_by_name_and_flags_ambiguity() {
    let directory = Arc::new(InMemoryZoneDirectory::new());
    let zone = directory.create_zone("example.com");
    let lookup = LookupZoneUseCase::new(directory.clone());

    assert_eq!(lookup.execute("example.com").await.unwrap().id, zone.id);
    assert_eq!(lookup.execute(&zone.id).await.unwrap().id, zone.id);

    directory.create_zone("example.com");
    match lookup.execute("example.com").await {
        Err(ZoneError::AmbiguousZone(_)) => {}
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn snapshots_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zones.json");

    let directory = InMemoryZoneDirectory::new();
    let zone = directory.create_zone("example.com");
    let changes = [ChangeOperation::create(a_set(
        "www.example.com.",
        300,
        "192.0.2.1",
    ))];
    directory.submit_changes(&zone.id, &changes).await.unwrap();
    directory.save(&path).unwrap();

    let reloaded = InMemoryZoneDirectory::load(&path).unwrap();
    let zones = reloaded.list_zones().await.unwrap();
    assert_eq!(zones, vec![zone.clone()]);
    let sets = reloaded.list_record_sets(&zone.id).await.unwrap();
    assert!(sets.iter().any(|s| s.name == "www.example.com."));
}

#[tokio::test]
async fn missing_snapshot_files_start_empty() {
    let dir = tempfile::tempdir().unwrap();
    let directory = InMemoryZoneDirectory::load(&dir.path().join("absent.json")).unwrap();
    assert!(directory.list_zones().await.unwrap().is_empty());
}
