use rekord::store::fs::FsBackend;
use rekord::vault::FileVault;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup() -> (TempDir, FileVault<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::open(dir.path().join("store"))
        .unwrap()
        .with_store_file("files.json");
    let vault = FileVault::open(backend, dir.path().join("store/vault")).unwrap();
    (dir, vault)
}

#[test]
fn add_download_roundtrip() {
    let (dir, vault) = setup();
    let source = dir.path().join("report.txt");
    fs::write(&source, "quarterly numbers").unwrap();

    let record = vault.add(&source, Some("Q3"), Some("draft")).unwrap();
    let dest = dir.path().join("out/report.txt");
    vault.download(&record.id, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest).unwrap(), "quarterly numbers");
}

#[test]
fn metadata_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let store_dir = dir.path().join("store");
    let source = dir.path().join("a.txt");
    fs::write(&source, "x").unwrap();

    let id = {
        let backend = FsBackend::open(&store_dir).unwrap().with_store_file("files.json");
        let vault = FileVault::open(backend, store_dir.join("vault")).unwrap();
        vault.add(&source, None, None).unwrap().id
    };

    let backend = FsBackend::open(&store_dir).unwrap().with_store_file("files.json");
    let vault = FileVault::open(backend, store_dir.join("vault")).unwrap();
    let record = vault.get(&id).unwrap().unwrap();
    assert_eq!(record.field_str("original_name"), Some("a.txt"));
    assert_eq!(vault.count().unwrap(), 1);
}

#[test]
fn failed_download_leaves_no_partial_destination() {
    let (dir, vault) = setup();
    let source = dir.path().join("report.txt");
    fs::write(&source, "hello").unwrap();
    let record = vault.add(&source, None, None).unwrap();

    // Break the stored file so the copy itself fails.
    let stored = PathBuf::from(record.field_str("stored_path").unwrap());
    fs::remove_file(&stored).unwrap();

    let dest = dir.path().join("out/report.txt");
    assert!(vault.download(&record.id, &dest).is_err());
    assert!(!dest.exists());

    // No tmp artifacts next to the destination either.
    if let Ok(entries) = fs::read_dir(dest.parent().unwrap()) {
        assert_eq!(entries.count(), 0);
    }
}

#[test]
fn remove_clears_vault_dir() {
    let (dir, vault) = setup();
    let source = dir.path().join("a.txt");
    fs::write(&source, "x").unwrap();
    let record = vault.add(&source, None, None).unwrap();

    vault.remove(&record.id).unwrap();
    let leftovers: Vec<_> = fs::read_dir(vault.vault_dir()).unwrap().collect();
    assert!(leftovers.is_empty());
}
