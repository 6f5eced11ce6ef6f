use std::fs;

use filenest::fs_ops::{EntryKind, create_folder, delete_entry, entry_info, rename_entry};
use tempfile::tempdir;

#[test]
fn create_folder_makes_a_directory() {
    let td = tempdir().unwrap();
    let made = create_folder(td.path(), "Documents").unwrap();
    assert_eq!(made, td.path().join("Documents"));
    assert!(made.is_dir());
}

#[test]
fn create_folder_rejects_existing_and_empty_names() {
    let td = tempdir().unwrap();
    create_folder(td.path(), "x").unwrap();
    assert!(create_folder(td.path(), "x").is_err());
    assert!(create_folder(td.path(), "").is_err());
}

#[test]
fn rename_moves_within_the_parent() {
    let td = tempdir().unwrap();
    let old = td.path().join("draft.txt");
    fs::write(&old, b"text").unwrap();

    let renamed = rename_entry(&old, "final.txt").unwrap();
    assert_eq!(renamed, td.path().join("final.txt"));
    assert!(!old.exists());
    assert_eq!(fs::read(&renamed).unwrap(), b"text");
}

#[test]
fn rename_never_clobbers_a_sibling() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, b"a").unwrap();
    fs::write(&b, b"b").unwrap();

    assert!(rename_entry(&a, "b.txt").is_err());
    assert_eq!(fs::read(&a).unwrap(), b"a");
    assert_eq!(fs::read(&b).unwrap(), b"b");
}

#[test]
fn delete_file_and_tree() {
    let td = tempdir().unwrap();
    let f = td.path().join("gone.txt");
    fs::write(&f, b"x").unwrap();
    delete_entry(&f).unwrap();
    assert!(!f.exists());

    let tree = td.path().join("tree");
    fs::create_dir_all(tree.join("deep/deeper")).unwrap();
    fs::write(tree.join("deep/deeper/leaf.txt"), b"x").unwrap();
    delete_entry(&tree).unwrap();
    assert!(!tree.exists());

    assert!(delete_entry(&td.path().join("never-existed")).is_err());
}

#[test]
fn entry_info_reports_kind_and_size() {
    let td = tempdir().unwrap();
    let f = td.path().join("data.bin");
    fs::write(&f, vec![0u8; 2048]).unwrap();

    let info = entry_info(&f).unwrap();
    assert_eq!(info.kind, EntryKind::File);
    assert_eq!(info.size, 2048);
    assert!(info.modified.is_some());

    let dir_info = entry_info(td.path()).unwrap();
    assert_eq!(dir_info.kind, EntryKind::Dir);
}
