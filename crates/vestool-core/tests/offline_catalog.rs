//! Integration test: browsing a catalog loaded from the server's data directory.

use std::fs;

use tempfile::tempdir;
use vestool_core::api::{load_apps_file, load_versions_file, versions_file_name, ApiError};
use vestool_core::catalog::{Catalog, VersionHistory};
use vestool_core::classify::Category;
use vestool_core::resolver::{resolve_app, DownloadEndpoints};

#[test]
fn load_browse_and_resolve_from_disk() {
    let dir = tempdir().unwrap();
    let apps = r#"[
        {"app_id": "com.mygame.puzzle", "title": "Puzzle Quest", "apk_url": "https://cdn.example.com/pq.apk", "apk_size_mb": 30, "date": "2025-03-01"},
        {"app_id": "com.instagram.basel", "title": "Edits", "telegram_link": "https://t.me/x/5", "date": "2025-02-01"},
        {"app_id": "unknown.xyz", "title": "Học tiếng Anh", "date": "2025-01-01"}
    ]"#;
    fs::write(dir.path().join("apps.json"), apps).unwrap();

    let versions_dir = dir.path().join("versions");
    fs::create_dir_all(&versions_dir).unwrap();
    fs::write(
        versions_dir.join(versions_file_name("com.mygame.puzzle")),
        r#"[{"version_name": "1.2"}, {"version_name": "1.10"}, {"version_name": "2.0"}]"#,
    )
    .unwrap();

    let catalog = Catalog::new(load_apps_file(&dir.path().join("apps.json")).unwrap());
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("com.mygame.puzzle").unwrap().category, Category::Game);
    assert_eq!(catalog.get("com.instagram.basel").unwrap().category, Category::Tool);
    assert_eq!(catalog.get("unknown.xyz").unwrap().category, Category::Other);

    let puzzle = &catalog.get("com.mygame.puzzle").unwrap().app;
    let target = resolve_app(puzzle, &DownloadEndpoints::default());
    assert_eq!(target.url.as_deref(), Some("https://cdn.example.com/pq.apk"));
    assert_eq!(target.size_mb, Some(30.0));

    let history = VersionHistory::new(load_versions_file(&versions_dir, "com.mygame.puzzle").unwrap());
    assert_eq!(history.latest().unwrap().version_name, "2.0");
    assert!(load_versions_file(&versions_dir, "unknown.xyz").unwrap().is_empty());
}

#[test]
fn corrupt_apps_file_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("apps.json");
    fs::write(&path, "{not json").unwrap();
    assert!(matches!(load_apps_file(&path), Err(ApiError::Decode { .. })));
}
