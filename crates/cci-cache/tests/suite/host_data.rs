use std::path::PathBuf;
use std::str::FromStr;

use cci_cache::{resolve_orb_cache_path_with, Cache, CacheConfig, HostDataReport};
use cci_core::{Document, OrbInfo, RemoteOrbInfo, Uri};
use pretty_assertions::assert_eq;

fn orb_with_file(source: &str, file_path: PathBuf) -> OrbInfo {
    OrbInfo::new(
        source,
        RemoteOrbInfo {
            file_path,
            version: "1.0.0".to_string(),
            ..RemoteOrbInfo::default()
        },
    )
}

#[test]
fn deletes_existing_orb_files_and_empties_orb_store() {
    super::init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let config = CacheConfig {
        cache_root_override: Some(tmp.path().to_path_buf()),
    };

    let node = resolve_orb_cache_path_with(&config, "node");
    std::fs::create_dir_all(node.parent().unwrap()).unwrap();
    std::fs::write(&node, "version: 2.1\ncommands: {}\n").unwrap();
    let missing = resolve_orb_cache_path_with(&config, "never-written");

    let cache = Cache::new();
    cache.orbs().set(
        "circleci/node@5.1.0".to_string(),
        orb_with_file("circleci/node@5.1.0", node.clone()),
    );
    cache.orbs().set(
        "acme/missing@1.0.0".to_string(),
        orb_with_file("acme/missing@1.0.0", missing.clone()),
    );
    cache.orbs().set(
        "acme/inline".to_string(),
        OrbInfo::new("acme/inline", RemoteOrbInfo::default()),
    );

    let report = cache.clear_host_data();

    assert_eq!(
        report,
        HostDataReport {
            removed_files: 1,
            cleared_orbs: 3,
        }
    );
    assert!(!node.exists());
    assert!(!missing.exists());
    assert!(cache.orbs().is_empty());
    assert_eq!(cache.orbs().get("circleci/node@5.1.0"), None);
}

#[test]
fn missing_files_do_not_stop_the_teardown() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = Cache::new();
    cache.orbs().set(
        "acme/gone@1.0.0".to_string(),
        orb_with_file("acme/gone@1.0.0", tmp.path().join("gone.yml")),
    );

    let report = cache.clear_host_data();
    assert_eq!(report.removed_files, 0);
    assert_eq!(report.cleared_orbs, 1);
    assert!(cache.orbs().is_empty());
}

#[test]
fn leaves_other_stores_untouched() {
    let cache = Cache::new();
    let uri = Uri::from_str("file:///repo/.circleci/config.yml").unwrap();
    cache
        .documents()
        .set_document(Document::new(uri.clone(), "yaml", 1, "version: 2.1\n"));
    cache.docker_images().check_and_store("cimg/base:stable", true);
    cache.orbs().set(
        "circleci/node@5.1.0".to_string(),
        OrbInfo::new("circleci/node@5.1.0", RemoteOrbInfo::default()),
    );

    cache.clear_host_data();

    assert!(cache.orbs().is_empty());
    assert!(cache.documents().has(&uri));
    assert_eq!(cache.docker_images().len(), 1);
}

#[test]
fn concurrent_readers_survive_teardown() {
    let cache = Cache::new();
    for i in 0..100 {
        let id = format!("acme/orb-{i}@1.0.0");
        cache
            .orbs()
            .set(id.clone(), OrbInfo::new(id, RemoteOrbInfo::default()));
    }

    let reader = {
        let cache = cache.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                let all = cache.orbs().get_all();
                assert!(all.is_empty() || all.len() == 100);
                let _ = cache.documents().len();
            }
        })
    };

    cache.clear_host_data();
    reader.join().unwrap();
    assert!(cache.orbs().is_empty());
}
