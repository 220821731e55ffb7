use std::sync::{Arc, Barrier};
use std::thread;

use cci_cache::Cache;
use cci_core::{Context, OrbInfo, RemoteOrbInfo};

#[test]
fn concurrent_sets_on_one_key_leave_one_written_value() {
    for _ in 0..20 {
        let cache = Cache::new();
        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let cache = cache.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .docker_images()
                        .check_and_store("cimg/node:20.1", i % 2 == 0);
                    cache.orbs().set(
                        "shared".to_string(),
                        OrbInfo::new(format!("writer-{i}"), RemoteOrbInfo::default()),
                    );
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let orb = cache.orbs().get("shared").expect("some writer wins");
        let winner: usize = orb
            .source
            .strip_prefix("writer-")
            .and_then(|n| n.parse().ok())
            .unwrap_or_else(|| panic!("unexpected value {:?}", orb.source));
        assert!(winner < threads);
        assert_eq!(cache.orbs().len(), 1);

        let image = cache.docker_images().get("cimg/node:20.1").unwrap();
        assert!(image.checked);
    }
}

#[test]
fn snapshots_are_never_torn() {
    let cache = Cache::new();
    let total = 2_000;

    let writer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for i in 0..total {
                cache.contexts().set_context(Context::new(format!("ctx-{i}")));
            }
        })
    };

    // Writes are sequential, so every snapshot of size n holds exactly ctx-0..ctx-(n-1).
    let mut last_len = 0;
    while last_len < total {
        let snapshot = cache.contexts().get_all();
        assert!(snapshot.len() >= last_len, "snapshots went backwards");
        for i in 0..snapshot.len() {
            let key = format!("ctx-{i}");
            let ctx = snapshot
                .get(&key)
                .unwrap_or_else(|| panic!("snapshot of {} entries missing {key}", snapshot.len()));
            assert_eq!(ctx.name, key);
        }
        last_len = snapshot.len();
    }

    writer.join().unwrap();
    assert_eq!(cache.contexts().len(), total);
}

#[test]
fn concurrent_add_env_variable_never_duplicates() {
    let cache = Cache::new();
    cache.contexts().set_context(Context::new("deploy"));

    let threads = 8;
    let names = ["A", "B", "C", "D"];
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let cache = cache.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut appended = 0;
                for name in names {
                    if cache.contexts().add_env_variable("deploy", name).unwrap() {
                        appended += 1;
                    }
                }
                appended
            })
        })
        .collect();

    let appended: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(appended, names.len());

    let mut vars: Vec<String> = cache
        .contexts()
        .get("deploy")
        .unwrap()
        .env_variables
        .into();
    vars.sort();
    assert_eq!(vars, names);
}
