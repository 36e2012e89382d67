use rand::{rng, Rng};
use snowid::{SnowID, SnowIDGenerator, DEFAULT_EPOCH};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    // One generator per machine, all machines in datacenter 3
    let generators: Vec<_> = (0..4)
        .map(|machine| Arc::new(SnowIDGenerator::new(3, machine, *DEFAULT_EPOCH).unwrap()))
        .collect();

    // Machine 0 also shares its generator between two threads and clears its table every second
    generators[0]
        .auto_reset(Duration::from_secs(1))
        .unwrap();

    let mut handles = vec![];
    for (thread_id, machine) in [0, 0, 1, 2, 3].into_iter().enumerate() {
        let gen = Arc::clone(&generators[machine]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = gen.generate_blocking().unwrap();
                println!(
                    "Thread {} generated ID {} ({}, dc={}, machine={}, seq={})",
                    thread_id,
                    i,
                    id,
                    id.datacenter_id(),
                    id.machine_id(),
                    id.sequence()
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids: HashSet<SnowID> = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 25, "IDs collided across machines!");

    generators[0].stop_auto_reset();
    println!("All IDs are unique across machines!");
}
