use std::fs;
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::timeout;

use crate::event::{DomainEvent, SurfaceEvent};

use super::{app_with_history, control_invocation, unique_temp_path};

const PRODUCERS: usize = 4;
const COMMANDS_PER_PRODUCER: usize = 25;

/// Control-channel dispatches and title/progress callbacks race to reach the
/// loop; because the loop is the single consumer, state must come out
/// coherent no matter the interleaving.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_dispatches_and_title_updates_never_corrupt_state() {
    let history_path = unique_temp_path("stress");
    let (mut app, control_tx, surface_tx) = app_with_history(Some(history_path.clone()));

    let mut producers = Vec::new();
    for task_id in 0..PRODUCERS {
        let control_tx = control_tx.clone();
        producers.push(tokio::spawn(async move {
            for i in 0..COMMANDS_PER_PRODUCER {
                let line = format!("go http://host{task_id}.example/{i}\n");
                control_tx
                    .send(control_invocation(&line))
                    .expect("loop should accept events");
                yield_now().await;
            }
        }));
    }
    for _ in 0..2 {
        let surface_tx = surface_tx.clone();
        producers.push(tokio::spawn(async move {
            for i in 0..COMMANDS_PER_PRODUCER {
                surface_tx
                    .send(SurfaceEvent::TitleChanged(format!("title {i}")))
                    .expect("loop should accept events");
                surface_tx
                    .send(SurfaceEvent::ProgressChanged((i % 101) as u8))
                    .expect("loop should accept events");
                yield_now().await;
            }
        }));
    }

    let shutdown_tx = control_tx.clone();
    tokio::spawn(async move {
        for producer in producers {
            producer.await.expect("producer should finish");
        }
        shutdown_tx
            .send(DomainEvent::Shutdown)
            .expect("loop should accept events");
    });

    timeout(Duration::from_secs(30), app.run())
        .await
        .expect("loop should stop on shutdown")
        .expect("loop should not fail");

    // Invariants, regardless of interleaving.
    assert!(app.state().load_progress <= 100);
    let uri = app.state().uri.as_deref().expect("a commit should have landed");
    assert!(uri.starts_with("http://host"));

    // Every dispatched go produced exactly one well-formed history line.
    let contents = fs::read_to_string(&history_path).expect("history log should exist");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), PRODUCERS * COMMANDS_PER_PRODUCER);
    for line in lines {
        let (stamp, uri) = line.split_at(19);
        assert_eq!(stamp.len(), 19);
        assert!(stamp.chars().all(|c| c.is_ascii_digit() || "-: ".contains(c)));
        assert!(uri.starts_with(" http://host"));
    }

    fs::remove_file(&history_path).expect("history log should be removed");
}
