use std::collections::HashSet;
use std::sync::Arc;

use kira_studio_bot::services::pending_replies::PendingReplies;
use teloxide::types::{ChatId, UserId};

const ADMIN: UserId = UserId(100);

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_arms_leave_one_target() {
    let pending = Arc::new(PendingReplies::new());
    let targets: Vec<ChatId> = (1..=32).map(ChatId).collect();

    let mut handles = Vec::new();
    for target in targets.clone() {
        let pending = pending.clone();
        handles.push(tokio::spawn(async move { pending.arm(ADMIN, target) }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(pending.len(), 1);
    let consumed = pending.consume(ADMIN).expect("one target should be armed");
    assert!(targets.contains(&consumed));
    assert_eq!(pending.consume(ADMIN), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consumes_return_target_once() {
    let pending = Arc::new(PendingReplies::new());
    pending.arm(ADMIN, ChatId(555));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let pending = pending.clone();
        handles.push(tokio::spawn(async move { pending.consume(ADMIN) }));
    }

    let mut hits = Vec::new();
    for handle in handles {
        if let Some(target) = handle.await.unwrap() {
            hits.push(target);
        }
    }

    assert_eq!(hits, vec![ChatId(555)]);
    assert!(pending.is_empty());
}

#[test]
fn test_many_admins_from_threads() {
    let pending = Arc::new(PendingReplies::new());

    let threads: Vec<_> = (1..=10u64)
        .map(|admin| {
            let pending = pending.clone();
            std::thread::spawn(move || {
                for round in 0..100 {
                    pending.arm(UserId(admin), ChatId((admin * 1000 + round) as i64));
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(pending.len(), 10);
    let mut seen = HashSet::new();
    for admin in 1..=10u64 {
        // Each admin's own last arm wins
        assert_eq!(
            pending.consume(UserId(admin)),
            Some(ChatId((admin * 1000 + 99) as i64))
        );
        seen.insert(admin);
    }
    assert_eq!(seen.len(), 10);
    assert!(pending.is_empty());
}

#[test]
fn test_consume_on_fresh_store_is_repeatable() {
    let pending = PendingReplies::new();
    for _ in 0..3 {
        assert_eq!(pending.consume(ADMIN), None);
    }
    pending.arm(ADMIN, ChatId(9));
    assert_eq!(pending.consume(ADMIN), Some(ChatId(9)));
}
