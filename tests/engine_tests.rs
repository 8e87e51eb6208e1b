//! Integration tests for the registration engine

use std::sync::Arc;
use std::thread;

use events_api::engine::RegistrationEngine;
use events_api::store::{InMemoryEventStore, InMemoryRegistrationStore, InMemoryUserStore};
use events_api::types::{EventStatus, NewEvent};
use events_api::EngineError;

fn setup_engine() -> Arc<RegistrationEngine> {
    Arc::new(RegistrationEngine::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryRegistrationStore::new()),
    ))
}

fn seed_users(engine: &RegistrationEngine, ids: &[&str]) {
    for id in ids {
        engine.create_user(id, &format!("User {}", id)).unwrap();
    }
}

fn seed_event(engine: &RegistrationEngine, event_id: &str, capacity: u32, waitlist: bool) {
    engine
        .create_event(NewEvent {
            event_id: Some(event_id.to_string()),
            title: format!("Event {}", event_id),
            description: "Test event".to_string(),
            date: "2026-09-10".to_string(),
            location: "Berlin".to_string(),
            capacity,
            organizer: "Test Org".to_string(),
            status: EventStatus::Scheduled,
            waitlist_enabled: waitlist,
        })
        .unwrap();
}

/// Waitlist positions must be exactly {1, ..., k} in FIFO order
fn assert_waitlist_contiguous(engine: &RegistrationEngine, event_id: &str) {
    let positions: Vec<u32> = engine
        .get_event_registrations(event_id)
        .iter()
        .filter_map(|r| r.waitlist_position())
        .collect();
    let expected: Vec<u32> = (1..=positions.len() as u32).collect();
    assert_eq!(positions, expected, "waitlist has gaps or duplicates");
}

#[test]
fn test_register_until_capacity_then_reject() {
    let engine = setup_engine();
    seed_users(&engine, &["a", "b"]);
    seed_event(&engine, "e1", 1, false);

    let reg = engine.register_user("a", "e1").unwrap();
    assert!(reg.is_active());

    let err = engine.register_user("b", "e1").unwrap_err();
    assert!(matches!(err, EngineError::CapacityExceeded(_)));

    // No record left behind for the rejected request
    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].user_id, "a");
}

#[test]
fn test_waitlist_enqueue_and_fifo_promotion() {
    let engine = setup_engine();
    seed_users(&engine, &["a", "b", "c"]);
    seed_event(&engine, "e1", 1, true);

    assert!(engine.register_user("a", "e1").unwrap().is_active());
    assert_eq!(
        engine.register_user("b", "e1").unwrap().waitlist_position(),
        Some(1)
    );
    assert_eq!(
        engine.register_user("c", "e1").unwrap().waitlist_position(),
        Some(2)
    );

    engine.unregister_user("a", "e1").unwrap();

    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 2);
    // b was the FIFO head and takes the freed slot
    assert_eq!(regs[0].user_id, "b");
    assert!(regs[0].is_active());
    // c moves up to position 1
    assert_eq!(regs[1].user_id, "c");
    assert_eq!(regs[1].waitlist_position(), Some(1));
    assert_waitlist_contiguous(&engine, "e1");
}

#[test]
fn test_waitlisted_departure_closes_gap_without_promotion() {
    let engine = setup_engine();
    seed_users(&engine, &["a", "b", "c", "d"]);
    seed_event(&engine, "e1", 2, true);

    engine.register_user("a", "e1").unwrap();
    engine.register_user("b", "e1").unwrap();
    engine.register_user("c", "e1").unwrap();
    engine.register_user("d", "e1").unwrap();

    engine.unregister_user("c", "e1").unwrap();

    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 3);
    assert!(regs[0].is_active() && regs[1].is_active());
    assert_eq!(regs[0].user_id, "a");
    assert_eq!(regs[1].user_id, "b");
    // d shifts from position 2 to 1, still waitlisted
    assert_eq!(regs[2].user_id, "d");
    assert_eq!(regs[2].waitlist_position(), Some(1));
}

#[test]
fn test_duplicate_registration_rejected() {
    let engine = setup_engine();
    seed_users(&engine, &["a"]);
    seed_event(&engine, "e1", 5, false);

    engine.register_user("a", "e1").unwrap();
    let err = engine.register_user("a", "e1").unwrap_err();
    assert!(matches!(err, EngineError::Duplicate(_)));

    assert_eq!(engine.get_event_registrations("e1").len(), 1);
}

#[test]
fn test_user_registrations_exclude_waitlisted() {
    let engine = setup_engine();
    seed_users(&engine, &["a", "filler"]);
    seed_event(&engine, "e1", 1, false);
    seed_event(&engine, "e2", 1, true);

    engine.register_user("a", "e1").unwrap();
    engine.register_user("filler", "e2").unwrap();
    engine.register_user("a", "e2").unwrap(); // waitlisted

    let events = engine.get_user_registrations("a");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, "e1");
}

#[test]
fn test_unregister_without_registration_fails() {
    let engine = setup_engine();
    seed_users(&engine, &["a"]);
    seed_event(&engine, "e1", 1, false);

    let err = engine.unregister_user("a", "e1").unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
    assert!(engine.get_event_registrations("e1").is_empty());
}

#[test]
fn test_register_requires_existing_user_and_event() {
    let engine = setup_engine();
    seed_users(&engine, &["a"]);
    seed_event(&engine, "e1", 1, false);

    assert!(matches!(
        engine.register_user("ghost", "e1").unwrap_err(),
        EngineError::NotFound(_)
    ));
    assert!(matches!(
        engine.register_user("a", "nowhere").unwrap_err(),
        EngineError::NotFound(_)
    ));
    assert!(matches!(
        engine.register_user("", "e1").unwrap_err(),
        EngineError::Validation(_)
    ));
}

#[test]
fn test_user_and_event_round_trip() {
    let engine = setup_engine();

    let user = engine.create_user("alice", "Alice").unwrap();
    let fetched = engine.get_user("alice").unwrap();
    assert_eq!(fetched.user_id, user.user_id);
    assert_eq!(fetched.name, user.name);

    seed_event(&engine, "e1", 3, true);
    let event = engine.get_event("e1").unwrap();
    assert_eq!(event.capacity, 3);
    assert!(event.waitlist_enabled);
    assert_eq!(event.status, EventStatus::Scheduled);
}

#[test]
fn test_create_user_validation_and_duplicates() {
    let engine = setup_engine();

    assert!(matches!(
        engine.create_user("", "Alice").unwrap_err(),
        EngineError::Validation(_)
    ));
    assert!(matches!(
        engine.create_user("alice", "  ").unwrap_err(),
        EngineError::Validation(_)
    ));

    engine.create_user("alice", "Alice").unwrap();
    assert!(matches!(
        engine.create_user("alice", "Other").unwrap_err(),
        EngineError::Duplicate(_)
    ));
}

#[test]
fn test_create_event_validation() {
    let engine = setup_engine();

    let mut draft = NewEvent {
        event_id: None,
        title: "Title".to_string(),
        description: "Description".to_string(),
        date: "2026-09-10".to_string(),
        location: "Berlin".to_string(),
        capacity: 10,
        organizer: "Org".to_string(),
        status: EventStatus::Active,
        waitlist_enabled: false,
    };

    draft.capacity = 0;
    assert!(matches!(
        engine.create_event(draft.clone()).unwrap_err(),
        EngineError::Validation(_)
    ));

    draft.capacity = 10;
    draft.date = "not-a-date".to_string();
    assert!(matches!(
        engine.create_event(draft.clone()).unwrap_err(),
        EngineError::Validation(_)
    ));

    draft.date = "2026-09-10".to_string();
    let event = engine.create_event(draft).unwrap();
    assert!(!event.event_id.is_empty());
}

#[test]
fn test_list_events_filters_by_status() {
    let engine = setup_engine();
    seed_event(&engine, "e1", 1, false);

    engine
        .create_event(NewEvent {
            event_id: Some("e2".to_string()),
            title: "Completed one".to_string(),
            description: "Done".to_string(),
            date: "2025-01-01".to_string(),
            location: "Online".to_string(),
            capacity: 5,
            organizer: "Org".to_string(),
            status: EventStatus::Completed,
            waitlist_enabled: false,
        })
        .unwrap();

    assert_eq!(engine.list_events(None).len(), 2);
    let completed = engine.list_events(Some(EventStatus::Completed));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].event_id, "e2");
}

#[test]
fn test_concurrent_registration_respects_capacity() {
    let engine = setup_engine();
    seed_event(&engine, "e1", 1, false);

    let user_ids: Vec<String> = (0..10).map(|i| format!("user{}", i)).collect();
    seed_users(
        &engine,
        &user_ids.iter().map(String::as_str).collect::<Vec<_>>(),
    );

    // All 10 race for the single slot
    let mut handles = vec![];
    for user_id in user_ids {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            engine_clone.register_user(&user_id, "e1").is_ok()
        }));
    }

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .filter(|won| *won)
        .count();

    assert_eq!(successes, 1, "Exactly one registration should win the slot");
    assert_eq!(engine.get_event_registrations("e1").len(), 1);
}

#[test]
fn test_concurrent_waitlist_positions_stay_contiguous() {
    let engine = setup_engine();
    seed_event(&engine, "e1", 3, true);

    let user_ids: Vec<String> = (0..10).map(|i| format!("user{}", i)).collect();
    seed_users(
        &engine,
        &user_ids.iter().map(String::as_str).collect::<Vec<_>>(),
    );

    let mut handles = vec![];
    for user_id in user_ids {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            engine_clone.register_user(&user_id, "e1").unwrap();
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 10);
    assert_eq!(regs.iter().filter(|r| r.is_active()).count(), 3);
    assert_waitlist_contiguous(&engine, "e1");
}

#[test]
fn test_concurrent_churn_keeps_invariants() {
    let engine = setup_engine();
    seed_event(&engine, "e1", 2, true);

    let user_ids: Vec<String> = (0..8).map(|i| format!("user{}", i)).collect();
    seed_users(
        &engine,
        &user_ids.iter().map(String::as_str).collect::<Vec<_>>(),
    );
    for user_id in &user_ids {
        engine.register_user(user_id, "e1").unwrap();
    }

    // Half the users leave while readers poll the event
    let mut handles = vec![];
    for user_id in user_ids.iter().take(4).cloned() {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            engine_clone.unregister_user(&user_id, "e1").unwrap();
        }));
    }
    for _ in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let regs = engine_clone.get_event_registrations("e1");
                let active = regs.iter().filter(|r| r.is_active()).count();
                assert!(active <= 2, "capacity bound violated");

                let positions: Vec<u32> =
                    regs.iter().filter_map(|r| r.waitlist_position()).collect();
                let expected: Vec<u32> = (1..=positions.len() as u32).collect();
                assert_eq!(positions, expected, "waitlist not contiguous");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 4);
    assert_eq!(regs.iter().filter(|r| r.is_active()).count(), 2);
    assert_waitlist_contiguous(&engine, "e1");
}

#[test]
fn test_promotion_happens_at_most_once_per_departure() {
    let engine = setup_engine();
    seed_users(&engine, &["a", "b", "c"]);
    seed_event(&engine, "e1", 1, true);

    engine.register_user("a", "e1").unwrap();
    engine.register_user("b", "e1").unwrap();
    engine.register_user("c", "e1").unwrap();

    // Two departures in sequence: b then c get promoted, one each
    engine.unregister_user("a", "e1").unwrap();
    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.iter().filter(|r| r.is_active()).count(), 1);

    engine.unregister_user("b", "e1").unwrap();
    let regs = engine.get_event_registrations("e1");
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].user_id, "c");
    assert!(regs[0].is_active());
}
