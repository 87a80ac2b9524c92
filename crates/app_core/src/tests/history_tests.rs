use chrono::TimeZone;
use shared::domain::UserId;

use super::*;

fn signed_in() -> Identity {
    Identity {
        display_name: "Ann".to_string(),
        user_id: Some(UserId(1)),
        username: None,
    }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
}

#[test]
fn guest_sessions_start_without_history() {
    assert!(seed(&Identity::guest(), fixed_now()).is_empty());
    assert!(HistoryStore::for_session(&Identity::guest(), fixed_now()).is_empty());
}

#[test]
fn signed_in_sessions_get_two_items_a_day_apart() {
    let now = fixed_now();
    let items = seed(&signed_in(), now);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].created_at, now);
    assert_eq!(
        (items[0].created_at - items[1].created_at).num_milliseconds(),
        86_400_000
    );
}

#[test]
fn seeded_items_have_distinct_ids_and_content() {
    let items = seed(&signed_in(), fixed_now());
    assert_ne!(items[0].id, items[1].id);
    for item in &items {
        assert!(!item.question.is_empty());
        assert!(!item.answer.is_empty());
    }
}

#[test]
fn store_exposes_seeded_items_in_insertion_order() {
    let now = fixed_now();
    let store = HistoryStore::for_session(&signed_in(), now);
    assert_eq!(store.len(), 2);
    assert_eq!(store.items(), seed(&signed_in(), now).as_slice());
}
