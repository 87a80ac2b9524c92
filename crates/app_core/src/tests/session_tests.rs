use std::rc::Rc;

use host_bridge::RecordingHost;
use shared::domain::GUEST_DISPLAY_NAME;

use super::*;

fn user(first_name: &str, last_name: Option<&str>) -> HostUser {
    HostUser {
        id: 42,
        first_name: first_name.to_string(),
        last_name: last_name.map(str::to_string),
        username: Some("welder42".to_string()),
    }
}

#[test]
fn absent_host_yields_guest_identity() {
    let identity = resolve_identity(&HostBridge::absent());
    assert_eq!(identity.display_name, GUEST_DISPLAY_NAME);
    assert_eq!(identity.user_id, None);
}

#[test]
fn host_without_user_yields_guest_identity() {
    let bridge = HostBridge::present(Rc::new(RecordingHost::new()));
    let identity = resolve_identity(&bridge);
    assert!(identity.is_guest());
    assert_eq!(identity.display_name, GUEST_DISPLAY_NAME);
}

#[test]
fn first_name_only_has_no_trailing_space() {
    let bridge = HostBridge::present(Rc::new(
        RecordingHost::new().with_user(user("Ann", None)),
    ));
    let identity = resolve_identity(&bridge);
    assert_eq!(identity.display_name, "Ann");
    assert_eq!(identity.user_id, Some(UserId(42)));
    assert_eq!(identity.username.as_deref(), Some("welder42"));
}

#[test]
fn first_and_last_name_are_joined_with_one_space() {
    let bridge = HostBridge::present(Rc::new(
        RecordingHost::new().with_user(user("Ann", Some("Lee"))),
    ));
    assert_eq!(resolve_identity(&bridge).display_name, "Ann Lee");
}

#[test]
fn session_context_keeps_identity_resolved_at_construction() {
    let bridge = HostBridge::present(Rc::new(
        RecordingHost::new().with_user(user("Ann", None)),
    ));
    let session = SessionContext::resolve(&bridge);
    assert_eq!(session.identity().display_name, "Ann");
    assert!(SessionContext::guest().identity().is_guest());
}

#[test]
fn blank_last_name_is_treated_as_absent() {
    for last_name in ["", "   "] {
        let bridge = HostBridge::present(Rc::new(
            RecordingHost::new().with_user(user("Ann", Some(last_name))),
        ));
        assert_eq!(resolve_identity(&bridge).display_name, "Ann");
    }
}
