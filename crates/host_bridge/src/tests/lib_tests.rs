use super::*;
use crossbeam_channel::bounded;

fn ann() -> HostUser {
    HostUser {
        id: 1,
        first_name: "Ann".to_string(),
        last_name: None,
        username: None,
    }
}

#[test]
fn absent_bridge_tolerates_every_operation() {
    let bridge = HostBridge::absent();
    let (tx, rx) = bounded::<HostEvent>(4);

    bridge.initialize_chrome("#121212");
    bridge.bind_back_button(tx);
    bridge.set_back_button_visible(true);
    bridge.set_back_button_visible(false);
    bridge.pulse(HapticStyle::Heavy);
    bridge.open_external("https://t.me/fitsiz_support_bot");

    assert!(!bridge.is_present());
    assert_eq!(bridge.identity_snapshot(), None);
    assert!(rx.try_recv().is_err());
}

#[test]
fn detect_reports_presence_of_candidate() {
    assert!(!HostBridge::detect(None).is_present());
    let host: Rc<dyn HostApi> = Rc::new(RecordingHost::new());
    assert!(HostBridge::detect(Some(host)).is_present());
}

#[test]
fn chrome_initialization_runs_in_fixed_order() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());

    bridge.initialize_chrome("#121212");

    assert_eq!(
        host.calls(),
        vec![
            HostCall::Ready,
            HostCall::Expand,
            HostCall::SetHeaderColor("#121212".to_string()),
            HostCall::SetBackgroundColor("#121212".to_string()),
        ]
    );
}

#[test]
fn back_button_visibility_is_idempotent() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());

    bridge.set_back_button_visible(true);
    bridge.set_back_button_visible(true);
    assert!(host.back_button_visible());

    bridge.set_back_button_visible(false);
    assert!(!host.back_button_visible());
}

#[test]
fn rebinding_back_button_replaces_previous_target() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());
    let (first_tx, first_rx) = bounded::<HostEvent>(4);
    let (second_tx, second_rx) = bounded::<HostEvent>(4);

    bridge.bind_back_button(first_tx);
    bridge.bind_back_button(second_tx);
    assert!(host.click_back_button());

    assert!(first_rx.try_recv().is_err());
    assert_eq!(second_rx.try_recv(), Ok(HostEvent::BackButtonClicked));
}

#[test]
fn click_without_binding_is_ignored() {
    let host = RecordingHost::new();
    assert!(!host.click_back_button());
}

#[test]
fn pulse_forwards_style_to_haptic_engine() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());

    bridge.pulse(HapticStyle::Light);
    bridge.pulse(HapticStyle::Medium);

    assert_eq!(host.haptics(), vec![HapticStyle::Light, HapticStyle::Medium]);
}

#[test]
fn missing_subcapabilities_are_silently_skipped() {
    let host = Rc::new(RecordingHost::new().without_haptics().without_back_button());
    let bridge = HostBridge::present(host.clone());
    let (tx, _rx) = bounded::<HostEvent>(4);

    bridge.pulse(HapticStyle::Heavy);
    bridge.bind_back_button(tx);
    bridge.set_back_button_visible(true);

    assert!(host.calls().is_empty());
    assert!(!host.click_back_button());
}

#[test]
fn open_external_passes_url_through() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());

    bridge.open_external("https://t.me/fitsiz_assistant_bot");

    assert_eq!(
        host.opened_links(),
        vec!["https://t.me/fitsiz_assistant_bot".to_string()]
    );
}

#[test]
fn identity_snapshot_comes_from_host() {
    let host = Rc::new(RecordingHost::new().with_user(ann()));
    let bridge = HostBridge::present(host);
    assert_eq!(bridge.identity_snapshot(), Some(ann()));
}

#[test]
fn full_queue_drops_clicks() {
    let host = Rc::new(RecordingHost::new());
    let bridge = HostBridge::present(host.clone());
    let (tx, rx) = bounded::<HostEvent>(1);
    bridge.bind_back_button(tx);

    assert!(host.click_back_button());
    assert!(!host.click_back_button());
    assert_eq!(rx.len(), 1);
}
