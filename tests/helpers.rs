//! Tests for the small engine and event helpers exposed by the library.

use focusdim::engine::{is_eligible, ExclusionSet, OverlayParams, WindowClassification, WindowHandle};
use focusdim::events::{DimEvent, EventBus};
use focusdim::model::{DimConfig, TintColor, ALPHA_OPAQUE};

fn app(visible: bool, minimized: bool) -> WindowClassification {
    WindowClassification {
        visible,
        minimized,
        class_name: "App".to_string(),
    }
}

#[test]
fn window_handle_displays_as_hex() {
    assert_eq!(WindowHandle::from_raw(0x2a).to_string(), "0x2a");
}

#[test]
fn null_handle_is_detected() {
    assert!(WindowHandle::from_raw(0).is_null());
    assert!(!WindowHandle::from_raw(1).is_null());
}

#[test]
fn dim_params_carry_color_key() {
    let params = OverlayParams::dim(64, TintColor::from_masked(0x80));
    assert_eq!(params.alpha, 64);
    assert_eq!(params.color_key.map(TintColor::value), Some(0x80));
}

#[test]
fn opaque_params_have_no_color_key() {
    let params = OverlayParams::opaque();
    assert_eq!(params.alpha, ALPHA_OPAQUE);
    assert!(params.color_key.is_none());
}

#[test]
fn custom_exclusion_set_replaces_defaults() {
    let set = ExclusionSet::new(["Progman"]);
    assert!(set.contains("Progman"));
    assert!(!set.contains("Shell_TrayWnd"));
}

#[test]
fn eligibility_requires_visible_and_restored() {
    let set = ExclusionSet::default();
    let a = WindowHandle::from_raw(1);
    let b = WindowHandle::from_raw(2);
    assert!(is_eligible(b, Some(a), &app(true, false), &set));
    assert!(!is_eligible(b, Some(a), &app(false, false), &set));
    assert!(!is_eligible(b, Some(a), &app(true, true), &set));
    assert!(!is_eligible(a, Some(a), &app(true, false), &set));
}

#[test]
fn bus_delivers_in_publish_order() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let b = WindowHandle::from_raw(0xB);

    assert!(publisher.publish(DimEvent::EnableToggled));
    assert!(publisher.publish(DimEvent::FocusChanged(b)));
    assert!(publisher.publish(DimEvent::ConfigUpdated(DimConfig::default())));

    assert_eq!(
        bus.drain(),
        vec![
            DimEvent::EnableToggled,
            DimEvent::FocusChanged(b),
            DimEvent::ConfigUpdated(DimConfig::default()),
        ]
    );
}

#[test]
fn publish_fails_once_the_bus_is_gone() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    drop(bus);
    assert!(!publisher.publish(DimEvent::Shutdown));
}

#[test]
fn event_descriptions_are_distinct() {
    let events = [
        DimEvent::EnableToggled,
        DimEvent::DisableToggled,
        DimEvent::FocusChanged(WindowHandle::from_raw(1)),
        DimEvent::ConfigUpdated(DimConfig::default()),
        DimEvent::Shutdown,
    ];
    let mut descriptions: Vec<_> = events.iter().map(DimEvent::description).collect();
    descriptions.sort_unstable();
    descriptions.dedup();
    assert_eq!(descriptions.len(), events.len());
}
