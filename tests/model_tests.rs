//! Tests for the model layer (DimConfig, TintColor, DimState).

use focusdim::engine::WindowHandle;
use focusdim::model::constants::*;
use focusdim::model::{DimConfig, DimMode, DimState, TintColor};

// === Default Values Tests ===

#[test]
fn dim_config_default_transparency_is_half_opacity() {
    let config = DimConfig::default();
    assert_eq!(config.transparency_dim, 127);
    assert_eq!(config.transparency_dim, DEFAULT_TRANSPARENCY_DIM);
}

#[test]
fn dim_config_default_tint() {
    let config = DimConfig::default();
    assert_eq!(config.tint.value(), DEFAULT_TINT);
}

#[test]
fn dim_config_tint_application_is_off() {
    assert!(!DimConfig::default().apply_tint);
}

#[test]
fn dim_state_default_is_enabled_without_history() {
    let state = DimState::default();
    assert_eq!(state.mode, DimMode::Enabled);
    assert!(state.is_enabled());
    assert_eq!(state.last_known_active, None);
}

// === DimConfig Tests ===

#[test]
fn with_transparency_keeps_tint() {
    let tint = TintColor::from_masked(0x00AB_CDEF);
    let config = DimConfig {
        tint,
        ..DimConfig::default()
    }
    .with_transparency(12);
    assert_eq!(config.transparency_dim, 12);
    assert_eq!(config.tint, tint);
}

#[test]
fn transparency_pct_rounds_to_nearest() {
    assert_eq!(DimConfig::default().with_transparency(0).transparency_pct(), 0);
    assert_eq!(DimConfig::default().with_transparency(127).transparency_pct(), 50);
    assert_eq!(DimConfig::default().with_transparency(255).transparency_pct(), 100);
}

// === TintColor Tests ===

#[test]
fn tint_accepts_full_24_bit_range() {
    assert_eq!(TintColor::new(0).map(TintColor::value), Some(0));
    assert_eq!(TintColor::new(RGB_MASK).map(TintColor::value), Some(RGB_MASK));
}

#[test]
fn tint_rejects_alpha_byte() {
    assert!(TintColor::new(0xFF00_0000).is_none());
}

// === DimState Tests ===

#[test]
fn disabled_state_is_not_enabled() {
    let state = DimState {
        mode: DimMode::Disabled,
        last_known_active: Some(WindowHandle::from_raw(7)),
    };
    assert!(!state.is_enabled());
}

// === Constants Tests ===

#[test]
fn excluded_classes_cover_the_shell() {
    assert!(EXCLUDED_CLASSES.contains(&CLASS_SHELL_TRAY));
    assert!(EXCLUDED_CLASSES.contains(&CLASS_BUTTON));
    assert!(EXCLUDED_CLASSES.contains(&CLASS_CORE_WINDOW));
}

#[test]
fn transparency_limits_span_the_alpha_range() {
    assert_eq!(MIN_TRANSPARENCY, 0);
    assert_eq!(MAX_TRANSPARENCY, ALPHA_OPAQUE);
}
