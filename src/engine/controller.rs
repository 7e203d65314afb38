//! The dim controller: enable/disable state machine plus the two passes.
//!
//! Every public operation holds the controller lock for the whole pass, so a
//! pass (clear active, enumerate, apply) always completes before the next one
//! starts, whichever thread the request came from.

use std::sync::{Mutex, MutexGuard};

use crate::error::DimError;
use crate::events::DimEvent;
use crate::model::{DimConfig, DimMode, DimState};

use super::enumerator::{is_eligible, ExclusionSet, WindowEnumerator};
use super::mutator::{apply_overlay, clear_overlay, clear_overlay_without_redraw, LayeredWindowOps};
use super::window::WindowHandle;

/// Outcome counters of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Windows whose overlay was written.
    pub mutated: usize,
    /// Windows left untouched (ineligible, excluded, or gone).
    pub skipped: usize,
    /// Windows that rejected the update.
    pub failed: usize,
}

impl PassReport {
    fn record(&mut self, result: Result<(), DimError>) {
        match result {
            Ok(()) => self.mutated += 1,
            Err(e) => {
                tracing::warn!(error = %e, "window update failed, continuing");
                self.failed += 1;
            }
        }
    }
}

struct Inner {
    state: DimState,
    config: DimConfig,
}

/// Orchestrates dim and undim-all passes over an enumerator and a mutator.
pub struct DimController<E, M> {
    enumerator: E,
    ops: M,
    exclusions: ExclusionSet,
    inner: Mutex<Inner>,
}

impl<E, M> DimController<E, M>
where
    E: WindowEnumerator,
    M: LayeredWindowOps,
{
    /// New controller in the `Enabled` state. No pass runs until the first request.
    pub fn new(enumerator: E, ops: M, config: DimConfig) -> Self {
        Self::with_exclusions(enumerator, ops, config, ExclusionSet::default())
    }

    pub fn with_exclusions(
        enumerator: E,
        ops: M,
        config: DimConfig,
        exclusions: ExclusionSet,
    ) -> Self {
        Self {
            enumerator,
            ops,
            exclusions,
            inner: Mutex::new(Inner {
                state: DimState::default(),
                config,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DimState {
        self.lock().state
    }

    /// Snapshot of the current parameters.
    pub fn config(&self) -> DimConfig {
        self.lock().config
    }

    /// Switch to `Enabled` and dim around the current foreground window.
    pub fn enable(&self) -> PassReport {
        let mut inner = self.lock();
        inner.state.mode = DimMode::Enabled;
        tracing::info!("dimming enabled");
        self.dim_pass(&mut inner, None)
    }

    /// Switch to `Disabled` and restore every window.
    pub fn disable(&self) -> PassReport {
        let mut inner = self.lock();
        inner.state.mode = DimMode::Disabled;
        tracing::info!("dimming disabled");
        self.undim_all_pass()
    }

    /// Re-dim after a focus change reported on `handle`. Ignored while disabled.
    ///
    /// The OS foreground window is the reference; `handle` is used only when
    /// that cannot be read.
    pub fn focus_changed(&self, handle: WindowHandle) -> Option<PassReport> {
        let mut inner = self.lock();
        if !inner.state.is_enabled() {
            return None;
        }
        Some(self.dim_pass(&mut inner, Some(handle)))
    }

    /// Store new parameters and re-dim immediately if enabled.
    pub fn config_updated(&self, config: DimConfig) -> Option<PassReport> {
        let mut inner = self.lock();
        inner.config = config;
        tracing::debug!(
            transparency = config.transparency_dim,
            tint = config.tint.value(),
            "config updated"
        );
        if !inner.state.is_enabled() {
            return None;
        }
        Some(self.dim_pass(&mut inner, None))
    }

    /// Exit cleanup: disable and restore every window, whatever the previous state.
    pub fn shutdown(&self) -> PassReport {
        let mut inner = self.lock();
        inner.state.mode = DimMode::Disabled;
        tracing::info!("restoring all windows before exit");
        self.undim_all_pass()
    }

    /// Route one event. Returns `false` once the event loop should stop.
    pub fn dispatch(&self, event: &DimEvent) -> bool {
        match event {
            DimEvent::EnableToggled => {
                self.enable();
            }
            DimEvent::DisableToggled => {
                self.disable();
            }
            DimEvent::FocusChanged(handle) => {
                self.focus_changed(*handle);
            }
            DimEvent::ConfigUpdated(config) => {
                self.config_updated(*config);
            }
            DimEvent::Shutdown => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("controller mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Resolve the focused window for a pass: the OS foreground window, then
    /// the event hint, then the last known one.
    ///
    /// Focus events also fire for popups (menus, dropdowns) whose root is the
    /// popup itself, so the hint only stands in when the OS has no answer.
    fn reference_window(&self, inner: &Inner, hint: Option<WindowHandle>) -> Option<WindowHandle> {
        match self.enumerator.foreground() {
            Ok(handle) if !handle.is_null() => return Some(handle),
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "foreground read failed"),
        }
        if let Some(handle) = hint.filter(|h| !h.is_null()) {
            return Some(handle);
        }
        let fallback = inner.state.last_known_active;
        tracing::warn!(
            fallback = ?fallback,
            "could not read the foreground window, using last known"
        );
        fallback
    }

    fn dim_pass(&self, inner: &mut Inner, hint: Option<WindowHandle>) -> PassReport {
        let mut report = PassReport::default();

        let Some(active) = self.reference_window(inner, hint) else {
            tracing::warn!("no reference window, skipping dim pass");
            return report;
        };

        let active_excluded = self
            .enumerator
            .classify(active)
            .map(|info| self.exclusions.contains(&info.class_name))
            .unwrap_or(false);
        if active_excluded {
            report.skipped += 1;
        } else {
            report.record(clear_overlay(&self.ops, active));
        }

        let handles = match self.enumerator.enumerate() {
            Ok(handles) => handles,
            Err(e) => {
                tracing::warn!(error = %e, "enumeration failed, dim pass skipped");
                inner.state.last_known_active = Some(active);
                return report;
            }
        };

        let DimConfig {
            transparency_dim,
            tint,
            ..
        } = inner.config;

        for handle in handles {
            if handle == active {
                continue;
            }
            let eligible = match self.enumerator.classify(handle) {
                Ok(info) => is_eligible(handle, Some(active), &info, &self.exclusions),
                Err(e) => {
                    tracing::debug!(error = %e, "window vanished during pass");
                    false
                }
            };
            if eligible {
                report.record(apply_overlay(&self.ops, handle, transparency_dim, tint));
            } else {
                report.skipped += 1;
            }
        }

        inner.state.last_known_active = Some(active);
        tracing::debug!(
            active = %active,
            mutated = report.mutated,
            skipped = report.skipped,
            failed = report.failed,
            "dim pass complete"
        );
        report
    }

    fn undim_all_pass(&self) -> PassReport {
        let mut report = PassReport::default();

        let handles = match self.enumerator.enumerate() {
            Ok(handles) => handles,
            Err(e) => {
                tracing::warn!(error = %e, "enumeration failed, undim pass skipped");
                return report;
            }
        };

        for handle in handles {
            let info = match self.enumerator.classify(handle) {
                Ok(info) => info,
                Err(_) => {
                    report.skipped += 1;
                    continue;
                }
            };
            if is_eligible(handle, None, &info, &self.exclusions) {
                report.record(clear_overlay(&self.ops, handle));
            } else if info.visible && info.minimized && !self.exclusions.contains(&info.class_name) {
                // May have been dimmed before it was minimized; repaints on restore
                report.record(clear_overlay_without_redraw(&self.ops, handle));
            } else {
                report.skipped += 1;
            }
        }

        tracing::debug!(
            mutated = report.mutated,
            skipped = report.skipped,
            failed = report.failed,
            "undim pass complete"
        );
        report
    }
}
