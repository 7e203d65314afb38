//! Event plumbing between producers and the dim controller.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Focus hook  │     │  Tray menu  │     │  Configure  │
//! │ (WinEvent)  │     │             │     │   dialog    │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ global::publish() │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ recv()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            DimWorker -> DimController               │
//! │           (one pass at a time, in order)            │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{install_publisher, publish};
pub use types::DimEvent;
