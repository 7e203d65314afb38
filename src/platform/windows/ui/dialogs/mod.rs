//! Dialog windows for Windows.

mod notice;

pub use notice::*;
