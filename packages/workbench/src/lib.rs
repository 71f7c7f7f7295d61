//! # Conversion Orchestrator
//!
//! Owns the direction state, debounces edits, issues at most one in-flight
//! conversion request against the remote converter, and applies results,
//! mapping failures back onto source locations through the error locator.
//!
//! Single-threaded cooperative model: the only suspension point is the
//! await on the remote boundary, and the single-flight latch guarantees at
//! most one response is ever pending application.

pub mod backend;
pub mod direction;
pub mod orchestrator;
pub mod placeholder;
pub mod preflight;
pub mod protocol;

pub use backend::{BackendError, ConvertBackend, HttpBackend};
pub use direction::Direction;
pub use orchestrator::{ConversionOutcome, Workbench, WorkbenchOptions};
pub use protocol::{ConvertRequest, ConvertResponse};
