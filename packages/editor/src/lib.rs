//! # Document Model
//!
//! One buffer per editing pane. Content is replaced wholesale by the
//! orchestrator after a successful conversion, never patched in place;
//! everything else about a pane (rendering, themes, focus) belongs to the
//! embedding editor surface.

mod pane;

pub use pane::{MemoryPane, PaneSurface};
pub use tandem_diagnostics::Dialect;
