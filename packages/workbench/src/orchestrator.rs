//! The conversion orchestrator.
//!
//! One `Workbench` instance owns the only mutable shared state in the
//! core: the current direction and the in-flight latch. Both panes, the
//! diagnostic engine and the error locator are driven from here.
//!
//! Trigger policy (resolving the two divergent variants in the original
//! wiring): explicit triggers via [`Workbench::convert_now`], plus a
//! debounced auto-retrigger when the source pane is edited. Edits to the
//! derived pane never auto-trigger.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tandem_diagnostics::{locate, validate, Dialect};
use tandem_editor::PaneSurface;

use crate::backend::ConvertBackend;
use crate::direction::Direction;
use crate::placeholder;
use crate::preflight::{self, Preflight};
use crate::protocol::ConvertRequest;

/// Configuration consumed by the workbench core.
#[derive(Debug, Clone)]
pub struct WorkbenchOptions {
    /// Forwarded verbatim in Markup→Builder requests; opaque to this core.
    /// Empty is meaningful: the converter strips prefixes entirely.
    pub package_prefix: String,

    /// Ask the converter to strip a leading package declaration.
    pub remove_package: bool,

    /// Whether the derived pane accepts edits. When it does, re-conversion
    /// from it is manual; when it does not, the pane is the converter's
    /// alone.
    pub derived_editable: bool,

    /// Quiescence window between the last source edit and the automatic
    /// conversion trigger.
    pub debounce: Duration,
}

impl Default for WorkbenchOptions {
    fn default() -> Self {
        Self {
            package_prefix: "h".to_string(),
            remove_package: false,
            derived_editable: true,
            debounce: Duration::from_millis(300),
        }
    }
}

/// How a single conversion trigger settled. Every path releases the
/// in-flight latch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Remote output (or the no-output placeholder) applied to the derived
    /// pane.
    Applied,
    /// Another conversion was in flight; this trigger was dropped, not
    /// queued.
    DroppedInFlight,
    /// Source was empty or whitespace-only; the boundary was not contacted.
    SkippedEmpty,
    /// Pre-flight rejected the source; the boundary was not contacted.
    Rejected,
    /// The boundary reported a failure; error placeholder and locator
    /// diagnostics were applied.
    Failed(String),
}

/// Latch ensuring at most one outstanding conversion request. Released on
/// drop, so every settle path frees it.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(latch: &'a AtomicBool) -> Option<Self> {
        latch
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(latch))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Conversion orchestrator for one pair of panes.
pub struct Workbench {
    markup_pane: Arc<dyn PaneSurface>,
    builder_pane: Arc<dyn PaneSurface>,
    backend: Arc<dyn ConvertBackend>,
    options: Mutex<WorkbenchOptions>,
    direction: Mutex<Direction>,
    in_flight: AtomicBool,
    edit_epoch: AtomicU64,
}

impl Workbench {
    pub fn new(
        markup_pane: Arc<dyn PaneSurface>,
        builder_pane: Arc<dyn PaneSurface>,
        backend: Arc<dyn ConvertBackend>,
        direction: Direction,
        options: WorkbenchOptions,
    ) -> Self {
        Self {
            markup_pane,
            builder_pane,
            backend,
            options: Mutex::new(options),
            direction: Mutex::new(direction),
            in_flight: AtomicBool::new(false),
            edit_epoch: AtomicU64::new(0),
        }
    }

    pub fn direction(&self) -> Direction {
        *self.direction.lock().unwrap()
    }

    pub fn derived_editable(&self) -> bool {
        self.options.lock().unwrap().derived_editable
    }

    fn pane_for(&self, dialect: Dialect) -> &Arc<dyn PaneSurface> {
        match dialect {
            Dialect::Markup => &self.markup_pane,
            Dialect::Builder => &self.builder_pane,
        }
    }

    /// Run the structural diagnostic engine on one pane and replace its
    /// diagnostic set.
    pub fn revalidate(&self, dialect: Dialect) {
        let pane = self.pane_for(dialect);
        pane.set_diagnostics(validate(&pane.content(), dialect));
    }

    /// Record a keystroke in the pane holding `dialect`.
    ///
    /// Diagnostics refresh immediately; a conversion trigger is scheduled
    /// after the quiescence window and restarted by every further edit, so
    /// at most one trigger fires per burst. Derived-pane edits only
    /// refresh diagnostics.
    pub fn notify_edit(self: &Arc<Self>, dialect: Dialect) {
        let direction = self.direction();
        if dialect == direction.derived_dialect() && !self.derived_editable() {
            tracing::warn!("edit reported for read-only derived pane; ignored");
            return;
        }

        self.revalidate(dialect);

        if dialect != direction.source_dialect() {
            return;
        }

        let epoch = self.edit_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        let window = self.options.lock().unwrap().debounce;
        let workbench = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if workbench.edit_epoch.load(Ordering::Acquire) != epoch {
                // A later edit restarted the window.
                return;
            }
            let outcome = workbench.convert_now().await;
            tracing::debug!(?outcome, "debounced conversion settled");
        });
    }

    /// Change the package prefix forwarded to the converter. A non-empty
    /// source immediately re-converts so the derived pane reflects the new
    /// prefix.
    pub async fn set_package_prefix(&self, prefix: impl Into<String>) -> Option<ConversionOutcome> {
        self.options.lock().unwrap().package_prefix = prefix.into();
        if self
            .pane_for(self.direction().source_dialect())
            .content()
            .trim()
            .is_empty()
        {
            return None;
        }
        Some(self.convert_now().await)
    }

    /// Explicit direction change; the only way the direction moves.
    ///
    /// Pane roles swap with the direction while contents stay where their
    /// dialect lives, so a genuine converted result in the old derived
    /// pane becomes the new source. Both panes re-validate for their
    /// dialect, then a fresh conversion runs. If the new source still
    /// holds a placeholder the conversion is withheld and panes are left
    /// as captured.
    pub async fn set_direction(&self, direction: Direction) -> Option<ConversionOutcome> {
        {
            let mut current = self.direction.lock().unwrap();
            if *current == direction {
                return None;
            }
            *current = direction;
        }
        tracing::debug!(?direction, "direction changed");

        self.revalidate(Dialect::Markup);
        self.revalidate(Dialect::Builder);

        let source = self.pane_for(direction.source_dialect()).content();
        if placeholder::is_placeholder(&source) {
            return None;
        }
        Some(self.convert_now().await)
    }

    /// Run one conversion for the current direction. At most one request
    /// is in flight at a time; concurrent triggers are dropped, not
    /// queued.
    pub async fn convert_now(&self) -> ConversionOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("conversion already in flight; trigger dropped");
            return ConversionOutcome::DroppedInFlight;
        };

        let direction = self.direction();
        let source = self.pane_for(direction.source_dialect()).content();
        let derived = self.pane_for(direction.derived_dialect());

        if source.trim().is_empty() {
            derived.set_content(placeholder::empty_source(direction.derived_dialect()));
            return ConversionOutcome::SkippedEmpty;
        }

        let request = match direction {
            Direction::MarkupToBuilder => {
                let options = self.options.lock().unwrap();
                ConvertRequest::markup_to_builder(
                    source.clone(),
                    options.package_prefix.clone(),
                    options.remove_package.then_some(true),
                )
            }
            Direction::BuilderToMarkup => match preflight::prepare(&source) {
                Preflight::Send(code) => ConvertRequest::builder_to_markup(code),
                Preflight::Reject(text) => {
                    tracing::debug!("pre-flight rejected source");
                    derived.set_content(&text);
                    return ConversionOutcome::Rejected;
                }
            },
        };

        match self.backend.convert(&request).await {
            Ok(output) => {
                // Only the exact empty string means "no output"; whitespace
                // is a legitimate conversion result and applies verbatim.
                if output.is_empty() {
                    derived.set_content(placeholder::no_output(direction.derived_dialect()));
                } else {
                    derived.set_content(&output);
                }
                ConversionOutcome::Applied
            }
            Err(error) => {
                let message = error.to_string();
                tracing::error!("conversion failed: {message}");
                derived.set_content(&placeholder::conversion_error(
                    direction.derived_dialect(),
                    &message,
                ));
                // Anchor the failure onto the source pane, replacing any
                // structural diagnostics that were there.
                self.pane_for(direction.source_dialect())
                    .set_diagnostics(locate(&message, &source));
                ConversionOutcome::Failed(message)
            }
        }
    }
}
