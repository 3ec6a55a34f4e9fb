//! Two-step upload session: the explicit state object behind the client view.
//!
//! The browser flow collects up to two documents — typically one grid invoice
//! and one energy invoice — then shows the merged record. The whole view
//! state is three values: which step we are on and the two optional records.
//! Nothing persists; `reset` discards everything.

use crate::record::{CombinedInvoiceData, ExtractedInvoiceData};
use serde::{Deserialize, Serialize};

/// Which document the next upload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UploadStep {
    #[default]
    First,
    Second,
}

/// State of one two-document upload flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadSession {
    step: UploadStep,
    first: Option<ExtractedInvoiceData>,
    second: Option<ExtractedInvoiceData>,
}

impl UploadSession {
    /// Fresh session at step 1 with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> UploadStep {
        self.step
    }

    pub fn first(&self) -> Option<&ExtractedInvoiceData> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&ExtractedInvoiceData> {
        self.second.as_ref()
    }

    /// Store an extraction result into the slot for the current step.
    ///
    /// Re-uploading at the same step replaces the earlier record, matching a
    /// user who picks a different file before moving on.
    pub fn record(&mut self, data: ExtractedInvoiceData) {
        match self.step {
            UploadStep::First => self.first = Some(data),
            UploadStep::Second => self.second = Some(data),
        }
    }

    /// Move on to the second document. Idempotent.
    pub fn advance(&mut self) {
        self.step = UploadStep::Second;
    }

    /// Discard both documents and return to step 1.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The merged record, or `None` while no document has been uploaded.
    pub fn combined(&self) -> Option<CombinedInvoiceData> {
        if self.first.is_none() && self.second.is_none() {
            return None;
        }
        Some(CombinedInvoiceData::merge(
            self.first.as_ref(),
            self.second.as_ref(),
        ))
    }
}
