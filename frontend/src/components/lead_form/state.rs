//! Runtime state of the lead form.

use super::fields::initial_fields;
use common::form::{FieldError, FormField};
use std::collections::HashMap;

/// Label the submit button shows while idle.
pub const SUBMIT_LABEL: &str = "Get My Free Assessment";
pub const PENDING_LABEL: &str = "Submitting...";

/// Main state container for the `LeadFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct LeadFormComponent {
    /// One entry per rendered control, in `fields::LEAD_FORM` order.
    pub fields: Vec<FormField>,

    /// Validation messages keyed by field id. A field is invalid while it has an entry.
    pub errors: HashMap<String, String>,

    /// A request is in flight; the submit button is disabled.
    pub submitting: bool,

    /// The success panel replaced the form.
    pub submitted: bool,
}

impl LeadFormComponent {
    pub fn new(source_page: &str) -> Self {
        Self {
            fields: initial_fields(source_page),
            errors: HashMap::new(),
            submitting: false,
            submitted: false,
        }
    }

    pub fn set_value(&mut self, id: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
            field.value = value;
        }
        self.errors.remove(id);
    }

    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors
            .into_iter()
            .map(|e| (e.field_id, e.message))
            .collect();
    }

    /// Ends an in-flight submission. The form is replaced by the success panel
    /// only when `succeeded`; the submit button is re-enabled either way.
    pub fn settle(&mut self, succeeded: bool) {
        self.submitting = false;
        self.submitted = succeeded;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
