//! Client-side lead form pipeline, kept free of any DOM types.
//!
//! The frontend component holds a `Vec<FormField>` mirroring its inputs and runs
//! it through `validate_form` on submit. Only when that passes does it call
//! `serialize_fields` and post the result; what the user sees afterwards is
//! decided by `policy::FailurePolicy`.

mod email;
pub mod policy;

use crate::requests::LeadPayload;
use regex::Regex;
use std::sync::LazyLock;

pub use email::is_valid_email;

/// Message used for a required field that has no label.
const FALLBACK_FIELD_NAME: &str = "This field";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static REQUIRED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\*\s*").unwrap());
static OPTIONAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(optional\)\s*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Date,
    Select,
    Hidden,
}

/// Snapshot of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// DOM id; error spans are linked through `<id>-error`.
    pub id: String,
    /// Fields without a name are never serialized.
    pub name: Option<String>,
    pub label: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(id: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            name: Some(id.to_string()),
            label: None,
            kind,
            required: false,
            value: String::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// The name shown in error messages: the label without its `*` marker
    /// or `(optional)` suffix.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => {
                let label = REQUIRED_MARKER.replace(label, "");
                let label = OPTIONAL_MARKER.replace(&label, "");
                label.trim().to_string()
            }
            None => FALLBACK_FIELD_NAME.to_string(),
        }
    }

    fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }

    fn has_malformed_email(&self) -> bool {
        self.kind == FieldKind::Email && !self.value.is_empty() && !is_valid_email(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

/// Checks every required field, then every non-empty email field.
///
/// An email field that fails both checks reports the format message. The
/// returned errors follow the form order.
pub fn validate_form(fields: &[FormField]) -> Result<(), Vec<FieldError>> {
    let mut errors: Vec<FieldError> = fields
        .iter()
        .filter(|field| field.is_missing())
        .map(|field| FieldError {
            field_id: field.id.clone(),
            message: format!("{} is required", field.display_name()),
        })
        .collect();

    for field in fields.iter().filter(|field| field.has_malformed_email()) {
        let error = FieldError {
            field_id: field.id.clone(),
            message: INVALID_EMAIL_MESSAGE.to_string(),
        };
        match errors.iter_mut().find(|e| e.field_id == field.id) {
            Some(existing) => *existing = error,
            None => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by_key(|e| fields.iter().position(|f| f.id == e.field_id));
        Err(errors)
    }
}

/// Flattens every named field, required or not, into the request payload.
pub fn serialize_fields(fields: &[FormField]) -> LeadPayload {
    fields
        .iter()
        .filter_map(|field| match field.name.as_deref() {
            Some(name) if !name.is_empty() => Some((name.to_string(), field.value.clone())),
            _ => None,
        })
        .collect()
}
