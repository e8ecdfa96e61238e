//! The inputs the lead form renders, in display order.

use common::form::{FieldKind, FormField};
use common::model::lead::LeadField;

pub struct FieldSpec {
    pub field: LeadField,
    pub label: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// `(value, text)` pairs for `FieldKind::Select`. The first entry is the
    /// empty prompt.
    pub options: &'static [(&'static str, &'static str)],
}

pub const LEAD_FORM: [FieldSpec; 8] = [
    FieldSpec {
        field: LeadField::Name,
        label: Some("Full Name *"),
        kind: FieldKind::Text,
        required: true,
        placeholder: "Jane Smith",
        options: &[],
    },
    FieldSpec {
        field: LeadField::Phone,
        label: Some("Phone Number *"),
        kind: FieldKind::Tel,
        required: true,
        placeholder: "04XX XXX XXX",
        options: &[],
    },
    FieldSpec {
        field: LeadField::Email,
        label: Some("Email (optional)"),
        kind: FieldKind::Email,
        required: false,
        placeholder: "jane@example.com",
        options: &[],
    },
    FieldSpec {
        field: LeadField::City,
        label: Some("City"),
        kind: FieldKind::Select,
        required: false,
        placeholder: "",
        options: &[
            ("", "Select your city"),
            ("sydney", "Sydney"),
            ("melbourne", "Melbourne"),
            ("brisbane", "Brisbane"),
            ("perth", "Perth"),
            ("adelaide", "Adelaide"),
            ("other", "Other"),
        ],
    },
    FieldSpec {
        field: LeadField::ExpectedReturnDate,
        label: Some("Expected Move-out Date (optional)"),
        kind: FieldKind::Date,
        required: false,
        placeholder: "",
        options: &[],
    },
    FieldSpec {
        field: LeadField::CleaningPlan,
        label: Some("How are you planning to clean?"),
        kind: FieldKind::Select,
        required: false,
        placeholder: "",
        options: &[
            ("", "Choose one"),
            ("diy", "I'll clean it myself"),
            ("professional", "Hire a professional cleaner"),
            ("undecided", "Not sure yet"),
        ],
    },
    FieldSpec {
        field: LeadField::ProfessionalCleaningClause,
        label: Some("Does your lease require professional cleaning?"),
        kind: FieldKind::Select,
        required: false,
        placeholder: "",
        options: &[
            ("", "Choose one"),
            ("yes", "Yes"),
            ("no", "No"),
            ("unsure", "Not sure"),
        ],
    },
    FieldSpec {
        field: LeadField::SourcePage,
        label: None,
        kind: FieldKind::Hidden,
        required: false,
        placeholder: "",
        options: &[],
    },
];

/// Fresh form state; the hidden source page input carries `source_page`.
pub fn initial_fields(source_page: &str) -> Vec<FormField> {
    LEAD_FORM
        .iter()
        .map(|spec| {
            let mut field = FormField::new(spec.field.key(), spec.kind);
            field.label = spec.label.map(str::to_string);
            field.required = spec.required;
            if spec.field == LeadField::SourcePage {
                field.value = source_page.to_string();
            }
            field
        })
        .collect()
}
