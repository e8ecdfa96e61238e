use crate::storage::NewLead;
use common::model::lead::{LeadField, DEFAULT_SOURCE_PAGE};
use serde_json::Value;

/// Non-string input becomes empty; strings are trimmed and cut to `max_len` characters.
pub fn sanitize(value: Option<&Value>, max_len: usize) -> String {
    match value {
        Some(Value::String(raw)) => raw.trim().chars().take(max_len).collect(),
        _ => String::new(),
    }
}

/// Sanitizes every lead field of `body`.
///
/// Returns `None` when a required field (name, phone) ends up empty. A body
/// that is not a JSON object is treated as one with no fields.
pub fn sanitize_lead(body: &Value) -> Option<NewLead> {
    let field = |field: LeadField| sanitize(body.get(field.key()), field.max_len());

    let mut lead = NewLead {
        name: field(LeadField::Name),
        phone: field(LeadField::Phone),
        email: field(LeadField::Email),
        city: field(LeadField::City),
        expected_return_date: field(LeadField::ExpectedReturnDate),
        cleaning_plan: field(LeadField::CleaningPlan),
        professional_cleaning_clause: field(LeadField::ProfessionalCleaningClause),
        source_page: field(LeadField::SourcePage),
    };

    let missing = LeadField::ALL
        .into_iter()
        .any(|field| field.is_required() && lead.value(field).is_empty());
    if missing {
        return None;
    }

    if lead.source_page.is_empty() {
        lead.source_page = DEFAULT_SOURCE_PAGE.to_string();
    }
    Some(lead)
}
