use std::collections::BTreeMap;

/// Request payload for `POST /api/leads`.
///
/// The form posts every named input as a flat string map, keyed by
/// `LeadField::key`. Unknown keys are ignored by the server.
pub type LeadPayload = BTreeMap<String, String>;
