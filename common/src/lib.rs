//! Types shared between the lead-capture backend and the wasm frontend.
//!
//! - `model`: the lead field catalogue and the stored `Lead` record.
//! - `requests`: the flat payload the form posts to `/api/leads`.
//! - `responses`: the JSON envelope every `/api/leads` reply uses.
//! - `form`: pure client-side validation and serialization of the lead form.

pub mod form;
pub mod model;
pub mod requests;
pub mod responses;
