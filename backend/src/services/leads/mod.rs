//! # Lead Service Module
//!
//! Routes for the landing page's lead-capture form, mounted under `/api/leads`.
//!
//! ## Sub-modules:
//! - `submit`: rate-checks, sanitizes, validates and stores a submission.
//! - `sanitize`: trimming and length-bounding of raw field values.

mod sanitize;
mod submit;

use crate::error::LeadError;
use actix_web::guard::{fn_guard, GuardContext};
use actix_web::http::header::ContentType;
use actix_web::mime;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::Scope;

/// The base path for all lead-related API endpoints.
const API_PATH: &str = "/api/leads";

/// Largest accepted JSON body.
const BODY_LIMIT: usize = 16 * 1024;

/// Configures and returns the Actix `Scope` for the lead routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/leads`**:
///     - **Handler**: `submit::process`
///     - **Description**: Accepts a flat JSON object of lead fields and stores it.
///       Responds `{success: true, id}` on success, or `{success: false, error}`
///       with `400` (invalid body, missing name/phone), `429` (too many
///       submissions from this address) or `500` (storage failure).
///     - Requests without a JSON `Content-Type` fall through to
///       `submit::process_non_json` and are handled as an empty submission.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(json_config())
        .route("", post().guard(fn_guard(is_json)).to(submit::process))
        .route("", post().to(submit::process_non_json))
}

/// `application/json` or any `+json` media type.
fn is_json(ctx: &GuardContext) -> bool {
    ctx.header::<ContentType>().is_some_and(|ContentType(media)| {
        media.subtype() == mime::JSON || media.suffix() == Some(mime::JSON)
    })
}

/// JSON extractor settings: 16 KiB limit, and malformed bodies answered in the
/// same envelope as every other failure.
fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, _req| LeadError::InvalidBody(err.to_string()).into())
}

#[cfg(test)]
mod tests;
