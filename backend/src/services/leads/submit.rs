//! # Lead Submission Service
//!
//! Backend logic for `POST /api/leads`.
//!
//! ## Workflow
//!
//! 1.  **Rate check**: the peer address is counted against its
//!     `SubmissionLimiter` window. Over the ceiling the request ends with
//!     `429 Too Many Requests` and nothing is written.
//!
//! 2.  **Sanitization**: every lead field is trimmed and cut to its length
//!     limit; non-string values become empty (see `sanitize`).
//!
//! 3.  **Validation**: name and phone must survive sanitization, otherwise the
//!     request ends with `400 Bad Request`.
//!
//! 4.  **Persistence**: the lead is inserted on actix's blocking pool and the
//!     new id is returned as `{ "success": true, "id": <id> }`.
//!
//! Storage failures are logged with their detail and answered with a generic
//! `500 Internal Server Error`.
//!
//! A request whose `Content-Type` is not JSON goes through the same steps with
//! an empty body, so it counts against the quota and fails validation.

use super::sanitize::sanitize_lead;
use crate::error::LeadError;
use crate::rate_limit::{SubmissionLimiter, Verdict};
use crate::storage::LeadStore;
use actix_web::{web, HttpRequest, HttpResponse};
use common::responses::LeadResponse;
use log::{debug, error, info, warn};
use serde_json::{Map, Value};

/// Key used for requests whose peer address is unknown.
const UNKNOWN_PEER: &str = "unknown";

pub async fn process(
    req: HttpRequest,
    payload: web::Json<Value>,
    limiter: web::Data<SubmissionLimiter>,
    store: web::Data<LeadStore>,
) -> Result<HttpResponse, LeadError> {
    handle(&req, &payload, &limiter, store).await
}

/// Handler for requests without a JSON `Content-Type`; the body is not read.
pub async fn process_non_json(
    req: HttpRequest,
    limiter: web::Data<SubmissionLimiter>,
    store: web::Data<LeadStore>,
) -> Result<HttpResponse, LeadError> {
    handle(&req, &Value::Object(Map::new()), &limiter, store).await
}

async fn handle(
    req: &HttpRequest,
    body: &Value,
    limiter: &SubmissionLimiter,
    store: web::Data<LeadStore>,
) -> Result<HttpResponse, LeadError> {
    let address = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_PEER.to_string());

    match limiter.check(&address).await {
        Verdict::Allowed { count } => {
            debug!("Submission {} this window from {}", count, address);
        }
        Verdict::Limited { count } => {
            warn!("Rejecting lead from {} ({} submissions this window)", address, count);
            return Err(LeadError::RateLimited(address));
        }
    }

    let id = submit_lead(body, store).await.inspect_err(|e| {
        if !matches!(e, LeadError::MissingRequired) {
            error!("Error saving lead: {}", e);
        }
    })?;

    info!("Stored lead {} from {}", id, address);
    Ok(HttpResponse::Ok().json(LeadResponse::created(id)))
}

/// Sanitizes, validates and stores one submission, returning the new lead's id.
pub async fn submit_lead(body: &Value, store: web::Data<LeadStore>) -> Result<i64, LeadError> {
    let lead = sanitize_lead(body).ok_or(LeadError::MissingRequired)?;
    let id = web::block(move || store.insert(&lead)).await??;
    Ok(id)
}
