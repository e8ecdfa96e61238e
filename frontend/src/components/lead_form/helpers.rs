//! Side effects of the lead form: the network request and the browser alert.

use common::form::policy::SubmissionResult;
use common::requests::LeadPayload;
use common::responses::LeadResponse;
use gloo_net::http::Request;

const LEADS_ENDPOINT: &str = "/api/leads";

/// Posts `payload` once. No timeout, no retry.
pub async fn send_lead(payload: &LeadPayload) -> SubmissionResult {
    let request = match Request::post(LEADS_ENDPOINT).json(payload) {
        Ok(request) => request,
        Err(e) => return SubmissionResult::Unreachable(e.to_string()),
    };

    match request.send().await {
        Ok(resp) if resp.ok() => SubmissionResult::Accepted,
        Ok(resp) => {
            let message = resp
                .json::<LeadResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Submission failed".to_string());
            SubmissionResult::Rejected {
                status: resp.status(),
                message,
            }
        }
        Err(e) => SubmissionResult::Unreachable(e.to_string()),
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
