use super::configure_routes;
use crate::rate_limit::{ManualClock, RateLimitConfig, SubmissionLimiter};
use crate::storage::LeadStore;
use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    store: web::Data<LeadStore>,
    clock: Arc<ManualClock>,
    limiter: web::Data<SubmissionLimiter>,
}

impl Harness {
    fn new() -> Self {
        let clock = Arc::new(ManualClock::new());
        let limiter = SubmissionLimiter::new(RateLimitConfig::default(), clock.clone());
        Self {
            store: web::Data::new(LeadStore::open_in_memory().unwrap()),
            clock,
            limiter: web::Data::new(limiter),
        }
    }

    async fn service(
        &self,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .app_data(self.store.clone())
                .app_data(self.limiter.clone())
                .service(configure_routes()),
        )
        .await
    }
}

fn peer(ip: &str) -> SocketAddr {
    format!("{}:51000", ip).parse().unwrap()
}

fn submission(ip: &str, body: Value) -> Request {
    test::TestRequest::post()
        .uri("/api/leads")
        .peer_addr(peer(ip))
        .set_json(body)
        .to_request()
}

async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: Request,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn first_lead_gets_id_one_and_default_source_page() {
    let harness = Harness::new();
    let app = harness.service().await;

    let (status, body) = send(
        &app,
        submission("10.0.0.1", json!({ "name": "Jane Doe", "phone": "0400000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": 1 }));

    let lead = harness.store.find(1).unwrap().unwrap();
    assert_eq!(lead.name, "Jane Doe");
    assert_eq!(lead.source_page, "homepage");
}

#[actix_web::test]
async fn ids_strictly_increase() {
    let harness = Harness::new();
    let app = harness.service().await;

    let mut last = 0;
    for i in 0..5 {
        let (_, body) = send(
            &app,
            submission(
                "10.0.0.1",
                json!({
                    "name": format!("Lead {}", i),
                    "phone": "0400000000",
                    "email": "lead@example.com",
                    "city": "Perth",
                    "expectedReturnDate": "2026-11-01",
                    "cleaningPlan": "professional",
                    "professionalCleaningClause": "yes",
                    "sourcePage": "perth",
                }),
            ),
        )
        .await;
        let id = body["id"].as_i64().unwrap();
        assert!(id > last);
        last = id;
    }
    assert_eq!(harness.store.count().unwrap(), 5);
}

#[actix_web::test]
async fn missing_name_is_rejected_without_insert() {
    let harness = Harness::new();
    let app = harness.service().await;

    let (status, body) = send(
        &app,
        submission("10.0.0.1", json!({ "name": "", "phone": "0400000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Name and phone are required." })
    );
    assert_eq!(harness.store.count().unwrap(), 0);
}

#[actix_web::test]
async fn blank_or_non_string_phone_is_rejected() {
    let harness = Harness::new();
    let app = harness.service().await;

    for body in [
        json!({ "name": "Jane" }),
        json!({ "name": "Jane", "phone": "   " }),
        json!({ "name": "Jane", "phone": 400000000 }),
        json!(["Jane", "0400000000"]),
    ] {
        let (status, _) = send(&app, submission("10.0.0.1", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    assert_eq!(harness.store.count().unwrap(), 0);
}

#[actix_web::test]
async fn over_length_fields_are_truncated_before_storage() {
    let harness = Harness::new();
    let app = harness.service().await;

    let (status, body) = send(
        &app,
        submission(
            "10.0.0.1",
            json!({
                "name": "n".repeat(300),
                "phone": format!("  {}  ", "9".repeat(40)),
                "sourcePage": "s".repeat(80),
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let lead = harness
        .store
        .find(body["id"].as_i64().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(lead.name.len(), 200);
    assert_eq!(lead.phone, "9".repeat(30));
    assert_eq!(lead.source_page.len(), 50);
}

#[actix_web::test]
async fn eleventh_submission_in_window_is_limited() {
    let harness = Harness::new();
    let app = harness.service().await;
    let lead = json!({ "name": "Jane Doe", "phone": "0400000000" });

    for _ in 0..10 {
        let (status, _) = send(&app, submission("10.0.0.1", lead.clone())).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, submission("10.0.0.1", lead.clone())).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Too many submissions. Please try again later." })
    );
    assert_eq!(harness.store.count().unwrap(), 10);

    // Other addresses keep their own quota.
    let (status, _) = send(&app, submission("10.0.0.2", lead)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn invalid_submissions_count_against_the_quota() {
    let harness = Harness::new();
    let app = harness.service().await;

    for _ in 0..10 {
        let (status, _) = send(&app, submission("10.0.0.1", json!({ "name": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    let (status, _) = send(
        &app,
        submission("10.0.0.1", json!({ "name": "Jane", "phone": "0400" })),
    )
    .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[actix_web::test]
async fn limited_address_may_submit_after_window() {
    let harness = Harness::new();
    let app = harness.service().await;
    let lead = json!({ "name": "Jane Doe", "phone": "0400000000" });

    for _ in 0..11 {
        send(&app, submission("10.0.0.1", lead.clone())).await;
    }
    harness.clock.advance(Duration::from_secs(15 * 60 + 1));

    let (status, body) = send(&app, submission("10.0.0.1", lead)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn malformed_json_is_rejected_without_consuming_quota() {
    let harness = Harness::new();
    let app = harness.service().await;

    for _ in 0..11 {
        let req = test::TestRequest::post()
            .uri("/api/leads")
            .peer_addr(peer("10.0.0.1"))
            .insert_header(("content-type", "application/json"))
            .set_payload("{ name: ")
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Invalid request body." })
        );
    }
    assert_eq!(harness.limiter.tracked().await, 0);

    let (status, _) = send(
        &app,
        submission("10.0.0.1", json!({ "name": "Jane", "phone": "0400" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn non_json_content_type_is_an_empty_submission() {
    let harness = Harness::new();
    let app = harness.service().await;

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .peer_addr(peer("10.0.0.1"))
        .insert_header(("content-type", "text/plain"))
        .set_payload(r#"{"name":"Jane","phone":"0400"}"#)
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Name and phone are required." })
    );
    assert_eq!(harness.limiter.tracked().await, 1);
    assert_eq!(harness.store.count().unwrap(), 0);
}

#[actix_web::test]
async fn json_suffix_media_types_are_parsed() {
    let harness = Harness::new();
    let app = harness.service().await;

    let req = test::TestRequest::post()
        .uri("/api/leads")
        .peer_addr(peer("10.0.0.1"))
        .insert_header(("content-type", "application/vnd.lead+json; charset=utf-8"))
        .set_payload(r#"{"name":"Jane","phone":"0400"}"#)
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "id": 1 }));
}

#[actix_web::test]
async fn oversized_body_is_rejected() {
    let harness = Harness::new();
    let app = harness.service().await;

    let (status, _) = send(
        &app,
        submission(
            "10.0.0.1",
            json!({ "name": "Jane", "phone": "0400", "city": "x".repeat(20 * 1024) }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(harness.store.count().unwrap(), 0);
}

#[actix_web::test]
async fn storage_failure_is_reported_generically() {
    let harness = Harness::new();
    harness.store.break_schema();
    let app = harness.service().await;

    let (status, body) = send(
        &app,
        submission("10.0.0.1", json!({ "name": "Jane Doe", "phone": "0400000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to save lead" })
    );
}
