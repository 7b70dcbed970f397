use actix_web::{test, web, App};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payouts::ProviderConfig;
use payouts_server::{error::json_error_handler, routes, AppState, ServerConfig};

/// Build an AppState over the given provider config. Everything else takes
/// the defaults a test doesn't care about.
fn make_state(provider: ProviderConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(ServerConfig {
        port: 0,
        allowed_origins: vec![],
        rate_limit_rpm: 60,
        static_dir: "./static".to_string(),
        metrics_token: None,
        provider,
    }))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .app_data(
                    web::JsonConfig::default()
                        .limit(65_536)
                        .error_handler(json_error_handler),
                )
                .configure(routes::health::configure)
                .configure(routes::payouts::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn missing_name_is_rejected_without_reference() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .set_json(serde_json::json!({ "accountNumber": "0123456789" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Invalid request: name and accountNumber are required"
    );
    assert!(body.get("reference").is_none());
}

#[actix_web::test]
async fn empty_fields_are_rejected() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .set_json(serde_json::json!({ "name": "", "accountNumber": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("reference").is_none());
}

#[actix_web::test]
async fn malformed_json_is_a_400_in_the_api_shape() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request"));
}

#[actix_web::test]
async fn unconfigured_provider_is_a_500_with_reference() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .set_json(serde_json::json!({ "name": "Jane Doe", "accountNumber": "0123456789" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing API configuration");
    let reference = body["reference"].as_str().unwrap();
    assert!(Uuid::parse_str(reference).is_ok());
}

#[actix_web::test]
async fn successful_payout_returns_message_and_reference() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payouts/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "quoteId": "q-1" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payouts/initialize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payouts/finalize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let state = make_state(ProviderConfig {
        api_url: Some(server.uri()),
        secret_key: Some("sk_test".to_string()),
    });
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .set_json(serde_json::json!({ "name": "Jane Doe", "accountNumber": "0123456789" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Payout process started. Check the webhook site for final confirmation."
    );
    assert!(Uuid::parse_str(body["reference"].as_str().unwrap()).is_ok());
}

#[actix_web::test]
async fn upstream_rejection_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payouts/quotes"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"invalid api key"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payouts/initialize"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = make_state(ProviderConfig {
        api_url: Some(server.uri()),
        secret_key: Some("sk_test".to_string()),
    });
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/payouts")
        .set_json(serde_json::json!({ "name": "Jane Doe", "accountNumber": "0123456789" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Payout failed"));
    assert!(message.contains("401"));
    assert!(message.contains("invalid api key"));
    assert!(body["reference"].is_string());
}

#[actix_web::test]
async fn health_reports_provider_configuration() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider_configured"], false);
}

#[actix_web::test]
async fn metrics_endpoint_serves_prometheus_text() {
    let state = make_state(ProviderConfig::default());
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[actix_web::test]
async fn metrics_endpoint_requires_token_when_configured() {
    let state = web::Data::new(AppState::new(ServerConfig {
        port: 0,
        allowed_origins: vec![],
        rate_limit_rpm: 60,
        static_dir: "./static".to_string(),
        metrics_token: Some("metrics-secret".to_string()),
        provider: ProviderConfig::default(),
    }));
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/metrics")
        .insert_header(("Authorization", "Bearer metrics-secret"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
