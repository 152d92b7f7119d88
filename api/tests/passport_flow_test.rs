//! End-to-end passport flow over the HTTP surface with in-memory
//! collaborators: image challenge, SMS challenge, register, login, logout.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};

use portal_api::{app, AppState};
use portal_core::repositories::MockUserRepository;
use portal_core::services::verification::mocks::{MemoryCodeStore, MockSmsSender};
use portal_core::services::verification::CodeStore;
use portal_core::services::{AuthService, VerificationService};
use portal_shared::config::{SessionConfig, VerificationConfig};
use portal_shared::types::response::ApiResponse;

struct Harness {
    state: web::Data<AppState<MockUserRepository, MockSmsSender, MemoryCodeStore>>,
    sms: Arc<MockSmsSender>,
    store: Arc<MemoryCodeStore>,
}

fn harness() -> Harness {
    let sms = Arc::new(MockSmsSender::new());
    let store = Arc::new(MemoryCodeStore::new());
    let users = Arc::new(MockUserRepository::new());

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&sms),
        Arc::clone(&store),
        VerificationConfig::default(),
    ));
    let auth = Arc::new(AuthService::new(users, Arc::clone(&verification)));

    Harness {
        state: web::Data::new(AppState::new(auth, verification)),
        sms,
        store,
    }
}

macro_rules! test_app {
    ($harness:expr) => {
        test::init_service(
            App::new()
                .wrap(app::session_middleware(
                    app::session_key(&SessionConfig::default()).unwrap(),
                ))
                .app_data($harness.state.clone())
                .configure(app::configure::<
                    MockUserRepository,
                    MockSmsSender,
                    MemoryCodeStore,
                >),
        )
        .await
    };
}

#[actix_web::test]
async fn full_flow_image_to_registered_session() {
    let h = harness();
    let app = test_app!(h);

    // Step 1: fetch the image challenge.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/passport/image_code?imageCodeId=abc123")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/svg+xml"
    );

    let image_text = h.store.peek("ImageCodeId_abc123").await.unwrap();

    // Step 2: request the SMS code, typing the image code in lowercase.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/sms_code")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "image_code": image_text.to_lowercase(),
                "image_code_id": "abc123",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "0");

    let sent = h.sms.last_sent().await.unwrap();
    assert_eq!(sent.params[1], "60");
    let sms_code = h.store.peek("SMS_13800001111").await.unwrap();
    assert_eq!(sms_code, sent.params[0]);

    // Step 3: register with the dispatched code.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/register")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "smscode": sms_code,
                "password": "pw",
            }))
            .to_request(),
    )
    .await;
    assert!(resp.headers().contains_key("set-cookie"));
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "0");
}

#[actix_web::test]
async fn image_code_without_id_is_forbidden() {
    let h = harness();
    let app = test_app!(h);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/passport/image_code")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn sms_code_with_wrong_image_code_is_data_error() {
    let h = harness();
    let app = test_app!(h);

    h.store
        .set("ImageCodeId_abc123", "AB3F", 180)
        .await
        .unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/sms_code")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "image_code": "XXXX",
                "image_code_id": "abc123",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "4004");
    assert!(h.sms.sent().await.is_empty());
}

#[actix_web::test]
async fn sms_code_with_unknown_id_is_nodata() {
    let h = harness();
    let app = test_app!(h);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/sms_code")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "image_code": "AB3F",
                "image_code_id": "never-issued",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "4002");
}

#[actix_web::test]
async fn sms_code_with_empty_field_is_param_error() {
    let h = harness();
    let app = test_app!(h);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/sms_code")
            .set_json(serde_json::json!({
                "mobile": "",
                "image_code": "AB3F",
                "image_code_id": "abc123",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "4103");
}

#[actix_web::test]
async fn duplicate_registration_is_dataexist() {
    let h = harness();
    let app = test_app!(h);

    h.store.set("SMS_13800001111", "042917", 300).await.unwrap();

    let register = || {
        test::TestRequest::post()
            .uri("/passport/register")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "smscode": "042917",
                "password": "pw",
            }))
            .to_request()
    };

    let body: ApiResponse<()> =
        test::read_body_json(test::call_service(&app, register()).await).await;
    assert_eq!(body.errno, "0");

    let body: ApiResponse<()> =
        test::read_body_json(test::call_service(&app, register()).await).await;
    assert_eq!(body.errno, "4003");
}

#[actix_web::test]
async fn login_outcomes() {
    let h = harness();
    let app = test_app!(h);

    h.store.set("SMS_13800001111", "042917", 300).await.unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/register")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "smscode": "042917",
                "password": "hunter2!",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "0");

    // Wrong password.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/login")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "password": "wrong",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "4106");

    // Unknown mobile.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/login")
            .set_json(serde_json::json!({
                "mobile": "13811112222",
                "password": "hunter2!",
            }))
            .to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "4104");

    // Correct credentials set a session cookie.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/passport/login")
            .set_json(serde_json::json!({
                "mobile": "13800001111",
                "password": "hunter2!",
            }))
            .to_request(),
    )
    .await;
    assert!(resp.headers().contains_key("set-cookie"));
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "0");
}

#[actix_web::test]
async fn logout_is_idempotent() {
    let h = harness();
    let app = test_app!(h);

    // No session established; logout still succeeds.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/passport/logout").to_request(),
    )
    .await;
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert_eq!(body.errno, "0");
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let h = harness();
    let app = test_app!(h);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
