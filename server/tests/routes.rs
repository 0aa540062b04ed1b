use std::sync::OnceLock;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use classifier::{
    ClassifierErr, Predictor, TrainConfig,
    dataset::{load_iris, split},
    training::{self, fit},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{AppState, ErrorStatus, ServeConfig, ServerErr, WELCOME, app};
use tower::ServiceExt;

fn predictor() -> Predictor {
    static MODEL: OnceLock<Vec<u8>> = OnceLock::new();

    // Fit once, then hand each test its own copy through the artifact path.
    let bytes = MODEL.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pkl");
        training::train_to(&path).unwrap();
        std::fs::read(&path).unwrap()
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pkl");
    std::fs::write(&path, bytes).unwrap();
    Predictor::from_artifact(&path).unwrap()
}

fn router(error_status: ErrorStatus) -> Router {
    app(AppState::new(predictor(), error_status))
}

async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_predict(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn home_returns_the_welcome_message() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(router(ErrorStatus::Client), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": WELCOME }));
    assert_eq!(WELCOME, "Welcome to the Iris Classifier API!");
}

#[tokio::test]
async fn setosa_exemplar_predicts_class_zero() {
    let (status, body) = send(
        router(ErrorStatus::Client),
        post_predict("[5.1, 3.5, 1.4, 0.2]"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": 0 }));
}

#[tokio::test]
async fn wrapped_features_are_accepted() {
    let (status, body) = send(
        router(ErrorStatus::Client),
        post_predict(r#"{"features": [6.7, 3.0, 5.2, 2.3]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": 2 }));
}

#[tokio::test]
async fn malformed_bodies_are_client_errors() {
    for body in [r#"["a", "b", "c", "d"]"#, "[5.1, 3.5]", "not json", "[]"] {
        let (status, json) = send(router(ErrorStatus::Client), post_predict(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        assert!(json["error"].is_string(), "body: {body}");
        assert!(json.get("prediction").is_none());
    }
}

#[tokio::test]
async fn ok_mode_answers_errors_with_200() {
    for body in [r#"["a", "b", "c", "d"]"#, "[5.1, 3.5]"] {
        let (status, json) = send(router(ErrorStatus::Ok), post_predict(body)).await;

        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert!(json["error"].is_string(), "body: {body}");
    }
}

#[tokio::test]
async fn wrong_length_names_both_counts() {
    let (_, json) = send(router(ErrorStatus::Client), post_predict("[5.1, 3.5]")).await;
    let msg = json["error"].as_str().unwrap();

    assert!(msg.contains('2') && msg.contains('4'), "{msg}");
}

#[tokio::test]
async fn state_is_shared_across_requests() {
    let router = router(ErrorStatus::Client);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move { send(router, post_predict("[5.1, 3.5, 1.4, 0.2]")).await })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "prediction": 0 }));
    }
}

#[tokio::test]
async fn injected_model_is_used_as_is() {
    let config = TrainConfig::default();
    let split = split(&load_iris(), config.test_ratio, config.seed).unwrap();
    let model = fit(&split.train, config.max_iterations).unwrap();

    let router = app(AppState::new(Predictor::new(model), ErrorStatus::Client));
    let (status, body) = send(router, post_predict("[5.1, 3.5, 1.4, 0.2]")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": 0 }));
}

#[tokio::test]
async fn missing_artifact_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServeConfig {
        model_path: dir.path().join("model.pkl"),
        port: 0,
        ..ServeConfig::default()
    };

    let err = server::serve(config).await.unwrap_err();
    assert!(matches!(err, ServerErr::Model(ClassifierErr::Io(_))));
}

#[tokio::test]
async fn corrupt_artifact_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pkl");
    std::fs::write(&path, b"definitely not a model").unwrap();

    let config = ServeConfig {
        model_path: path,
        port: 0,
        ..ServeConfig::default()
    };

    let err = server::serve(config).await.unwrap_err();
    assert!(matches!(err, ServerErr::Model(_)));
}
