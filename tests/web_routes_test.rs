use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mindset_survey::{web, AdviceError, AdviceProvider, SurveyService};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct FixedAdvice(&'static str);

#[async_trait]
impl AdviceProvider for FixedAdvice {
    async fn fetch_advice(&self, _profile: &str) -> Result<String, AdviceError> {
        Ok(self.0.to_string())
    }
}

struct FailingAdvice;

#[async_trait]
impl AdviceProvider for FailingAdvice {
    async fn fetch_advice(&self, _profile: &str) -> Result<String, AdviceError> {
        Err(AdviceError::Status { status: 502 })
    }
}

fn app_with(provider: Arc<dyn AdviceProvider>) -> Router {
    web::router(SurveyService::new(provider, Duration::from_secs(15)))
}

fn submit(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/results")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_survey() {
    let app = app_with(Arc::new(FixedAdvice("unused")));

    let resp = app.oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/survey");
}

#[tokio::test]
async fn test_survey_form_is_rendered() {
    let app = app_with(Arc::new(FixedAdvice("unused")));

    let resp = app.oneshot(get("/survey")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = body_string(resp).await;
    assert!(html.contains(r#"<form method="post" action="/results">"#));
    assert!(html.contains(r#"name="human_skills""#));
}

#[tokio::test]
async fn test_results_show_fetched_advice() {
    let app = app_with(Arc::new(FixedAdvice("Lean into teamwork with AI tools.")));

    let resp = app
        .oneshot(submit("confidence=5&worry=5&human_skills=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Aware but Anxious"));
    assert!(html.contains("Lean into teamwork with AI tools."));
    assert!(html.contains(r#"Confidence: <span class="score">5</span>"#));
    assert!(html.contains(r#"Worry: <span class="score">5</span>"#));
    assert!(html.contains(r#"Human skills: <span class="score">1</span>"#));
    assert!(!html.contains("AI advice unavailable"));
}

#[tokio::test]
async fn test_results_fall_back_to_local_advice() {
    let app = app_with(Arc::new(FailingAdvice));

    let resp = app
        .oneshot(submit("confidence=3&worry=3&human_skills=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Curious Learner"));
    assert!(html.contains("Stay curious. Keep exploring AI and how it fits with your strengths."));
    assert!(html.contains("(Note: AI advice unavailable, showing local guidance.)"));
}

#[tokio::test]
async fn test_non_numeric_input_becomes_zero() {
    let app = app_with(Arc::new(FixedAdvice("ok")));

    let resp = app
        .oneshot(submit("confidence=abc&worry=&human_skills=4"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Low Confidence"));
    assert!(html.contains(r#"Confidence: <span class="score">0</span>"#));
    assert!(html.contains(r#"Worry: <span class="score">0</span>"#));
    assert!(html.contains(r#"Human skills: <span class="score">4</span>"#));
}

#[tokio::test]
async fn test_missing_fields_become_zero() {
    let app = app_with(Arc::new(FixedAdvice("ok")));

    let resp = app.oneshot(submit("")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Low Confidence"));
    assert!(html.contains(r#"Human skills: <span class="score">0</span>"#));
}

#[tokio::test]
async fn test_repeated_field_uses_first_value() {
    let app = app_with(Arc::new(FixedAdvice("ok")));

    let resp = app
        .oneshot(submit("confidence=5&confidence=1&worry=5&human_skills=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Aware but Anxious"));
    assert!(html.contains(r#"Confidence: <span class="score">5</span>"#));
}

#[tokio::test]
async fn test_submission_without_content_type_becomes_zero() {
    let app = app_with(Arc::new(FixedAdvice("ok")));
    let request = Request::builder()
        .method("POST")
        .uri("/results")
        .body(Body::from("confidence=5&worry=1&human_skills=1"))
        .unwrap();

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Low Confidence"));
    assert!(html.contains(r#"Confidence: <span class="score">0</span>"#));
    assert!(html.contains(r#"Worry: <span class="score">0</span>"#));
    assert!(html.contains(r#"Human skills: <span class="score">0</span>"#));
}

#[tokio::test]
async fn test_advice_html_is_escaped() {
    let app = app_with(Arc::new(FixedAdvice("<b>bold</b> & brave")));

    let resp = app
        .oneshot(submit("confidence=3&worry=3&human_skills=5"))
        .await
        .unwrap();

    let html = body_string(resp).await;
    assert!(html.contains("Human-Centered Learner"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; brave"));
    assert!(!html.contains("<b>bold</b>"));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = app_with(Arc::new(FixedAdvice("unused")));

    let resp = app.oneshot(get("/static/style.css")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");
    assert!(body_string(resp).await.contains(".advice-text"));
}

#[tokio::test]
async fn test_health_check() {
    let app = app_with(Arc::new(FixedAdvice("unused")));

    let resp = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_with(Arc::new(FixedAdvice("unused")));

    let resp = app.oneshot(get("/admin")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
