use crate::infra::{AppState, CandidateService, DashboardQuery, RefreshSummary};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use talent_search::error::AppError;
use talent_search::workflows::candidates::{CandidateSnapshot, CsvFeed, DataOrigin};
use talent_search::workflows::dashboard::{
    filter, CandidateProfileView, DashboardState, DashboardView, KeyMetrics,
};
use talent_search::workflows::intake::{IntakeForm, IntakeWebhook, SubmissionReceipt};

type SharedService<F, W> = Arc<CandidateService<F, W>>;

#[derive(Debug, Serialize)]
pub(crate) struct CandidateListResponse {
    pub(crate) origin: DataOrigin,
    pub(crate) fetched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) view: DashboardView,
}

pub(crate) fn candidate_router<F, W>(service: SharedService<F, W>) -> Router
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    Router::new()
        .route("/api/v1/candidates", get(list_candidates::<F, W>))
        .route("/api/v1/candidates/metrics", get(candidate_metrics::<F, W>))
        .route("/api/v1/candidates/refresh", post(refresh_candidates::<F, W>))
        .route("/api/v1/candidates/:name", get(candidate_profile::<F, W>))
        .route("/api/v1/intake", post(submit_intake::<F, W>))
        .with_state(service)
}

pub(crate) fn with_service_routes<F, W>(service: SharedService<F, W>) -> Router
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    candidate_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Malformed numbers surface as `{"error": ...}` like every other query error.
fn dashboard_state(
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<DashboardState, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    query.to_state()
}

pub(crate) async fn list_candidates<F, W>(
    State(service): State<SharedService<F, W>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<CandidateListResponse>, AppError>
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    let state = dashboard_state(query)?;
    let CandidateSnapshot {
        origin,
        fetched_at,
        records,
    } = service.snapshot().await;

    Ok(Json(CandidateListResponse {
        origin,
        fetched_at,
        view: state.render(&records),
    }))
}

pub(crate) async fn candidate_metrics<F, W>(
    State(service): State<SharedService<F, W>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<KeyMetrics>, AppError>
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    let state = dashboard_state(query)?;
    let snapshot = service.snapshot().await;
    let visible = filter::apply(&snapshot.records, &state.filter);
    Ok(Json(KeyMetrics::from_records(&visible)))
}

pub(crate) async fn candidate_profile<F, W>(
    State(service): State<SharedService<F, W>>,
    Path(name): Path<String>,
) -> Result<Json<CandidateProfileView>, AppError>
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    let snapshot = service.snapshot().await;
    let wanted = name.trim().to_lowercase();
    snapshot
        .records
        .iter()
        .find(|record| record.name.to_lowercase() == wanted)
        .map(|record| Json(CandidateProfileView::from_record(record)))
        .ok_or(AppError::CandidateNotFound(name))
}

pub(crate) async fn refresh_candidates<F, W>(
    State(service): State<SharedService<F, W>>,
) -> Json<RefreshSummary>
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    Json(service.refresh().await)
}

pub(crate) async fn submit_intake<F, W>(
    State(service): State<SharedService<F, W>>,
    Json(form): Json<IntakeForm>,
) -> Result<Json<SubmissionReceipt>, AppError>
where
    F: CsvFeed + 'static,
    W: IntakeWebhook + 'static,
{
    let receipt = service.submit_intake(&form).await?;
    Ok(Json(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Mutex;
    use talent_search::workflows::candidates::{CandidateDataSource, FeedError};
    use talent_search::workflows::intake::{IntakeError, IntakePayload};
    use tower::ServiceExt;

    const SHEET: &str = "\
Name,Title,Current Company,Fitting Score,Experience,Qualifcation,Industry,LinkedIn URL,LinkedIn Snippet
Jane Doe,Risk Manager,Acme Bank,91,12 years,PhD Finance,Banking,https://linkedin.com/in/jane,Leads risk management and audit
John Roe,Analyst,Initech,78%,5,BSc Economics,,,Excel reporting
Amy Poe,Risk Analyst,Globex,78,3,MBA,Insurance,,
Ghost,Intern,Nowhere,0,1,None,,,
";

    struct SheetFeed(Option<&'static str>);

    impl CsvFeed for SheetFeed {
        async fn fetch_csv(&self) -> Result<String, FeedError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| FeedError::Transport("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct FakeWebhook {
        fail_with: Option<u16>,
        delivered: Mutex<Vec<IntakePayload>>,
    }

    impl IntakeWebhook for FakeWebhook {
        async fn deliver(&self, payload: &IntakePayload) -> Result<SubmissionReceipt, IntakeError> {
            self.delivered
                .lock()
                .expect("webhook mutex poisoned")
                .push(payload.clone());
            match self.fail_with {
                Some(status) => Err(IntakeError::Status(status)),
                None => Ok(SubmissionReceipt::from_body("{}")),
            }
        }
    }

    async fn router_with(feed: SheetFeed, webhook: FakeWebhook) -> Router {
        let service = CandidateService::bootstrap(CandidateDataSource::new(feed), webhook).await;
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_service_routes(Arc::new(service)).layer(Extension(state))
    }

    async fn router() -> Router {
        router_with(SheetFeed(Some(SHEET)), FakeWebhook::default()).await
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, payload)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
            .expect("request")
    }

    fn names(payload: &Value) -> Vec<&str> {
        payload["page"]["items"]
            .as_array()
            .expect("items array")
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect()
    }

    #[tokio::test]
    async fn health_and_readiness_report_ok() {
        let (status, payload) = send(router().await, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");

        let (status, payload) = send(router().await, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn list_defaults_to_score_descending_with_name_tie_break() {
        let (status, payload) = send(router().await, get("/api/v1/candidates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["origin"], "sheet");
        assert_eq!(names(&payload), vec!["Jane Doe", "Amy Poe", "John Roe"]);
        assert_eq!(payload["page"]["items"][0]["rank"], 1);
        assert_eq!(payload["page"]["total_items"], 3);
        assert_eq!(payload["metrics"]["average_fitting_score"], 82);
    }

    #[tokio::test]
    async fn list_applies_filters_and_sorting() {
        let uri = "/api/v1/candidates?keyword=risk%20analyst&qualification=Master&sort=name&direction=asc";
        let (status, payload) = send(router().await, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&payload), vec!["Amy Poe"]);
        assert_eq!(payload["sort"]["field"], "name");
        assert_eq!(payload["filter"]["keyword"], "risk analyst");
    }

    #[tokio::test]
    async fn list_rejects_unknown_sort_field() {
        let (status, payload) = send(router().await, get("/api/v1/candidates?sort=salary")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("salary"));
    }

    #[tokio::test]
    async fn non_numeric_query_values_return_json_errors() {
        for uri in [
            "/api/v1/candidates?min_score=high",
            "/api/v1/candidates?page=two",
            "/api/v1/candidates/metrics?page_size=-1",
        ] {
            let (status, payload) = send(router().await, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(
                payload["error"]
                    .as_str()
                    .expect("json error body")
                    .starts_with("invalid query: "),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn metrics_cover_filtered_set() {
        let (status, payload) =
            send(router().await, get("/api/v1/candidates/metrics?min_score=80")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["total_candidates"], 1);
        assert_eq!(payload["average_fitting_score"], 91);
        assert_eq!(payload["average_years_experience"], 12);
    }

    #[tokio::test]
    async fn profile_lookup_ignores_case() {
        let (status, payload) = send(router().await, get("/api/v1/candidates/jane%20doe")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["name"], "Jane Doe");
        assert_eq!(payload["qualification_label"], "Doctor");
        assert_eq!(payload["linkedin_url"], "https://linkedin.com/in/jane");

        let (status, payload) = send(router().await, get("/api/v1/candidates/Nobody")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "no candidate named 'Nobody'");
    }

    #[tokio::test]
    async fn refresh_falls_back_when_sheet_is_unreachable() {
        let router = router_with(SheetFeed(None), FakeWebhook::default()).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/candidates/refresh")
            .body(Body::empty())
            .expect("request");
        let (status, payload) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["origin"], "fallback");
        assert_eq!(payload["count"], 25);
    }

    fn intake_form(weight: i32) -> Value {
        json!({
            "jobTitle": "Risk Manager",
            "numberOfProfiles": 10,
            "batch": 1,
            "scoringScheme": [
                {"areaName": "Experience", "weightPercent": weight},
                {"areaName": "Skills", "weightPercent": 40}
            ]
        })
    }

    #[tokio::test]
    async fn intake_returns_receipt() {
        let (status, payload) =
            send(router().await, post_json("/api/v1/intake", intake_form(60))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["message"], "Submitted successfully!");
    }

    #[tokio::test]
    async fn intake_validation_failure_is_unprocessable() {
        let (status, payload) =
            send(router().await, post_json("/api/v1/intake", intake_form(50))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            payload["error"],
            "invalid intake form: scoring weights total 90%, expected 100%"
        );
    }

    #[tokio::test]
    async fn intake_webhook_failure_is_bad_gateway() {
        let webhook = FakeWebhook {
            fail_with: Some(500),
            ..FakeWebhook::default()
        };
        let router = router_with(SheetFeed(Some(SHEET)), webhook).await;
        let (status, _) = send(router, post_json("/api/v1/intake", intake_form(60))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
