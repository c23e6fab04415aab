use std::io::Cursor;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::CaseRecord;
use super::narrative::{summarize, CaseSummaryView};
use crate::config::RegisterConfig;
use crate::error::AppError;
use crate::workflows::register::CaseRegisterImporter;

#[derive(Debug, Deserialize)]
pub struct RegisterSummaryRequest {
    pub csv: String,
}

#[derive(Debug, Serialize)]
pub struct RejectedCase {
    pub case_id: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterSummaryResponse {
    pub summaries: Vec<CaseSummaryView>,
    pub rejected: Vec<RejectedCase>,
}

/// Router exposing narrative summaries for single cases and register exports.
pub fn case_router(register: RegisterConfig) -> Router {
    Router::new()
        .route("/api/v1/cases/summary", post(case_summary_handler))
        .route(
            "/api/v1/cases/register/summary",
            post(register_summary_handler),
        )
        .with_state(Arc::new(register))
}

pub(crate) async fn case_summary_handler(
    Json(case): Json<CaseRecord>,
) -> Result<Json<CaseSummaryView>, AppError> {
    let view = summarize(&case)?;
    info!(
        case_id = %view.case_id,
        stages = view.progress.total,
        progress = view.progress.percent,
        "case narrative generated"
    );
    Ok(Json(view))
}

pub(crate) async fn register_summary_handler(
    State(register): State<Arc<RegisterConfig>>,
    Json(request): Json<RegisterSummaryRequest>,
) -> Result<Json<RegisterSummaryResponse>, AppError> {
    let importer = CaseRegisterImporter::new(register.max_rows);
    let cases = importer.from_reader(Cursor::new(request.csv.into_bytes()))?;

    Ok(Json(summarize_register(&cases)))
}

/// Summarizes every case, collecting failures instead of aborting the batch.
pub fn summarize_register(cases: &[CaseRecord]) -> RegisterSummaryResponse {
    let mut summaries = Vec::with_capacity(cases.len());
    let mut rejected = Vec::new();

    for case in cases {
        match summarize(case) {
            Ok(view) => summaries.push(view),
            Err(err) => {
                warn!(case_id = %case.case_id, error = %err, "case rejected from register summary");
                rejected.push(RejectedCase {
                    case_id: case.case_id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        summarized = summaries.len(),
        rejected = rejected.len(),
        "register narratives generated"
    );

    RegisterSummaryResponse {
        summaries,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        case_router(RegisterConfig { max_rows: 100 })
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_json(uri: &str, payload: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
            .expect("request builds")
    }

    #[tokio::test]
    async fn summary_route_returns_narrative() {
        let payload = json!({
            "caseId": "GBV-2024-0112",
            "caseType": "GBV",
            "crimeCode": "GB-PH (Physical)",
            "survivorName": "Ayesha K.",
            "reportDate": "2024-01-10",
            "status": "Trial",
            "timeline": [
                {
                    "stageCode": "S1",
                    "stageName": "Intake",
                    "stageStatus": "Completed",
                    "details": { "intakeChannel": "District Help Desk" }
                },
                {
                    "stageCode": "S2",
                    "stageName": "Trial",
                    "stageStatus": "In Progress",
                    "details": { "outcome": "Under Trial" }
                }
            ]
        });

        let response = router()
            .oneshot(post_json("/api/v1/cases/summary", &payload))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["case_id"], "GBV-2024-0112");
        assert_eq!(body["progress"]["percent"], 50);
        assert_eq!(body["assessment"], "progressing_steadily");
        let summary = body["summary"].as_str().expect("summary text");
        assert!(summary.contains("currently under trial proceedings"));
    }

    #[tokio::test]
    async fn summary_route_rejects_missing_survivor() {
        let payload = json!({
            "caseId": "GBV-2024-0113",
            "caseType": "GBV",
            "crimeCode": "GB-PH",
            "reportDate": "2024-01-10",
            "status": "Trial",
            "timeline": []
        });

        let response = router()
            .oneshot(post_json("/api/v1/cases/summary", &payload))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json_body(response).await;
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("survivorName"));
    }

    #[tokio::test]
    async fn summary_route_rejects_blank_case_type() {
        let payload = json!({
            "caseId": "GBV-2024-0114",
            "caseType": "",
            "crimeCode": "GB-PH",
            "survivorName": "R. B.",
            "reportDate": "2024-01-12",
            "status": "Registered",
            "timeline": []
        });

        let response = router()
            .oneshot(post_json("/api/v1/cases/summary", &payload))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json_body(response).await;
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("caseType"));
    }

    #[tokio::test]
    async fn register_route_splits_summaries_and_rejections() {
        let csv = "Case ID,Case Type,Crime Code,Survivor Name,Report Date,Status,Stage Code,Stage Name,Stage Status,Field,Value\n\
C-1,GBV,GB-DV,N. A.,2024-02-01,Investigation,S1,Intake,Completed,intakeChannel,Women Protection Centre\n\
C-1,,,,,,S2,FIR,Pending,firNo,21/2024\n\
C-2,TFGBV,TF-CS,,2024-02-03,Registered,S1,Intake,Completed,,\n";

        let response = router()
            .oneshot(post_json(
                "/api/v1/cases/register/summary",
                &json!({ "csv": csv }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        let summaries = body["summaries"].as_array().expect("summaries");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0]["case_id"], "C-1");
        let rejected = body["rejected"].as_array().expect("rejected");
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0]["case_id"], "C-2");
    }

    #[tokio::test]
    async fn register_route_reports_bad_case_types() {
        let csv = "Case ID,Case Type,Crime Code,Survivor Name,Report Date,Status,Stage Code,Stage Name,Stage Status,Field,Value\n\
C-9,XYZ,GB-DV,N. A.,2024-02-01,Investigation,S1,Intake,Completed,,\n";

        let response = router()
            .oneshot(post_json(
                "/api/v1/cases/register/summary",
                &json!({ "csv": csv }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
