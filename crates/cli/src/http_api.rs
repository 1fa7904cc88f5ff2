use axum::{
    body::{Body, Bytes},
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use triage_pipeline::{PipelineError, TriageService};
use triage_protocol::{serialize_json, ErrorEnvelope, TriageRequest, TriageResponse};

pub(crate) async fn serve(bind: &str, service: TriageService) -> anyhow::Result<()> {
    let app = router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    println!("Serving triage API on http://{bind}/triage");
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn router(service: Arc<TriageService>) -> Router {
    Router::new()
        .route(
            "/triage",
            post({
                let service = service.clone();
                move |body| handle_triage(body, service.clone())
            }),
        )
        .route("/health", get(handle_health))
}

async fn handle_triage(
    body: Bytes,
    service: Arc<TriageService>,
) -> Result<Response, StatusCode> {
    let request: TriageRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            return error_response(
                "invalid_request",
                format!("Malformed request body: {err}"),
            )
        }
    };

    match service.triage(&request.document_content).await {
        Ok(result) => json_response(StatusCode::OK, &TriageResponse { result }),
        Err(err) => error_response(err.client_code(), err.to_string()),
    }
}

async fn handle_health() -> Result<Response, StatusCode> {
    json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}

/// All boundary rejections are client errors with a descriptive envelope.
fn error_response(code: &str, message: String) -> Result<Response, StatusCode> {
    let hint = match code {
        "invalid_request" => Some(
            "Verify the request is valid JSON with a document_content string field.".to_string(),
        ),
        "guardrail_violation" | "pii_abort" => Some(
            "Force demo mode (--demo or TRIAGE_DEMO_MODE=1) for a deterministic result."
                .to_string(),
        ),
        _ => None,
    };

    let envelope = ErrorEnvelope {
        code: code.to_string(),
        message,
        hint,
    };
    json_response(StatusCode::BAD_REQUEST, &envelope)
}

fn json_response<T: serde::Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response, StatusCode> {
    let bytes = serialize_json(value)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_bytes();

    Ok(HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .expect("valid HTTP response"))
}
