//! AWS Lambda handler exposing the goal-planning calculators over HTTP
//!
//! Routes GET requests by path and reads inputs from the query string:
//! `/health`, `/risk-to-goal`, `/projected-corpus` (alias `/projected-sip`)
//! and `/projected-lumpsum`. Invalid input is rejected with a 400 and a
//! descriptive message before any calculation runs.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use goal_planner::{
    GoalRequest, InputError, LumpsumProjectionRequest, Planner, SipProjectionRequest,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::json;

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(json!({ "error": message }).to_string()))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn input_error_response(err: InputError) -> Response<Body> {
    error_response(400, &err.to_string())
}

/// Lambda handler function
async fn handler(planner: &Planner, event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let path = event.uri().path().to_string();
    log::info!("{} {}", event.method(), path);

    let known_path = matches!(
        path.as_str(),
        "/health" | "/risk-to-goal" | "/projected-corpus" | "/projected-sip" | "/projected-lumpsum"
    );
    if !known_path {
        return Ok(error_response(404, "not found"));
    }
    if event.method().as_str() != "GET" {
        return Ok(error_response(405, "method not allowed"));
    }

    let params = event.query_string_parameters();

    let response = match path.as_str() {
        "/health" => json_response(&json!({ "status": "ok" })),
        "/risk-to-goal" => {
            match GoalRequest::from_raw(
                params.first("target_corpus"),
                params.first("risk_level"),
                params.first("years"),
                params.first("inflation"),
            ) {
                Ok(req) => json_response(&planner.plan_goal(&req)),
                Err(e) => input_error_response(e),
            }
        }
        // Both route names serve the same calculation
        "/projected-corpus" | "/projected-sip" => {
            match SipProjectionRequest::from_raw(
                params.first("monthly_sip"),
                params.first("risk_level"),
                params.first("years"),
            ) {
                Ok(req) => json_response(&planner.project_sip(&req)),
                Err(e) => input_error_response(e),
            }
        }
        "/projected-lumpsum" => {
            match LumpsumProjectionRequest::from_raw(
                params.first("lumpsum"),
                params.first("risk_level"),
                params.first("years"),
            ) {
                Ok(req) => json_response(&planner.project_lumpsum(&req)),
                Err(e) => input_error_response(e),
            }
        }
        _ => unreachable!("path checked above"),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let planner = Planner::new();
    run(service_fn(|event: Request| handler(&planner, event))).await
}
