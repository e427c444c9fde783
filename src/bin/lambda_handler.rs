//! AWS Lambda handler for PPA projections
//!
//! Accepts contract parameters via JSON and returns the year-by-year
//! projection with its summary. Fields missing from the request take the
//! configured defaults. Supplying both `escalationRates` and `discountRates`
//! adds a sensitivity grid to the response.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use aws_lambda_events::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use ppa_projection::scenario::SensitivityPoint;
use ppa_projection::{ProjectionError, ProjectionInput, ProjectionResult, ProjectionSummary, ScenarioRunner};

/// Input parameters for the projection
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub base_price: Option<f64>,
    pub annual_capacity: Option<f64>,
    pub capacity_factor: Option<f64>,
    pub contract_years: Option<u32>,
    pub escalation_rate: Option<f64>,
    pub discount_rate: Option<f64>,

    /// Escalation rates for an optional sensitivity grid (%)
    pub escalation_rates: Option<Vec<f64>>,

    /// Discount rates for an optional sensitivity grid (%)
    pub discount_rates: Option<Vec<f64>>,
}

impl ProjectionRequest {
    fn resolve(&self, defaults: &ProjectionInput) -> ProjectionInput {
        ProjectionInput {
            base_price: self.base_price.unwrap_or(defaults.base_price),
            annual_capacity: self.annual_capacity.unwrap_or(defaults.annual_capacity),
            capacity_factor: self.capacity_factor.unwrap_or(defaults.capacity_factor),
            contract_years: self.contract_years.unwrap_or(defaults.contract_years),
            escalation_rate: self.escalation_rate.unwrap_or(defaults.escalation_rate),
            discount_rate: self.discount_rate.unwrap_or(defaults.discount_rate),
        }
    }
}

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub input: ProjectionInput,
    pub summary: ProjectionSummary,
    pub projection: ProjectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Vec<SensitivityPoint>>,
    pub execution_time_ms: u64,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn url_response(status: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    LambdaFunctionUrlResponse {
        status_code: status,
        headers: cors_headers(),
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status: i64, message: &str) -> LambdaFunctionUrlResponse {
    url_response(status, Some(serde_json::json!({ "error": message }).to_string()))
}

/// Input problems are the caller's fault; anything else is ours
fn projection_error_response(error: &ProjectionError) -> LambdaFunctionUrlResponse {
    if error.is_invalid_input() {
        warn!("Rejected projection request: {}", error);
        error_response(422, &error.to_string())
    } else {
        error!("Projection failed: {}", error);
        error_response(500, &error.to_string())
    }
}

fn json_response(body: &ProjectionResponse) -> Result<LambdaFunctionUrlResponse, Error> {
    Ok(url_response(200, Some(serde_json::to_string(body)?)))
}

/// Lambda handler function
async fn handler(
    runner: &ScenarioRunner,
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(url_response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "Binary request bodies are not supported"));
    }

    let body = request.body.as_deref().unwrap_or("{}");
    let params: ProjectionRequest = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let input = params.resolve(&runner.config().defaults);
    let projection = match runner.run(&input) {
        Ok(result) => result,
        Err(e) => return Ok(projection_error_response(&e)),
    };

    let sensitivity = match (&params.escalation_rates, &params.discount_rates) {
        (Some(escalation), Some(discount)) => match runner.sensitivity(&input, escalation, discount) {
            Ok(grid) => Some(grid),
            Err(e) => return Ok(projection_error_response(&e)),
        },
        _ => None,
    };

    let response = ProjectionResponse {
        input,
        summary: projection.summary(),
        projection,
        sensitivity,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    info!("Projected {} years in {}ms", response.summary.contract_years, response.execution_time_ms);

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let runner = ScenarioRunner::from_env()?;
    let runner = &runner;

    run(service_fn(move |event| async move { handler(runner, event).await })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;

    fn event(method: &str, body: Option<&str>, is_base64_encoded: bool) -> LambdaEvent<LambdaFunctionUrlRequest> {
        let request: LambdaFunctionUrlRequest = serde_json::from_value(serde_json::json!({
            "version": "2.0",
            "rawPath": "/",
            "headers": { "content-type": "application/json" },
            "requestContext": {
                "timeEpoch": 1_700_000_000_000_i64,
                "http": { "method": method, "path": "/" }
            },
            "body": body,
            "isBase64Encoded": is_base64_encoded
        }))
        .unwrap();
        LambdaEvent::new(request, Context::default())
    }

    fn body_json(response: &LambdaFunctionUrlResponse) -> serde_json::Value {
        serde_json::from_str(response.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_partial_request_uses_defaults() {
        let params: ProjectionRequest = serde_json::from_str(r#"{"contractYears": 10, "discountRate": 7.5}"#).unwrap();
        let input = params.resolve(&ProjectionInput::default());
        assert_eq!(input.contract_years, 10);
        assert_eq!(input.discount_rate, 7.5);
        assert_eq!(input.base_price, 50.0);
        assert!(params.escalation_rates.is_none());
    }

    #[test]
    fn test_error_response_body() {
        let response = error_response(422, "Invalid input for contractYears: must be at least 1");
        assert_eq!(response.status_code, 422);
        assert_eq!(body_json(&response)["error"], "Invalid input for contractYears: must be at least 1");
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_non_input_errors_are_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let response = projection_error_response(&ProjectionError::from(io));
        assert_eq!(response.status_code, 500);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let response = handler(&ScenarioRunner::new(), event("OPTIONS", None, false)).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert!(response.body.is_none());
        assert_eq!(response.headers[ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let response = handler(&ScenarioRunner::new(), event("POST", Some("{not json"), false)).await.unwrap();
        assert_eq!(response.status_code, 400);
        assert!(body_json(&response)["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_base64_body_is_bad_request() {
        let response = handler(&ScenarioRunner::new(), event("POST", Some("e30="), true)).await.unwrap();
        assert_eq!(response.status_code, 400);
    }

    #[tokio::test]
    async fn test_invalid_input_is_unprocessable() {
        let response = handler(&ScenarioRunner::new(), event("POST", Some(r#"{"contractYears": 0}"#), false))
            .await
            .unwrap();
        assert_eq!(response.status_code, 422);
        assert!(body_json(&response)["error"].as_str().unwrap().contains("contractYears"));
    }

    #[tokio::test]
    async fn test_oversized_sensitivity_grid_is_unprocessable() {
        let rates: Vec<f64> = (0..30).map(f64::from).collect();
        let body = serde_json::json!({ "escalationRates": rates, "discountRates": rates }).to_string();
        let response = handler(&ScenarioRunner::new(), event("POST", Some(&body), false)).await.unwrap();
        assert_eq!(response.status_code, 422);
        assert!(body_json(&response)["error"].as_str().unwrap().contains("sensitivityGrid"));
    }

    #[tokio::test]
    async fn test_successful_projection() {
        let body = r#"{"contractYears": 10, "escalationRates": [1, 2], "discountRates": [5]}"#;
        let response = handler(&ScenarioRunner::new(), event("POST", Some(body), false)).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert!(!response.is_base64_encoded);

        let json = body_json(&response);
        assert_eq!(json["input"]["contractYears"], 10);
        assert_eq!(json["summary"]["contractYears"], 10);
        assert_eq!(json["projection"]["years"].as_array().unwrap().len(), 10);
        assert_eq!(json["sensitivity"].as_array().unwrap().len(), 2);
        assert!(json["executionTimeMs"].is_u64());
    }

    #[tokio::test]
    async fn test_missing_body_uses_defaults() {
        let response = handler(&ScenarioRunner::new(), event("POST", None, false)).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(body_json(&response)["summary"]["contractYears"], 20);
        assert!(body_json(&response).get("sensitivity").is_none());
    }
}
