//! Request routing: the form page, the JSON endpoint, and health.

use serde_json::json;
use spend_core::constants::RESULT_LABEL;
use spend_core::errors::SpendErrorCode;
use spend_core::{request_span, CustomerRecord, FormFields, SpendError};
use tracing::{error, info, warn};

use crate::http::urlencoded::parse_form;
use crate::http::{Request, Response};
use crate::pages::{render_page, Notice};
use crate::service::PredictionService;

/// Shown for any predictor failure; details go to the log only.
pub const GENERIC_FAILURE: &str = "Prediction failed. Please check your inputs and try again.";

/// The request handler shared by every connection.
#[derive(Debug, Clone)]
pub struct App {
    service: PredictionService,
}

impl App {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }

    /// Route one request to its handler.
    pub fn handle(&self, request: &Request) -> Response {
        let span = request_span!(request.method, request.path);
        let _enter = span.enter();

        let response = match (request.method.as_str(), request.path.as_str()) {
            ("GET", "/") => self.form_page(),
            ("POST", "/") | ("POST", "/predict") => self.submit_form(request),
            ("POST", "/api/predict") => self.submit_json(request),
            ("GET", "/health") => self.health(),
            (_, "/") => method_not_allowed("GET, POST"),
            (_, "/predict") | (_, "/api/predict") => method_not_allowed("POST"),
            (_, "/health") => method_not_allowed("GET"),
            _ => Response::text(404, "not found"),
        };

        info!(status = response.status, "request handled");
        response
    }

    /// Awaiting input: defaults filled in, no prediction attempted.
    fn form_page(&self) -> Response {
        let defaults = CustomerRecord::default().to_form_fields();
        Response::html(200, render_page(&defaults, None))
    }

    fn submit_form(&self, request: &Request) -> Response {
        let form = match request.body_str() {
            Ok(body) => parse_form(body),
            Err(e) => return Response::text(400, e.to_string()),
        };

        let record = match CustomerRecord::try_from(&form) {
            Ok(record) => record,
            Err(e) => {
                warn!(field = e.field(), error = %e, "form rejected");
                return page_with(400, &form, Notice::Error(e.to_string()));
            }
        };

        match self.service.predict(&record) {
            Ok(prediction) => {
                let message = format!("{RESULT_LABEL}: {}", prediction.formatted);
                page_with(200, &form, Notice::Success(message))
            }
            Err(e) => {
                error!(error = %e, "prediction failed");
                page_with(500, &form, Notice::Error(GENERIC_FAILURE.to_string()))
            }
        }
    }

    fn submit_json(&self, request: &Request) -> Response {
        let record: CustomerRecord = match serde_json::from_slice(&request.body) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "JSON record rejected");
                return Response::json(
                    400,
                    &json!({ "error": "INVALID_RECORD", "message": e.to_string() }),
                );
            }
        };

        match self.service.predict(&record) {
            Ok(prediction) => Response::json(200, &prediction),
            Err(e) => {
                error!(error = %e, "prediction failed");
                error_json(500, &e)
            }
        }
    }

    fn health(&self) -> Response {
        Response::json(
            200,
            &json!({ "status": "ok", "model": self.service.model_name() }),
        )
    }
}

fn page_with(status: u16, form: &FormFields, notice: Notice) -> Response {
    Response::html(status, render_page(form, Some(&notice)))
}

fn error_json(status: u16, err: &SpendError) -> Response {
    Response::json(
        status,
        &json!({ "error": err.error_code(), "message": GENERIC_FAILURE }),
    )
}

fn method_not_allowed(allow: &'static str) -> Response {
    Response::text(405, "method not allowed").with_header("Allow", allow)
}
