use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use wizardwebb_core::WizardError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn wizard_error_response(err: WizardError, operation: &str) -> Response {
    let status = status_for_wizard_error(&err);
    let payload = err.to_payload(operation);
    if status.is_server_error() {
        tracing::error!(code = %payload.code, operation, trace_id = %payload.trace_id, "{err}");
    } else {
        tracing::debug!(code = %payload.code, operation, "{err}");
    }
    (status, Json(payload)).into_response()
}

fn status_for_wizard_error(err: &WizardError) -> StatusCode {
    match err {
        WizardError::Validation(_) => StatusCode::BAD_REQUEST,
        WizardError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND
        }
        WizardError::InvalidCatalog(_) | WizardError::Io(_) | WizardError::Yaml(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
