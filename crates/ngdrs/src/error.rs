use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::cases::NarrativeError;
use crate::workflows::register::CaseRegisterImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Narrative(NarrativeError),
    Register(CaseRegisterImportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid case JSON: {}", err),
            AppError::Narrative(err) => write!(f, "narrative error: {}", err),
            AppError::Register(err) => write!(f, "case register error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Narrative(err) => Some(err),
            AppError::Register(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Narrative(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Register(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<NarrativeError> for AppError {
    fn from(value: NarrativeError) -> Self {
        Self::Narrative(value)
    }
}

impl From<CaseRegisterImportError> for AppError {
    fn from(value: CaseRegisterImportError) -> Self {
        Self::Register(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::cases::RequiredField;

    #[test]
    fn narrative_errors_map_to_unprocessable_entity() {
        let err = AppError::from(NarrativeError::MissingRequiredField(
            RequiredField::CrimeCode,
        ));
        assert!(err.to_string().contains("crimeCode"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn register_errors_map_to_bad_request() {
        let err = AppError::from(CaseRegisterImportError::TooManyRows { limit: 5 });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
