use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CarelogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for CarelogError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            CarelogError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: format!("No {entity} with id {id}."),
                    details: None,
                },
            ),

            CarelogError::Database(err) => constraint_response(&err),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Maps store-layer failures onto responses: constraint violations become
/// 4xx with the database's field-level message (e.g. "UNIQUE constraint
/// failed: users.email"), everything else is a generic 500.
fn constraint_response(err: &sqlx::Error) -> (StatusCode, ApiErrorObject) {
    if let sqlx::Error::Database(db_err) = err {
        match db_err.kind() {
            ErrorKind::UniqueViolation => {
                return (
                    StatusCode::CONFLICT,
                    ApiErrorObject {
                        code: "CONFLICT".to_string(),
                        message: db_err.message().to_string(),
                        details: None,
                    },
                );
            }
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return (
                    StatusCode::BAD_REQUEST,
                    ApiErrorObject {
                        code: "CONSTRAINT_VIOLATION".to_string(),
                        message: db_err.message().to_string(),
                        details: None,
                    },
                );
            }
            _ => {}
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiErrorObject {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
            details: None,
        },
    )
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
