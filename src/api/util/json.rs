use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Wrap a service result as a bare JSON body; errors render via `AppError`.
pub fn to_json<T: Serialize>(result: Result<T, AppError>) -> Result<Json<T>, AppError> {
    result.map(Json)
}
