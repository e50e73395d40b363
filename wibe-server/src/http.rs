pub mod error;

use crate::http::error::AppError;
use axum::Json;

pub type ApiResult<T> = Result<Json<T>, AppError>;
