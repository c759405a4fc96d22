use crate::application::ledger::LedgerError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと不正なリクエストを、HTTPレスポンスへマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Ledger(LedgerError),
    /// パスやボディを解釈できない（台帳は変更しない）
    BadRequest(String),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Ledger(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            // 400 Bad Request - リクエストを解釈できない
            ApiError::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);
                let body = Json(ErrorResponse::new("BAD_REQUEST", message));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ApiError::Ledger(err) => err,
        };

        let (status, error_type) = match err {
            // 404 Not Found - リクエストされた貸出が存在しない
            LedgerError::NotFound(_) => (StatusCode::NOT_FOUND, "LOAN_NOT_FOUND"),

            // 409 Conflict - IDの重複・枯渇
            LedgerError::DuplicateLoanId(_) => (StatusCode::CONFLICT, "DUPLICATE_LOAN_ID"),
            LedgerError::LoanIdsExhausted(_) => (StatusCode::CONFLICT, "LOAN_IDS_EXHAUSTED"),

            // 422 Unprocessable Entity - 貸出期間が不正
            LedgerError::Validation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_LOAN_PERIOD")
            }
        };

        let body = Json(ErrorResponse::new(error_type, err.to_string()));
        (status, body).into_response()
    }
}
