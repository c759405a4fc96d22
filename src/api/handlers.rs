use crate::application::ledger::{LoanRecordStore, member_history, query_ledger, summarize};
use crate::domain::LoanId;
use crate::ports::Clock;
use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
    error::ApiError,
    types::{
        BorrowResponse, ErrorResponse, ListBorrowsQuery, OpenBorrowRequest, ReturnBorrowRequest,
        SummaryResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
///
/// ストアへの変更は1リクエスト内の同期呼び出しの間だけロックを保持する。
pub struct AppState {
    store: Mutex<LoanRecordStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: LoanRecordStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
        }
    }

    /// ストアのロックを取得する
    ///
    /// ストアの操作は途中で中断されても状態を壊さないため、poisonは無視する。
    pub fn store(&self) -> MutexGuard<'_, LoanRecordStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /borrows - 新しい貸出を作成
///
/// IDは台帳が採番する。返却期限が貸出日より前の場合は422。
pub async fn create_borrow(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OpenBorrowRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BorrowResponse>), ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let today = state.clock.today();
    let record = state.store().open_loan(req.to_command())?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse::from_record(&record, today)),
    ))
}

/// POST /borrows/:id/return - 書籍を返却
///
/// ボディが空の場合は基準日を返却日とする。解釈できないボディは400で、台帳は変更しない。
/// 既に返却済みでもエラーにしない。
pub async fn return_borrow(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Json<BorrowResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let req = ReturnBorrowRequest::from_body(&body).map_err(ApiError::BadRequest)?;

    let today = state.clock.today();
    let returned_date = req.returned_date.unwrap_or(today);

    let mut store = state.store();
    let record = store.mark_returned(LoanId::new(id), returned_date)?;

    Ok(Json(BorrowResponse::from_record(record, today)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /borrows - 検索・フィルタ付き貸出一覧取得
///
/// クエリパラメータ:
/// - search: 会員名・メールアドレス・書籍タイトルの部分一致（オプション）
/// - status: all, Borrowed, Returned, Overdue（オプション）
/// - member_email: 会員の貸出履歴に絞り込む（オプション）
///
/// 並び順は台帳への追加順。
pub async fn list_borrows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBorrowsQuery>,
) -> Result<Json<Vec<BorrowResponse>>, QueryError> {
    let ledger_query = query.to_ledger_query().map_err(QueryError::BadRequest)?;
    let today = state.clock.today();

    let store = state.store();
    let candidates = match query.member_email.as_deref() {
        Some(email) => member_history(store.all(), email),
        None => store.all().iter().collect(),
    };

    let borrows = query_ledger(candidates, &ledger_query, today)
        .into_iter()
        .map(|record| BorrowResponse::from_record(record, today))
        .collect();

    Ok(Json(borrows))
}

/// GET /borrows/summary - 実効ステータスごとの件数
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let today = state.clock.today();
    let summary = summarize(state.store().all(), today);

    Json(SummaryResponse {
        reference_date: today,
        summary,
    })
}

/// GET /borrows/:id - 貸出詳細をIDで取得
pub async fn get_borrow_by_id(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<BorrowResponse>, QueryError> {
    let Path(id) = id.map_err(|e| QueryError::BadRequest(e.body_text()))?;
    let loan_id = LoanId::new(id);
    let today = state.clock.today();

    let store = state.store();
    match store.get(loan_id) {
        Some(record) => Ok(Json(BorrowResponse::from_record(record, today))),
        None => Err(QueryError::NotFound(format!("Loan {} not found", loan_id))),
    }
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            QueryError::BadRequest(msg) => {
                tracing::debug!("Rejected query: {}", msg);
                (StatusCode::BAD_REQUEST, "bad_request", msg)
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
