use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::ledger::{LedgerQuery, LedgerSummary};
use crate::domain::{
    StatusFilter,
    commands::OpenLoan,
    loan::{LoanRecord, derive_status},
};

/// 貸出一覧取得のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListBorrowsQuery {
    /// 会員名・メールアドレス・書籍タイトルの部分一致
    pub search: Option<String>,
    /// ステータスでフィルタリング（all, Borrowed, Returned, Overdue）
    pub status: Option<String>,
    /// 会員のメールアドレスで絞り込み
    pub member_email: Option<String>,
}

impl ListBorrowsQuery {
    /// 台帳の検索条件に変換する
    pub fn to_ledger_query(&self) -> Result<LedgerQuery, String> {
        let status_filter = match self.status.as_deref() {
            Some(status) => parse_status_filter(status)?,
            None => StatusFilter::All,
        };

        Ok(LedgerQuery {
            search_text: self.search.clone(),
            status_filter,
        })
    }
}

/// 貸出作成リクエスト（POST /borrows）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenBorrowRequest {
    pub member_name: String,
    pub member_email: String,
    pub book_title: String,
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl OpenBorrowRequest {
    pub fn to_command(&self) -> OpenLoan {
        OpenLoan {
            member_name: self.member_name.clone(),
            member_email: self.member_email.clone(),
            book_title: self.book_title.clone(),
            borrowed_date: self.borrowed_date,
            due_date: self.due_date,
        }
    }
}

/// 返却リクエスト（POST /borrows/:id/return）
///
/// 返却日を省略した場合は基準日を使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBorrowRequest {
    pub returned_date: Option<NaiveDate>,
}

impl ReturnBorrowRequest {
    /// リクエストボディを解釈する
    ///
    /// 空のボディは返却日の省略として扱う。それ以外はJSONとして解釈できなければエラー。
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| format!("Invalid return request body: {}", e))
    }
}

/// 貸出レスポンス
///
/// 記録上のステータスと、基準日時点の実効ステータスの両方を返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowResponse {
    pub id: u64,
    pub member_name: String,
    pub member_email: String,
    pub book_title: String,
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub recorded_status: String,
    pub status: String,
}

impl BorrowResponse {
    pub fn from_record(record: &LoanRecord, reference_date: NaiveDate) -> Self {
        Self {
            id: record.id.value(),
            member_name: record.member_name.clone(),
            member_email: record.member_email.clone(),
            book_title: record.book_title.clone(),
            borrowed_date: record.borrowed_date,
            due_date: record.due_date,
            returned_date: record.returned_date,
            recorded_status: record.recorded_status.as_str().to_string(),
            status: derive_status(record, reference_date).as_str().to_string(),
        }
    }
}

/// 集計レスポンス（GET /borrows/summary）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub reference_date: NaiveDate,
    #[serde(flatten)]
    pub summary: LedgerSummary,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// ステータスクエリパラメータのパースとバリデーション
pub fn parse_status_filter(status: &str) -> Result<StatusFilter, String> {
    status.parse::<StatusFilter>().map_err(|e| e.to_string())
}
