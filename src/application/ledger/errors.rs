use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::LoanId;

/// 貸出台帳アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// 返却期限が貸出日より前（入力を修正しない限り再試行不可）
    #[error("Due date {due_date} is before borrowed date {borrowed_date}")]
    Validation {
        borrowed_date: NaiveDate,
        due_date: NaiveDate,
    },

    /// 貸出が見つからない（呼び出し側の古い参照）
    #[error("Loan {0} not found")]
    NotFound(LoanId),

    /// 同じIDの貸出が既に存在する
    #[error("Loan {0} already exists")]
    DuplicateLoanId(LoanId),

    /// 採番できるIDが残っていない
    #[error("No loan ids left after {0}")]
    LoanIdsExhausted(LoanId),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LedgerError>;
