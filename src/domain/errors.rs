use thiserror::Error;

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnLoanError {
    /// 既に返却済み
    AlreadyReturned,
}

/// ステータス文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid loan status: {0}")]
pub struct ParseStatusError(pub String);
