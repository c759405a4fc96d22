use crate::domain::{
    LoanId, ReturnLoanError,
    commands::OpenLoan,
    loan::{self, LoanRecord},
};
use chrono::NaiveDate;

use super::errors::{LedgerError, Result};

/// 貸出記録ストア
///
/// 追記専用の台帳。記録は削除されず、返却時に一度だけ更新される。
/// 呼び出し側が値として所有し、グローバルな状態は持たない。
/// 変更は単一の呼び出し元から同期的に行われることを前提とする。
#[derive(Debug, Clone, Default)]
pub struct LoanRecordStore {
    records: Vec<LoanRecord>,
}

impl LoanRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録を順に追加してストアを構築する
    ///
    /// 最初に失敗した記録のエラーを返す。
    pub fn with_records(records: impl IntoIterator<Item = LoanRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// 貸出記録を追加する
    ///
    /// # エラー
    /// - Validation: 返却期限が貸出日より前
    /// - DuplicateLoanId: 同じIDの記録が既に存在する
    pub fn add(&mut self, record: LoanRecord) -> Result<()> {
        if !record.has_valid_period() {
            tracing::warn!(loan_id = %record.id, "rejected loan with due date before borrowed date");
            return Err(LedgerError::Validation {
                borrowed_date: record.borrowed_date,
                due_date: record.due_date,
            });
        }

        if self.get(record.id).is_some() {
            tracing::warn!(loan_id = %record.id, "rejected duplicate loan id");
            return Err(LedgerError::DuplicateLoanId(record.id));
        }

        tracing::info!(loan_id = %record.id, book_title = %record.book_title, "loan recorded");
        self.records.push(record);
        Ok(())
    }

    /// 新しいIDを採番して貸出を開始する
    ///
    /// # エラー
    /// - LoanIdsExhausted: 最大のIDが `u64::MAX`
    /// - Validation: 返却期限が貸出日より前
    pub fn open_loan(&mut self, cmd: OpenLoan) -> Result<LoanRecord> {
        let id = self
            .next_id()
            .ok_or(LedgerError::LoanIdsExhausted(LoanId::new(u64::MAX)))?;
        let record = LoanRecord::open(id, cmd);
        self.add(record.clone())?;
        Ok(record)
    }

    /// 貸出を返却済みにする
    ///
    /// 既に返却済みの場合は何もしない（最初の返却日を保持する）。
    ///
    /// # エラー
    /// - NotFound: 指定IDの記録が存在しない
    pub fn mark_returned(&mut self, id: LoanId, returned_date: NaiveDate) -> Result<&LoanRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(LedgerError::NotFound(id))?;

        match loan::return_loan(&self.records[index], returned_date) {
            Ok(returned) => {
                tracing::info!(loan_id = %id, %returned_date, "loan returned");
                self.records[index] = returned;
            }
            Err(ReturnLoanError::AlreadyReturned) => {
                tracing::debug!(loan_id = %id, "loan already returned, nothing to do");
            }
        }

        Ok(&self.records[index])
    }

    /// 全記録（追加順、読み取り専用）
    pub fn all(&self) -> &[LoanRecord] {
        &self.records
    }

    /// IDで記録を取得する
    pub fn get(&self, id: LoanId) -> Option<&LoanRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// 既存のどのIDよりも大きい次のID（空なら1）
    ///
    /// 最大のIDが `u64::MAX` の場合は `None`。
    pub fn next_id(&self) -> Option<LoanId> {
        match self.records.iter().map(|record| record.id).max() {
            Some(last) => last.next(),
            None => Some(LoanId::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
