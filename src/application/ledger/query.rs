use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    LoanStatus, StatusFilter,
    loan::{LoanRecord, derive_status},
};

/// 台帳の検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerQuery {
    /// 会員名・メールアドレス・書籍タイトルに対する部分一致（大文字小文字を区別しない）
    pub search_text: Option<String>,
    pub status_filter: StatusFilter,
}

impl LedgerQuery {
    pub fn new(search_text: impl Into<String>, status_filter: StatusFilter) -> Self {
        Self {
            search_text: Some(search_text.into()),
            status_filter,
        }
    }

    fn matches_search(&self, record: &LoanRecord) -> bool {
        let needle = match self.search_text.as_deref() {
            None | Some("") => return true,
            Some(text) => text.to_lowercase(),
        };

        [
            &record.member_name,
            &record.member_email,
            &record.book_title,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// 検索条件とステータス条件の両方を満たすか
    pub fn matches(&self, record: &LoanRecord, reference_date: NaiveDate) -> bool {
        self.matches_search(record)
            && self
                .status_filter
                .matches(derive_status(record, reference_date))
    }
}

/// 純粋関数：台帳を検索する
///
/// 入力の順序を保ったまま条件に一致する記録を返す（並べ替えなし）。
/// 入力は変更しない。結果を再度入力として渡すこともできる。
pub fn query_ledger<'a>(
    records: impl IntoIterator<Item = &'a LoanRecord>,
    query: &LedgerQuery,
    reference_date: NaiveDate,
) -> Vec<&'a LoanRecord> {
    let matched: Vec<_> = records
        .into_iter()
        .filter(|record| query.matches(record, reference_date))
        .collect();

    tracing::debug!(
        search_text = ?query.search_text,
        status_filter = ?query.status_filter,
        %reference_date,
        matched = matched.len(),
        "ledger queried"
    );

    matched
}

/// 純粋関数：会員の貸出履歴
///
/// メールアドレスの一致は大文字小文字を区別しない（ASCII）。
pub fn member_history<'a>(
    records: impl IntoIterator<Item = &'a LoanRecord>,
    member_email: &str,
) -> Vec<&'a LoanRecord> {
    records
        .into_iter()
        .filter(|record| record.member_email.eq_ignore_ascii_case(member_email))
        .collect()
}

/// 実効ステータスごとの件数（ダッシュボード用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total: usize,
    pub borrowed: usize,
    pub returned: usize,
    pub overdue: usize,
}

/// 純粋関数：実効ステータスごとに集計する
pub fn summarize<'a>(
    records: impl IntoIterator<Item = &'a LoanRecord>,
    reference_date: NaiveDate,
) -> LedgerSummary {
    records
        .into_iter()
        .fold(LedgerSummary::default(), |mut summary, record| {
            summary.total += 1;
            match derive_status(record, reference_date) {
                LoanStatus::Borrowed => summary.borrowed += 1,
                LoanStatus::Returned => summary.returned += 1,
                LoanStatus::Overdue => summary.overdue += 1,
            }
            summary
        })
}
