use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LoanId, LoanStatus, RecordedStatus, ReturnLoanError, commands::OpenLoan};

/// 貸出記録 - 1人の会員による1冊の書籍の1回の貸出
///
/// 会員・書籍は名前で保持する非正規化データで、参照整合性は持たない。
///
/// 不変条件：
/// - `due_date >= borrowed_date`（台帳への追加時に検証）
/// - `returned_date` は返却済みの場合のみ存在する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,

    // 借り手
    pub member_name: String,
    pub member_email: String,

    // 貸出対象
    pub book_title: String,

    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub recorded_status: RecordedStatus,
}

impl LoanRecord {
    /// 貸出中の記録を作成する
    pub fn open(id: LoanId, cmd: OpenLoan) -> Self {
        Self {
            id,
            member_name: cmd.member_name,
            member_email: cmd.member_email,
            book_title: cmd.book_title,
            borrowed_date: cmd.borrowed_date,
            due_date: cmd.due_date,
            returned_date: None,
            recorded_status: RecordedStatus::Borrowed,
        }
    }

    /// 返却期限が貸出日以降か
    pub fn has_valid_period(&self) -> bool {
        self.due_date >= self.borrowed_date
    }

    /// 返却済みとしてマークした記録を返す（初期データ構築用）
    pub fn returned_on(self, returned_date: NaiveDate) -> Self {
        Self {
            returned_date: Some(returned_date),
            recorded_status: RecordedStatus::Returned,
            ..self
        }
    }
}

/// 純粋関数：実効ステータスを導出する
///
/// ビジネスルール：
/// - 返却済みは常にReturned（日付比較より優先）
/// - 返却期限が基準日より前ならOverdue
/// - 返却期限当日はまだBorrowed
///
/// 基準日は必ず引数で受け取り、現在時刻を暗黙に参照しない。
pub fn derive_status(record: &LoanRecord, reference_date: NaiveDate) -> LoanStatus {
    match record.recorded_status {
        RecordedStatus::Returned => LoanStatus::Returned,
        RecordedStatus::Borrowed if record.due_date < reference_date => LoanStatus::Overdue,
        RecordedStatus::Borrowed => LoanStatus::Borrowed,
    }
}

/// 純粋関数：延滞判定
pub fn is_overdue(record: &LoanRecord, reference_date: NaiveDate) -> bool {
    derive_status(record, reference_date) == LoanStatus::Overdue
}

/// 純粋関数：書籍を返却する
///
/// 延滞していても返却は受け付ける。副作用なし。返却済みの新しい記録を返す。
pub fn return_loan(
    record: &LoanRecord,
    returned_date: NaiveDate,
) -> Result<LoanRecord, ReturnLoanError> {
    if record.recorded_status.is_returned() {
        return Err(ReturnLoanError::AlreadyReturned);
    }

    Ok(record.clone().returned_on(returned_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn borrowed_record(due_date: NaiveDate) -> LoanRecord {
        LoanRecord::open(
            LoanId::new(1),
            OpenLoan {
                member_name: "James Torres".to_string(),
                member_email: "james@example.com".to_string(),
                book_title: "Dune".to_string(),
                borrowed_date: date(2025, 2, 28),
                due_date,
            },
        )
    }

    #[test]
    fn test_open_creates_borrowed_record() {
        let record = borrowed_record(date(2025, 3, 14));

        assert_eq!(record.recorded_status, RecordedStatus::Borrowed);
        assert_eq!(record.returned_date, None);
        assert!(record.has_valid_period());
    }

    #[test]
    fn test_has_valid_period_rejects_due_before_borrowed() {
        let record = borrowed_record(date(2025, 2, 27));
        assert!(!record.has_valid_period());
    }

    #[test]
    fn test_has_valid_period_accepts_same_day() {
        let record = borrowed_record(date(2025, 2, 28));
        assert!(record.has_valid_period());
    }

    // derive_status() のテスト
    #[test]
    fn test_derive_status_overdue_after_due_date() {
        let record = borrowed_record(date(2025, 3, 14));
        assert_eq!(
            derive_status(&record, date(2025, 3, 18)),
            LoanStatus::Overdue
        );
    }

    #[test]
    fn test_derive_status_borrowed_on_due_date() {
        let record = borrowed_record(date(2025, 3, 14));
        assert_eq!(
            derive_status(&record, date(2025, 3, 14)),
            LoanStatus::Borrowed
        );
    }

    #[test]
    fn test_derive_status_borrowed_before_due_date() {
        let record = borrowed_record(date(2025, 3, 14));
        assert_eq!(
            derive_status(&record, date(2025, 3, 1)),
            LoanStatus::Borrowed
        );
    }

    #[test]
    fn test_derive_status_returned_is_sticky() {
        let record = borrowed_record(date(2025, 3, 14)).returned_on(date(2025, 3, 20));

        // 期限の前後に関わらずReturned
        for reference in [date(2025, 1, 1), date(2025, 3, 14), date(2030, 12, 31)] {
            assert_eq!(derive_status(&record, reference), LoanStatus::Returned);
        }
    }

    #[test]
    fn test_is_overdue() {
        let record = borrowed_record(date(2025, 3, 14));
        assert!(is_overdue(&record, date(2025, 3, 15)));
        assert!(!is_overdue(&record, date(2025, 3, 14)));

        let returned = record.returned_on(date(2025, 3, 20));
        assert!(!is_overdue(&returned, date(2025, 4, 1)));
    }

    // return_loan() のテスト
    #[test]
    fn test_return_loan_success() {
        let record = borrowed_record(date(2025, 3, 14));

        let returned = return_loan(&record, date(2025, 3, 12)).unwrap();

        assert_eq!(returned.recorded_status, RecordedStatus::Returned);
        assert_eq!(returned.returned_date, Some(date(2025, 3, 12)));
        assert_eq!(returned.id, record.id);
        assert_eq!(returned.due_date, record.due_date);
    }

    #[test]
    fn test_return_loan_accepts_overdue() {
        let record = borrowed_record(date(2025, 3, 14));

        let returned = return_loan(&record, date(2025, 4, 2)).unwrap();

        assert_eq!(returned.recorded_status, RecordedStatus::Returned);
    }

    #[test]
    fn test_return_loan_fails_when_already_returned() {
        let record = borrowed_record(date(2025, 3, 14)).returned_on(date(2025, 3, 12));

        let result = return_loan(&record, date(2025, 3, 13));
        assert_eq!(result, Err(ReturnLoanError::AlreadyReturned));
    }
}
