use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseStatusError;

/// 貸出ID - 台帳内で一意、作成後は変更不可
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(u64);

impl LoanId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 次の連番ID（`u64::MAX` の次は存在しない）
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for LoanId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 記録上のステータス
///
/// 職員が明示的に設定した状態。延滞（Overdue）は常に日付から導出されるため、
/// この型では表現できないようにしている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordedStatus {
    Borrowed,
    Returned,
}

impl RecordedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordedStatus::Borrowed => "Borrowed",
            RecordedStatus::Returned => "Returned",
        }
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, RecordedStatus::Returned)
    }
}

/// 実効ステータス（表示・絞り込み用）
///
/// 記録上のステータスと返却期限、基準日から導出される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// 貸出中
    Borrowed,
    /// 返却済み
    Returned,
    /// 延滞中
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Borrowed => "Borrowed",
            LoanStatus::Returned => "Returned",
            LoanStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LoanStatus::Borrowed, LoanStatus::Returned, LoanStatus::Overdue]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// ステータスによる絞り込み条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// すべての貸出
    #[default]
    All,
    /// 実効ステータスが一致する貸出のみ
    Only(LoanStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: LoanStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl From<LoanStatus> for StatusFilter {
    fn from(status: LoanStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<LoanStatus>().map(StatusFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_id_next() {
        let id = LoanId::new(5);
        assert_eq!(id.next(), Some(LoanId::new(6)));
        assert_eq!(id.value(), 5);
    }

    #[test]
    fn test_loan_id_next_at_max() {
        assert_eq!(LoanId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_loan_id_display() {
        assert_eq!(LoanId::from(42).to_string(), "42");
    }

    #[test]
    fn test_loan_status_from_str_ignores_case() {
        assert_eq!("Overdue".parse::<LoanStatus>(), Ok(LoanStatus::Overdue));
        assert_eq!("returned".parse::<LoanStatus>(), Ok(LoanStatus::Returned));
        assert_eq!("BORROWED".parse::<LoanStatus>(), Ok(LoanStatus::Borrowed));
    }

    #[test]
    fn test_loan_status_from_str_invalid() {
        let result = "lost".parse::<LoanStatus>();
        assert_eq!(result, Err(ParseStatusError("lost".to_string())));
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Overdue".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(LoanStatus::Overdue))
        );
        assert!("".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(LoanStatus::Returned));
        assert!(StatusFilter::from(LoanStatus::Overdue).matches(LoanStatus::Overdue));
        assert!(!StatusFilter::from(LoanStatus::Overdue).matches(LoanStatus::Borrowed));
    }

    #[test]
    fn test_recorded_status_as_str() {
        assert_eq!(RecordedStatus::Returned.as_str(), "Returned");
        assert!(RecordedStatus::Returned.is_returned());
        assert!(!RecordedStatus::Borrowed.is_returned());
    }
}
