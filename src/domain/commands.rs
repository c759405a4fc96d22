use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// コマンド：貸出を開始する
///
/// IDは台帳側で採番する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenLoan {
    pub member_name: String,
    pub member_email: String,
    pub book_title: String,
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
}

