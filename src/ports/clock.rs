use chrono::NaiveDate;

/// 時計ポート
///
/// 延滞判定の基準日を供給する。台帳のロジックは現在時刻を直接参照せず、
/// 呼び出し側がこのポートから得た日付を渡す。
pub trait Clock: Send + Sync {
    /// 基準日（時刻を含まない暦日）
    fn today(&self) -> NaiveDate;
}
