#![allow(dead_code)]

use borrow_ledger::adapters::mock::{FixedClock, seed};
use borrow_ledger::api::{handlers::AppState, router::create_router};
use borrow_ledger::application::ledger::LoanRecordStore;
use borrow_ledger::domain::{LoanId, commands::OpenLoan, loan::LoanRecord};
use chrono::NaiveDate;
use std::sync::Arc;

/// テスト用の日付を作成
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// テスト用の貸出記録を作成
pub fn loan(id: u64, member: &str, title: &str, borrowed: NaiveDate, due: NaiveDate) -> LoanRecord {
    let email = format!(
        "{}@example.com",
        member.split_whitespace().next().unwrap_or(member).to_lowercase()
    );

    LoanRecord::open(
        LoanId::new(id),
        OpenLoan {
            member_name: member.to_string(),
            member_email: email,
            book_title: title.to_string(),
            borrowed_date: borrowed,
            due_date: due,
        },
    )
}

/// デモ記録を読み込んだルーターを、デモの基準日で作成
pub fn demo_app() -> axum::Router {
    let store = LoanRecordStore::with_records(seed::demo_records()).expect("demo records are valid");
    app_with(store, seed::demo_reference_date())
}

/// 任意のストアと基準日でルーターを作成
pub fn app_with(store: LoanRecordStore, today: NaiveDate) -> axum::Router {
    let app_state = Arc::new(AppState::new(store, Arc::new(FixedClock::new(today))));
    create_router(app_state)
}
