use crate::domain::{LoanId, commands::OpenLoan, loan::LoanRecord};
use chrono::NaiveDate;

const DEMO_REFERENCE_DATE: NaiveDate = ymd(2025, 11, 18);

/// Reference date the demo records were written against
pub fn demo_reference_date() -> NaiveDate {
    DEMO_REFERENCE_DATE
}

/// Mock borrow records for demos
///
/// At the demo reference date: ids 1 and 4 are Borrowed, 2 and 5 are Overdue,
/// 3 is Returned.
pub fn demo_records() -> Vec<LoanRecord> {
    vec![
        demo(
            1,
            "Alex Johnson",
            "alex@example.com",
            "The Midnight Library",
            ymd(2025, 11, 10),
            ymd(2025, 11, 24),
        ),
        demo(
            2,
            "Sarah Chen",
            "sarah@example.com",
            "Atomic Habits",
            ymd(2025, 11, 1),
            ymd(2025, 11, 15),
        ),
        demo(
            3,
            "James Torres",
            "james@example.com",
            "Dune",
            ymd(2025, 10, 20),
            ymd(2025, 11, 3),
        )
        .returned_on(ymd(2025, 11, 3)),
        demo(
            4,
            "Emma Williams",
            "emma@example.com",
            "Project Hail Mary",
            ymd(2025, 11, 5),
            ymd(2025, 11, 19),
        ),
        demo(
            5,
            "Michael Brown",
            "michael@example.com",
            "The Psychology of Money",
            ymd(2025, 10, 28),
            ymd(2025, 11, 11),
        ),
    ]
}

fn demo(
    id: u64,
    member_name: &str,
    member_email: &str,
    book_title: &str,
    borrowed_date: NaiveDate,
    due_date: NaiveDate,
) -> LoanRecord {
    LoanRecord::open(
        LoanId::new(id),
        OpenLoan {
            member_name: member_name.to_string(),
            member_email: member_email.to_string(),
            book_title: book_title.to_string(),
            borrowed_date,
            due_date,
        },
    )
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo date"),
    }
}
