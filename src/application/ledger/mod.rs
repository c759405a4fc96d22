mod errors;
mod query;
mod store;

pub use errors::{LedgerError, Result};
pub use query::{LedgerQuery, LedgerSummary, member_history, query_ledger, summarize};
pub use store::LoanRecordStore;
