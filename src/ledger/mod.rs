//! Ledger entry model, month calendar, and recurrence expansion.

pub mod category;
pub mod entry;
pub mod month;
pub mod recurring;
pub mod store;

pub use category::{is_accumulating_category, ACCUMULATING_KEYWORDS};
pub use entry::{Entry, EntryKind, Recurrence};
pub use month::{MonthWindow, YearMonth};
pub use recurring::contributes;
pub use store::EntryStore;
