//! Counter selection.
//!
//! ```text
//! catalog ──filter race/tier──▶ candidates (base order)
//!         ──stable sort by policy vs opponent──▶ top N  = CounterResult
//! results ──group by best counter──▶ CounterReport
//! ```
//!
//! All entry points borrow the catalog immutably and return views into it, so
//! they can run concurrently on one snapshot.

mod report;
mod request;
mod selector;

pub use report::{CounterEntry, CounterGroup, CounterReport, build_counter_report};
pub use request::{CounterRequest, CounterResponse};
pub use selector::{CounterResult, CounterSelector, Counters};
