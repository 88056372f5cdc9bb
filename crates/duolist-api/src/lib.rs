//! Remote data fetching for duolist.
//!
//! [`HttpRecordSource`] talks to the REST backend, [`RequestCache`] sits in
//! front of any [`RecordSource`] and makes sure identical page requests are
//! issued once.

pub mod cache;
pub mod error;
pub mod filter;
pub mod source;

pub use cache::{RequestCache, DEFAULT_CACHE_TTL};
pub use error::FetchError;
pub use filter::post_filter;
pub use source::{parse_total_count, FetchedPage, HttpRecordSource, RecordSource, TOTAL_COUNT_HEADER};
