//! Data models for parser test runs
//!
//! Categories group test cases, test cases map to report artifacts, and an
//! invocation ties the two together as one parser command line.

mod category;
mod invocation;
mod test_case;

pub use category::Category;
pub use invocation::Invocation;
pub use test_case::TestCase;
