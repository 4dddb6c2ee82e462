//! Declarative equality filtering over collections of structured records:
//! derive a [`Schema`] from a reference record, accumulate type-checked
//! field constraints in a [`Constraints`] set and apply them with
//! [`filter`] to obtain the passing subsequence.

pub use constraints::Constraints;
pub use filter::{FilterIterator, filter, filter_records};
pub use schema::Schema;

mod constraints;
mod filter;
mod schema;
