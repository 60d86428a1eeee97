//! Budget filtering and day-plan assembly over canonical places.
//!
//! Both stages are pure, synchronous transformations: the filter keeps and
//! ranks affordable places, the builder partitions them into buckets and
//! fills an ordered slot template. Given identical inputs the output is
//! identical; there is no hidden state and nothing here performs I/O.

pub mod buckets;
pub mod builder;
pub mod filter;
pub mod plan;

pub use buckets::{bucket_for, Bucket};
pub use builder::build_plan;
pub use filter::filter_by_budget;
pub use plan::{default_template, Plan, Slot, SlotSpec};
