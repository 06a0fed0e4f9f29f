pub mod aggregate;
pub mod counts;
pub mod pie;

pub use aggregate::{
    aggregate, aggregate_with_policy, AggregationPolicy, AggregationResult, Bucket, OtherBucket,
    StatusAggregator, SIMPLE_SLOTS,
};
pub use counts::{StatusCount, StatusCounts};
pub use pie::{PiePayload, PieSlice, PieStyle};
