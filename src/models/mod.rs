pub mod evaluation;
pub mod machine;
pub mod payout;
pub mod report;
pub mod task;
