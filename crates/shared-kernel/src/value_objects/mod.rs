// crates/shared-kernel/src/value_objects/mod.rs
pub mod problem;
pub mod way_count;

pub use problem::Problem;
pub use way_count::WayCount;
