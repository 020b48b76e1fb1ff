pub mod backup;
pub mod chart;
pub mod estimate;
pub mod log;
pub mod normalize;
pub mod period;
pub mod recover;
pub mod sessions;
pub mod summary;
pub mod vehicle;
