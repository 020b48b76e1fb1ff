pub mod chart;
pub mod period;
pub mod session;
pub mod summary;
pub mod user;
pub mod vehicle;
