pub mod config;
pub mod drill;
pub mod log;
pub mod persist;
pub mod session;
