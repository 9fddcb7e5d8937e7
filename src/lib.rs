pub mod config;
pub mod error;
pub mod logging;
pub mod lottery;
pub mod session;
