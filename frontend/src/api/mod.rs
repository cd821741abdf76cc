mod attendance;
pub mod client;
mod dashboard;
mod employees;
pub mod types;

pub use client::*;
pub use types::*;
