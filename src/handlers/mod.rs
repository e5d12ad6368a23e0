//! Command Handlers module
//!
//! Commands are validated by the aggregate, applied, and persisted through
//! the record store.

mod commands;
mod service;


pub use commands::*;
pub use service::HrService;
