//! ### Core
//! Pending-change model, status classification and the tf client

pub mod app;
pub mod change_type;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod pending_change;
pub mod probe;
pub mod server_status;
pub mod status_provider;
pub mod tf;
pub mod utils;
