//! ### Commands


pub mod models;
pub mod status;
pub mod utils;
pub mod utils_changes;
