//! Local file statuses for Team Foundation Version Control pending changes.
//!
//! The server reports each pending change with a raw change-type string such
//! as `"edit, source rename"`. [`core::change_type::parse_change_types`] turns
//! it into [`core::change_type::ChangeType`] tokens and
//! [`core::status_provider::StatusProvider`] maps a change onto exactly one
//! [`core::server_status::ServerStatus`], which callers consume through a
//! [`core::server_status::StatusVisitor`].

pub mod commands;
pub mod core;
pub mod ui;
