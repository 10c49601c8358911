//! deejay - personal site for a DJ with a contact form
//!
//! Visitors submit name, email and message. Valid submissions are stored
//! in a `messages` table that is provisioned on demand; invalid ones are
//! re-rendered with per-field errors.

pub mod cli;
pub mod contact;
pub mod http_server;
pub mod observability;
pub mod store;
