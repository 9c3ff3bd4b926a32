//! Wire models exchanged with the remote procurement API.

#[cfg(feature = "server")]
pub mod config;
pub mod dashboard;
pub mod favorite;
pub(crate) mod fields;
pub mod notice;
pub mod notification;
pub mod tracking;
