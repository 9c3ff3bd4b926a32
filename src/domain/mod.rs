//! Domain records exposed by the Radar Inteligente service layer.

pub mod dashboard;
pub mod favorite;
pub mod filter;
pub mod format;
pub mod notice;
pub mod notification;
pub mod session;
pub mod tracking;
pub mod types;
