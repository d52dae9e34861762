//! Command implementations for create-article

pub mod create;
pub mod helpers;
