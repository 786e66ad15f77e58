//! HTTP request handlers.

pub(crate) mod projects;
pub(crate) mod theme;
