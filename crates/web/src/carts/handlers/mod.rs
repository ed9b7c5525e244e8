//! Cart Handlers

pub(crate) mod get;
pub(crate) mod receipt;
