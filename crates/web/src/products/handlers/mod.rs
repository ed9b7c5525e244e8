//! Product Handlers

pub(crate) mod index;
