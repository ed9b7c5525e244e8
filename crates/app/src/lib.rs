//! Shop domain services and their SQLite persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
