//! Extension traits

mod depot;
mod response;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use response::ResponseExt as _;
pub(crate) use result::ResultExt as _;
