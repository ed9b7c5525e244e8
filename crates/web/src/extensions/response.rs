//! Response helper extensions.

use salvo::{
    http::{StatusCode, header::LOCATION},
    prelude::{Response, StatusError},
};

use crate::extensions::*;

pub(crate) trait ResponseExt {
    /// Answer with `303 See Other` pointing at `location`.
    fn see_other(&mut self, location: &str) -> Result<(), StatusError>;
}

impl ResponseExt for Response {
    fn see_other(&mut self, location: &str) -> Result<(), StatusError> {
        self.add_header(LOCATION, location, true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::SEE_OTHER);

        Ok(())
    }
}
