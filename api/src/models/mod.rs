mod error;
pub use error::{Error, ErrorBody, Result};

pub mod scores;
