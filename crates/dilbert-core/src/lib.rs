pub mod config;
pub mod logging;

pub mod checksum;
pub mod date;
pub mod error;
pub mod http;
pub mod image;
pub mod locate;
pub mod page;
pub mod pipeline;
pub mod storage;

pub use date::{validate_date, StripDate};
pub use error::{ErrorKind, StripError};
