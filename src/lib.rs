pub mod error;
pub mod excel;
pub mod report;
pub mod utils;

pub use error::{InspectError, Result};
