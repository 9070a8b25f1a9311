pub mod consts;
pub mod error;
pub mod utils;
pub mod claims;

pub use error::*;
pub use utils::*;
pub use claims::*;
