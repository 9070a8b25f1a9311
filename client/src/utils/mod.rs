mod reader;
mod retry;

pub use reader::*;
pub use retry::*;
