pub mod consts;
pub mod error;
pub mod pda;
pub mod state;

pub use crate::consts::*;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::pda::*;
    pub use crate::state::*;
}
