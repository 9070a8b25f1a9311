mod miner_record;
mod tokens_record;

pub use miner_record::*;
pub use tokens_record::*;

use bytemuck::Pod;
use crate::error::ApiError;

/// Reads the fixed layout `T` from the front of an account's data. Accounts may
/// be larger than the layout; only the prefix is read.
fn read_layout<T: Pod>(data: &[u8]) -> Result<T, ApiError> {
    let size = std::mem::size_of::<T>();
    match data.get(..size) {
        Some(bytes) => Ok(bytemuck::pod_read_unaligned(bytes)),
        None => Err(ApiError::MalformedAccountData {
            expected: size,
            actual: data.len(),
        }),
    }
}
