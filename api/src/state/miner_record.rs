use bytemuck_derive::{Pod, Zeroable};
use crate::consts::*;
use crate::error::ApiError;
use super::read_layout;

/// On-chain layout of a miner program's per-user record (little-endian).
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct MinerRecordLayout {
    discriminator: [u8; DISCRIMINATOR_LEN],
    hashes: [u8; 8],      // offset 8
    superhashes: [u8; 4], // offset 16
    points: [u8; 8],      // offset 20
}

const _: () = assert!(std::mem::size_of::<MinerRecordLayout>() == 28);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinerRecord {
    pub hash_count: u64,
    pub superhash_count: u32,
    pub points: u64,
}

impl MinerRecord {
    pub const SIZE: usize = std::mem::size_of::<MinerRecordLayout>();

    /// Decodes a miner record. An account that does not exist (`None`) is not an
    /// error, it simply holds no record.
    pub fn decode(data: Option<&[u8]>) -> Result<Option<Self>, ApiError> {
        let Some(data) = data else {
            return Ok(None);
        };

        let layout: MinerRecordLayout = read_layout(data)?;
        Ok(Some(Self {
            hash_count: u64::from_le_bytes(layout.hashes),
            superhash_count: u32::from_le_bytes(layout.superhashes),
            points: u64::from_le_bytes(layout.points),
        }))
    }
}
