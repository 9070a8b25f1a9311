use bytemuck_derive::{Pod, Zeroable};
use crate::consts::*;
use crate::error::ApiError;
use super::read_layout;

// Each points counter sits in a 16 byte slot; the counter is the low 8 bytes.
const COUNTER_SLOT_LEN: usize = 16;

/// On-chain layout of the minter's per-user tokens record (little-endian).
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct TokensRecordLayout {
    discriminator: [u8; DISCRIMINATOR_LEN],
    points_counters: [[u8; COUNTER_SLOT_LEN]; MINER_PROGRAM_COUNT], // offsets 8, 24, 40, 56
    tokens_minted: [u8; 8],                                          // offset 72
}

const _: () = assert!(std::mem::size_of::<TokensRecordLayout>() == 80);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokensRecord {
    /// Points already minted, positionally matched with `MINER_PROGRAM_IDS`.
    pub points_counters: [u64; MINER_PROGRAM_COUNT],
    pub tokens_minted: u64,
}

impl TokensRecord {
    pub const SIZE: usize = std::mem::size_of::<TokensRecordLayout>();

    /// Decodes the tokens record; `None` means the user has never minted.
    pub fn decode(data: Option<&[u8]>) -> Result<Option<Self>, ApiError> {
        let Some(data) = data else {
            return Ok(None);
        };

        let layout: TokensRecordLayout = read_layout(data)?;
        Ok(Some(Self {
            points_counters: layout.points_counters.map(|slot| {
                let mut low = [0u8; 8];
                low.copy_from_slice(&slot[..8]);
                u64::from_le_bytes(low)
            }),
            tokens_minted: u64::from_le_bytes(layout.tokens_minted),
        }))
    }

    pub fn total_minted(&self) -> u128 {
        self.points_counters.iter().map(|&points| points as u128).sum()
    }
}
