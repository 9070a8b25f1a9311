use const_crypto::bs58;
use solana_program::pubkey::Pubkey;

pub const MINER_RECORD: &[u8]              = b"xn-by-sol";
pub const TOKENS_RECORD: &[u8]             = b"sol-xen-minted";

pub const RECORD_KINDS: u8                 = 4;
pub const MINER_PROGRAM_COUNT: usize       = 4;

pub const POINTS_PER_TOKEN: u128           = 1_000;

// Both a miner record and a tokens record start with an 8 byte discriminator.
pub const DISCRIMINATOR_LEN: usize         = 8;

// -- Program Addresses --

/// The miner programs, in the order the minter tracks them. `points_counters[i]`
/// of a tokens record holds the points minted out of `MINER_PROGRAM_IDS[i]`, so
/// this list must never be reordered.
pub const MINER_PROGRAM_IDS: [Pubkey; MINER_PROGRAM_COUNT] = [
    Pubkey::new_from_array(bs58::decode_pubkey("B8HwMYCk1o7EaJhooM4P43BHSk5M8zZHsTeJixqw7LMN")),
    Pubkey::new_from_array(bs58::decode_pubkey("2Ewuie2KnTvMLwGqKWvEM1S2gUStHzDUfrANdJfu45QJ")),
    Pubkey::new_from_array(bs58::decode_pubkey("5dxcK28nyAJdK9fSFuReRREeKnmAGVRpXPhwkZxAxFtJ")),
    Pubkey::new_from_array(bs58::decode_pubkey("DdVCjv7fsPPm64HnepYy5MBfh2bNfkd84Rawey9rdt5S")),
];

pub const MINTER_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(bs58::decode_pubkey("EPAdVJ5S317jJr2ejgxoA52iptvphGXjPLbqXhZH4n8o"));
