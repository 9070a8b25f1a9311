use std::str::FromStr;
use solana_program::pubkey::Pubkey;
use crate::consts::*;
use crate::error::ApiError;

/// Address of the record a miner program keeps for `user` under the given kind.
pub fn miner_record_pda(user: Pubkey, kind: u8, program_id: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MINER_RECORD, user.as_ref(), &[kind], program_id.as_ref()],
        &program_id,
    )
}

/// Address of the minter's per-user tokens record.
pub fn tokens_record_pda(user: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKENS_RECORD, user.as_ref()], &MINTER_PROGRAM_ID)
}

/// Parses a base58 wallet address as typed by the operator.
pub fn parse_user_key(input: &str) -> Result<Pubkey, ApiError> {
    let input = input.trim();
    Pubkey::from_str(input).map_err(|_| ApiError::InvalidAddress(input.to_string()))
}
