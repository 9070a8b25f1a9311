use log::debug;
use solana_sdk::pubkey::Pubkey;
use solxen_api::prelude::*;

use crate::error::CheckError;
use crate::utils::{fetch_with_retry, AccountReader, RetryPolicy};
use super::tally::{compute_unclaimed, ProgramTally, UnclaimedSummary};

/// Account reads made by one check: every kind of every miner program, then the tokens record.
pub const READS_PER_CHECK: usize = MINER_PROGRAM_COUNT * RECORD_KINDS as usize + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepStep {
    MinerRecord { program_index: usize, kind: u8 },
    TokensRecord,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimReport {
    pub user: Pubkey,
    pub programs: [ProgramTally; MINER_PROGRAM_COUNT],
    pub tokens: Option<TokensRecord>,
    pub summary: UnclaimedSummary,
}

impl ClaimReport {
    /// Points already minted out of the given program, if the user ever minted.
    pub fn minted(&self, program_index: usize) -> Option<u64> {
        self.tokens.map(|tokens| tokens.points_counters[program_index])
    }

    pub fn unclaimed(&self, program_index: usize) -> u128 {
        self.summary.by_program.get(&program_index).copied().unwrap_or(0)
    }
}

/// Parses the operator's input and sweeps the chain for that wallet. A bad
/// address fails before anything is read.
pub async fn check_address<R, F>(
    reader: &R,
    policy: &RetryPolicy,
    input: &str,
    on_step: F,
) -> Result<ClaimReport, CheckError>
where
    R: AccountReader,
    F: FnMut(SweepStep),
{
    let user = parse_user_key(input)?;
    sweep(reader, policy, user, on_step).await
}

/// Reads every miner record and the tokens record for `user`, one at a time,
/// and tallies what is left to claim. The first failed read aborts the sweep.
pub async fn sweep<R, F>(
    reader: &R,
    policy: &RetryPolicy,
    user: Pubkey,
    mut on_step: F,
) -> Result<ClaimReport, CheckError>
where
    R: AccountReader,
    F: FnMut(SweepStep),
{
    let mut programs = MINER_PROGRAM_IDS.map(ProgramTally::new);

    for (program_index, tally) in programs.iter_mut().enumerate() {
        for kind in 0..RECORD_KINDS {
            on_step(SweepStep::MinerRecord { program_index, kind });

            let (address, _bump) = miner_record_pda(user, kind, tally.program_id);
            debug!("Miner program {}, kind {}: reading {}", program_index, kind, address);

            let data = fetch_with_retry(policy, || reader.read_account(&address)).await?;
            tally.record(kind, MinerRecord::decode(data.as_deref())?);
        }
        debug!("Miner program {}: {} points mined", program_index, tally.mined);
    }

    on_step(SweepStep::TokensRecord);

    let (address, _bump) = tokens_record_pda(user);
    debug!("Tokens record: reading {}", address);

    let data = fetch_with_retry(policy, || reader.read_account(&address)).await?;
    let tokens = TokensRecord::decode(data.as_deref())?;

    let mined: [u128; MINER_PROGRAM_COUNT] = std::array::from_fn(|i| programs[i].mined);
    let summary = compute_unclaimed(&mined, tokens.as_ref());

    Ok(ClaimReport {
        user,
        programs,
        tokens,
        summary,
    })
}
