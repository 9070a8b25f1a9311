use std::collections::BTreeMap;
use solana_sdk::pubkey::Pubkey;
use solxen_api::prelude::*;

/// Everything one miner program holds for a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramTally {
    pub program_id: Pubkey,
    pub kinds: [Option<MinerRecord>; RECORD_KINDS as usize],
    pub mined: u128,
}

impl ProgramTally {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            kinds: [None; RECORD_KINDS as usize],
            mined: 0,
        }
    }

    pub fn record(&mut self, kind: u8, record: Option<MinerRecord>) {
        if let Some(record) = record {
            self.mined += record.points as u128;
        }
        self.kinds[kind as usize] = record;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnclaimedSummary {
    pub total_mined: u128,
    /// `None` when the user has no tokens record, i.e. has never minted.
    pub total_minted: Option<u128>,
    /// Unclaimed points keyed by index into `MINER_PROGRAM_IDS`; zero entries are left out.
    pub by_program: BTreeMap<usize, u128>,
    pub total_unclaimed: u128,
    pub unclaimed_tokens: u128,
}

/// Folds mined points against what the minter has already converted.
pub fn compute_unclaimed(
    mined: &[u128; MINER_PROGRAM_COUNT],
    tokens: Option<&TokensRecord>,
) -> UnclaimedSummary {
    let total_mined: u128 = mined.iter().sum();

    let (by_program, total_minted, total_unclaimed) = match tokens {
        Some(tokens) => {
            let total_minted = tokens.total_minted();
            let by_program: BTreeMap<usize, u128> = mined
                .iter()
                .zip(tokens.points_counters.iter())
                .map(|(&program_mined, &minted)| program_mined.saturating_sub(minted as u128))
                .enumerate()
                .filter(|&(_, unclaimed)| unclaimed > 0)
                .collect();
            (by_program, Some(total_minted), total_mined.saturating_sub(total_minted))
        }
        None => {
            let by_program: BTreeMap<usize, u128> = mined
                .iter()
                .copied()
                .enumerate()
                .filter(|&(_, unclaimed)| unclaimed > 0)
                .collect();
            (by_program, None, total_mined)
        }
    };

    UnclaimedSummary {
        total_mined,
        total_minted,
        by_program,
        total_unclaimed,
        unclaimed_tokens: total_unclaimed / POINTS_PER_TOKEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(points_counters: [u64; 4]) -> TokensRecord {
        TokensRecord {
            points_counters,
            tokens_minted: 0,
        }
    }

    #[test]
    fn test_nothing_mined_nothing_minted() {
        let summary = compute_unclaimed(&[0; 4], None);

        assert_eq!(summary.total_mined, 0);
        assert_eq!(summary.total_minted, None);
        assert_eq!(summary.total_unclaimed, 0);
        assert_eq!(summary.unclaimed_tokens, 0);
        assert!(summary.by_program.is_empty());
    }

    #[test]
    fn test_partially_minted() {
        let summary = compute_unclaimed(&[5000, 0, 0, 0], Some(&tokens([3000, 0, 0, 0])));

        assert_eq!(summary.by_program, BTreeMap::from([(0, 2000)]));
        assert_eq!(summary.total_minted, Some(3000));
        assert_eq!(summary.total_unclaimed, 2000);
        assert_eq!(summary.unclaimed_tokens, 2);
    }

    #[test]
    fn test_minted_exceeds_mined() {
        let summary = compute_unclaimed(&[500, 0, 0, 0], Some(&tokens([800, 0, 0, 0])));

        assert!(summary.by_program.is_empty());
        assert_eq!(summary.total_unclaimed, 0);
        assert_eq!(summary.unclaimed_tokens, 0);
    }

    #[test]
    fn test_counters_match_programs_by_position() {
        let summary = compute_unclaimed(&[100, 2500, 0, 900], Some(&tokens([0, 500, 0, 1000])));

        assert_eq!(summary.by_program, BTreeMap::from([(0, 100), (1, 2000)]));
        // Totals are netted as a whole, not per program.
        assert_eq!(summary.total_unclaimed, 3500 - 1500);
        assert_eq!(summary.unclaimed_tokens, 2);
    }

    #[test]
    fn test_never_minted() {
        let summary = compute_unclaimed(&[1999, 0, 1, 0], None);

        assert_eq!(summary.by_program, BTreeMap::from([(0, 1999), (2, 1)]));
        assert_eq!(summary.total_unclaimed, 2000);
        assert_eq!(summary.unclaimed_tokens, 2);
    }

    #[test]
    fn test_totals_beyond_u64() {
        let mined = [u64::MAX as u128; 4];
        let summary = compute_unclaimed(&mined, None);

        assert_eq!(summary.total_mined, u64::MAX as u128 * 4);
        assert_eq!(summary.unclaimed_tokens, u64::MAX as u128 * 4 / 1000);
    }

    #[test]
    fn test_program_tally() {
        let mut tally = ProgramTally::new(MINER_PROGRAM_IDS[0]);
        tally.record(0, Some(MinerRecord { hash_count: 5, superhash_count: 2, points: 1000 }));
        tally.record(1, None);
        tally.record(3, Some(MinerRecord { hash_count: 1, superhash_count: 0, points: 24 }));

        assert_eq!(tally.mined, 1024);
        assert!(tally.kinds[1].is_none());
        assert!(tally.kinds[2].is_none());
        assert_eq!(tally.kinds[3].map(|r| r.points), Some(24));
    }
}
