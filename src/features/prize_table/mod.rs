use crate::error::{LottoError, LottoResult};
use crate::types::{BonusNumber, MatchResult, NumberSet, PrizeTier, Ticket, LOTTO_SIZE};

struct PrizeRule {
    match_count: u8,
    requires_bonus: bool,
    payout: u64,
}

/// Indexed by `PrizeTier`, weakest first.
static RULES: [PrizeRule; PrizeTier::COUNT] = [
    PrizeRule {
        match_count: 0,
        requires_bonus: false,
        payout: 0,
    },
    PrizeRule {
        match_count: 3,
        requires_bonus: false,
        payout: 5_000,
    },
    PrizeRule {
        match_count: 4,
        requires_bonus: false,
        payout: 50_000,
    },
    PrizeRule {
        match_count: 5,
        requires_bonus: false,
        payout: 1_500_000,
    },
    PrizeRule {
        match_count: 5,
        requires_bonus: true,
        payout: 30_000_000,
    },
    PrizeRule {
        match_count: 6,
        requires_bonus: false,
        payout: 2_000_000_000,
    },
];

impl PrizeTier {
    fn rule(self) -> &'static PrizeRule {
        &RULES[self.index()]
    }

    pub fn payout(self) -> u64 {
        self.rule().payout
    }

    /// Matches needed to reach this tier. Zero for `None`.
    pub fn match_count(self) -> u8 {
        self.rule().match_count
    }

    pub fn requires_bonus(self) -> bool {
        self.rule().requires_bonus
    }
}

pub struct PrizeTable;

impl PrizeTable {
    /// Maps a match outcome to its tier.
    ///
    /// Five matches are split by the bonus ball; every other count ignores it.
    pub fn classify(match_count: u8, bonus_hit: bool) -> LottoResult<PrizeTier> {
        let tier = match (match_count, bonus_hit) {
            (6, _) => PrizeTier::First,
            (5, true) => PrizeTier::Second,
            (5, false) => PrizeTier::Third,
            (4, _) => PrizeTier::Fourth,
            (3, _) => PrizeTier::Fifth,
            (0..=2, _) => PrizeTier::None,
            _ => return Err(LottoError::MatchCountOutOfRange(match_count)),
        };
        Ok(tier)
    }

    pub fn classify_result(result: MatchResult) -> LottoResult<PrizeTier> {
        Self::classify(result.match_count, result.bonus_hit)
    }

    /// Compares one ticket against the winning numbers and bonus ball.
    pub fn score(ticket: &Ticket, winning: &NumberSet, bonus: BonusNumber) -> MatchResult {
        let shared = winning.intersection_size(&ticket.numbers);
        debug_assert!(shared <= LOTTO_SIZE);
        MatchResult {
            match_count: shared as u8,
            bonus_hit: ticket.numbers.contains(bonus.value()),
        }
    }
}
