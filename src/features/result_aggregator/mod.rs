use crate::error::{LottoError, LottoResult};
use crate::features::prize_table::PrizeTable;
use crate::types::{BonusNumber, NumberSet, PrizeTier, PurchaseBatch, ResultSummary};

pub struct ResultAggregator;

impl ResultAggregator {
    /// Scores every ticket in `batch` and tallies the tiers and total payout.
    pub fn evaluate(
        batch: &PurchaseBatch,
        winning: &NumberSet,
        bonus: BonusNumber,
    ) -> LottoResult<ResultSummary> {
        if winning.contains(bonus.value()) {
            return Err(LottoError::BonusInWinningNumbers(bonus.value()));
        }

        let mut summary = ResultSummary::empty();
        summary.total_spend = batch
            .ticket_count()
            .checked_mul(batch.unit_price())
            .ok_or(LottoError::MathOverflow)?;

        for ticket in batch.tickets() {
            let tier = PrizeTable::classify_result(PrizeTable::score(ticket, winning, bonus))?;
            summary.record(tier)?;
        }

        log::info!(
            "result_aggregator.evaluate: tickets={} payout={} spend={} rate={:.3}",
            batch.ticket_count(),
            summary.total_payout,
            summary.total_spend,
            summary.return_rate()
        );

        Ok(summary)
    }
}

impl ResultSummary {
    fn record(&mut self, tier: PrizeTier) -> LottoResult<()> {
        let count = &mut self.counts[tier.index()];
        *count = count.checked_add(1).ok_or(LottoError::MathOverflow)?;
        self.total_payout = self
            .total_payout
            .checked_add(tier.payout())
            .ok_or(LottoError::MathOverflow)?;
        Ok(())
    }

    /// Folds a partial summary into this one.
    ///
    /// Addition only, so the merged result does not depend on merge order.
    pub fn merge(&mut self, other: &ResultSummary) -> LottoResult<()> {
        for (count, extra) in self.counts.iter_mut().zip(other.counts) {
            *count = count.checked_add(extra).ok_or(LottoError::MathOverflow)?;
        }
        self.total_payout = self
            .total_payout
            .checked_add(other.total_payout)
            .ok_or(LottoError::MathOverflow)?;
        self.total_spend = self
            .total_spend
            .checked_add(other.total_spend)
            .ok_or(LottoError::MathOverflow)?;
        Ok(())
    }

    pub fn count(&self, tier: PrizeTier) -> u64 {
        self.counts[tier.index()]
    }

    /// Paying tiers with their counts, in display order. `None` is left out.
    pub fn winning_counts(&self) -> impl Iterator<Item = (PrizeTier, u64)> + '_ {
        PrizeTier::WINNING
            .into_iter()
            .map(move |tier| (tier, self.count(tier)))
    }

    /// Every scored ticket, losing ones included.
    pub fn ticket_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn total_payout(&self) -> u64 {
        self.total_payout
    }

    pub fn total_spend(&self) -> u64 {
        self.total_spend
    }

    /// Total payout over total spend. Zero when nothing was spent.
    pub fn return_rate(&self) -> f64 {
        if self.total_spend == 0 {
            return 0.0;
        }
        self.total_payout as f64 / self.total_spend as f64
    }

    pub fn return_rate_percent(&self) -> f64 {
        self.return_rate() * 100.0
    }

    /// Return rate in tenths of a percent, ties rounded up. `625` reads as `62.5%`.
    pub fn return_rate_tenths(&self) -> u128 {
        if self.total_spend == 0 {
            return 0;
        }
        let spend = self.total_spend as u128;
        (self.total_payout as u128 * 2_000 + spend) / (2 * spend)
    }
}
