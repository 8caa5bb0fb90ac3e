//! Single round of a 6/45 lottery.
//!
//! Tickets are bought in units of [`UNIT_PRICE`], each one a random
//! [`NumberSet`]. The winning numbers and a bonus ball then sort every ticket
//! into a [`PrizeTier`], and the [`ResultSummary`] reports the tier counts and
//! the return rate on the money spent.

pub mod error;
pub mod features;
pub mod types;

pub use error::{ErrorKind, LottoError, LottoResult};
pub use features::console::{play_round, Console, InputError};
pub use features::number_set::RandomDraw;
pub use features::prize_table::PrizeTable;
pub use features::result_aggregator::ResultAggregator;
pub use features::ticket_factory::TicketFactory;
pub use types::{
    BonusNumber, MatchResult, NumberSet, PrizeTier, PurchaseBatch, ResultSummary, Ticket,
    LOTTO_SIZE, MAX_NUMBER, MIN_NUMBER, UNIT_PRICE,
};
