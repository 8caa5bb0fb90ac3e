use std::fmt;

pub const LOTTO_SIZE: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const UNIT_PRICE: u64 = 1_000;

/// Six distinct numbers in `MIN_NUMBER..=MAX_NUMBER`, stored ascending.
///
/// Only the constructors in `features::number_set` build one, so every value
/// held by the program satisfies the size, range and distinctness rules.
/// Keeping the numbers sorted makes the derived equality order-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumberSet {
    pub(crate) numbers: [u8; LOTTO_SIZE],
}

impl NumberSet {
    /// The numbers in ascending order.
    pub fn numbers(&self) -> [u8; LOTTO_SIZE] {
        self.numbers
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{number}")?;
        }
        write!(f, "]")
    }
}

/// A bonus ball already checked against the winning numbers it was drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BonusNumber {
    pub(crate) value: u8,
}

impl BonusNumber {
    pub fn value(&self) -> u8 {
        self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub numbers: NumberSet,
}

impl Ticket {
    pub fn new(numbers: NumberSet) -> Self {
        Self { numbers }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseBatch {
    pub(crate) tickets: Vec<Ticket>,
    pub(crate) unit_price: u64,
}

impl PurchaseBatch {
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket_count(&self) -> u64 {
        self.tickets.len() as u64
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Amount paid for the whole batch.
    pub fn total_spend(&self) -> u64 {
        self.ticket_count() * self.unit_price
    }
}

/// Prize outcomes ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrizeTier {
    None,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
}

impl PrizeTier {
    pub const COUNT: usize = 6;

    pub const ALL: [PrizeTier; PrizeTier::COUNT] = [
        PrizeTier::None,
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    /// Paying tiers in the order results are displayed.
    pub const WINNING: [PrizeTier; PrizeTier::COUNT - 1] = [
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub match_count: u8,
    pub bonus_hit: bool,
}

/// Tier counts for one evaluated batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub(crate) counts: [u64; PrizeTier::COUNT],
    pub(crate) total_payout: u64,
    pub(crate) total_spend: u64,
}

impl ResultSummary {
    pub fn empty() -> Self {
        Self {
            counts: [0; PrizeTier::COUNT],
            total_payout: 0,
            total_spend: 0,
        }
    }
}
