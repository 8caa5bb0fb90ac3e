use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    #[error("a lotto ticket must have exactly 6 numbers, got {len}")]
    InvalidSize { len: usize },
    #[error("lotto numbers must be between 1 and 45, got {0}")]
    NumberOutOfRange(u32),
    #[error("lotto numbers must not repeat, {0} appears more than once")]
    DuplicateNumber(u8),
    #[error("the bonus number must be between 1 and 45, got {0}")]
    BonusOutOfRange(u32),
    #[error("the bonus number {0} is already one of the winning numbers")]
    BonusInWinningNumbers(u8),
    #[error("tickets start at {unit_price}, got {amount}")]
    BelowMinimumPurchase { amount: u64, unit_price: u64 },
    #[error("tickets are sold in units of {unit_price}, got {amount}")]
    NotAMultipleOfUnitPrice { amount: u64, unit_price: u64 },
    #[error("the unit price must be positive")]
    InvalidUnitPrice,
    #[error("match count must be between 0 and 6, got {0}")]
    MatchCountOutOfRange(u8),
    #[error("math overflow")]
    MathOverflow,
}

/// Broad class of a [`LottoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A domain value broke its invariant: ticket size, range, duplicates, bonus overlap.
    Validation,
    /// The purchase amount does not buy a whole number of tickets.
    InvalidAmount,
    /// The caller broke an API contract. This is a bug, not bad user input.
    InvalidArgument,
}

impl LottoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LottoError::InvalidSize { .. }
            | LottoError::NumberOutOfRange(_)
            | LottoError::DuplicateNumber(_)
            | LottoError::BonusOutOfRange(_)
            | LottoError::BonusInWinningNumbers(_) => ErrorKind::Validation,
            LottoError::BelowMinimumPurchase { .. } | LottoError::NotAMultipleOfUnitPrice { .. } => {
                ErrorKind::InvalidAmount
            }
            LottoError::InvalidUnitPrice
            | LottoError::MatchCountOutOfRange(_)
            | LottoError::MathOverflow => ErrorKind::InvalidArgument,
        }
    }
}

pub type LottoResult<T> = Result<T, LottoError>;
