use crate::error::{LottoError, LottoResult};
use crate::types::{BonusNumber, NumberSet, LOTTO_SIZE, MAX_NUMBER, MIN_NUMBER};

const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Source of uniform picks for drawing numbers.
///
/// Every `rand::Rng` is one; tests may script their own.
pub trait RandomDraw {
    /// A uniform index in `0..bound`. `bound` is never zero.
    fn pick_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> RandomDraw for R {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

impl NumberSet {
    /// Validates `values` as a ticket: exactly six numbers, each in range, no repeats.
    pub fn create(values: &[u32]) -> LottoResult<Self> {
        if values.len() != LOTTO_SIZE {
            return Err(LottoError::InvalidSize { len: values.len() });
        }

        let mut numbers = [0u8; LOTTO_SIZE];
        for (slot, &value) in numbers.iter_mut().zip(values) {
            *slot = to_lotto_number(value).ok_or(LottoError::NumberOutOfRange(value))?;
        }

        numbers.sort_unstable();
        if let Some(pair) = numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(LottoError::DuplicateNumber(pair[0]));
        }

        Ok(Self { numbers })
    }

    /// Draws six distinct numbers with a partial Fisher-Yates shuffle of the pool.
    pub fn random<D: RandomDraw + ?Sized>(source: &mut D) -> Self {
        let mut pool = [0u8; POOL_SIZE];
        for (offset, slot) in pool.iter_mut().enumerate() {
            *slot = MIN_NUMBER + offset as u8;
        }

        for i in 0..LOTTO_SIZE {
            let remaining = POOL_SIZE - i;
            let j = i + source.pick_index(remaining) % remaining;
            pool.swap(i, j);
        }

        let mut numbers = [0u8; LOTTO_SIZE];
        numbers.copy_from_slice(&pool[..LOTTO_SIZE]);
        numbers.sort_unstable();
        log::debug!("number_set.random: numbers={numbers:?}");

        Self { numbers }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.numbers.binary_search(&value).is_ok()
    }

    /// Count of numbers present in both sets.
    pub fn intersection_size(&self, other: &NumberSet) -> usize {
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < LOTTO_SIZE && j < LOTTO_SIZE {
            match self.numbers[i].cmp(&other.numbers[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }
}

impl BonusNumber {
    /// Validates the bonus ball against the winning numbers it is drawn with.
    pub fn create(value: u32, winning: &NumberSet) -> LottoResult<Self> {
        let value = to_lotto_number(value).ok_or(LottoError::BonusOutOfRange(value))?;
        if winning.contains(value) {
            return Err(LottoError::BonusInWinningNumbers(value));
        }
        Ok(Self { value })
    }
}

fn to_lotto_number(value: u32) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|number| (MIN_NUMBER..=MAX_NUMBER).contains(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(values: [u32; 6]) -> NumberSet {
        NumberSet::create(&values).expect("valid numbers must succeed")
    }

    /// Replays a fixed list of picks, then keeps picking zero.
    struct Scripted {
        picks: Vec<usize>,
        calls: usize,
    }

    impl RandomDraw for Scripted {
        fn pick_index(&mut self, bound: usize) -> usize {
            let pick = self.picks.get(self.calls).copied().unwrap_or(0);
            self.calls += 1;
            assert!(pick < bound, "scripted pick {pick} out of bound {bound}");
            pick
        }
    }

    #[test]
    fn create_sorts_and_ignores_input_order() {
        let a = set([6, 5, 4, 3, 2, 1]);
        let b = set([1, 2, 3, 4, 5, 6]);
        assert_eq!(a, b);
        assert_eq!(a.numbers(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(a.to_string(), "[1, 2, 3, 4, 5, 6]");
    }

    #[test]
    fn create_rejects_wrong_size() {
        assert_eq!(
            NumberSet::create(&[1, 2, 3, 4, 5]),
            Err(LottoError::InvalidSize { len: 5 })
        );
        assert_eq!(
            NumberSet::create(&[1, 2, 3, 4, 5, 6, 7]),
            Err(LottoError::InvalidSize { len: 7 })
        );
        assert_eq!(NumberSet::create(&[]), Err(LottoError::InvalidSize { len: 0 }));
    }

    #[test]
    fn create_rejects_out_of_range() {
        assert_eq!(
            NumberSet::create(&[1, 2, 3, 4, 5, 46]),
            Err(LottoError::NumberOutOfRange(46))
        );
        assert_eq!(
            NumberSet::create(&[0, 2, 3, 4, 5, 6]),
            Err(LottoError::NumberOutOfRange(0))
        );
        assert_eq!(
            NumberSet::create(&[1, 2, 3, 4, 5, 301]),
            Err(LottoError::NumberOutOfRange(301))
        );
    }

    #[test]
    fn create_rejects_duplicates() {
        assert_eq!(
            NumberSet::create(&[1, 1, 2, 3, 4, 5]),
            Err(LottoError::DuplicateNumber(1))
        );
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = set([1, 2, 3, 4, 5, 6]);
        let b = set([4, 5, 6, 7, 8, 9]);
        let c = set([40, 41, 42, 43, 44, 45]);
        assert_eq!(a.intersection_size(&b), 3);
        assert_eq!(b.intersection_size(&a), 3);
        assert_eq!(a.intersection_size(&c), 0);
        assert_eq!(c.intersection_size(&a), 0);
        assert_eq!(a.intersection_size(&a), 6);
    }

    #[test]
    fn contains_checks_membership() {
        let a = set([3, 9, 17, 21, 33, 45]);
        assert!(a.contains(45));
        assert!(a.contains(3));
        assert!(!a.contains(4));
    }

    #[test]
    fn random_always_yields_valid_sets() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let drawn = NumberSet::random(&mut rng);
            let numbers = drawn.numbers();
            let values: Vec<u32> = numbers.iter().map(|&n| n as u32).collect();
            assert_eq!(NumberSet::create(&values), Ok(drawn));
        }
    }

    #[test]
    fn random_is_reproducible_with_the_same_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(NumberSet::random(&mut first), NumberSet::random(&mut second));
        }
    }

    #[test]
    fn random_consumes_one_pick_per_number() {
        let mut source = Scripted {
            picks: vec![44, 0, 0, 0, 0, 0],
            calls: 0,
        };
        let drawn = NumberSet::random(&mut source);
        assert_eq!(source.calls, LOTTO_SIZE);
        // first pick swaps 45 to the front, the rest keep the pool order
        assert_eq!(drawn.numbers(), [2, 3, 4, 5, 6, 45]);
    }

    #[test]
    fn bonus_must_be_in_range_and_outside_winning_numbers() {
        let winning = set([1, 2, 3, 4, 5, 6]);
        let bonus = BonusNumber::create(7, &winning).expect("bonus must succeed");
        assert_eq!(bonus.value(), 7);
        assert_eq!(
            BonusNumber::create(6, &winning),
            Err(LottoError::BonusInWinningNumbers(6))
        );
        assert_eq!(
            BonusNumber::create(46, &winning),
            Err(LottoError::BonusOutOfRange(46))
        );
        assert_eq!(
            BonusNumber::create(0, &winning),
            Err(LottoError::BonusOutOfRange(0))
        );
    }
}
