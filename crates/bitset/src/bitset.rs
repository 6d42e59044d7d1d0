use std::fmt::{self, Write};

use tracing::{debug, trace};

use crate::{Error, Options, Result, cast_index};

const BITS_PER_WORD: usize = u64::BITS as usize;

/// A fixed size sequence of bits, packed into 64-bit words.
///
/// Bit `p` lives in word `p / 64`, under the mask `1 << (p % 64)`. The size never changes
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitset {
    words: Box<[u64]>,
    true_count: usize,
    options: Options,
}

impl Bitset {
    /// Create a bitset able to hold at least `bits` bits, all cleared.
    ///
    /// The word count is `bits / 64 + 1`, so the size is always a multiple of 64 and a
    /// request that is already a multiple of 64 gets one spare word.
    pub fn new(bits: usize) -> Self {
        Self::with_options(bits, Options::default())
    }

    pub fn with_options(bits: usize, options: Options) -> Self {
        let num_words = word_index(bits) + 1;
        let words = vec![0u64; num_words].into_boxed_slice();
        trace!(
            bits,
            size = num_words * BITS_PER_WORD,
            num_words,
            "created bitset"
        );
        Self {
            words,
            true_count: 0,
            options,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// The number of bits this set holds. Always a multiple of 64.
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() * BITS_PER_WORD
    }

    /// The number of bits set to 1.
    #[inline]
    pub fn true_count(&self) -> usize {
        self.true_count
    }

    /// Set the bit at `p` to 1. Setting a bit that is already 1 does not change the count.
    #[inline]
    pub fn set(&mut self, p: impl TryInto<usize>) -> Result<()> {
        let (word, mask) = self.locate(p)?;
        let Some(word) = self.words.get_mut(word) else {
            return Ok(());
        };
        if *word & mask == 0 {
            *word |= mask;
            self.true_count += 1;
        }
        self.check_true_count();
        Ok(())
    }

    /// Set the bit at `p` to 0.
    #[inline]
    pub fn reset(&mut self, p: impl TryInto<usize>) -> Result<()> {
        let (word, mask) = self.locate(p)?;
        let Some(word) = self.words.get_mut(word) else {
            return Ok(());
        };
        if *word & mask != 0 {
            *word &= !mask;
            self.true_count -= 1;
        }
        self.check_true_count();
        Ok(())
    }

    /// Invert the bit at `p`.
    #[inline]
    pub fn flip(&mut self, p: impl TryInto<usize>) -> Result<()> {
        let (word, mask) = self.locate(p)?;
        let Some(word) = self.words.get_mut(word) else {
            return Ok(());
        };
        *word ^= mask;
        if *word & mask != 0 {
            self.true_count += 1;
        } else {
            self.true_count -= 1;
        }
        self.check_true_count();
        Ok(())
    }

    /// Returns the value of the bit at `p`.
    #[inline]
    pub fn test(&self, p: impl TryInto<usize>) -> Result<bool> {
        let (word, mask) = self.locate(p)?;
        Ok(self
            .words
            .get(word)
            .is_some_and(|word| *word & mask != 0))
    }

    /// True if every bit is set.
    pub fn all(&self) -> bool {
        self.words.iter().all(|word| *word == u64::MAX)
    }

    /// True if at least one bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|word| *word != 0)
    }

    /// True if no bit is set.
    pub fn none(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Make this bitset an exact, independent copy of `source`, including its size and
    /// options. The previous contents are discarded.
    pub fn copy_from(&mut self, source: &Bitset) {
        trace!(from = source.size(), previous = self.size(), "copying bitset");
        self.words = source.words.clone();
        self.true_count = source.true_count;
        self.options = source.options;
    }

    /// Recount the set bits from the words themselves.
    pub(crate) fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Translate `p` into a word index and a mask within that word. The word index may be
    /// one past the end of storage when `p == size` under inclusive bounds.
    fn locate(&self, p: impl TryInto<usize>) -> Result<(usize, u64)> {
        let p = cast_index!(p, self.size())?;
        self.check_bounds(p)?;
        let word = word_index(p);
        Ok((word, 1 << bit_offset(p, word)))
    }

    fn check_bounds(&self, p: usize) -> Result<()> {
        let size = self.size();
        if self.options.bounds.rejects(p, size) {
            debug!(index = p, size, "bit index out of bounds");
            return Err(Error::OutOfRange { index: p, size });
        }
        Ok(())
    }

    #[inline]
    fn check_true_count(&self) {
        debug_assert_eq!(
            self.true_count,
            self.count_ones(),
            "true count out of sync with the words"
        );
    }
}

#[inline]
fn word_index(p: usize) -> usize {
    p / BITS_PER_WORD
}

#[inline]
fn bit_offset(p: usize, word: usize) -> usize {
    p - word * BITS_PER_WORD
}

/// Renders one character per bit, `'1'` or `'0'`, from bit 0 to the last bit.
impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &word in self.words.iter() {
            for bit in 0..BITS_PER_WORD {
                f.write_char(if (word >> bit) & 1 != 0 { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Bitset, bit_offset, word_index};
    use crate::{Bounds, Error, Options};

    #[test]
    fn word_index_per_64_bits() {
        let input = [0, 64, 128, 192, 256, 320, 384, 448, 512, 576];
        for (expected, p) in input.into_iter().enumerate() {
            assert_eq!(word_index(p), expected);
        }
        assert_eq!(word_index(63), 0);
        assert_eq!(word_index(127), 1);
    }

    #[test]
    fn bit_offset_within_word() {
        let cases = [
            (0, 0, 0),
            (42, 0, 42),
            (63, 0, 63),
            (64, 1, 0),
            (110, 1, 46),
            (127, 1, 63),
            (128, 2, 0),
            (145, 2, 17),
            (191, 2, 63),
            (192, 3, 0),
            (242, 3, 50),
            (255, 3, 63),
            (256, 4, 0),
            (308, 4, 52),
            (319, 4, 63),
        ];
        for (p, word, expected) in cases {
            assert_eq!(bit_offset(p, word), expected, "p = {p}");
        }
    }

    #[test]
    fn check_bounds_rejects() {
        let bits = Bitset::new(100);
        assert_eq!(
            bits.check_bounds(200),
            Err(Error::OutOfRange {
                index: 200,
                size: 128
            })
        );
        assert!(bits.check_bounds(129).is_err());
    }

    #[test]
    fn check_bounds_accepts() {
        let bits = Bitset::new(100);
        assert!(bits.check_bounds(0).is_ok());
        assert!(bits.check_bounds(63).is_ok());
        assert!(bits.check_bounds(127).is_ok());
        assert!(bits.check_bounds(128).is_ok());
    }

    #[test]
    fn check_bounds_exclusive() {
        let bits = Bitset::with_options(
            100,
            Options {
                bounds: Bounds::Exclusive,
            },
        );
        assert!(bits.check_bounds(127).is_ok());
        assert!(bits.check_bounds(128).is_err());
    }

    #[test]
    fn words_are_zeroed() {
        let bits = Bitset::new(300);
        assert_eq!(bits.words.len(), 5);
        assert!(bits.words.iter().all(|word| *word == 0));
        assert_eq!(bits.count_ones(), 0);
    }

    #[test]
    fn bit_zero_is_lowest_mask_of_first_word() {
        let mut bits = Bitset::new(100);
        bits.set(0).unwrap();
        bits.set(65).unwrap();
        assert_eq!(bits.words[0], 1);
        assert_eq!(bits.words[1], 1 << 1);
    }

    #[test]
    fn phantom_index_reads_false_and_ignores_writes() {
        let mut bits = Bitset::new(100);
        let size = bits.size();
        bits.set(size).unwrap();
        assert_eq!(bits.test(size), Ok(false));
        assert_eq!(bits.true_count(), 0);
        bits.flip(size).unwrap();
        bits.reset(size).unwrap();
        assert_eq!(bits.true_count(), 0);
        assert!(bits.none());
    }

    #[test]
    fn failed_write_leaves_state_untouched() {
        let mut bits = Bitset::new(10);
        bits.set(3).unwrap();
        let before = bits.clone();
        assert!(bits.set(1000).is_err());
        assert!(bits.reset(1000).is_err());
        assert!(bits.flip(1000).is_err());
        assert_eq!(bits, before);
    }

    #[test]
    fn unconvertible_index_is_out_of_range() {
        let mut bits = Bitset::new(10);
        assert_eq!(
            bits.set(-1i32),
            Err(Error::OutOfRange {
                index: usize::MAX,
                size: 64
            })
        );
        assert!(bits.test(-5i64).is_err());
        assert!(bits.test(3u8).is_ok());
    }

    #[test]
    fn display_reads_words_not_count() {
        let mut bits = Bitset::new(0);
        bits.words[0] = 0b101;
        let rendered = bits.to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("101"));
        assert_eq!(rendered.matches('1').count(), 2);
    }
}
