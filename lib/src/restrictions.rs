use crate::results::Feedback;
use crate::results::GuessResult;
use crate::results::WordleError;
use std::result::Result;

const NUM_LETTERS: usize = 26;

/// Returns the index of the given letter in `A-Z`, if it is in that range.
fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}

fn index_to_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Defines letter restrictions that a word must adhere to.
///
/// Restrictions are derived per guess and then combined, so the order in which guesses are
/// added does not affect which words satisfy them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordRestrictions {
    word_length: usize,
    /// Bit set of the letters that were marked `Correct` at each location.
    here: Vec<u32>,
    /// Bit set of the letters that were marked `Present` at each location.
    not_here: Vec<u32>,
    /// The minimum number of times each letter must appear in the word.
    min_counts: [usize; NUM_LETTERS],
    /// The maximum number of times each letter may appear in the word, if known.
    max_counts: [Option<usize>; NUM_LETTERS],
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object for the given word length with all letters unknown.
    pub fn new(word_length: usize) -> WordRestrictions {
        WordRestrictions {
            word_length,
            here: vec![0; word_length],
            not_here: vec![0; word_length],
            min_counts: [0; NUM_LETTERS],
            max_counts: [None; NUM_LETTERS],
        }
    }

    /// Returns the restrictions imposed by all of the given results.
    ///
    /// Malformed guesses are skipped. They are expected while a row is still being filled in.
    pub fn from_history(word_length: usize, history: &[GuessResult]) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new(word_length);
        for (index, guess_result) in history.iter().enumerate() {
            if let Err(err) = restrictions.update(guess_result) {
                log::warn!("Skipping guess {} ({}): {}", index, guess_result.guess(), err);
            }
        }
        log::debug!("Derived letter counts: {:?}", restrictions.known_counts());
        restrictions
    }

    /// The length of the words these restrictions apply to.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The minimum number of times the given letter must be in the word.
    pub fn min_count(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |index| self.min_counts[index])
    }

    /// The maximum number of times the given letter may be in the word, if this is known.
    pub fn max_count(&self, letter: char) -> Option<usize> {
        letter_index(letter).and_then(|index| self.max_counts[index])
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// If the guess is malformed, an error is returned and these restrictions are unchanged.
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        if guess_result.tiles.len() != self.word_length {
            return Err(WordleError::MalformedGuess(format!(
                "expected {} letters, found {}",
                self.word_length,
                guess_result.tiles.len()
            )));
        }
        let letters = guess_result
            .tiles
            .iter()
            .map(|tile| {
                letter_index(tile.letter).ok_or_else(|| {
                    WordleError::MalformedGuess(format!("unsupported letter {:?}", tile.letter))
                })
            })
            .collect::<Result<Vec<usize>, WordleError>>()?;

        // Only this guess's own tiles decide how many copies of a letter are known to exist.
        let mut num_times_present = [0usize; NUM_LETTERS];
        let mut marked_absent = [false; NUM_LETTERS];
        for (location, (letter, tile)) in letters.iter().zip(&guess_result.tiles).enumerate() {
            let bit = 1u32 << letter;
            match tile.feedback {
                Feedback::Correct => {
                    self.here[location] |= bit;
                    num_times_present[*letter] += 1;
                }
                Feedback::Present => {
                    self.not_here[location] |= bit;
                    num_times_present[*letter] += 1;
                }
                Feedback::Absent => marked_absent[*letter] = true,
                Feedback::Unknown => {}
            }
        }

        for letter in 0..NUM_LETTERS {
            let count = num_times_present[letter];
            if count > self.min_counts[letter] {
                self.min_counts[letter] = count;
            }
            if marked_absent[letter] {
                // Copies marked absent are extras beyond the letter's true count.
                self.max_counts[letter] =
                    Some(self.max_counts[letter].map_or(count, |max| max.min(count)));
            }
        }
        Ok(())
    }

    /// Adds the given restrictions to this restriction.
    pub fn merge(&mut self, other: &WordRestrictions) -> Result<(), WordleError> {
        if self.word_length != other.word_length {
            return Err(WordleError::WordLength(self.word_length));
        }
        for (mine, theirs) in self.here.iter_mut().zip(&other.here) {
            *mine |= theirs;
        }
        for (mine, theirs) in self.not_here.iter_mut().zip(&other.not_here) {
            *mine |= theirs;
        }
        for letter in 0..NUM_LETTERS {
            self.min_counts[letter] = self.min_counts[letter].max(other.min_counts[letter]);
            self.max_counts[letter] = match (self.max_counts[letter], other.max_counts[letter]) {
                (Some(mine), Some(theirs)) => Some(mine.min(theirs)),
                (mine, theirs) => mine.or(theirs),
            };
        }
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        if word.len() != self.word_length {
            return false;
        }
        let mut counts = [0usize; NUM_LETTERS];
        for (location, letter) in word.chars().enumerate() {
            let Some(index) = letter_index(letter) else {
                return false;
            };
            let bit = 1u32 << index;
            let here = self.here[location];
            // If two different letters were locked here, no word can match.
            if (here != 0 && here != bit) || self.not_here[location] & bit != 0 {
                return false;
            }
            counts[index] += 1;
        }
        (0..NUM_LETTERS).all(|index| {
            counts[index] >= self.min_counts[index]
                && self.max_counts[index].map_or(true, |max| counts[index] <= max)
        })
    }

    /// Lists every letter with a known count bound, as `(letter, min, max)`.
    pub fn known_counts(&self) -> Vec<(char, usize, Option<usize>)> {
        (0..NUM_LETTERS)
            .filter(|index| self.min_counts[*index] > 0 || self.max_counts[*index].is_some())
            .map(|index| {
                (
                    index_to_letter(index),
                    self.min_counts[index],
                    self.max_counts[index],
                )
            })
            .collect()
    }
}
