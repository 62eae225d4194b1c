use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The word length used by the standard game.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// The number of guesses the standard game allows.
pub const MAX_NUM_GUESSES: usize = 6;

/// The feedback given for a single letter of a guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feedback {
    /// The letter is in the word at this location.
    Correct,
    /// The letter is in the word, but somewhere else.
    Present,
    /// The letter is not in the word, beyond any copies marked `Correct` or `Present` in the
    /// same guess.
    Absent,
    /// The feedback could not be understood. Tiles with this feedback impose no restrictions.
    Unknown,
}

impl Feedback {
    /// The coloured square the game shows for this feedback.
    pub fn as_square(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
            Feedback::Unknown => '⬜',
        }
    }
}

/// A single letter of a guess along with the feedback for it.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub letter: char,
    pub feedback: Feedback,
}

impl Tile {
    pub fn new(letter: char, feedback: Feedback) -> Tile {
        Tile { letter, feedback }
    }
}

/// Stands in for a letter when there is more feedback than letters.
const MISSING_LETTER: char = '?';

/// The result of a single word guess.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    /// The guessed letters and their feedback, in the same order as in the guess.
    pub tiles: Vec<Tile>,
}

impl GuessResult {
    /// Pairs each letter of `guess` with the feedback at the same index. ASCII letters are
    /// upper-cased.
    ///
    /// If the two have different lengths, nothing is dropped: letters with no feedback get
    /// [`Feedback::Unknown`], and feedback with no letter gets the placeholder letter `?`. The
    /// tile count then differs from at least one of the inputs, so a mismatched pair can never
    /// pass as a well-formed guess of the shorter length.
    pub fn new(guess: &str, results: &[Feedback]) -> GuessResult {
        let letters: Vec<char> = guess.chars().collect();
        let num_tiles = letters.len().max(results.len());
        GuessResult {
            tiles: (0..num_tiles)
                .map(|index| {
                    Tile::new(
                        letters
                            .get(index)
                            .map_or(MISSING_LETTER, |letter| letter.to_ascii_uppercase()),
                        results.get(index).copied().unwrap_or(Feedback::Unknown),
                    )
                })
                .collect(),
        }
    }

    /// The guessed word.
    pub fn guess(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter).collect()
    }

    /// The feedback for each letter.
    pub fn feedback(&self) -> Vec<Feedback> {
        self.tiles.iter().map(|tile| tile.feedback).collect()
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_win(&self) -> bool {
        !self.tiles.is_empty()
            && self
                .tiles
                .iter()
                .all(|tile| tile.feedback == Feedback::Correct)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile.feedback.as_square())?;
        }
        Ok(())
    }
}

/// Indicates that an error occurred while loading words or handling guesses.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or guess had a different length than expected. Contains the expected length.
    #[error("words must have {0} letters")]
    WordLength(usize),
    /// A word contained a character outside `A-Z`.
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// A guess could not be turned into restrictions.
    #[error("malformed guess: {0}")]
    MalformedGuess(String),
    /// The word list has not been loaded yet, or failed to load.
    #[error("dictionary unavailable")]
    DataUnavailable,
    /// Reading the word list failed.
    #[error("could not read the word list")]
    Io(#[from] std::io::Error),
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Arc<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Arc<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Letters are matched the way the game does it: exact matches are marked `Correct` first,
/// then the remaining letters are marked `Present` from left to right while unmatched copies
/// remain in the objective. Everything else is `Absent`.
///
/// ```
/// use wordle_filter::*;
///
/// let result = get_result_for_guess("ABBEY", "BOBBY")?;
///
/// assert_eq!(
///     result.feedback(),
///     vec![
///         Feedback::Present,
///         Feedback::Absent,
///         Feedback::Correct,
///         Feedback::Absent,
///         Feedback::Correct,
///     ]
/// );
/// # Ok::<(), WordleError>(())
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let objective: Vec<char> = objective.chars().map(|c| c.to_ascii_uppercase()).collect();
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    if objective.len() != guess.len() {
        return Err(WordleError::WordLength(objective.len()));
    }

    let mut results = vec![Feedback::Absent; guess.len()];
    let mut unmatched: Vec<Option<char>> = Vec::with_capacity(objective.len());
    for (index, letter) in guess.iter().enumerate() {
        if objective[index] == *letter {
            results[index] = Feedback::Correct;
            unmatched.push(None);
        } else {
            unmatched.push(Some(objective[index]));
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if results[index] == Feedback::Correct {
            continue;
        }
        if let Some(slot) = unmatched
            .iter_mut()
            .find(|maybe_letter| **maybe_letter == Some(*letter))
        {
            *slot = None;
            results[index] = Feedback::Present;
        }
    }

    Ok(GuessResult {
        tiles: guess
            .into_iter()
            .zip(results)
            .map(|(letter, feedback)| Tile::new(letter, feedback))
            .collect(),
    })
}
