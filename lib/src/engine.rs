use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use rayon::prelude::*;
use std::sync::Arc;

/// The word suggested before any guesses have been made.
pub const DEFAULT_OPENING_GUESS: &str = "CRANE";

/// Gets the list of possible words in the word bank that meet the given restrictions.
///
/// Words are returned in the word bank's order.
pub fn get_possible_words(restrictions: &WordRestrictions, bank: &WordBank) -> Vec<Arc<str>> {
    let words: &[Arc<str>] = bank;
    words
        .par_iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .cloned()
        .collect()
}

/// Returns every word in the word bank that is consistent with all of the given guesses.
///
/// With no guesses, this is the whole word bank. Malformed guesses (the wrong length, or
/// letters outside `A-Z`) are skipped. An empty result means no words remain.
///
/// ```
/// use wordle_filter::*;
///
/// let bank = WordBank::from_iterator(["split", "torch", "maple"])?;
/// let history = [parse_guess("torch", ".....")];
///
/// let remaining = filter(&history, &bank);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(&*remaining[0], "MAPLE");
/// # Ok::<(), WordleError>(())
/// ```
pub fn filter(history: &[GuessResult], bank: &WordBank) -> Vec<Arc<str>> {
    if history.is_empty() {
        return bank.to_vec();
    }
    let restrictions = WordRestrictions::from_history(bank.word_length(), history);
    let possible_words = get_possible_words(&restrictions, bank);
    log::debug!(
        "{} of {} words remain after {} guesses",
        possible_words.len(),
        bank.len(),
        history.len()
    );
    possible_words
}

/// A suggested next guess.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Suggestion {
    /// No guesses have been made yet, so this is the opening word.
    Opening(Arc<str>),
    /// A word that is still consistent with every guess.
    Candidate(Arc<str>),
    /// No words are consistent with the guesses made so far.
    NoCandidates,
}

/// Suggests the next guess: the configured opening word when there is no history, otherwise
/// the first word that is still possible.
pub fn suggest_guess(
    history: &[GuessResult],
    bank: &WordBank,
    config: &SolverConfig,
) -> Suggestion {
    if history.is_empty() {
        return Suggestion::Opening(Arc::clone(&config.opening_guess));
    }
    match filter(history, bank).into_iter().next() {
        Some(word) => Suggestion::Candidate(word),
        None => Suggestion::NoCandidates,
    }
}

/// Like [`suggest_guess`], but fails with [`WordleError::DataUnavailable`] if the words have
/// not been loaded yet.
pub fn suggest_from_shared(
    history: &[GuessResult],
    shared: &SharedWordBank,
    config: &SolverConfig,
) -> Result<Suggestion, WordleError> {
    let bank = shared.get()?;
    Ok(suggest_guess(history, &bank, config))
}

/// Settings for a [`Solver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// The word to guess first.
    pub opening_guess: Arc<str>,
    /// The maximum number of guesses in a game.
    pub max_num_guesses: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            opening_guess: Arc::from(DEFAULT_OPENING_GUESS),
            max_num_guesses: MAX_NUM_GUESSES,
        }
    }
}

/// Keeps track of the guesses made in one game, and suggests the next one.
///
/// ```
/// use wordle_filter::*;
///
/// let bank = WordBank::from_iterator(["glade", "crane", "blade"])?;
/// let mut solver = Solver::new(bank, SolverConfig::default());
///
/// assert_eq!(solver.select_next_guess().as_deref(), Some("CRANE"));
/// solver.add_guess(get_result_for_guess("glade", "crane")?);
/// let remaining = solver.possible_words();
/// assert_eq!(
///     remaining.iter().map(|word| &**word).collect::<Vec<&str>>(),
///     ["BLADE", "GLADE"]
/// );
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    bank: WordBank,
    config: SolverConfig,
    history: Vec<GuessResult>,
}

impl Solver {
    pub fn new(bank: WordBank, config: SolverConfig) -> Solver {
        Solver {
            bank,
            config,
            history: Vec::new(),
        }
    }

    /// Records the result of a guess.
    pub fn add_guess(&mut self, result: GuessResult) {
        self.history.push(result);
    }

    /// The guesses recorded so far, oldest first.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The words that are consistent with every recorded guess.
    pub fn possible_words(&self) -> Vec<Arc<str>> {
        filter(&self.history, &self.bank)
    }

    /// Returns the opening guess if nothing has been guessed yet, otherwise the first possible
    /// word, if any.
    pub fn select_next_guess(&self) -> Option<Arc<str>> {
        match suggest_guess(&self.history, &self.bank, &self.config) {
            Suggestion::Opening(word) | Suggestion::Candidate(word) => Some(word),
            Suggestion::NoCandidates => None,
        }
    }
}

/// Attempts to guess the given word within the configured number of guesses, using words from
/// the word bank.
pub fn play_game(
    word_to_guess: &str,
    bank: &WordBank,
    config: SolverConfig,
) -> Result<GameResult, WordleError> {
    if !bank.contains(word_to_guess) {
        return Ok(GameResult::UnknownWord);
    }
    let max_num_guesses = config.max_num_guesses;
    let mut solver = Solver::new(bank.clone(), config);
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for _ in 0..max_num_guesses {
        let Some(guess) = solver.select_next_guess() else {
            break;
        };
        let result = get_result_for_guess(word_to_guess, &guess)?;
        log::debug!("Guessed {}: {}", guess, result);
        guesses.push(guess);
        if result.is_win() {
            return Ok(GameResult::Success(guesses));
        }
        solver.add_guess(result);
    }
    Ok(GameResult::Failure(guesses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::parse_guess;

    fn bank(words: &[&str]) -> WordBank {
        WordBank::from_iterator(words).unwrap()
    }

    #[test]
    fn filter_without_history_returns_whole_bank() {
        let bank = bank(&["maple", "crane", "torch"]);

        assert_eq!(filter(&[], &bank), bank.to_vec());
    }

    #[test]
    fn filter_duplicate_letter_feedback() {
        let bank = bank(&["slack", "allay", "plaza", "aloft", "alloy", "llama"]);
        let history = [parse_guess("allow", "yg...")];

        let remaining = filter(&history, &bank);
        assert_eq!(
            remaining.iter().map(|word| &**word).collect::<Vec<&str>>(),
            ["PLAZA", "SLACK"]
        );
    }

    #[test]
    fn suggest_guess_opening() {
        let bank = bank(&["maple"]);

        assert_eq!(
            suggest_guess(&[], &bank, &SolverConfig::default()),
            Suggestion::Opening(Arc::from("CRANE"))
        );
    }

    #[test]
    fn suggest_guess_uses_configured_opening() {
        let bank = bank(&["maple"]);
        let config = SolverConfig {
            opening_guess: Arc::from("SLATE"),
            ..SolverConfig::default()
        };

        assert_eq!(
            suggest_guess(&[], &bank, &config),
            Suggestion::Opening(Arc::from("SLATE"))
        );
        assert_eq!(
            Solver::new(bank, config).select_next_guess().as_deref(),
            Some("SLATE")
        );
    }

    #[test]
    fn suggest_guess_first_candidate() {
        let bank = bank(&["split", "torch", "maple", "bumpy"]);

        assert_eq!(
            suggest_guess(
                &[parse_guess("torch", ".....")],
                &bank,
                &SolverConfig::default()
            ),
            Suggestion::Candidate(Arc::from("BUMPY"))
        );
    }

    #[test]
    fn suggest_guess_no_candidates() {
        let bank = bank(&["torch"]);

        assert_eq!(
            suggest_guess(
                &[parse_guess("torch", ".....")],
                &bank,
                &SolverConfig::default()
            ),
            Suggestion::NoCandidates
        );
    }

    #[test]
    fn suggest_from_shared_reports_unavailable_words() {
        let shared = SharedWordBank::new();

        assert!(matches!(
            suggest_from_shared(&[], &shared, &SolverConfig::default()),
            Err(WordleError::DataUnavailable)
        ));

        shared.set(WordBank::from_iterator(["torch"]));
        assert!(matches!(
            suggest_from_shared(
                &[parse_guess("torch", ".....")],
                &shared,
                &SolverConfig::default()
            ),
            Ok(Suggestion::NoCandidates)
        ));
    }

    #[test]
    fn play_game_unknown_word() -> Result<(), WordleError> {
        let bank = bank(&["crane", "glade"]);

        assert_eq!(
            play_game("zebra", &bank, SolverConfig::default())?,
            GameResult::UnknownWord
        );
        Ok(())
    }

    #[test]
    fn play_game_success() -> Result<(), WordleError> {
        let bank = bank(&["blade", "crane", "glade", "spade"]);

        let result = play_game("glade", &bank, SolverConfig::default())?;

        assert_eq!(
            result,
            GameResult::Success(vec![
                Arc::from("CRANE"),
                Arc::from("BLADE"),
                Arc::from("GLADE"),
            ])
        );
        Ok(())
    }

    #[test]
    fn play_game_failure_when_out_of_guesses() -> Result<(), WordleError> {
        let bank = bank(&["blade", "crane", "glade", "spade"]);
        let config = SolverConfig {
            max_num_guesses: 2,
            ..SolverConfig::default()
        };

        let result = play_game("spade", &bank, config)?;

        assert_eq!(
            result,
            GameResult::Failure(vec![Arc::from("CRANE"), Arc::from("BLADE")])
        );
        Ok(())
    }
}
