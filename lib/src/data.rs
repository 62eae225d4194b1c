use crate::results::WordleError;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// Contains all the possible words for this Wordle game.
///
/// Words are upper case, unique, all the same length, and kept in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to upper
    /// case, and blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to upper case, and empty words are skipped. All words
    /// must have the same length as the first one, and may only use the letters `A-Z`.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut word_length = 0;
        let mut all_words: Vec<Arc<str>> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                continue;
            }
            if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_uppercase()) {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            if word_length == 0 {
                word_length = word.len();
            } else if word.len() != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            all_words.push(Arc::from(word.as_str()));
        }
        all_words.sort_unstable();
        all_words.dedup();
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns true iff this word bank is empty.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the word bank, or zero if it is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns true iff the word bank contains the given word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        self.all_words
            .binary_search_by(|other| (**other).cmp(word.as_str()))
            .is_ok()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Where a [`SharedWordBank`] is in its loading lifecycle.
#[derive(Clone, Debug, Default)]
pub enum DictionaryState {
    /// Loading has not been started.
    #[default]
    Unset,
    /// Words are being loaded.
    Loading,
    /// The words are available.
    Ready(Arc<WordBank>),
    /// Loading failed, with the reason.
    Failed(String),
}

/// A word bank that is filled in once, possibly in the background, and read many times.
///
/// Clones share the same state. Callers must check readiness through [`SharedWordBank::get`],
/// which reports [`WordleError::DataUnavailable`] until the words are loaded.
#[derive(Clone, Debug, Default)]
pub struct SharedWordBank {
    inner: Arc<(Mutex<DictionaryState>, Condvar)>,
}

impl SharedWordBank {
    /// Creates a shared word bank in the [`DictionaryState::Unset`] state.
    pub fn new() -> SharedWordBank {
        SharedWordBank::default()
    }

    /// Starts reading words from the given reader on the rayon thread pool.
    ///
    /// The state becomes `Loading` immediately, and `Ready` or `Failed` once reading finishes.
    pub fn load_in_background<R>(&self, word_reader: R)
    where
        R: BufRead + Send + 'static,
    {
        *self.lock() = DictionaryState::Loading;
        let shared = self.clone();
        rayon::spawn(move || shared.set(WordBank::from_reader(word_reader)));
    }

    /// Stores the result of loading the words and wakes anyone waiting for it.
    pub fn set(&self, result: Result<WordBank, WordleError>) {
        let new_state = match result {
            Ok(bank) => {
                log::info!("Loaded {} words", bank.len());
                DictionaryState::Ready(Arc::new(bank))
            }
            Err(err) => {
                log::error!("Failed to load words: {}", err);
                DictionaryState::Failed(err.to_string())
            }
        };
        *self.lock() = new_state;
        self.inner.1.notify_all();
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> DictionaryState {
        self.lock().clone()
    }

    /// Returns the word bank if it has been loaded.
    pub fn get(&self) -> Result<Arc<WordBank>, WordleError> {
        match &*self.lock() {
            DictionaryState::Ready(bank) => Ok(Arc::clone(bank)),
            _ => Err(WordleError::DataUnavailable),
        }
    }

    /// Blocks while the words are loading, then returns the same as [`SharedWordBank::get`].
    pub fn wait(&self) -> Result<Arc<WordBank>, WordleError> {
        let mut state = self.lock();
        while let DictionaryState::Loading = *state {
            state = self
                .inner
                .1
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        match &*state {
            DictionaryState::Ready(bank) => Ok(Arc::clone(bank)),
            _ => Err(WordleError::DataUnavailable),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DictionaryState> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn word_bank_from_iterator_sorts_and_dedupes() -> Result<(), WordleError> {
        let word_bank = WordBank::from_iterator(["maple", " crane\n", "CRANE", "", "Adieu"])?;

        assert_eq!(
            word_bank.iter().map(|word| &**word).collect::<Vec<&str>>(),
            vec!["ADIEU", "CRANE", "MAPLE"]
        );
        assert_eq!(word_bank.word_length(), 5);
        Ok(())
    }

    #[test]
    fn word_bank_contains_ignores_case() -> Result<(), WordleError> {
        let word_bank = WordBank::from_iterator(["maple", "crane"])?;

        assert!(word_bank.contains("Crane"));
        assert!(word_bank.contains("MAPLE "));
        assert!(!word_bank.contains("torch"));
        Ok(())
    }

    #[test]
    fn word_bank_rejects_unsupported_character() {
        let result = WordBank::from_iterator(["crane", "caf\u{e9}s"]);

        assert!(matches!(
            result,
            Err(WordleError::UnsupportedCharacter('\u{e9}'))
        ));
    }

    #[test]
    fn word_bank_empty() -> Result<(), WordleError> {
        let word_bank = WordBank::from_reader(Cursor::new("\n \n"))?;

        assert!(word_bank.is_empty());
        assert_eq!(word_bank.word_length(), 0);
        Ok(())
    }

    #[test]
    fn shared_word_bank_starts_unavailable() {
        let shared = SharedWordBank::new();

        assert!(matches!(shared.state(), DictionaryState::Unset));
        assert!(matches!(shared.get(), Err(WordleError::DataUnavailable)));
        assert!(matches!(shared.wait(), Err(WordleError::DataUnavailable)));
    }

    #[test]
    fn shared_word_bank_loads_in_background() -> Result<(), WordleError> {
        let shared = SharedWordBank::new();

        shared.load_in_background(Cursor::new("crane\nmaple\n"));
        let bank = shared.wait()?;

        assert_eq!(bank.len(), 2);
        assert!(matches!(shared.state(), DictionaryState::Ready(_)));
        Ok(())
    }

    #[test]
    fn shared_word_bank_clones_share_state() -> Result<(), WordleError> {
        let shared = SharedWordBank::new();
        let clone = shared.clone();

        shared.set(WordBank::from_iterator(["crane"]));

        assert_eq!(clone.get()?.len(), 1);
        Ok(())
    }

    #[test]
    fn shared_word_bank_failed_load_is_unavailable() {
        let shared = SharedWordBank::new();

        shared.load_in_background(Cursor::new("crane\nlonger\n"));

        assert!(matches!(shared.wait(), Err(WordleError::DataUnavailable)));
        assert!(matches!(shared.state(), DictionaryState::Failed(_)));
    }
}
