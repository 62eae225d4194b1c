//! Turns raw feedback from a host page or a user into [`Feedback`] values.
//!
//! Every function here is total: anything that isn't understood becomes
//! [`Feedback::Unknown`] instead of an error, so one bad tile never stops the filter from
//! running.

use crate::results::{Feedback, GuessResult};

impl Feedback {
    /// Maps a tile label as announced by the game page.
    ///
    /// ```
    /// use wordle_filter::Feedback;
    ///
    /// assert_eq!(Feedback::from_label("correct"), Feedback::Correct);
    /// assert_eq!(Feedback::from_label("present in another position"), Feedback::Present);
    /// assert_eq!(Feedback::from_label("absent"), Feedback::Absent);
    /// assert_eq!(Feedback::from_label("empty"), Feedback::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Feedback {
        match label.trim().to_ascii_lowercase().as_str() {
            "correct" => Feedback::Correct,
            "present in another position" => Feedback::Present,
            "absent" => Feedback::Absent,
            _ => Feedback::Unknown,
        }
    }

    /// Maps a one-character feedback code:
    ///
    /// * `g` = correct
    /// * `y` = present, but not here
    /// * `.`, `b`, or `x` = absent
    pub fn from_code(code: char) -> Feedback {
        match code.to_ascii_lowercase() {
            'g' => Feedback::Correct,
            'y' => Feedback::Present,
            '.' | 'b' | 'x' => Feedback::Absent,
            _ => Feedback::Unknown,
        }
    }

    /// The one-character code for this feedback. The inverse of [`Feedback::from_code`] for
    /// known feedback.
    pub fn as_code(self) -> char {
        match self {
            Feedback::Correct => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => '.',
            Feedback::Unknown => '?',
        }
    }
}

/// Builds a guess from the guessed word and one feedback code per letter.
///
/// This never fails. If `codes` is shorter or longer than `word`, every letter and code is
/// still kept (see [`GuessResult::new`]), so the filter skips the result as malformed.
pub fn parse_guess(word: &str, codes: &str) -> GuessResult {
    let feedback: Vec<Feedback> = codes.trim().chars().map(Feedback::from_code).collect();
    GuessResult::new(word.trim(), &feedback)
}

/// Parses a guess written as `WORD=CODES`, e.g. `crane=..yg.`.
///
/// Returns `None` if there is no `=`.
pub fn parse_guess_arg(arg: &str) -> Option<GuessResult> {
    let (word, codes) = arg.split_once('=')?;
    Some(parse_guess(word, codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restrictions::WordRestrictions;
    use crate::results::WordleError;

    #[test]
    fn from_label_ignores_case_and_whitespace() {
        assert_eq!(Feedback::from_label(" Correct "), Feedback::Correct);
        assert_eq!(Feedback::from_label("ABSENT"), Feedback::Absent);
        assert_eq!(Feedback::from_label(""), Feedback::Unknown);
        assert_eq!(Feedback::from_label("present"), Feedback::Unknown);
    }

    #[test]
    fn from_code_maps_every_code() {
        assert_eq!(Feedback::from_code('G'), Feedback::Correct);
        assert_eq!(Feedback::from_code('y'), Feedback::Present);
        assert_eq!(Feedback::from_code('.'), Feedback::Absent);
        assert_eq!(Feedback::from_code('b'), Feedback::Absent);
        assert_eq!(Feedback::from_code('x'), Feedback::Absent);
        assert_eq!(Feedback::from_code('?'), Feedback::Unknown);
        assert_eq!(Feedback::from_code('2'), Feedback::Unknown);
    }

    #[test]
    fn as_code_round_trips_known_feedback() {
        for feedback in [Feedback::Correct, Feedback::Present, Feedback::Absent] {
            assert_eq!(Feedback::from_code(feedback.as_code()), feedback);
        }
        assert_eq!(Feedback::from_code(Feedback::Unknown.as_code()), Feedback::Unknown);
    }

    #[test]
    fn parse_guess_pairs_letters_with_codes() {
        let result = parse_guess("allow", "yg...");

        assert_eq!(result.guess(), "ALLOW");
        assert_eq!(
            result.feedback(),
            vec![
                Feedback::Present,
                Feedback::Correct,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn parse_guess_with_short_codes_keeps_every_letter() {
        let result = parse_guess("allow", "yg");

        assert_eq!(result.guess(), "ALLOW");
        assert_eq!(result.feedback()[2..], [Feedback::Unknown; 3]);
    }

    #[test]
    fn parse_guess_length_mismatch_is_malformed() {
        let mut restrictions = WordRestrictions::new(5);

        assert!(matches!(
            restrictions.update(&parse_guess("cranes", "ggggg")),
            Err(WordleError::MalformedGuess(_))
        ));
        assert!(matches!(
            restrictions.update(&parse_guess_arg("maple=ggggg..").unwrap()),
            Err(WordleError::MalformedGuess(_))
        ));
        assert_eq!(restrictions, WordRestrictions::new(5));
    }

    #[test]
    fn parse_guess_arg_splits_on_equals() {
        let result = parse_guess_arg("torch=.....").unwrap();

        assert_eq!(result.guess(), "TORCH");
        assert_eq!(result.feedback(), vec![Feedback::Absent; 5]);
        assert_eq!(parse_guess_arg("torch"), None);
    }
}
