//! Narrows a Wordle word list down to the words that are still consistent with the feedback
//! from every guess made so far.
//!
//! Repeated letters are handled the way the game scores them: a letter marked absent only rules
//! out copies beyond those marked correct or present in the same guess.
//!
//! ```
//! use wordle_filter::*;
//!
//! let bank = WordBank::from_iterator(["glade", "plaza", "slack", "alloy"])?;
//! // The answer is "GLADE".
//! let history = [get_result_for_guess("glade", "allow")?];
//!
//! assert_eq!(filter(&history, &bank).len(), 3);
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod feedback;
mod restrictions;
mod results;

pub use data::*;
pub use engine::*;
pub use feedback::*;
pub use restrictions::WordRestrictions;
pub use results::*;
