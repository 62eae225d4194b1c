use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use wordle_filter::*;

/// Narrows down a Wordle word list using the feedback from the guesses made so far.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long, env = "WORDLE_WORDS_FILE")]
    words_file: PathBuf,

    /// The word to suggest before any guesses have been made.
    #[arg(long, default_value = DEFAULT_OPENING_GUESS)]
    opening: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word that is consistent with the given guesses.
    Filter(HistoryArgs),
    /// Print a single suggested next guess.
    Suggest(HistoryArgs),
    /// Let the solver play a game against the given word, or a random one from the word list.
    Play { word: Option<String> },
    /// Run an interactive game against the solver.
    Interactive,
}

#[derive(clap::Args, Debug)]
struct HistoryArgs {
    /// Guesses written as WORD=CODES, where each code is '.' (absent), 'y' (present elsewhere),
    /// or 'g' (correct). For example: crane=..yg.
    guesses: Vec<String>,

    /// A RON file containing a list of guess results, read before the guesses above.
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    log::info!("Reading words from {}", args.words_file.display());

    let shared_bank = SharedWordBank::new();
    shared_bank.load_in_background(io::BufReader::new(File::open(&args.words_file)?));
    let word_bank = shared_bank.wait()?;
    println!("There are {} possible words.", word_bank.len());

    let config = SolverConfig {
        opening_guess: Arc::from(args.opening.to_ascii_uppercase().as_str()),
        ..SolverConfig::default()
    };

    match args.command {
        Command::Filter(history_args) => {
            let history = read_history(&history_args)?;
            print_possible_words(&history, &word_bank);
        }
        Command::Suggest(history_args) => {
            let history = read_history(&history_args)?;
            print_suggestion(&history, &word_bank, &config);
        }
        Command::Play { word } => play_single_game(word, &word_bank, config)?,
        Command::Interactive => play_interactive_game(&word_bank, config)?,
    }

    log::info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_history(args: &HistoryArgs) -> Result<Vec<GuessResult>, Box<dyn Error>> {
    let mut history: Vec<GuessResult> = match &args.history {
        Some(path) => ron::de::from_reader(io::BufReader::new(File::open(path)?))?,
        None => Vec::new(),
    };
    for arg in &args.guesses {
        match parse_guess_arg(arg) {
            Some(result) => history.push(result),
            None => {
                return Err(Box::new(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Guess {} must be written as WORD=CODES.", arg),
                )))
            }
        }
    }
    Ok(history)
}

fn print_possible_words(history: &[GuessResult], word_bank: &WordBank) {
    let possible_words = filter(history, word_bank);
    if possible_words.is_empty() {
        println!("No valid guesses found");
        return;
    }
    println!("Possible guesses:");
    for word in possible_words.iter() {
        println!("\t{}", word);
    }
}

fn print_suggestion(history: &[GuessResult], word_bank: &WordBank, config: &SolverConfig) {
    match suggest_guess(history, word_bank, config) {
        Suggestion::Opening(word) | Suggestion::Candidate(word) => println!("{}", word),
        Suggestion::NoCandidates => println!("No valid guesses found"),
    }
}

fn play_single_game(
    word: Option<String>,
    word_bank: &WordBank,
    config: SolverConfig,
) -> Result<(), Box<dyn Error>> {
    let word = match word {
        Some(word) => word.to_ascii_uppercase(),
        None => match word_bank.choose(&mut rand::thread_rng()) {
            Some(word) => word.to_string(),
            None => return Err(Box::new(WordleError::DataUnavailable)),
        },
    };
    match play_game(&word, word_bank, config)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            print_guesses(&word, &guesses)?;
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            print_guesses(&word, &guesses)?;
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_guesses(word: &str, guesses: &[Arc<str>]) -> Result<(), WordleError> {
    for guess in guesses.iter() {
        println!("\t{} {}", guess, get_result_for_guess(word, guess)?);
    }
    Ok(())
}

fn play_interactive_game(word_bank: &WordBank, config: SolverConfig) -> io::Result<()> {
    let max_num_guesses = config.max_num_guesses;
    let mut solver = Solver::new(word_bank.clone(), config);
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"");

    for round in 1..=max_num_guesses {
        let Some(guess) = solver.select_next_guess() else {
            println!("No valid guesses found");
            return Ok(());
        };
        println!("I'm guessing: {}. How did I do?", guess);

        let result = loop {
            match get_result_for_guess_from_user(&guess) {
                Ok(result) => break result,
                Err(err) if err.kind() == io::ErrorKind::InvalidInput => println!("{}", err),
                Err(err) => return Err(err),
            }
        };

        if result.is_win() {
            println!("I did it! It took me {} guesses.", round);
            return Ok(());
        }
        println!("{}", result);

        solver.add_guess(result);
    }

    println!("I couldn't guess it :(");

    Ok(())
}

fn get_result_for_guess_from_user(guess: &str) -> io::Result<GuessResult> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "No more input.",
        ));
    }
    let input = buffer.trim();

    if guess.len() != input.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    let result = parse_guess(guess, input);
    if result.tiles.iter().any(|tile| tile.feedback == Feedback::Unknown) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Must enter only the letters '.', 'y', or 'g'. Try again.",
        ));
    }
    Ok(result)
}
