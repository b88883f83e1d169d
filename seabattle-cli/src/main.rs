use std::{
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use seabattle::{
    board::{Board, BoardGenerator, CannotShootReason, CellState, Coordinate, ShotOutcome},
    game::{Combatant, Match, MatchState, ShotRecord, Side},
};

mod logging;

/// Matcher for a pair of cell numbers like "3 5" or "3,5".
static COORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$").unwrap());

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let matches = App::new("Sea Battle")
        .version("0.1")
        .about("Russian sea battle on a 6x6 grid against a random-firing computer.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the random generator for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("show the computer's intact ships"),
        )
        .get_matches();

    let mut rng = choose_rng(&matches);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let first = choose_first(&matches, &mut input, &mut rng)?;
    debug!("{:?} moves first", first);

    let generator = BoardGenerator::default();
    let human_board = generator.generate(&mut rng)?;
    let mut bot_board = generator.generate(&mut rng)?;
    bot_board.set_revealed(matches.is_present("reveal"));

    let human = Combatant::interactive(move |rejection| {
        if let Some(err) = rejection {
            match err.reason() {
                CannotShootReason::OutOfBounds => println!("That cell is off the board."),
                CannotShootReason::AlreadyShot => println!("You already shot that cell."),
            }
        }
        read_target(&mut input)
    });

    intro();

    let mut game = Match::new(
        [human_board, bot_board],
        [human, Combatant::automated()],
        first,
    );

    loop {
        println!();
        show_boards(&game);
        if let MatchState::Finished { winner } = game.state() {
            println!();
            match winner {
                Side::P1 => println!("You won! The enemy fleet is destroyed."),
                Side::P2 => println!("You lost. Your fleet is destroyed."),
            }
            break;
        }
        println!();
        match game.current() {
            Side::P1 => println!("Your turn."),
            Side::P2 => println!("Opponent's turn."),
        }
        if let Some(record) = game.step(&mut rng) {
            report_shot(&record);
        }
    }
    Ok(())
}

/// Build the game RNG, seeded from the command line if given.
fn choose_rng(matches: &ArgMatches) -> StdRng {
    match matches.value_of("seed") {
        Some(seed) => match seed.parse() {
            Ok(seed) => StdRng::seed_from_u64(seed),
            Err(_) => {
                eprintln!("seed must be an unsigned integer, got \"{}\"", seed);
                process::exit(2);
            }
        },
        None => StdRng::from_entropy(),
    }
}

/// Pick which side fires first, from the arguments or by asking.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
    rng: &mut impl Rng,
) -> io::Result<Side> {
    Ok(if let Some(choice) = matches.value_of("first_player") {
        match choice.to_ascii_lowercase().as_str() {
            "human" | "me" => Side::P1,
            "computer" | "bot" => Side::P2,
            "random" | "rand" => rng.gen(),
            _ => unreachable!(),
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::P1),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::P2),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Print the greeting and the input format.
fn intro() {
    println!();
    println!("-------------------------");
    println!("       Sea Battle");
    println!("-------------------------");
    println!(" shots are entered as");
    println!(" column row, from 1 to 6");
    println!("-------------------------");
}

/// Prompt for a target cell until a pair of numbers is entered. Numbers are
/// 1-based on screen; whether the cell is actually on the board is for the
/// game to decide.
fn read_target(input: &mut InputReader<impl BufRead>) -> Coordinate {
    let result = input.read_input("Your shot (column row):", |line| {
        match COORD.captures(line) {
            None => {
                println!("Enter the column and row as two numbers, like \"2 5\".");
                None
            }
            Some(caps) => {
                let x = match axis(caps.name("x").unwrap().as_str()) {
                    Some(x) => x,
                    None => {
                        println!(
                            "invalid column: {}, cells count from 1",
                            caps.name("x").unwrap().as_str()
                        );
                        return None;
                    }
                };
                let y = match axis(caps.name("y").unwrap().as_str()) {
                    Some(y) => y,
                    None => {
                        println!(
                            "invalid row: {}, cells count from 1",
                            caps.name("y").unwrap().as_str()
                        );
                        return None;
                    }
                };
                Some(Coordinate::new(x, y))
            }
        }
    });
    match result {
        Ok(coord) => coord,
        Err(err) => {
            eprintln!("failed to read input: {}", err);
            process::exit(1);
        }
    }
}

/// Convert one on-screen 1-based cell number to its 0-based value.
fn axis(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

/// Describe the resolved shot. The computer's target is echoed since the
/// human never typed it.
fn report_shot(record: &ShotRecord) {
    if record.side == Side::P2 {
        let (x, y): (usize, usize) = record.target.into();
        println!("Opponent fires at {} {}.", x + 1, y + 1);
    }
    match record.outcome {
        ShotOutcome::Miss => println!("Miss."),
        ShotOutcome::Hit => println!("Hit!"),
        ShotOutcome::Destroyed => println!("Ship destroyed!"),
    }
}

/// Print both sides of the ocean: the player's own board, then the computer's.
fn show_boards(game: &Match) {
    println!("Your board:");
    show_board(game.board(Side::P1));
    println!();
    println!("Opponent's board:");
    show_board(game.board(Side::P2));
}

/// Print one board as a bordered grid with 1-based headers. Columns are `x`,
/// rows are `y`.
fn show_board(board: &Board) {
    struct Glyph {
        state: CellState,
        revealed: bool,
    }
    impl fmt::Display for Glyph {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self.state {
                CellState::Empty => "≈",
                CellState::Ship if self.revealed => "■",
                CellState::Ship => "≈",
                CellState::Hit => "X",
                CellState::Miss | CellState::Blocked => ".",
            })
        }
    }
    let revealed = board.revealed();
    print!("  |");
    for x in 1..=board.size() {
        print!(" {} |", x);
    }
    println!();
    for (y, row) in board.iter_rows().enumerate() {
        print!("{} |", y + 1);
        for cell in row {
            print!(" {} |", Glyph { state: cell, revealed });
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
