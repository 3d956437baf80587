//! CLI flag quiz example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use flagquiz::{CountryPool, GameState, Quiz, QuizEvent, QuizOptions, Round};

fn main() {
    pretty_env_logger::init();

    println!("Guess the Flag (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut quiz = Quiz::new(QuizOptions::default(), seed);

    quiz.subscribe(|event| {
        if let QuizEvent::GameOver(state) = event {
            println!("\nGood job! Your final score was: {}", format_score(state));
        }
    });

    let mut round = match quiz.start_game(CountryPool::flags()) {
        Ok(round) => round,
        Err(err) => {
            println!("Could not start: {err}");
            return;
        }
    };

    loop {
        print_round(&round);

        let Some(index) = prompt_index("Your pick (1-3): ") else {
            println!("Goodbye.");
            return;
        };

        let outcome = match quiz.submit_guess(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Guess error: {err}");
                continue;
            }
        };

        if outcome.correct {
            println!("That's correct!");
        } else {
            println!(
                "Nope, that's {}. The flag of {} was number {}.",
                outcome.chosen,
                outcome.correct_answer,
                round.correct_index() + 1
            );
        }

        if outcome.ends_game() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    quiz.reset_game();
                    let Some(next) = quiz.round().cloned() else {
                        return;
                    };
                    round = next;
                }
                _ => return,
            }
            continue;
        }

        println!("Your score is: {}", format_score(&outcome.state));
        let _ = prompt_line("Press enter to continue...");

        round = match quiz.advance_round() {
            Ok(round) => round,
            Err(err) => {
                println!("Advance error: {err}");
                return;
            }
        };
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_index(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value @ 1..=3) => return Some(value - 1),
            _ => println!("Please enter 1, 2 or 3."),
        }
    }
}

fn print_round(round: &Round) {
    println!("\nTap the country of... {}", colorize(round.correct_answer(), "1"));
    for (index, country) in round.options().iter().enumerate() {
        println!("  [{}] {}", index + 1, colorize(&flag_hint(country), "36"));
    }
}

/// Text stand-in for a flag image.
fn flag_hint(country: &str) -> String {
    let hint = match country {
        "Estonia" => "blue / black / white, horizontal",
        "France" => "blue | white | red, vertical",
        "Germany" => "black / red / gold, horizontal",
        "Ireland" => "green | white | orange, vertical",
        "Italy" => "green | white | red, vertical",
        "Nigeria" => "green | white | green, vertical",
        "Poland" => "white / red, horizontal",
        "Russia" => "white / blue / red, horizontal",
        "Spain" => "red / gold with crest / red, horizontal",
        "UK" => "red and white crosses on blue",
        "US" => "stars and stripes",
        "Japan" => "red dot on white",
        "Switzerland" => "white cross on red",
        _ => "unknown flag",
    };
    hint.to_string()
}

fn format_score(state: &GameState) -> String {
    format!(
        "{}/{} ({}%)",
        state.correct_guesses,
        state.rounds_played,
        state.percent_correct()
    )
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
