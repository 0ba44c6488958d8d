//! Interactive assist mode
//!
//! Text-based loop: print the recommended word, read the feedback the game
//! gave for it, absorb, repeat.

use crate::core::Feedback;
use crate::output::formatters::sorted_letters;
use crate::solver::{Phase, Solver};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive assist loop
///
/// The loop ends when the user types `quit`, reports a win, or the candidate
/// set empties out. An empty candidate set is a terminal data state — the
/// feedback rounds were jointly unsatisfiable — not an error.
///
/// # Errors
///
/// Returns an error only for I/O failures reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(solver: &mut Solver) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Probe - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses: probe words with all-distinct letters first,");
    println!("then surviving candidates once enough letters are confirmed.\n");
    println!("After each guess, enter the feedback pattern:");
    println!("  - G/g/🟩 or o for green (correct position)");
    println!("  - Y/y/🟨 or x for yellow (wrong position)");
    println!("  - -/_/⬜ or . for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Type 'quit' to exit.\n");

    let mut turn = 1;

    loop {
        let candidate_count = solver.candidate_count();

        if candidate_count == 0 {
            println!(
                "\n{}",
                "❌ No candidates remain — the feedback rounds rule out every word."
                    .red()
                    .bold()
            );
            println!("Check the patterns you entered, or try a larger word list.\n");
            return Ok(());
        }

        let Some(guess) = solver.recommend().cloned() else {
            println!("\n{}", "❌ Nothing left to suggest.".red().bold());
            return Ok(());
        };

        let phase_tag = match solver.phase() {
            Phase::Exploring => "exploring".cyan(),
            Phase::Exploiting => "exploiting".green(),
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {candidate_count} candidates remaining [{phase_tag}]"
        );
        println!("────────────────────────────────────────────────────────────");

        println!(
            "\n📊 Suggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );
        println!("   Probe pool:   {} words", solver.probe_count());
        println!(
            "   Tried:        {}",
            sorted_letters(solver.tried_letters())
        );
        println!(
            "   Found:        {}",
            sorted_letters(solver.found_letters())
        );

        if candidate_count <= 10 {
            println!("\nRemaining candidates:");
            let mut remaining: Vec<&str> = solver.candidates().map(|w| w.text()).collect();
            remaining.sort_unstable();
            for candidate in remaining {
                println!("  • {}", candidate.to_uppercase());
            }
        }
        println!();

        loop {
            let input = get_user_input("Enter feedback (G/Y/-, 'win', or 'quit')")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "win" | "correct" | "solved" => {
                    println!(
                        "\n{}",
                        format!("🎉 Solved in {turn} {}!", plural_guess(turn))
                            .green()
                            .bold()
                    );
                    println!();
                    return Ok(());
                }
                _ => {
                    if let Some(feedback) = Feedback::parse(&input, solver.length()) {
                        if feedback.is_win() {
                            println!(
                                "\n{}",
                                format!("🎉 Solved in {turn} {}!", plural_guess(turn))
                                    .green()
                                    .bold()
                            );
                            println!();
                            return Ok(());
                        }
                        solver.absorb(&guess, &feedback);
                        turn += 1;
                        break;
                    }
                    println!(
                        "❌ Invalid pattern! Expected {} symbols from G/Y/- (or o/x/.)\n",
                        solver.length()
                    );
                }
            }
        }
    }
}

fn plural_guess(turn: usize) -> &'static str {
    if turn == 1 { "guess" } else { "guesses" }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
