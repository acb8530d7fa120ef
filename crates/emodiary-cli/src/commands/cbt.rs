//! CBT reflection exercise commands.

use std::io::{BufRead, Write};

use clap::Subcommand;
use emodiary_core::{exercise_for, CbtSession, Mood, FORM_MOODS};

use super::common::print_json;

#[derive(Subcommand)]
pub enum CbtAction {
    /// List available exercises
    List,
    /// Show the prompts for a mood
    Show {
        /// Mood (happy/sad/neutral/excited/anxious/calm)
        mood: Mood,
        #[arg(long)]
        json: bool,
    },
    /// Work through an exercise, one response per line.
    /// Enter ":back" to revisit the previous prompt.
    Run {
        /// Mood (happy/sad/neutral/excited/anxious/calm)
        mood: Mood,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CbtAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CbtAction::List => {
            for mood in FORM_MOODS {
                if let Some(exercise) = exercise_for(&mood) {
                    println!("{} {:<9} {}", mood.emoji(), mood.label(), exercise.title);
                }
            }
            Ok(())
        }
        CbtAction::Show { mood, json } => {
            let exercise =
                exercise_for(&mood).ok_or_else(|| format!("no exercise for mood '{mood}'"))?;
            if json {
                return print_json(exercise);
            }
            println!("{}\n", exercise.title);
            for (i, prompt) in exercise.prompts.iter().enumerate() {
                println!("  {}. {}", i + 1, prompt);
            }
            Ok(())
        }
        CbtAction::Run { mood, json } => run_session(mood, json),
    }
}

fn run_session(mood: Mood, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = CbtSession::start(mood)?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    eprintln!("{}", session.exercise().title);
    loop {
        eprintln!(
            "\nQuestion {} of {} ({:.0}%)",
            session.position() + 1,
            session.exercise().prompts.len(),
            session.progress()
        );
        eprintln!("{}", session.current_prompt());
        if let Some(previous) = session.current_response() {
            eprintln!("(saved: {previous})");
        }
        eprint!("> ");
        std::io::stderr().flush()?;

        let Some(line) = lines.next() else {
            return Err("input ended before the exercise was completed".into());
        };
        let line = line?;

        if line.trim() == ":back" {
            if let Err(e) = session.previous() {
                eprintln!("already at the first prompt ({e})");
            }
            continue;
        }

        if session.is_last_prompt() {
            match session.clone().complete(&line) {
                Ok(done) => {
                    if json {
                        print_json(&done)?;
                    } else {
                        println!("Great job completing this exercise!");
                        for (prompt, response) in &done.reflections {
                            println!("\n{prompt}\n  {response}");
                        }
                    }
                    return Ok(());
                }
                Err(e) => eprintln!("{e}"),
            }
        } else if let Err(e) = session.submit(&line) {
            eprintln!("{e}");
        }
    }
}
