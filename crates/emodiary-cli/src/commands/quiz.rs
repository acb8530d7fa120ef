//! Questionnaire, risk lookup and score history commands.

use clap::Args;
use emodiary_core::quiz::QUESTIONS;
use emodiary_core::{get_risk_level, Config, OutputFormat, QuizAnswers, ScoreHistory};

use super::common::print_json;

#[derive(Args)]
pub struct QuizArgs {
    /// How often do you feel exhausted? (1-5)
    #[arg(long)]
    pub exhaustion: u8,
    /// How often do you feel detached from work/study? (1-5)
    #[arg(long)]
    pub detachment: u8,
    /// How satisfied are you with your rest/sleep? (1-5)
    #[arg(long)]
    pub rest: u8,
    /// Print JSON regardless of output.format
    #[arg(long)]
    pub json: bool,
}

fn wants_json(flag: bool) -> bool {
    flag || Config::load().output.format == OutputFormat::Json
}

pub fn run_quiz(args: QuizArgs) -> Result<(), Box<dyn std::error::Error>> {
    let answers = QuizAnswers::new(args.exhaustion, args.detachment, args.rest);
    let result = answers.score()?;

    if wants_json(args.json) {
        return print_json(&result);
    }

    let values = [answers.exhaustion, answers.detachment, answers.rest_satisfaction];
    for (question, value) in QUESTIONS.iter().zip(values) {
        println!("  {question} {value}");
    }
    println!(
        "\nBurnout score: {}%  {} {}",
        result.score, result.risk_level.emoji, result.risk_level.level
    );
    println!("{}", result.risk_level.action);
    Ok(())
}

pub fn run_risk(score: u8) -> Result<(), Box<dyn std::error::Error>> {
    if score > 100 {
        return Err(format!("score must be between 0 and 100, got {score}").into());
    }
    let level = get_risk_level(score);
    if wants_json(false) {
        return print_json(&level);
    }
    println!("{} {}", level.emoji, level.level);
    println!("{}", level.message);
    println!("{}", level.action);
    Ok(())
}

pub fn run_history(scores: Vec<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let history = ScoreHistory::try_from(scores)?;
    let Some(summary) = history.summary() else {
        println!("No scores yet. Take the burnout calculator to see your results.");
        return Ok(());
    };

    if wants_json(false) {
        return print_json(&summary);
    }

    println!("Average Score: {}%", summary.average);
    println!("Highest Score: {}%", summary.highest);
    println!("Lowest Score:  {}%", summary.lowest);
    println!("Total Tests:   {}", summary.count);
    println!("\nScore History:");
    for (i, score) in summary.scores.iter().enumerate() {
        println!("  Test {:<3} {:>3}%", i + 1, score);
    }
    Ok(())
}
