//! Burnout analysis commands.

use clap::Args;
use emodiary_core::{
    get_burnout_analysis, score_components, BurnoutAnalysis, Config, OutputFormat,
    ScoreComponents,
};

use super::common::{bar, print_json, SourceArgs};

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Show how each component contributes
    #[arg(long)]
    pub explain: bool,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let entries = args.source.load(&config)?;
    let analysis = get_burnout_analysis(&entries);

    match args.source.format(&config) {
        OutputFormat::Json => print_json(&analysis),
        OutputFormat::Text => {
            print_analysis(&analysis);
            Ok(())
        }
    }
}

pub fn run_score(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let entries = args.source.load(&config)?;
    let components = score_components(&entries);

    match args.source.format(&config) {
        OutputFormat::Json => {
            if args.explain {
                print_json(&components)
            } else {
                print_json(&serde_json::json!({ "score": components.score() }))
            }
        }
        OutputFormat::Text => {
            println!("{}", components.score());
            if args.explain {
                print_components(&components);
            }
            Ok(())
        }
    }
}

fn print_analysis(analysis: &BurnoutAnalysis) {
    let risk = &analysis.risk_level;
    println!("\nBurnout Check\n");
    println!("{}", "=".repeat(50));
    println!(
        "\n  Score: {}/100  {} {} risk",
        analysis.score, risk.emoji, risk.level
    );
    println!("  {}", risk.message);
    println!("  Next step: {}", risk.action);
    println!("  Entries analyzed: {}", analysis.entries_analyzed);

    if analysis.entries_analyzed == 0 {
        println!("\n  No entries yet. Start writing your first diary entry!");
        return;
    }

    let patterns = &analysis.patterns;
    println!("\nMood distribution:");
    for (mood, percent) in &patterns.mood_distribution {
        println!(
            "  {} {:<9} {} {:>3}%",
            mood.emoji(),
            mood.label(),
            bar(*percent, 20),
            percent
        );
    }
    if let Some(dominant) = &patterns.dominant_mood {
        println!("  Dominant mood: {}", dominant.label());
    }
    println!(
        "  Negative: {}%  Confused: {}%",
        patterns.negative_percentage, patterns.confusion_percentage
    );

    println!("\nTrend:");
    let line: Vec<String> = analysis
        .trend
        .iter()
        .map(|point| format!("{} {}", point.date, point.mood.emoji()))
        .collect();
    println!("  {}", line.join("  "));

    if !analysis.stress_indicators.is_empty() {
        println!("\nStress indicators: {}", analysis.stress_indicators.join(", "));
    }
    println!("\n{}", "=".repeat(50));
}

fn print_components(c: &ScoreComponents) {
    println!("\nComponents:");
    println!("  Negative moods   {:>6.1}% x 0.5", c.negative);
    println!("  Confusion        {:>6.1}% x 0.3", c.confusion);
    println!(
        "  Stress keywords  {:>6.1}  x 0.2 ({} matches)",
        c.stress, c.stress_matches
    );
    println!(
        "  Negative streak  {:>6}  -> +{}",
        c.longest_negative_run, c.consecutive_bonus
    );
    println!("  Raw total        {:>6.1}", c.raw);
}
