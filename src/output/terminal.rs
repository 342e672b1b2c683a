// Colored terminal output for score sheets, measures and prepared content.

use colored::Colorize;

use crate::measures::measure::Measure;
use crate::pipeline::sheet::ScoreSheet;
use crate::text::prepare::PreparedContent;

/// Display every score in the sheet, grouped by TimeMap.
pub fn display_score_sheet(sheet: &ScoreSheet) {
    if sheet.is_empty() {
        println!("No scores. The collection has no TimeMaps, or the measure is not implemented.");
        return;
    }

    let measures = sheet.measures();

    println!(
        "\n{}",
        format!(
            "=== Drift Scores ({} TimeMaps, {} mementos) ===",
            sheet.timemap_count(),
            sheet.memento_count()
        )
        .bold()
    );

    for (id, mementos) in sheet.timemaps() {
        println!("\n  {}", super::truncate_chars(id, 100).bold());

        if mementos.is_empty() {
            println!("    {}", "no mementos".dimmed());
            continue;
        }

        // Header
        print!("    {:<60}", "Memento".dimmed());
        for name in &measures {
            print!(" {:>14}", name.dimmed());
        }
        println!();

        for (uri, scores) in mementos {
            print!("    {:<60}", super::truncate_chars(uri, 57));
            for name in &measures {
                match scores.get(name) {
                    Some(record) => {
                        let cell = format!("{:>14.4}", record.comparison_score);
                        print!(" {}", colorize_score(record.comparison_score, &cell));
                    }
                    None => print!(" {:>14}", "-".dimmed()),
                }
            }
            println!();
        }
    }

    println!();

    // Summary
    for name in &measures {
        let missing = sheet.missing(name).len();
        let scored = sheet.score_count(name);
        if missing > 0 {
            println!(
                "  {} {}: {} scored, {} skipped",
                "!".yellow(),
                name,
                scored,
                missing
            );
        } else {
            println!("  {} {}: {} scored", "ok".green(), name, scored);
        }
    }
}

/// List the available measures and their default preparation.
pub fn display_measures() {
    println!("\n{}", "=== Measures ===".bold());
    println!(
        "  {:<14} {:>9} {:>9} {:>12}",
        "Name".dimmed(),
        "Tokenize".dimmed(),
        "Stemming".dimmed(),
        "Boilerplate".dimmed(),
    );
    for measure in Measure::ALL {
        let options = measure.default_options();
        let name = if measure.is_implemented() {
            measure.name().normal()
        } else {
            format!("{} (not implemented)", measure.name()).dimmed()
        };
        println!(
            "  {:<14} {:>9} {:>9} {:>12}",
            name,
            yes_no(options.tokenize),
            yes_no(options.stemming),
            if options.remove_boilerplate { "removed" } else { "kept" },
        );
    }
}

/// Show what a measure would see for a single memento.
pub fn display_prepared(uri: &str, content: &PreparedContent) {
    println!("\n{}", format!("=== Prepared content for {uri} ===").bold());
    match content {
        PreparedContent::Text(text) => {
            println!("  {} bytes of text", text.len());
            println!("  {}", super::truncate_chars(text, 400).dimmed());
        }
        PreparedContent::Tokens(tokens) => {
            println!("  {} tokens", tokens.len());
            println!("  {}", super::truncate_chars(&tokens.join(" "), 400).dimmed());
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Color a comparison score by how far the memento has drifted.
fn colorize_score(score: f64, cell: &str) -> colored::ColoredString {
    let magnitude = score.abs();
    if magnitude < 0.05 {
        cell.green()
    } else if magnitude < 0.25 {
        cell.yellow()
    } else {
        cell.red()
    }
}
