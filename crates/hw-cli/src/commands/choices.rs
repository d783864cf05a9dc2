use colored::Colorize;
use hw_core::{Race, StandardClass};
use hw_rules::Rulebook;
use serde_json::json;

pub fn run(race: Option<&str>, class: Option<&str>, json: bool) -> Result<(), String> {
    let race: Option<Race> = race.map(super::parse_tag).transpose()?;
    let class: Option<StandardClass> = class.map(super::parse_tag).transpose()?;

    let book = Rulebook::standard();
    let (alignments, natures) = book.allowed_choices(race, class);

    let alignments: Vec<String> = alignments.iter().map(ToString::to_string).collect();
    let natures: Vec<String> = natures.iter().map(ToString::to_string).collect();

    if json {
        let payload = json!({
            "alignments": alignments,
            "natures": natures,
        });
        println!("{payload}");
        return Ok(());
    }

    println!("  alignments: {}", render(&alignments));
    println!("  natures:    {}", render(&natures));

    Ok(())
}

fn render(names: &[String]) -> String {
    if names.is_empty() {
        "none".red().to_string()
    } else {
        names.join(", ")
    }
}
