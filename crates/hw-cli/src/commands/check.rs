use colored::Colorize;
use hw_core::{Alignment, Nature, Race, StandardClass};
use hw_rules::Rulebook;

pub fn run(race: &str, class: &str, alignment: &str, nature: &str) -> Result<(), String> {
    let race: Race = super::parse_tag(race)?;
    let class: StandardClass = super::parse_tag(class)?;
    let alignment: Alignment = super::parse_tag(alignment)?;
    let nature: Nature = super::parse_tag(nature)?;

    Rulebook::standard()
        .validate(race, class, alignment, nature)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {} {} / {} is a compatible selection",
        race.to_string().bold(),
        class.to_string().bold(),
        alignment,
        nature
    );

    Ok(())
}
