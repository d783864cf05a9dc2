use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hw_core::{
    AdvancedClass, Alignment, Character, EquipmentSlot, Nature, Race, Sex, StandardClass,
};
use hw_rules::{CharacterDraft, Rulebook, roll_attributes};

/// Inputs for the `create` subcommand.
pub struct CreateOpts<'a> {
    /// Character name.
    pub name: &'a str,
    /// Chosen race.
    pub race: &'a str,
    /// Chosen class.
    pub class: &'a str,
    /// Chosen alignment.
    pub alignment: &'a str,
    /// Chosen nature.
    pub nature: &'a str,
    /// Character sex.
    pub sex: &'a str,
    /// Optional advanced class.
    pub advanced: Option<&'a str>,
    /// Roll primary scores instead of leaving them at zero.
    pub roll: bool,
    /// RNG seed used with `roll`.
    pub seed: u64,
    /// Emit JSON instead of a sheet.
    pub json: bool,
}

pub fn run(opts: &CreateOpts<'_>) -> Result<(), String> {
    let race: Race = super::parse_tag(opts.race)?;
    let class: StandardClass = super::parse_tag(opts.class)?;
    let alignment: Alignment = super::parse_tag(opts.alignment)?;
    let nature: Nature = super::parse_tag(opts.nature)?;
    let sex: Sex = super::parse_tag(opts.sex)?;
    let advanced: Option<AdvancedClass> = opts.advanced.map(super::parse_tag).transpose()?;

    let mut draft = CharacterDraft::new(opts.name, sex, race, class, alignment, nature);
    if let Some(advanced) = advanced {
        draft = draft.with_advanced_class(advanced);
    }
    if opts.roll {
        draft = draft.with_attributes(roll_attributes(opts.seed));
    }

    let character = draft
        .build(&Rulebook::standard())
        .map_err(|e| e.to_string())?;

    if opts.json {
        let payload = serde_json::to_string_pretty(&character).map_err(|e| e.to_string())?;
        println!("{payload}");
        return Ok(());
    }

    print_sheet(&character);
    Ok(())
}

fn print_sheet(character: &Character) {
    let class_str = match character.advanced_class {
        Some(advanced) => format!("{} ({advanced})", character.base_class),
        None => character.base_class.to_string(),
    };

    println!(
        "  {} [{}]",
        character.name.bold(),
        character.id.to_string().dimmed()
    );
    println!(
        "  {} {} — {} / {}",
        character.race, class_str, character.alignment, character.nature
    );
    println!("  sex:   {}", character.sex);
    println!("  level: {}", character.attributes.level);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Score", "Value"]);
    for (label, value) in character.attributes.primary_scores() {
        table.add_row(vec![label.to_string(), value.to_string()]);
    }
    println!("{table}");
    println!();
    println!(
        "  {} of {} equipment slots filled",
        character.loadout.occupied_count(),
        EquipmentSlot::ALL.len()
    );
}
