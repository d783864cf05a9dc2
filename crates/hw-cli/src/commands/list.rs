use comfy_table::{ContentArrangement, Table};
use hw_core::{AdvancedClass, Alignment, EquipmentSlot, Nature, Race, StandardClass};

pub fn run(what: &str) -> Result<(), String> {
    let (header, names): (&str, Vec<String>) = match what {
        "races" => ("Race", labels(&Race::ALL)),
        "classes" => ("Class", labels(&StandardClass::ALL)),
        "advanced" => ("Advanced Class", labels(&AdvancedClass::ALL)),
        "alignments" => ("Alignment", labels(&Alignment::ALL)),
        "natures" => ("Nature", labels(&Nature::ALL)),
        "slots" => ("Equipment Slot", labels(&EquipmentSlot::ALL)),
        other => {
            return Err(format!(
                "unknown tag set: \"{other}\" (expected races, classes, advanced, alignments, natures, or slots)"
            ));
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header]);
    for name in &names {
        table.add_row(vec![name]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", names.len());

    Ok(())
}

fn labels<T: ToString>(all: &[T]) -> Vec<String> {
    all.iter().map(ToString::to_string).collect()
}
