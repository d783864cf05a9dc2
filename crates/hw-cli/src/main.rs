//! CLI frontend for the Heldenwerk character creator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hw",
    about = "Heldenwerk — character templates and creation rules",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one of the tag enumerations
    List {
        /// What to list: races, classes, advanced, alignments, natures, slots
        what: String,
    },

    /// Show which alignments and natures a partial selection leaves open
    Choices {
        /// Candidate race
        #[arg(short, long)]
        race: Option<String>,

        /// Candidate class
        #[arg(short, long)]
        class: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a full race/class/alignment/nature combination
    Check {
        /// Chosen race
        #[arg(short, long)]
        race: String,

        /// Chosen class
        #[arg(short, long)]
        class: String,

        /// Chosen alignment
        #[arg(short, long)]
        alignment: String,

        /// Chosen nature
        #[arg(short, long)]
        nature: String,
    },

    /// Create a character and print its sheet
    Create {
        /// Character name
        name: String,

        /// Chosen race
        #[arg(short, long)]
        race: String,

        /// Chosen class
        #[arg(short, long)]
        class: String,

        /// Chosen alignment
        #[arg(short, long)]
        alignment: String,

        /// Chosen nature
        #[arg(short, long)]
        nature: String,

        /// Character sex
        #[arg(short, long, default_value = "female")]
        sex: String,

        /// Advanced class on top of the base class
        #[arg(long)]
        advanced: Option<String>,

        /// Roll 3d6 for each primary score instead of zeroes
        #[arg(long)]
        roll: bool,

        /// RNG seed for deterministic rolling
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Emit the character as JSON instead of a sheet
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { what } => commands::list::run(&what),
        Commands::Choices { race, class, json } => {
            commands::choices::run(race.as_deref(), class.as_deref(), json)
        }
        Commands::Check {
            race,
            class,
            alignment,
            nature,
        } => commands::check::run(&race, &class, &alignment, &nature),
        Commands::Create {
            name,
            race,
            class,
            alignment,
            nature,
            sex,
            advanced,
            roll,
            seed,
            json,
        } => commands::create::run(&commands::create::CreateOpts {
            name: &name,
            race: &race,
            class: &class,
            alignment: &alignment,
            nature: &nature,
            sex: &sex,
            advanced: advanced.as_deref(),
            roll,
            seed,
            json,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
