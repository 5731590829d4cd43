use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tippspiel::deadline::{local_now, Deadline};
use tippspiel::party::{Guess, Party};
use tippspiel::submit::SubmitError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_STORE: i32 = 2;
const EXIT_LOCKED: i32 = 3;

/// One percentage per party, shared by tip submission and results entry
#[derive(Args, Debug)]
struct PartyValues {
    /// Predicted percentage for SPD
    #[arg(long, value_parser = parse_percent)]
    spd: f64,

    /// Predicted percentage for CDU
    #[arg(long, value_parser = parse_percent)]
    cdu: f64,

    /// Predicted percentage for GRUENE
    #[arg(long, value_parser = parse_percent)]
    gruene: f64,

    /// Predicted percentage for FDP
    #[arg(long, value_parser = parse_percent)]
    fdp: f64,

    /// Predicted percentage for AfD
    #[arg(long, value_parser = parse_percent)]
    afd: f64,

    /// Predicted percentage for FREIE_WAEHLER
    #[arg(long = "freie-waehler", value_parser = parse_percent)]
    freie_waehler: f64,

    /// Predicted percentage for LINKE
    #[arg(long, value_parser = parse_percent)]
    linke: f64,
}

impl PartyValues {
    fn into_guess(self) -> Guess {
        let mut guess = Guess::new();
        guess.set(Party::Spd, self.spd);
        guess.set(Party::Cdu, self.cdu);
        guess.set(Party::Gruene, self.gruene);
        guess.set(Party::Fdp, self.fdp);
        guess.set(Party::Afd, self.afd);
        guess.set(Party::FreieWaehler, self.freie_waehler);
        guess.set(Party::Linke, self.linke);
        guess
    }
}

/// Mirror of the input widget bounds: percentages in 0.0..=100.0
fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("{} is out of range (0.0 to 100.0)", value));
    }
    Ok(value)
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the submission deadline and how many tips are stored
    Status,
    /// Submit a tip: a name and one predicted percentage per party
    Submit {
        /// Participant name, must not already have a tip
        name: String,
        #[command(flatten)]
        values: PartyValues,
    },
    /// List the names of stored tips in submission order
    List,
    /// Enter the official results and print the standings
    Rank {
        #[command(flatten)]
        results: PartyValues,
    },
}

#[derive(Parser, Debug)]
#[command(name = "tippspiel")]
#[command(about = "Election prediction pool: collect tips, rank them against the result", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (per-party score breakdown, store details)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the tips file (defaults to ~/.config/tippspiel/tipps.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let tips_path = cli
        .file
        .unwrap_or_else(tippspiel::store::get_tips_path);
    let deadline = Deadline::submission_deadline();
    let now = local_now();
    let use_colors = tippspiel::output::should_use_colors();

    if cli.verbose {
        eprintln!("Tips file: {}", tips_path.display());
    }

    match cli.command {
        Commands::Status => {
            println!(
                "{}",
                tippspiel::output::format_deadline_line(&deadline, now, use_colors)
            );

            match tippspiel::store::load_tips(&tips_path) {
                Ok(tips) => println!("Stored tips: {}", tips.len()),
                Err(e) => {
                    eprintln!("Store error: {:#}", e);
                    std::process::exit(EXIT_STORE);
                }
            }
        }
        Commands::Submit { name, values } => {
            if deadline.is_locked(now) {
                eprintln!("Submissions are closed (deadline was {}).", deadline);
                std::process::exit(EXIT_LOCKED);
            }

            match tippspiel::submit::submit_tip(&tips_path, &name, values.into_guess()) {
                Ok(()) => println!("Tip saved for {}.", name),
                Err(e) => {
                    if let Some(validation) = e.downcast_ref::<SubmitError>() {
                        eprintln!("Invalid submission: {}", validation);
                        std::process::exit(EXIT_VALIDATION);
                    }
                    eprintln!("Store error: {:#}", e);
                    std::process::exit(EXIT_STORE);
                }
            }
        }
        Commands::List => {
            let tips = match tippspiel::store::load_tips(&tips_path) {
                Ok(tips) => tips,
                Err(e) => {
                    eprintln!("Store error: {:#}", e);
                    std::process::exit(EXIT_STORE);
                }
            };

            if tips.is_empty() {
                println!("No tips submitted yet.");
            } else {
                for name in tips.names() {
                    println!("{}", name);
                }
            }
        }
        Commands::Rank { results } => {
            let tips = match tippspiel::store::load_tips(&tips_path) {
                Ok(tips) => tips,
                Err(e) => {
                    eprintln!("Store error: {:#}", e);
                    std::process::exit(EXIT_STORE);
                }
            };

            if tips.is_empty() {
                println!("No tips submitted yet.");
                std::process::exit(EXIT_SUCCESS);
            }

            let standings = tippspiel::scoring::rank_tips(&tips, &results.into_guess());

            println!(
                "{}",
                tippspiel::output::format_standings(&standings, use_colors)
            );

            if cli.verbose {
                for tip in &standings.ranked {
                    eprintln!();
                    eprintln!("{}:", tip.name);
                    eprintln!("{}", tippspiel::output::format_tip_breakdown(&tip.result));
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
