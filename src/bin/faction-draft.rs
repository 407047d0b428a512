//! Console front end for faction drafts.
//!
//! - `games`: list the games of a catalog
//! - `draft`: shuffle the given names and draft factions for them
//! - `interactive`: type names one per line, then draft

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use faction_draft::{
    Assignment, AssignmentPolicy, Catalog, DraftRng, EditEvent, FactionAssigner, Participant, Session,
    TWILIGHT_IMPERIUM,
};

#[derive(Parser)]
#[command(version, about = "Randomize turn order and draft factions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the games in the catalog.
    Games {
        /// Catalog file (JSON). Defaults to the built-in catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Draft factions for the participants given on the command line.
    Draft {
        #[command(flatten)]
        opts: DraftOpts,
        /// Faction to leave out of the pool. Repeatable.
        #[arg(long)]
        exclude: Vec<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Participant names.
        names: Vec<String>,
    },
    /// Enter participant names one per line; an empty line starts the draft.
    Interactive {
        #[command(flatten)]
        opts: DraftOpts,
    },
}

#[derive(Args)]
struct DraftOpts {
    /// Game to draft for.
    #[arg(long, default_value = TWILIGHT_IMPERIUM)]
    game: String,
    /// Catalog file (JSON). Defaults to the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// RNG seed, for reproducible drafts.
    #[arg(long)]
    seed: Option<u64>,
    /// How participants are ordered across the two rounds.
    #[arg(long, value_enum, default_value_t = Policy::Reshuffle)]
    policy: Policy,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// New participant order every round.
    Reshuffle,
    /// Same participant order in both rounds.
    Fixed,
}

impl From<Policy> for AssignmentPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Reshuffle => AssignmentPolicy::ReshuffleEachRound,
            Policy::Fixed => AssignmentPolicy::FixedOrder,
        }
    }
}

#[derive(Serialize)]
struct DraftReport<'a> {
    game: &'a str,
    seed: u64,
    turn_order: &'a [Participant],
    assignment: &'a Assignment,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match Cli::parse().command {
        Command::Games { catalog } => list_games(&load_catalog(catalog.as_ref())?),
        Command::Draft {
            opts,
            exclude,
            json,
            names,
        } => {
            let mut session = start_session(&opts)?;
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    session.edit(EditEvent::Enter(i - 1));
                }
                session.edit(EditEvent::Changed(i, name.clone()));
            }
            run_draft(&mut session, &exclude, json)
        }
        Command::Interactive { opts } => {
            let mut session = start_session(&opts)?;
            read_names(&mut session, io::stdin().lock(), io::stdout())?;
            run_draft(&mut session, &[], false)
        }
    }
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        None => Ok(Catalog::builtin()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&text).with_context(|| format!("loading catalog {}", path.display()))
        }
    }
}

fn list_games(catalog: &Catalog) -> anyhow::Result<()> {
    for game in catalog.games() {
        println!("{} ({} factions)", game, catalog.factions(game)?.len());
    }
    Ok(())
}

fn start_session(opts: &DraftOpts) -> anyhow::Result<Session> {
    let catalog = load_catalog(opts.catalog.as_ref())?;
    let rng = opts.seed.map_or_else(DraftRng::from_entropy, DraftRng::new);
    let assigner = FactionAssigner::new().with_policy(opts.policy.into());
    let mut session = Session::new(catalog, rng).with_assigner(assigner);
    session.select_game(opts.game.as_str())?;
    Ok(session)
}

/// Feed stdin lines into the participant form until an empty line.
///
/// `:back` deletes the previous entry, `:clear` starts over.
fn read_names(session: &mut Session, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let mut current = 0;
    write!(out, "participant {}: ", current + 1)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("reading participant names")?;
        match line.trim() {
            "" => break,
            ":clear" => {
                session.clear();
                current = 0;
            }
            ":back" => {
                if let Some(focus) = session.edit(EditEvent::Backspace(current)) {
                    current = focus.0;
                }
                session.edit(EditEvent::Changed(current, String::new()));
            }
            _ => {
                session.edit(EditEvent::Changed(current, line));
                if let Some(focus) = session.edit(EditEvent::Enter(current)) {
                    current = focus.0;
                }
            }
        }
        write!(out, "participant {}: ", current + 1)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn run_draft(session: &mut Session, exclude: &[String], json: bool) -> anyhow::Result<()> {
    if session.randomize().is_none() {
        bail!("no game selected");
    }
    if !session.show_factions() {
        bail!("no participants named");
    }
    for name in exclude {
        if !session.set_faction_selected(name, false) {
            bail!("unknown faction {:?}", name);
        }
    }
    session.assign();

    if json {
        let game = session.game().map(|g| g.as_str()).unwrap_or_default();
        let report = DraftReport {
            game,
            seed: session.seed(),
            turn_order: session.turn_order(),
            assignment: session.assignment(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Turn order:");
    for (i, participant) in session.turn_order().iter().enumerate() {
        println!("  {}. {}", i + 1, participant);
    }
    println!();
    println!("Factions:");
    for line in session.assignment_lines() {
        println!("  {}", line);
    }
    println!();
    println!("seed {}", session.seed());
    Ok(())
}
