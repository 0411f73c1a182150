//! Interactive terminal host for a game round.
//!
//! The host owns the mutable state and does the I/O; every decision is
//! delegated to the session and the index. Awaiting each submission before
//! reading the next line keeps one oracle call in flight at most.

use crate::config::GameConfig;
use crate::games::capitals::{CandidateIndex, GameStatus, GuessError, GuessSession, Submission};
use crate::oracle::Oracle;
use crate::worker_client::WorkerClient;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

const INTRO: &str = "\
Welcome to WeatherLe!
Guess the capital city behind the forecast. Enter a capital city's name;
an incorrect guess shows how far away and in which direction the secret
city lies. Good luck!";

/// Runs one interactive round against the worker oracle.
#[instrument(skip(config), fields(worker_url = %config.worker_url()))]
pub async fn run_round(config: GameConfig) -> Result<()> {
    let oracle = WorkerClient::new(config.worker_url().clone());
    let index = CandidateIndex::builtin();
    let mut session = GuessSession::with_max_attempts(*config.max_attempts());

    println!("{INTRO}");
    println!("You have {} attempts.\n", session.max_attempts());

    info!("Fetching forecast from worker");
    let report = oracle.conditions().await?;
    println!("{}", report.forecast_table());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while session.status() == GameStatus::Playing {
        println!(
            "Guess {}/{}: enter a capital city",
            session.attempts().len() + 1,
            session.max_attempts()
        );

        let Some(line) = lines.next_line().await? else {
            info!("Input closed; abandoning round");
            return Ok(());
        };

        match session.submit_guess(&line, &index, &oracle).await {
            Ok(Submission::Recorded { .. }) => render_attempts(&session),
            Ok(Submission::Ignored) => continue,
            Err(GuessError::UnknownCity { city }) => {
                println!("Not a valid capital city. Please try again.");
                let suggestions = index.suggest(&city, *config.suggestion_limit());
                if !suggestions.is_empty() {
                    println!("Did you mean: {}", suggestions.join(", "));
                }
            }
            Err(GuessError::Unavailable { source }) => {
                warn!(error = %source, "Oracle unavailable; guess not counted");
                println!("Could not reach the game server. That guess was not counted; try again.");
            }
        }
    }

    match session.status() {
        GameStatus::Won => println!("\nCongratulations!"),
        GameStatus::Lost => println!("\nGame Over!"),
        GameStatus::Playing => {}
    }
    println!("The correct city was: {}", report.secret_city());

    Ok(())
}

/// Prints the attempt log in submission order.
fn render_attempts(session: &GuessSession) {
    println!();
    for attempt in session.attempts() {
        if attempt.correct() {
            println!("  {}  correct!", attempt.city());
        } else {
            println!(
                "  {}  {:.0}Km {}",
                attempt.city(),
                attempt.distance_km(),
                attempt.direction()
            );
        }
    }
    println!();
}
