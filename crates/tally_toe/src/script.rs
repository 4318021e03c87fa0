//! Non-interactive replay of moves and resets.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::str::FromStr;
use tally_engine::{GameEngine, PlayResult, Position};
use tracing::{info, instrument, warn};

/// One scripted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Play a cell index; range is checked by the engine.
    ///
    /// Cell names such as `center` or `bottom-left` parse to their index.
    Play(i64),
    /// Reset the round.
    ResetRound,
    /// Reset the match.
    NewMatch,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "r" | "reset" => Ok(Step::ResetRound),
            "n" | "new" => Ok(Step::NewMatch),
            other => {
                // Integers go straight to the engine so out-of-range input is reported there.
                if let Ok(index) = other.parse::<i64>() {
                    return Ok(Step::Play(index));
                }
                Position::from_label_or_number(other)
                    .map(|pos| Step::Play(pos.to_index() as i64))
                    .with_context(|| {
                        format!(
                            "Unrecognized step {:?} (expected 0-8, a cell name, r or n)",
                            other
                        )
                    })
            }
        }
    }
}

/// Runs `steps` against a fresh engine and renders the final state.
///
/// Rejected and out-of-range moves are reported in the text output and
/// logged; they do not abort the script.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn run_script(steps: &[String], json: bool) -> Result<String> {
    let steps = steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut engine = GameEngine::new();
    let mut notes = Vec::new();

    for step in steps {
        match step {
            Step::Play(index) => match engine.play(index) {
                Ok(PlayResult::Accepted { .. }) => {}
                Ok(PlayResult::Rejected(reason)) => {
                    warn!(index, %reason, "Move rejected");
                    notes.push(format!("move {}: {}", index, reason));
                }
                Err(e) => {
                    warn!(index, error = %e, "Invalid move");
                    notes.push(format!("move {}: {}", index, e));
                }
            },
            Step::ResetRound => engine.reset_round(),
            Step::NewMatch => engine.reset_match(),
        }
    }

    info!(outcome = ?engine.outcome(), scores = ?engine.scores(), "Script finished");

    if json {
        return serde_json::to_string_pretty(&engine.snapshot())
            .context("Failed to serialize snapshot");
    }
    Ok(render_text(&engine, &notes))
}

fn render_text(engine: &GameEngine, notes: &[String]) -> String {
    let (x_wins, o_wins) = engine.scores();
    let mut out = String::new();
    let _ = writeln!(out, "{}", engine.board());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", engine.status_message());
    if let Some(line) = engine.winning_line() {
        let _ = writeln!(out, "Winning line: {:?}", line.indices());
    }
    let _ = writeln!(out, "Score: X {} - O {}", x_wins, o_wins);
    for note in notes {
        let _ = writeln!(out, "Ignored {}", note);
    }
    out
}
