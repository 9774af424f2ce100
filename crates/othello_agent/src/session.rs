//! One controller session: handshake, then one move per `SCORE` turn.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use othello_core::{
    format_move, parse_board, parse_handshake, parse_status, Algorithm, DepthLimit, Engine,
    SearchConfig, Status,
};

/// Reads one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read from controller")?;
    Ok((n > 0).then_some(line))
}

fn log_config(config: &SearchConfig) {
    info!("Running {}", config.algorithm);
    info!(
        "State Caching is {}",
        if config.caching { "ON" } else { "OFF" }
    );
    info!(
        "Node Ordering is {}",
        if config.ordering { "ON" } else { "OFF" }
    );
    match config.depth {
        DepthLimit::Unbounded => info!("Depth Limit is OFF"),
        DepthLimit::Plies(n) => info!("Depth Limit is {n}"),
    }
    if config.algorithm == Algorithm::Minimax && config.ordering {
        warn!("Node Ordering should have no impact on Minimax");
    }
}

/// Runs the protocol until `FINAL` or end of input.
///
/// Only protocol lines go to `output`; diagnostics go through `log`.
pub fn run_session<R, W, E>(mut input: R, mut output: W, engine: &mut E, name: &str) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Engine + ?Sized,
{
    writeln!(output, "{name}")?;
    output.flush()?;

    let Some(line) = read_line(&mut input)? else {
        bail!("controller closed the stream before the handshake");
    };
    let handshake = parse_handshake(&line).context("invalid handshake")?;
    let color = handshake.color;
    let config = handshake.config();
    info!("Playing {color} with {}", engine.name());
    log_config(&config);
    engine.new_game();

    let mut turn = 0u32;
    while let Some(line) = read_line(&mut input)? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_status(&line).context("invalid status line")? {
            Status::Final { dark, light } => {
                info!("Game over: dark {dark}, light {light}");
                return Ok(());
            }
            Status::Score { dark, light } => {
                turn += 1;
                let board_line = read_line(&mut input)?
                    .with_context(|| format!("missing board after status on turn {turn}"))?;
                let board = parse_board(&board_line)
                    .with_context(|| format!("invalid board on turn {turn}"))?;
                debug!("turn {turn}: dark {dark}, light {light}\n{board}");

                let result = engine.search(&board, color, &config);
                match result.best_move {
                    Some(mv) => {
                        debug!(
                            "turn {turn}: playing {mv} (value {:.3}, {} nodes)",
                            result.score, result.stats.nodes
                        );
                        writeln!(output, "{}", format_move(mv))?;
                        output.flush()?;
                    }
                    None => warn!("turn {turn}: no move selected, passing"),
                }
            }
        }
    }

    warn!("controller closed the stream without a final score");
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
