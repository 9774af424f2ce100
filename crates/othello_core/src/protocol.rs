//! Line codec for the game controller protocol.
//!
//! Startup: the agent prints its name, then reads
//! `color,limit,minimax,caching,ordering`. Each turn the controller sends
//! `SCORE <dark> <light>` followed by a board line, or `FINAL <dark> <light>`
//! when the game is over. The agent answers a `SCORE` turn with `<row> <col>`.

use crate::{
    board::Board,
    error::ProtocolError,
    search_config::{Algorithm, DepthLimit, SearchConfig},
    types::{Color, Move},
};

/// Name announced on the first output line.
pub const AGENT_NAME: &str = "Othello AI";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handshake {
    pub color: Color,
    pub limit: i64,
    pub algorithm: Algorithm,
    pub caching: bool,
    pub ordering: bool,
}

impl Handshake {
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            depth: DepthLimit::from_protocol(self.limit),
            algorithm: self.algorithm,
            caching: self.caching,
            ordering: self.ordering,
            min_node_ordering: false,
        }
    }
}

pub fn parse_handshake(line: &str) -> Result<Handshake, ProtocolError> {
    const FIELDS: [&str; 5] = ["color", "limit", "minimax", "caching", "ordering"];

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS.len() {
        return Err(ProtocolError::HandshakeFieldCount(parts.len()));
    }

    let mut values = [0i64; 5];
    for ((slot, raw), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
        *slot = raw.parse().map_err(|_| ProtocolError::HandshakeField {
            field,
            value: raw.to_string(),
        })?;
    }
    let [color, limit, minimax, caching, ordering] = values;

    let color = u8::try_from(color)
        .ok()
        .and_then(Color::from_code)
        .ok_or(ProtocolError::UnknownColor(color))?;

    Ok(Handshake {
        color,
        limit,
        algorithm: Algorithm::from_flag(minimax),
        caching: caching == 1,
        ordering: ordering == 1,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Game in progress; a board line follows.
    Score { dark: u32, light: u32 },
    /// Game over; nothing follows.
    Final { dark: u32, light: u32 },
}

pub fn parse_status(line: &str) -> Result<Status, ProtocolError> {
    let bad = || ProtocolError::Status(line.to_string());

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [tag, dark, light] = parts.as_slice() else {
        return Err(bad());
    };
    let dark = dark.parse().map_err(|_| bad())?;
    let light = light.parse().map_err(|_| bad())?;
    match *tag {
        "SCORE" => Ok(Status::Score { dark, light }),
        "FINAL" => Ok(Status::Final { dark, light }),
        _ => Err(bad()),
    }
}

/// Parses a board dump: a row-major nested sequence of 0/1/2 values. Both
/// `[...]` lists and `(...)` tuples are accepted, trailing commas included.
pub fn parse_board(text: &str) -> Result<Board, ProtocolError> {
    let json = normalize_sequence(text);
    let rows: Vec<Vec<i64>> = serde_json::from_str(&json)?;
    Ok(Board::from_rows(rows)?)
}

/// Rewrites tuple brackets to list brackets and drops commas directly
/// before a closing bracket, so the text is plain JSON.
fn normalize_sequence(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_comma = false;
    for ch in text.trim().chars() {
        match ch {
            ',' => {
                if pending_comma {
                    out.push(',');
                }
                pending_comma = true;
                continue;
            }
            c if c.is_whitespace() => {}
            ')' | ']' => pending_comma = false,
            _ => {
                if pending_comma {
                    out.push(',');
                    pending_comma = false;
                }
            }
        }
        out.push(match ch {
            '(' => '[',
            ')' => ']',
            c => c,
        });
    }
    if pending_comma {
        out.push(',');
    }
    out
}

pub fn format_move(mv: Move) -> String {
    format!("{} {}", mv.row, mv.col)
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
