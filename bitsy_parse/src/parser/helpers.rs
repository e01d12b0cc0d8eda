use bitsy_data::{Frame, Position};

use super::DecodeError;
use super::cursor::LineCursor;

/// Pixel rows per animation frame.
pub(super) const FRAME_ROWS: usize = 8;

pub(super) fn parse_int(token: &str, kind: &'static str) -> Result<i32, DecodeError> {
    token.trim().parse().map_err(|_| DecodeError::BadInt {
        kind,
        token: token.to_string(),
    })
}

/// Parse an `x,y` token into a grid position.
pub(super) fn parse_position(token: &str, kind: &'static str) -> Result<Position, DecodeError> {
    let (x, y) = token.split_once(',').ok_or_else(|| DecodeError::BadField {
        kind,
        line: token.to_string(),
    })?;
    Ok(Position::new(parse_int(x, kind)?, parse_int(y, kind)?))
}

/// Integer id from a record header (`ROOM 4`, `PAL 0`, ...).
pub(super) fn header_int_id(header: &str, kind: &'static str) -> Result<i32, DecodeError> {
    let token = header.split_whitespace().nth(1).ok_or(DecodeError::MissingId(kind))?;
    parse_int(token, kind)
}

/// Single-character id from a record header (`TIL a`, `SPR b`, ...).
pub(super) fn header_char_id(header: &str, kind: &'static str) -> Result<char, DecodeError> {
    let token = header.split_whitespace().nth(1).ok_or(DecodeError::MissingId(kind))?;
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(id), None) => Ok(id),
        _ => Err(DecodeError::BadField {
            kind,
            line: header.to_string(),
        }),
    }
}

/// Greedily parse whitespace-separated integers, stopping at the first token
/// that is not one (`ENV 421 254 12`, `BEAT 231 354`).
pub(super) fn int_list(rest: &str) -> Vec<i32> {
    rest.split_whitespace().map_while(|tok| tok.parse().ok()).collect()
}

/// Read one or two 8-row animation frames.
///
/// After the first frame the next line is peeked: a lone `>` marks a second
/// frame, anything else is pushed back for the enclosing record.
pub(super) fn read_frames(cursor: &mut LineCursor<'_>, kind: &'static str) -> Result<Vec<Frame>, DecodeError> {
    let mut frames = vec![read_frame(cursor, kind)?];
    match cursor.next_line() {
        Some(line) if line.trim() == ">" => frames.push(read_frame(cursor, kind)?),
        Some(line) => cursor.push_back(line),
        None => {},
    }
    Ok(frames)
}

fn read_frame(cursor: &mut LineCursor<'_>, kind: &'static str) -> Result<Frame, DecodeError> {
    let mut rows = Vec::with_capacity(FRAME_ROWS);
    for _ in 0..FRAME_ROWS {
        let row = cursor.next_line().ok_or(DecodeError::Eof(kind))?;
        rows.push(row.to_string());
    }
    Ok(rows)
}
