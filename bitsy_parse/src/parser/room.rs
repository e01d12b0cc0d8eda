use bitsy_data::{Ending, Exit, ItemPlacement, Room};

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_int_id, parse_int, parse_position};

/// Rows (and columns) in every room grid.
pub(super) const GRID_ROWS: usize = 16;

/// Decode a `ROOM <id>` record: exactly 16 comma-joined grid rows, then
/// trailing tag lines (`NAME`, `ITM`, `EXT`, `END`, `PAL`, `TUNE`) until a
/// blank line or end of input. Unrecognized trailing lines are skipped.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Room, DecodeError> {
    let mut room = Room {
        id: header_int_id(header, "ROOM")?,
        ..Room::default()
    };

    for _ in 0..GRID_ROWS {
        let line = cursor.next_line().ok_or(DecodeError::Eof("ROOM"))?;
        room.tiles.push(line.chars().filter(|&c| c != ',').collect());
    }

    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(name) = line.strip_prefix("NAME ") {
            room.name = name.to_string();
        } else if let Some(rest) = line.strip_prefix("ITM ") {
            room.items.push(parse_placement(rest)?);
        } else if line.starts_with("EXT ") {
            room.exits.push(parse_exit(line)?);
        } else if let Some(rest) = line.strip_prefix("END ") {
            room.endings.push(parse_ending(rest)?);
        } else if let Some(rest) = line.strip_prefix("PAL ") {
            room.palette_id = parse_int(rest, "ROOM")?;
        } else if let Some(rest) = line.strip_prefix("TUNE ") {
            room.tune_id = parse_int(rest, "ROOM")?;
        }
    }

    Ok(room)
}

/// `<itemId> <x>,<y>` after the `ITM` tag.
fn parse_placement(rest: &str) -> Result<ItemPlacement, DecodeError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(id), Some(pos)) => Ok(ItemPlacement {
            item_id: parse_int(id, "ROOM")?,
            position: parse_position(pos, "ROOM")?,
        }),
        _ => Err(DecodeError::BadField {
            kind: "ROOM",
            line: rest.to_string(),
        }),
    }
}

/// `EXT <sx>,<sy> <destRoom> <dx>,<dy> FX <effect> DLG <dialogueId>`.
/// The `FX` and `DLG` tails are optional and may appear in either order.
fn parse_exit(line: &str) -> Result<Exit, DecodeError> {
    let mut tokens = line.split_whitespace();
    tokens.next(); // EXT
    let bad = || DecodeError::BadField {
        kind: "ROOM",
        line: line.to_string(),
    };
    let mut exit = Exit {
        start: parse_position(tokens.next().ok_or_else(bad)?, "ROOM")?,
        dest_room_id: parse_int(tokens.next().ok_or_else(bad)?, "ROOM")?,
        dest: parse_position(tokens.next().ok_or_else(bad)?, "ROOM")?,
        ..Exit::default()
    };
    while let Some(tag) = tokens.next() {
        match (tag, tokens.next()) {
            ("FX", Some(effect)) => exit.effect = effect.to_string(),
            ("DLG", Some(id)) => exit.dialogue_id = parse_int(id, "ROOM")?,
            _ => {},
        }
    }
    Ok(exit)
}

/// `<dialogueId> <x>,<y>` after the `END` tag.
fn parse_ending(rest: &str) -> Result<Ending, DecodeError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(id), Some(pos)) => Ok(Ending {
            dialogue_id: parse_int(id, "ROOM")?,
            position: parse_position(pos, "ROOM")?,
        }),
        _ => Err(DecodeError::BadField {
            kind: "ROOM",
            line: rest.to_string(),
        }),
    }
}
