use bitsy_data::{Avatar, Position, Sprite};

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_char_id, parse_int, parse_position, read_frames};

/// A `SPR` header introduces the avatar when its id token is the avatar
/// marker; every other id is an ordinary sprite.
pub(super) fn is_avatar_header(header: &str) -> bool {
    header.split_whitespace().nth(1) == Some("A")
}

/// Decode a `SPR <id>` record: frames, then trailing tag lines (`NAME`,
/// `DLG`, `BLIP`, `POS`) in any order until a blank line or end of input.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Sprite, DecodeError> {
    let mut sprite = Sprite {
        id: header_char_id(header, "SPR")?,
        frames: read_frames(cursor, "SPR")?,
        name: String::new(),
        dialogue_id: -1,
        blip_id: -1,
        room_id: 0,
        position: Position::default(),
    };
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(name) = line.strip_prefix("NAME ") {
            sprite.name = name.to_string();
        } else if let Some(rest) = line.strip_prefix("DLG ") {
            sprite.dialogue_id = parse_int(rest, "SPR")?;
        } else if let Some(rest) = line.strip_prefix("BLIP ") {
            sprite.blip_id = parse_int(rest, "SPR")?;
        } else if let Some(rest) = line.strip_prefix("POS ") {
            let (room_id, position) = parse_pos(rest, "SPR")?;
            sprite.room_id = room_id;
            sprite.position = position;
        }
    }
    Ok(sprite)
}

/// Decode the `SPR A` record: frames, then trailing `POS` and `ITM` lines
/// until a blank line. Inventory ids repeat to encode quantity.
pub(super) fn decode_avatar(_header: &str, cursor: &mut LineCursor<'_>) -> Result<Avatar, DecodeError> {
    let mut avatar = Avatar {
        frames: read_frames(cursor, "SPR")?,
        room_id: 0,
        position: Position::default(),
        inventory: Vec::new(),
    };
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(rest) = line.strip_prefix("POS ") {
            let (room_id, position) = parse_pos(rest, "SPR")?;
            avatar.room_id = room_id;
            avatar.position = position;
        } else if let Some(rest) = line.strip_prefix("ITM ") {
            avatar.inventory.push(parse_int(rest, "SPR")?);
        }
    }
    Ok(avatar)
}

/// `<roomId> <x>,<y>` after the `POS` tag.
fn parse_pos(rest: &str, kind: &'static str) -> Result<(i32, Position), DecodeError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(room), Some(pos)) => Ok((parse_int(room, kind)?, parse_position(pos, kind)?)),
        _ => Err(DecodeError::BadField {
            kind,
            line: rest.to_string(),
        }),
    }
}
