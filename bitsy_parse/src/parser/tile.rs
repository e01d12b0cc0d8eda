use bitsy_data::Tile;

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_char_id, read_frames};

/// Decode a `TIL <id>` record: one or two frames, then optional `NAME` and
/// `WAL` tail lines. The first line that matches neither tag is pushed back
/// for the next record.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Tile, DecodeError> {
    let mut tile = Tile {
        id: header_char_id(header, "TIL")?,
        frames: read_frames(cursor, "TIL")?,
        name: String::new(),
        wall: false,
    };
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(name) = line.strip_prefix("NAME ") {
            tile.name = name.to_string();
        } else if let Some(rest) = line.strip_prefix("WAL ") {
            tile.wall = rest.trim() == "true";
        } else {
            cursor.push_back(line);
            break;
        }
    }
    Ok(tile)
}
