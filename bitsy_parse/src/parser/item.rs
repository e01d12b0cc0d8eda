use bitsy_data::Item;

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_int_id, parse_int, read_frames};

/// Decode an `ITM <id>` record: frames, then trailing tag lines (`NAME`,
/// `DLG`, `BLIP`) in any order until a blank line or end of input.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Item, DecodeError> {
    let mut item = Item {
        id: header_int_id(header, "ITM")?,
        frames: read_frames(cursor, "ITM")?,
        name: String::new(),
        dialogue_id: -1,
        blip_id: -1,
    };
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(name) = line.strip_prefix("NAME ") {
            item.name = name.to_string();
        } else if let Some(rest) = line.strip_prefix("DLG ") {
            item.dialogue_id = parse_int(rest, "ITM")?;
        } else if let Some(rest) = line.strip_prefix("BLIP ") {
            item.blip_id = parse_int(rest, "ITM")?;
        }
    }
    Ok(item)
}
