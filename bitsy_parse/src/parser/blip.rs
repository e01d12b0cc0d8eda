use bitsy_data::Blip;

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_int_id, int_list, parse_int};

/// Decode a `BLIP <id>` record: one verbatim notes line, then trailing tag
/// lines (`NAME`, `ENV`, `BEAT`, `SQR`, `RPT`) until a blank line or end of
/// input.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Blip, DecodeError> {
    let mut blip = Blip {
        id: header_int_id(header, "BLIP")?,
        notes: cursor.next_line().ok_or(DecodeError::Eof("BLIP"))?.to_string(),
        ..Blip::default()
    };
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(name) = line.strip_prefix("NAME ") {
            blip.name = name.to_string();
        } else if let Some(rest) = line.strip_prefix("ENV ") {
            blip.env = int_list(rest);
        } else if let Some(rest) = line.strip_prefix("BEAT ") {
            blip.beat = int_list(rest);
        } else if let Some(rest) = line.strip_prefix("SQR ") {
            blip.square_wave = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("RPT ") {
            blip.repeat = parse_int(rest, "BLIP")?;
        }
    }
    Ok(blip)
}
