use bitsy_data::Palette;

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::{header_int_id, parse_int};

/// Decode a `PAL <id>` record: three `r,g,b` lines, then an optional
/// `NAME <text>` line. A fourth line that is not a name belongs to the next
/// record and is pushed back.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Palette, DecodeError> {
    let mut palette = Palette {
        id: header_int_id(header, "PAL")?,
        ..Palette::default()
    };
    for slot in [&mut palette.color1, &mut palette.color2, &mut palette.color3] {
        let line = cursor.next_line().ok_or(DecodeError::Eof("PAL"))?;
        *slot = parse_color(line)?;
    }
    if let Some(line) = cursor.next_line() {
        match line.strip_prefix("NAME ") {
            Some(name) => palette.name = name.to_string(),
            None => cursor.push_back(line),
        }
    }
    Ok(palette)
}

fn parse_color(line: &str) -> Result<(i32, i32, i32), DecodeError> {
    let mut channels = line.split(',').map(|c| parse_int(c, "PAL"));
    match (channels.next(), channels.next(), channels.next()) {
        (Some(r), Some(g), Some(b)) => Ok((r?, g?, b?)),
        _ => Err(DecodeError::BadField {
            kind: "PAL",
            line: line.to_string(),
        }),
    }
}
