use bitsy_data::Settings;

use super::DecodeError;
use super::helpers::parse_int;

/// Apply one `! KEY value` line. Keys that match no known setting are
/// ignored so newer files still load.
pub(super) fn apply(settings: &mut Settings, line: &str) -> Result<(), DecodeError> {
    let mut tokens = line.split_whitespace();
    tokens.next(); // the `!` tag
    let key = tokens.next().ok_or_else(|| DecodeError::BadField {
        kind: "!",
        line: line.to_string(),
    })?;
    let field = match key {
        "VER_MAJ" => &mut settings.ver_maj,
        "VER_MIN" => &mut settings.ver_min,
        "ROOM_FORMAT" => &mut settings.room_format,
        "DLG_COMPAT" => &mut settings.dlg_compat,
        "TXT_MODE" => &mut settings.txt_mode,
        _ => return Ok(()),
    };
    let value = tokens.next().ok_or_else(|| DecodeError::BadField {
        kind: "!",
        line: line.to_string(),
    })?;
    *field = parse_int(value, "!")?;
    Ok(())
}
