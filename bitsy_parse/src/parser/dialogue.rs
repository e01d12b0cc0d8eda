use bitsy_data::{Dialogue, Variable};

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::header_int_id;

/// Decode a `DLG <id>` record: one verbatim text line (inline markup tokens
/// are opaque here), then an optional `NAME` line. A second line that is not
/// a name is pushed back for the next record.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Dialogue, DecodeError> {
    let mut dialogue = Dialogue {
        id: header_int_id(header, "DLG")?,
        text: cursor.next_line().ok_or(DecodeError::Eof("DLG"))?.to_string(),
        name: String::new(),
    };
    if let Some(line) = cursor.next_line() {
        match line.strip_prefix("NAME ") {
            Some(name) => dialogue.name = name.to_string(),
            None => cursor.push_back(line),
        }
    }
    Ok(dialogue)
}

/// Decode a `VAR <name>` record: the name is the whole header remainder, the
/// value is the next line verbatim. Values are never coerced to numbers.
pub(super) fn decode_variable(header: &str, cursor: &mut LineCursor<'_>) -> Result<Variable, DecodeError> {
    let name = header.strip_prefix("VAR ").ok_or(DecodeError::MissingId("VAR"))?;
    Ok(Variable {
        name: name.to_string(),
        value: cursor.next_line().ok_or(DecodeError::Eof("VAR"))?.to_string(),
    })
}
