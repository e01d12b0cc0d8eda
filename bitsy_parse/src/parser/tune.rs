use bitsy_data::Tune;

use super::DecodeError;
use super::cursor::LineCursor;
use super::helpers::header_int_id;

/// Decode a `TUNE <id>` record: scalar tag lines plus musical pattern lines,
/// until a blank line or end of input.
///
/// Pattern lines alternate treble, bass, treble, ... A `>` bar line resets
/// the alternation so the next pattern line is treble again; scalar tags
/// (`NAME`, `KEY`, `TMP`, `SQR`, `ARP`) leave it untouched.
pub(super) fn decode(header: &str, cursor: &mut LineCursor<'_>) -> Result<Tune, DecodeError> {
    let mut tune = Tune {
        id: header_int_id(header, "TUNE")?,
        ..Tune::default()
    };
    let mut treble = true;
    while let Some(line) = cursor.next_line() {
        if line.trim().is_empty() {
            break;
        }
        if line.contains('>') {
            treble = true;
        } else if let Some(name) = line.strip_prefix("NAME ") {
            tune.name = name.to_string();
        } else if let Some(key) = line.strip_prefix("KEY ") {
            tune.key = key.to_string();
        } else if let Some(tempo) = line.strip_prefix("TMP ") {
            tune.tempo = tempo.to_string();
        } else if let Some(rest) = line.strip_prefix("SQR ") {
            let mut tokens = rest.split_whitespace();
            if let Some(instrument) = tokens.next() {
                tune.treble_instrument = instrument.to_string();
            }
            if let Some(instrument) = tokens.next() {
                tune.bass_instrument = instrument.to_string();
            }
        } else if let Some(arpeggio) = line.strip_prefix("ARP ") {
            tune.arpeggio = arpeggio.to_string();
        } else if treble {
            tune.treble_patterns.push(line.to_string());
            treble = false;
        } else {
            tune.bass_patterns.push(line.to_string());
            treble = true;
        }
    }
    if tune.treble_patterns.len() != tune.bass_patterns.len() {
        return Err(DecodeError::UnpairedTunePatterns {
            treble: tune.treble_patterns.len(),
            bass: tune.bass_patterns.len(),
        });
    }
    Ok(tune)
}
