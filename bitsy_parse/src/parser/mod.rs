//! Record dispatcher and per-record decoders for Bitsy game data.
//!
//! The first input line is always the world title. Every later line either
//! opens a record (routed by its leading tag to one of the decoder
//! submodules) or is skipped. Decoders pull as many lines as their grammar
//! needs from the shared [`cursor::LineCursor`] and hand back one finished
//! record; the dispatcher appends it to the growing [`World`].

use std::fmt;
use std::fs;
use std::path::Path;

use bitsy_data::World;
use log::{info, warn};

use crate::ParseError;

mod blip;
mod cursor;
mod dialogue;
mod helpers;
mod item;
mod palette;
mod room;
mod settings;
mod sprite;
mod tile;
mod tune;

use cursor::LineCursor;

/// Errors that can happen while decoding a single record.
///
/// None of these abort the parse: the dispatcher turns them into a
/// [`Warning`], drops the record, and keeps scanning.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing id in {0} record header")]
    MissingId(&'static str),
    #[error("malformed integer {token:?} in {kind} record")]
    BadInt { kind: &'static str, token: String },
    #[error("malformed {kind} field: {line:?}")]
    BadField { kind: &'static str, line: String },
    #[error("input ended inside a {0} record")]
    Eof(&'static str),
    #[error("tune has {treble} treble but {bass} bass pattern lines")]
    UnpairedTunePatterns { treble: usize, bass: usize },
}

/// Non-fatal problem noticed during the parse, tied to an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-based line number of the offending record header.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Knobs for dispatcher behavior that the format leaves unspecified.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Record a [`Warning`] for each unrecognized top-level tag instead of
    /// skipping it silently.
    pub warn_unknown_tags: bool,
}

/// A decoded world plus everything the parser tolerated along the way.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub world: World,
    pub warnings: Vec<Warning>,
}

/// Parse game data from a file.
///
/// # Errors
/// Fails only when the file cannot be read; grammar problems surface as
/// [`Warning`]s on the returned [`Parsed`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Parsed, ParseError> {
    let source = fs::read_to_string(path)?;
    Ok(parse_str(&source))
}

/// Parse game data from a string with default [`ParseOptions`].
pub fn parse_str(source: &str) -> Parsed {
    parse_str_with(source, &ParseOptions::default())
}

/// Parse game data from a string.
///
/// One forward pass: the first line becomes the title, then records are
/// dispatched by tag until end of input. A record whose grammar fails is
/// skipped with a warning; records already completed are kept.
pub fn parse_str_with(source: &str, options: &ParseOptions) -> Parsed {
    let mut cursor = LineCursor::new(source);
    let mut world = World::default();
    let mut warnings = Vec::new();

    if let Some(title) = cursor.next_line() {
        world.title = title.to_string();
    }

    while let Some(line) = cursor.next_line() {
        let Some(tag) = line.split_whitespace().next() else {
            continue;
        };
        let header_line_no = cursor.line_no();
        let result = match tag {
            "!" => settings::apply(&mut world.settings, line),
            "PAL" => palette::decode(line, &mut cursor).map(|p| world.palettes.push(p)),
            "ROOM" => room::decode(line, &mut cursor).map(|r| world.rooms.push(r)),
            "TIL" => tile::decode(line, &mut cursor).map(|t| world.tiles.push(t)),
            "SPR" if sprite::is_avatar_header(line) => {
                sprite::decode_avatar(line, &mut cursor).map(|a| world.avatar = Some(a))
            },
            "SPR" => sprite::decode(line, &mut cursor).map(|s| world.sprites.push(s)),
            "ITM" => item::decode(line, &mut cursor).map(|i| world.items.push(i)),
            "DLG" => dialogue::decode(line, &mut cursor).map(|d| world.dialogues.push(d)),
            "TUNE" => tune::decode(line, &mut cursor).map(|t| world.tunes.push(t)),
            "BLIP" => blip::decode(line, &mut cursor).map(|b| world.blips.push(b)),
            "VAR" => dialogue::decode_variable(line, &mut cursor).map(|v| {
                // repeated names overwrite: last write wins
                world.variables.insert(v.name.clone(), v);
            }),
            other => {
                if options.warn_unknown_tags {
                    warnings.push(Warning {
                        line: header_line_no,
                        message: format!("unknown tag {other:?} skipped"),
                    });
                }
                Ok(())
            },
        };
        if let Err(err) = result {
            let warning = Warning {
                line: header_line_no,
                message: format!("skipping {tag} record: {err}"),
            };
            warn!("{warning}");
            warnings.push(warning);
        }
    }

    info!(
        "decoded \"{}\": {} rooms, {} tiles, {} sprites, {} items, {} warnings",
        world.title,
        world.rooms.len(),
        world.tiles.len(),
        world.sprites.len(),
        world.items.len(),
        warnings.len()
    );
    Parsed { world, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_A: &str = "00000000\n11111111\n00000000\n11111111\n00000000\n11111111\n00000000\n11111111\n";
    const FRAME_B: &str = "11111111\n00000000\n11111111\n00000000\n11111111\n00000000\n11111111\n00000000\n";

    fn world_of(body: &str) -> World {
        let parsed = parse_str(&format!("Test World\n{body}"));
        assert!(parsed.warnings.is_empty(), "unexpected warnings: {:?}", parsed.warnings);
        parsed.world
    }

    #[test]
    fn cursor_push_back_restores_line_and_number() {
        let mut cursor = LineCursor::new("one\ntwo\nthree");
        assert_eq!(cursor.next_line(), Some("one"));
        let two = cursor.next_line().expect("second line");
        assert_eq!(cursor.line_no(), 2);
        cursor.push_back(two);
        assert_eq!(cursor.line_no(), 1);
        assert_eq!(cursor.next_line(), Some("two"));
        assert_eq!(cursor.next_line(), Some("three"));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn cursor_strips_carriage_returns() {
        let mut cursor = LineCursor::new("one\r\ntwo\r\n");
        assert_eq!(cursor.next_line(), Some("one"));
        assert_eq!(cursor.next_line(), Some("two"));
    }

    #[test]
    fn title_is_first_line_verbatim() {
        let parsed = parse_str("My Awesome Bitsy Game\n");
        assert_eq!(parsed.world.title, "My Awesome Bitsy Game");
    }

    #[test]
    fn settings_match_exact_keys_and_ignore_unknown() {
        let world = world_of("! VER_MAJ 8\n! VER_MIN 12\n! ROOM_FORMAT 1\n! DLG_COMPAT 0\n! TXT_MODE 0\n! FUTURE 9\n");
        assert_eq!(world.settings.ver_maj, 8);
        assert_eq!(world.settings.ver_min, 12);
        assert_eq!(world.settings.room_format, 1);
        assert_eq!(world.settings.dlg_compat, 0);
        assert_eq!(world.settings.txt_mode, 0);
    }

    #[test]
    fn palette_decodes_colors_and_name() {
        let world = world_of("PAL 0\n0,82,204\n128,159,255\n255,255,255\nNAME blueprint\n");
        assert_eq!(world.palettes.len(), 1);
        let palette = &world.palettes[0];
        assert_eq!(palette.id, 0);
        assert_eq!(palette.color1, (0, 82, 204));
        assert_eq!(palette.color2, (128, 159, 255));
        assert_eq!(palette.color3, (255, 255, 255));
        assert_eq!(palette.name, "blueprint");
    }

    #[test]
    fn palette_without_name_rebuffers_next_header() {
        let world = world_of("PAL 0\n10,20,30\n40,50,60\n70,80,90\nPAL 1\n1,2,3\n4,5,6\n7,8,9\nNAME second\n");
        assert_eq!(world.palettes.len(), 2);
        assert_eq!(world.palettes[0].name, "");
        assert_eq!(world.palettes[1].id, 1);
        assert_eq!(world.palettes[1].name, "second");
    }

    #[test]
    fn room_grid_is_sixteen_rows_with_commas_stripped() {
        let row = "0,a,0,a,0,a,0,a,0,a,0,a,0,a,0,a\n";
        let world = world_of(&format!("ROOM 3\n{}", row.repeat(16)));
        assert_eq!(world.rooms.len(), 1);
        let room = &world.rooms[0];
        assert_eq!(room.id, 3);
        assert_eq!(room.tiles.len(), 16);
        assert!(room.tiles.iter().all(|r| r.len() == 16));
        assert_eq!(room.tiles[0][1], 'a');
    }

    #[test]
    fn room_trailing_tags_decode() {
        let grid = "0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n".repeat(16);
        let body = format!(
            "ROOM 0\n{grid}NAME example room\nITM 0 11,5\nITM 1 9,8\nEXT 2,2 0 13,13 FX wave DLG 5\nEXT 2,2 1 13,13 FX slide_d DLG 7\nEND 3 13,2\nEND 6 2,2\nPAL 0\nTUNE 2\n\n"
        );
        let world = world_of(&body);
        let room = &world.rooms[0];
        assert_eq!(room.name, "example room");
        assert_eq!(room.items.len(), 2);
        assert_eq!(room.items[1].item_id, 1);
        assert_eq!(room.items[1].position.x, 9);
        assert_eq!(room.exits.len(), 2);
        assert_eq!(room.exits[0].effect, "wave");
        assert_eq!(room.exits[0].dialogue_id, 5);
        assert_eq!(room.exits[1].dest_room_id, 1);
        assert_eq!(room.endings.len(), 2);
        assert_eq!(room.endings[0].dialogue_id, 3);
        assert_eq!(room.palette_id, 0);
        assert_eq!(room.tune_id, 2);
    }

    #[test]
    fn exit_without_fx_and_dlg_keeps_defaults() {
        let grid = "0\n".repeat(16);
        let world = world_of(&format!("ROOM 0\n{grid}EXT 1,1 2 3,4\n\n"));
        let exit = &world.rooms[0].exits[0];
        assert_eq!(exit.effect, "none");
        assert_eq!(exit.dialogue_id, -1);
        assert_eq!(exit.dest_room_id, 2);
        assert_eq!(exit.dest.y, 4);
    }

    #[test]
    fn tile_single_frame_name_and_wall() {
        let world = world_of(&format!("TIL a\n{FRAME_A}NAME block\nWAL true\n"));
        let tile = &world.tiles[0];
        assert_eq!(tile.id, 'a');
        assert_eq!(tile.frames.len(), 1);
        assert_eq!(tile.frames[0].len(), 8);
        assert_eq!(tile.name, "block");
        assert!(tile.wall);
    }

    #[test]
    fn tile_two_frames_via_continuation_marker() {
        let world = world_of(&format!("TIL b\n{FRAME_A}>\n{FRAME_B}"));
        let tile = &world.tiles[0];
        assert_eq!(tile.frames.len(), 2);
        assert_eq!(tile.frames.iter().map(Vec::len).sum::<usize>(), 16);
        assert!(!tile.wall);
    }

    #[test]
    fn tile_without_tail_rebuffers_next_header() {
        let world = world_of(&format!("TIL a\n{FRAME_A}TIL b\n{FRAME_B}NAME wall\nWAL true\n"));
        assert_eq!(world.tiles.len(), 2);
        assert_eq!(world.tiles[0].name, "");
        assert!(!world.tiles[0].wall);
        assert_eq!(world.tiles[1].name, "wall");
        assert!(world.tiles[1].wall);
    }

    #[test]
    fn sprite_tail_tags_decode_in_any_order() {
        let world = world_of(&format!("SPR b\n{FRAME_A}POS 2 9,4\nBLIP 3\nNAME cat\nDLG 7\n\n"));
        let sprite = &world.sprites[0];
        assert_eq!(sprite.id, 'b');
        assert_eq!(sprite.name, "cat");
        assert_eq!(sprite.dialogue_id, 7);
        assert_eq!(sprite.blip_id, 3);
        assert_eq!(sprite.room_id, 2);
        assert_eq!(sprite.position.x, 9);
        assert_eq!(sprite.position.y, 4);
    }

    #[test]
    fn sprite_optional_ids_default_to_minus_one() {
        let world = world_of(&format!("SPR c\n{FRAME_A}POS 0 1,1\n\n"));
        let sprite = &world.sprites[0];
        assert_eq!(sprite.dialogue_id, -1);
        assert_eq!(sprite.blip_id, -1);
    }

    #[test]
    fn avatar_header_takes_the_spr_a_route() {
        let world = world_of(&format!("SPR A\n{FRAME_A}POS 0 4,4\nITM 0\nITM 0\nITM 5\n\n"));
        assert!(world.sprites.is_empty());
        let avatar = world.avatar.expect("avatar decoded");
        assert_eq!(avatar.room_id, 0);
        assert_eq!(avatar.position.x, 4);
        // duplicates encode quantity
        assert_eq!(avatar.inventory, vec![0, 0, 5]);
    }

    #[test]
    fn item_tail_uses_the_same_tag_loop_as_sprites() {
        let world = world_of(&format!("ITM 1\n{FRAME_A}BLIP 2\nNAME key\nDLG 9\n\n"));
        let item = &world.items[0];
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "key");
        assert_eq!(item.dialogue_id, 9);
        assert_eq!(item.blip_id, 2);
    }

    #[test]
    fn dialogue_text_is_verbatim_with_markup_kept() {
        let world = world_of("DLG 4\nHello {wvy}world{/wvy}!\nNAME greeting\n");
        let dialogue = &world.dialogues[0];
        assert_eq!(dialogue.id, 4);
        assert_eq!(dialogue.text, "Hello {wvy}world{/wvy}!");
        assert_eq!(dialogue.name, "greeting");
    }

    #[test]
    fn dialogue_without_name_rebuffers_next_header() {
        let world = world_of("DLG 1\nfirst\nDLG 2\nsecond\nNAME two\n");
        assert_eq!(world.dialogues.len(), 2);
        assert_eq!(world.dialogues[0].name, "");
        assert_eq!(world.dialogues[1].name, "two");
    }

    #[test]
    fn variable_values_stay_text_and_last_write_wins() {
        let world = world_of("VAR x\n1\nVAR lives left\nplenty\nVAR x\n2\n");
        assert_eq!(world.variables.len(), 2);
        assert_eq!(world.variables["x"].value, "2");
        assert_eq!(world.variables["lives left"].value, "plenty");
    }

    #[test]
    fn tune_patterns_alternate_and_bar_lines_reset() {
        let body = "TUNE 1\nNAME march\nKEY C maj\nTMP MED\nSQR P4 P2\nARP UP\nc4,c4,c4,c4\nc2,c2,c2,c2\n> > > >\nd4,d4,d4,d4\nd2,d2,d2,d2\n\n";
        let world = world_of(body);
        let tune = &world.tunes[0];
        assert_eq!(tune.name, "march");
        assert_eq!(tune.key, "C maj");
        assert_eq!(tune.tempo, "MED");
        assert_eq!(tune.treble_instrument, "P4");
        assert_eq!(tune.bass_instrument, "P2");
        assert_eq!(tune.arpeggio, "UP");
        assert_eq!(tune.treble_patterns, vec!["c4,c4,c4,c4", "d4,d4,d4,d4"]);
        assert_eq!(tune.bass_patterns, vec!["c2,c2,c2,c2", "d2,d2,d2,d2"]);
        assert_eq!(tune.treble_patterns.len(), tune.bass_patterns.len());
    }

    #[test]
    fn tune_scalar_tags_do_not_flip_alternation() {
        // NAME between the treble and bass lines must not steal the bass slot
        let world = world_of("TUNE 2\nc4\nNAME interleaved\nc2\n\n");
        let tune = &world.tunes[0];
        assert_eq!(tune.treble_patterns, vec!["c4"]);
        assert_eq!(tune.bass_patterns, vec!["c2"]);
        assert_eq!(tune.name, "interleaved");
    }

    #[test]
    fn tune_with_unpaired_patterns_is_skipped_with_warning() {
        let parsed = parse_str("t\nTUNE 3\nc4\nc2\nd4\n\nBLIP 0\nc4\n\n");
        assert!(parsed.world.tunes.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].message.contains("TUNE"));
        // parsing continued past the bad record
        assert_eq!(parsed.world.blips.len(), 1);
    }

    #[test]
    fn blip_decodes_notes_env_beat_sqr_rpt() {
        let world = world_of("BLIP 1\nc4 e4 g4\nNAME pickup\nENV 421 254 12\nBEAT 231 354\nSQR 50\nRPT 2\n\n");
        let blip = &world.blips[0];
        assert_eq!(blip.id, 1);
        assert_eq!(blip.notes, "c4 e4 g4");
        assert_eq!(blip.name, "pickup");
        assert_eq!(blip.env, vec![421, 254, 12]);
        assert_eq!(blip.beat, vec![231, 354]);
        assert_eq!(blip.square_wave, "50");
        assert_eq!(blip.repeat, 2);
    }

    #[test]
    fn blip_int_lists_stop_at_first_non_integer() {
        let world = world_of("BLIP 0\nc4\nENV 1 2 x 3\n\n");
        assert_eq!(world.blips[0].env, vec![1, 2]);
        assert_eq!(world.blips[0].repeat, 0);
    }

    #[test]
    fn malformed_record_is_skipped_and_rest_survives() {
        let parsed = parse_str("t\nPAL zero\n10,20,30\n40,50,60\n70,80,90\nDLG 1\nhi\n");
        assert!(parsed.world.palettes.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].line, 2);
        assert_eq!(parsed.world.dialogues.len(), 1);
    }

    #[test]
    fn input_ending_mid_record_keeps_completed_records() {
        let parsed = parse_str(&format!("t\nDLG 1\nhello\nNAME one\nTIL a\n{}", "00000000\n".repeat(3)));
        assert_eq!(parsed.world.dialogues.len(), 1);
        assert!(parsed.world.tiles.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].message.contains("input ended"));
    }

    #[test]
    fn unknown_tags_are_silent_by_default_and_warn_on_request() {
        let source = "t\nFOO bar\nDLG 1\nhi\n";
        assert!(parse_str(source).warnings.is_empty());
        let parsed = parse_str_with(
            source,
            &ParseOptions {
                warn_unknown_tags: true,
            },
        );
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].message.contains("FOO"));
        assert_eq!(parsed.world.dialogues.len(), 1);
    }
}
