use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One frame of 8-pixel-row art; entities carry one or two of these.
pub type Frame = Vec<String>;

/// An `x,y` cell position inside a room grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Top-level decoded game content, produced by one pass over a `.bitsy` file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct World {
    pub title: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub palettes: Vec<Palette>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub sprites: Vec<Sprite>,
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
    #[serde(default)]
    pub tunes: Vec<Tune>,
    #[serde(default)]
    pub blips: Vec<Blip>,
}

/// Engine settings declared with `! KEY value` lines.
///
/// Fields keep their zero defaults until a settings line supplies them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    pub ver_maj: i32,
    pub ver_min: i32,
    pub room_format: i32,
    pub dlg_compat: i32,
    pub txt_mode: i32,
}

/// Three-color palette referenced by rooms.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Palette {
    pub id: i32,
    pub color1: (i32, i32, i32),
    pub color2: (i32, i32, i32),
    pub color3: (i32, i32, i32),
    #[serde(default)]
    pub name: String,
}

/// A 16x16 grid of tile references plus placements, exits, and endings.
///
/// Grid cells hold `Tile::id` characters (or the avatar/sprite sentinel);
/// references are copied verbatim and never checked against the tile list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Room {
    pub id: i32,
    pub tiles: Vec<Vec<char>>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(default)]
    pub endings: Vec<Ending>,
    pub palette_id: i32,
    pub tune_id: i32,
    #[serde(default)]
    pub name: String,
}

/// One item instance placed in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub item_id: i32,
    pub position: Position,
}

/// Walkable (or not) background art, keyed by a single-character id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: char,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wall: bool,
}

/// A placed, optionally talkative game object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub id: char,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub name: String,
    pub dialogue_id: i32,
    pub blip_id: i32,
    pub room_id: i32,
    pub position: Position,
}

/// The player character. A world has at most one; its id is always `A`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub frames: Vec<Frame>,
    pub room_id: i32,
    pub position: Position,
    /// Starting inventory as item ids; repetition encodes quantity.
    #[serde(default)]
    pub inventory: Vec<i32>,
}

impl Avatar {
    /// The avatar's fixed id marker in sprite headers and room grids.
    pub const ID: char = 'A';
}

/// Collectable object definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub name: String,
    pub dialogue_id: i32,
    pub blip_id: i32,
}

/// Doorway from a cell in one room to a cell in another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    pub start: Position,
    pub dest_room_id: i32,
    pub dest: Position,
    /// Transition effect tag; `"none"` when the line carries no `FX` field.
    pub effect: String,
    pub dialogue_id: i32,
}

impl Default for Exit {
    fn default() -> Self {
        Self {
            start: Position::default(),
            dest_room_id: 0,
            dest: Position::default(),
            effect: "none".to_string(),
            dialogue_id: -1,
        }
    }
}

/// Cell that ends the game with a dialogue when stepped on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ending {
    pub dialogue_id: i32,
    pub position: Position,
}

/// One line of dialogue script. Inline markup tokens are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Dialogue {
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub name: String,
}

/// Named script variable. Values stay text even when they look numeric.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

/// Two-voice music pattern. Treble and bass lines are paired by index.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tune {
    pub id: i32,
    pub treble_patterns: Vec<String>,
    pub bass_patterns: Vec<String>,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub tempo: String,
    #[serde(default)]
    pub treble_instrument: String,
    #[serde(default)]
    pub bass_instrument: String,
    #[serde(default)]
    pub arpeggio: String,
    #[serde(default)]
    pub name: String,
}

/// Short sound effect attached to sprites and items.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Blip {
    pub id: i32,
    pub notes: String,
    #[serde(default)]
    pub env: Vec<i32>,
    #[serde(default)]
    pub beat: Vec<i32>,
    #[serde(default)]
    pub square_wave: String,
    #[serde(default)]
    pub repeat: i32,
    #[serde(default)]
    pub name: String,
}
