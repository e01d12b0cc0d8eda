use std::fmt;

use crate::World;

/// Record counts and version info summarizing a decoded [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub ver_maj: i32,
    pub ver_min: i32,
    pub palettes: usize,
    pub rooms: usize,
    pub tiles: usize,
    pub sprites: usize,
    pub items: usize,
    pub dialogues: usize,
    pub tunes: usize,
    pub blips: usize,
    pub variables: usize,
}

impl World {
    /// Tally record counts for display or logging.
    pub fn stats(&self) -> WorldStats {
        WorldStats {
            ver_maj: self.settings.ver_maj,
            ver_min: self.settings.ver_min,
            palettes: self.palettes.len(),
            rooms: self.rooms.len(),
            tiles: self.tiles.len(),
            sprites: self.sprites.len(),
            items: self.items.len(),
            dialogues: self.dialogues.len(),
            tunes: self.tunes.len(),
            blips: self.blips.len(),
            variables: self.variables.len(),
        }
    }
}

impl fmt::Display for WorldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version: {}.{}", self.ver_maj, self.ver_min)?;
        writeln!(f, "Palettes: {}", self.palettes)?;
        writeln!(f, "Rooms: {}", self.rooms)?;
        writeln!(f, "Tiles: {}", self.tiles)?;
        writeln!(f, "Sprites: {}", self.sprites)?;
        writeln!(f, "Items: {}", self.items)?;
        writeln!(f, "Dialogues: {}", self.dialogues)?;
        writeln!(f, "Tunes: {}", self.tunes)?;
        writeln!(f, "Blips: {}", self.blips)?;
        write!(f, "Variables: {}", self.variables)
    }
}
