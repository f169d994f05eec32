//! Display options resolved once at startup

use super::config::{COLOR_BOLD_GREEN, COLOR_RESET, DEFAULT_CHUNK_SIZE, DIGEST_HEX_LEN};

/// Escape sequences wrapped around a highlighted character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub highlight: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        highlight: COLOR_BOLD_GREEN,
        reset: COLOR_RESET,
    };

    pub const PLAIN: Palette = Palette {
        highlight: "",
        reset: "",
    };
}

/// How the fingerprint is laid out on the terminal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Hex characters per chunk; 0 shows the whole digest as one chunk
    pub chunk_size: usize,
    pub no_color: bool,
    pub clear_screen: bool,
    /// Mirror every line horizontally (implies right alignment)
    pub flip: bool,
    pub align_right: bool,
    pub debug: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            no_color: false,
            clear_screen: false,
            flip: false,
            align_right: false,
            debug: false,
        }
    }
}

impl DisplayOptions {
    /// Chunk size with the "0 means whole digest" rule applied
    pub fn effective_chunk_size(&self) -> usize {
        if self.chunk_size == 0 {
            DIGEST_HEX_LEN
        } else {
            self.chunk_size
        }
    }

    pub fn palette(&self) -> Palette {
        if self.no_color {
            Palette::PLAIN
        } else {
            Palette::ANSI
        }
    }

    /// Whether lines are padded out to the terminal's right edge
    pub fn is_right_aligned(&self) -> bool {
        self.align_right || self.flip
    }
}
