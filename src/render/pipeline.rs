//! Per-line transforms: mirroring and first/last character highlighting

use crate::core::{DisplayOptions, Palette};

/// Character order applied to every displayed line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reverse {
    Identity,
    Mirror,
}

impl Reverse {
    pub fn apply(self, line: &str) -> String {
        match self {
            Reverse::Identity => line.to_string(),
            Reverse::Mirror => line.chars().rev().collect(),
        }
    }
}

/// Highlighting applied to digest chunks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Plain,
    First(Palette),
    Last(Palette),
}

impl Paint {
    pub fn apply(self, chunk: &str) -> String {
        match self {
            Paint::Plain => chunk.to_string(),
            Paint::First(palette) => match chunk.chars().next() {
                Some(first) => {
                    let rest = &chunk[first.len_utf8()..];
                    format!("{}{first}{}{rest}", palette.highlight, palette.reset)
                }
                None => String::new(),
            },
            Paint::Last(palette) => match chunk.chars().next_back() {
                Some(last) => {
                    let head = &chunk[..chunk.len() - last.len_utf8()];
                    format!("{head}{}{last}{}", palette.highlight, palette.reset)
                }
                None => String::new(),
            },
        }
    }
}

/// The paint and reverse transforms selected by the display options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transforms {
    pub paint: Paint,
    pub reverse: Reverse,
}

impl Transforms {
    pub fn from_options(options: &DisplayOptions) -> Self {
        let reverse = if options.flip {
            Reverse::Mirror
        } else {
            Reverse::Identity
        };

        // The highlighted digit is the chunk's first, which sits last once mirrored
        let paint = match (options.no_color, options.flip) {
            (true, _) => Paint::Plain,
            (false, true) => Paint::Last(options.palette()),
            (false, false) => Paint::First(options.palette()),
        };

        Self { paint, reverse }
    }

    /// Reverse first, then highlight what ends up on screen
    pub fn chunk(&self, chunk: &str) -> String {
        self.paint.apply(&self.reverse.apply(chunk))
    }

    /// Art rows are only ever mirrored, never painted
    pub fn art_row(&self, row: &str) -> String {
        self.reverse.apply(row)
    }
}
