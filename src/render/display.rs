//! Writes the rendered fingerprint to the terminal

use std::io::{self, Write};

use super::pipeline::Transforms;
use crate::core::DisplayOptions;
use crate::utils::clear_screen;

/// Line padding, fixed once per run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Width plain lines are right-justified to; None means left-justified
    line_width: Option<usize>,
    /// Padding in front of every chunk line
    label_width: usize,
}

impl Layout {
    pub fn left() -> Self {
        Self {
            line_width: None,
            label_width: 0,
        }
    }

    /// Right-justifies to `term_width` columns
    ///
    /// Chunk lines are padded by an empty label so that the chunk itself ends
    /// at the right edge; the escape sequences inside a painted chunk would
    /// otherwise count towards its width. A terminal narrower than a chunk
    /// gets no padding at all.
    pub fn right(term_width: usize, chunk_size: usize) -> Self {
        Self {
            line_width: Some(term_width),
            label_width: term_width.saturating_sub(chunk_size),
        }
    }

    pub fn line(&self, text: &str) -> String {
        match self.line_width {
            Some(width) => format!("{text:>width$}"),
            None => text.to_string(),
        }
    }

    pub fn chunk_line(&self, chunk: &str) -> String {
        format!("{:>width$}{chunk}", "", width = self.label_width)
    }
}

/// Terminal output for one run
#[derive(Clone, Debug)]
pub struct Display {
    clear_screen: bool,
    layout: Layout,
    transforms: Transforms,
}

impl Display {
    /// `terminal_width` is only called when the options need right alignment
    pub fn new(options: &DisplayOptions, terminal_width: impl FnOnce() -> u16) -> Self {
        let layout = if options.is_right_aligned() {
            Layout::right(
                usize::from(terminal_width()),
                options.effective_chunk_size(),
            )
        } else {
            Layout::left()
        };

        Self {
            clear_screen: options.clear_screen,
            layout,
            transforms: Transforms::from_options(options),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Writes the basename, then every chunk, then every art row
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        basename: &str,
        chunks: &[&str],
        art_rows: &[&str],
    ) -> io::Result<()> {
        if self.clear_screen {
            clear_screen(out)?;
        }

        writeln!(out, "{}", self.layout.line(basename))?;
        for chunk in chunks {
            let chunk = self.transforms.chunk(chunk);
            writeln!(out, "{}", self.layout.chunk_line(&chunk))?;
        }
        for row in art_rows {
            let row = self.transforms.art_row(row);
            writeln!(out, "{}", self.layout.line(&row))?;
        }
        out.flush()
    }
}
