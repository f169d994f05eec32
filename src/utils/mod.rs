pub(crate) mod fs;
pub(crate) mod terminal;

// Public API - utilities used by commands
pub use fs::{base_name, dir_name};
pub use terminal::{clear_screen, terminal_width, DEFAULT_TERMINAL_WIDTH};
