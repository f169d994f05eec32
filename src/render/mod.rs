//! Terminal rendering of a digest and its random art

pub mod chunk;
pub mod display;
pub mod pipeline;

pub use chunk::split;
pub use display::{Display, Layout};
pub use pipeline::{Paint, Reverse, Transforms};
