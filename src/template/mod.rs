//! Template construction and rendering.
//!
//! A mnemonic is produced in two phases. The builder maps the input
//! letters onto a [`Template`]: sentence groups of up to four slots, each
//! slot tagged with the part of speech that position should carry. The
//! renderer then resolves every slot to a word through the registered
//! word sources and assembles the final phrase.

pub mod builder;
pub mod renderer;

pub use builder::{SentenceGroup, Slot, Template};
pub use renderer::render;
