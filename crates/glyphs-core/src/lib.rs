//! # Glyphs Core Library
//!
//! Everything the glyph viewer knows that is independent of the terminal:
//! the static glyph tables, the tab selection state, the theme, settings, and
//! the text tile primitives the screen is composed from.
//!
//! ## Modules
//!
//! - `catalog`: Sections and their glyph rows
//! - `selector`: Active tab state and the commands that move it
//! - `theme`: Colors and border glyphs
//! - `layout`: Rectangular styled text blocks
//! - `settings`: Layered configuration
//! - `error`: Error types

pub mod catalog;
pub mod error;
pub mod layout;
pub mod selector;
pub mod settings;
pub mod theme;

pub use catalog::{GlyphGroup, Section};
pub use error::{GlyphsError, Result};
pub use selector::{Command, TabSelector};
pub use settings::{Canvas, Settings};
pub use theme::{Element, Theme, ThemeVariant};
