//! Terminal UI layer for the explorer.
//!
//! The UI module owns rendering, key routing, and loop control for the text
//! user interface.
//!
//! Key submodules include:
//! - [`explore_loop`]: the interaction loop that turns input into
//!   [`crate::core::app`] actions and runs gateway commands.
//! - [`renderer`]: frame composition for the landing and exploring screens.
//! - [`map`], [`year_strip`], [`search`], and [`news`]: the four widgets.
//! - [`theme`] and [`builtin_themes`]: color/style policy.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns domain logic and gateway coordination.

pub mod builtin_themes;
pub mod explore_loop;
pub mod map;
pub mod news;
pub mod renderer;
pub mod search;
pub mod theme;
pub mod year_strip;
