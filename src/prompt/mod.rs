//! Deterministic prompt logic
//!
//! Everything the prompt does lives here, free of any DOM dependency:
//! - Geometry comes in through `HostView`
//! - Time comes in as milliseconds from the caller
//! - Randomness comes from a seeded RNG
//! - Style changes go out as `PromptEvent`s

pub mod geometry;
pub mod growth;
pub mod host;
pub mod layout;
pub mod placement;
pub mod pointer;
pub mod state;

pub use geometry::{Button, Rect};
pub use growth::ScaleState;
pub use host::{HostView, StaticView};
pub use layout::{InitialLayout, max_scale, place_centered};
pub use placement::{Placement, PlacementQuality, center_bounds, random_position};
pub use pointer::PointerInput;
pub use state::{PromptController, PromptEvent};
