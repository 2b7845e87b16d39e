//! UI primitives the page sections are composed from.
//!
//! These stand in for a component library: sections only rely on what a
//! primitive renders (a card surface, a button-styled link, an image with
//! fixed dimensions), so any equivalent primitive can replace them without
//! touching the content model.
//!
//! # Component Hierarchy
//!
//! ```text
//! Button ─────────┐
//! ExternalAnchor ─┴── link_target() (new-tab policy)
//! Card
//! Image
//! Icon ── StarRating
//! ```

mod button;
mod card;
mod icons;
mod image;
mod link;
mod rating;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use icons::*;
pub use image::Image;
pub use link::{ExternalAnchor, NEW_TAB_REL, NEW_TAB_TARGET, link_target};
pub use rating::StarRating;
