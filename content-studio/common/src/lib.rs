//! Domain types and request plumbing for the restaurant content studio.
//!
//! Nothing in here knows about the DOM: the view hands its settings and an
//! [`OutputSlot`] to [`dispatch`], which talks to the generation backend through
//! the [`Backend`] seam.

mod action;
mod api;
mod config;
mod error;
mod settings;
mod studio;

pub use action::*;
pub use api::*;
pub use config::*;
pub use error::*;
pub use settings::*;
pub use studio::*;
