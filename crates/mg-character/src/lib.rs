//! Mouse character generation for mausgen.
//!
//! Ties the mechanics and the tables together: rejection-sample the base
//! attributes against a [`GeneratorConfig`], then resolve the cosmetic
//! traits once and hand back a finished [`Mouse`].

pub mod config;
pub mod error;
pub mod generator;
pub mod mouse;

pub use config::{GeneratorConfig, Profile};
pub use error::{CharError, CharResult};
pub use generator::Generator;
pub use mouse::{Mouse, Traits};
