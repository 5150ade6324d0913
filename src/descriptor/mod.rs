//! Descriptor loading and resolution utilities.
//!
//! The pipeline is decomposed into small submodules: a permissive raw mirror
//! of the descriptor file, validation while resolving it into the typed
//! [`ConfigDescriptor`], and discovery of conventional descriptor locations.
//! `load` is the primary entry point.

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use errors::MalformedConfig;
pub use loader::{from_json_str, load};
pub use resolved::{ConfigDescriptor, ThemeConfig, TokenValue};
pub use sources::{default_descriptor_files, discover};
