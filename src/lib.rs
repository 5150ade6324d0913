//! Typed loading for the `weft` build descriptor.
//!
//! The descriptor tells a utility-class CSS pipeline which source files to
//! scan for class usage, which typography stack to apply by default, and
//! which design tokens to layer over the built-in theme. The root module
//! re-exports the loader entry points and the resolved descriptor types so
//! that consumers can read the descriptor without digging through the module
//! hierarchy.

pub mod descriptor;

pub use descriptor::{
    ConfigDescriptor, MalformedConfig, ThemeConfig, TokenValue, default_descriptor_files,
    discover, from_json_str, load,
};
