use std::env;
use std::path::PathBuf;

/// Conventional descriptor file names, in precedence order.
const DESCRIPTOR_FILES: [&str; 2] = ["weft.config.toml", "weft.config.json"];

/// Discover the default descriptor locations that should be consulted.
pub fn default_descriptor_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(current_dir) = env::current_dir() {
        for name in DESCRIPTOR_FILES {
            files.push(current_dir.join(name));
        }
    }
    files
}

/// Return the first conventional descriptor file that exists on disk.
pub fn discover() -> Option<PathBuf> {
    default_descriptor_files()
        .into_iter()
        .find(|path| path.is_file())
}
