//! Filesystem primitives: path resolution, directory and file operations,
//! and whole-file content helpers.

pub mod content;
pub mod ops;
pub mod path;

pub use content::{append_file, is_binary_file, read_file, write_file};
pub use ops::{
    command_exists, copy_entry, ensure_dir, is_empty_dir, list_entries, mod_time_ns, tree_entries,
};
pub use path::{absolutize, canonicalize_existing};
