mod tree_path;

pub use tree_path::{DEFAULT_SEPARATOR, TreePath, TreePathError};
