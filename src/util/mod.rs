pub mod tree_dot;

pub use tree_dot::{render_tree_dot, write_tree_dot};
