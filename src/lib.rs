pub mod core {
	pub mod layout;
	pub mod renderer;
	pub mod terminal;
	pub mod words;
}

pub mod cli;
pub mod source;

// Re-export for convenience
pub use crate::core::layout::{Layout, LayoutError};
pub use crate::core::renderer::{render, render_page, render_row, render_table};
pub use crate::core::words::WordList;
