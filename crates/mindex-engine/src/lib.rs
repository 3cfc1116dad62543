pub mod format;
pub mod io;
pub mod layout;
pub mod models;
pub mod ordering;
pub mod parsing;
pub mod template;
pub mod typeset;

// Re-export key types for easier usage
pub use format::format_index;
pub use io::*;
pub use layout::{LayoutError, check_dimension, column_count, margins};
pub use models::*;
pub use ordering::sort_entries;
pub use parsing::{ParseOutcome, parse_entries};
pub use template::{DocumentParams, render_document};
pub use typeset::*;
