//! Page management
//!
//! - `registry` - page key to view mapping
//! - `page_labels` - page titles

pub mod page_labels;
pub mod registry;

pub use page_labels::{page_label_for_key, DEFAULT_PAGE};
pub use registry::render_page_content;
