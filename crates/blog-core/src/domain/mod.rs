//! Domain entities - the blog post document model and media rules.

mod blog;
mod category;
mod media;
pub mod validation;

pub use blog::{BlogInput, BlogPost, BlogSummary, DEFAULT_AUTHOR, Section, SectionInput};
pub use category::{Category, UnknownCategory};
pub use media::{MediaKind, timestamped_file_name};
