// Document Writer adapter: PDF serialization (lopdf), font assets and
// staged persistence into the destination directory.

pub mod fonts;
pub mod pdf;
pub mod writer;

pub use fonts::FontAssets;
pub use writer::{letter_file_name, DocumentWriter};
