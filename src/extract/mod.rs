pub mod business;
pub mod filter;
pub mod text;

pub use business::BusinessExtractor;
pub use text::TextNormalizer;
