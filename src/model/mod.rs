mod book;
mod page;

pub use book::{Book, FormTarget};
pub use page::{spans, Block, Tone, Variant};
