// Naive lexical retrieval
pub mod engine;

pub use engine::{Document, LexicalRetriever, ScoredMatch};
