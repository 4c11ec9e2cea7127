// Offline RAG demo pipeline
//
// Components:
// - Retrieval: naive token-overlap search over in-memory documents
// - Composer: deterministic simulated answer from retrieved text
// - Pipeline: retrieve -> compose orchestration

pub mod composer;
pub mod pipeline;
pub mod retrieval;

// Re-export key types
pub use composer::AnswerComposer;
pub use pipeline::{RagAnswer, RagConfig, RagPipeline};
pub use retrieval::{Document, LexicalRetriever, ScoredMatch};
