//! End-to-end demo RAG pipeline: retrieve, then compose.

use serde::{Deserialize, Serialize};

use crate::rag::composer::AnswerComposer;
use crate::rag::retrieval::{LexicalRetriever, ScoredMatch};

/// RAG pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Maximum number of documents to retrieve per query
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Result of one pipeline run, serializable for `--json` output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagAnswer {
    /// Original query
    pub query: String,
    /// Retrieved documents with scores, best first
    pub matches: Vec<ScoredMatch>,
    /// Composed simulated answer
    pub answer: String,
}

/// Pipeline owning the index and the composer
pub struct RagPipeline {
    retriever: LexicalRetriever,
    composer: AnswerComposer,
    config: RagConfig,
}

impl RagPipeline {
    /// Create an empty pipeline with default configuration
    pub fn new() -> Self {
        Self::with_config(RagConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: RagConfig) -> Self {
        Self {
            retriever: LexicalRetriever::new(),
            composer: AnswerComposer::new(),
            config,
        }
    }

    /// Index a document
    pub fn index(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.retriever.index(id, text);
    }

    /// Number of indexed documents
    pub fn document_count(&self) -> usize {
        self.retriever.len()
    }

    /// Run retrieve -> compose for one query
    pub fn answer(&self, query: &str) -> RagAnswer {
        let matches = self.retriever.retrieve(query, self.config.top_k);

        let documents: Vec<_> = matches.iter().map(|m| m.document.clone()).collect();
        let answer = self.composer.compose(query, &documents);

        RagAnswer {
            query: query.to_string(),
            matches,
            answer,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Update configuration
    pub fn set_config(&mut self, config: RagConfig) {
        self.config = config;
    }
}

impl Default for RagPipeline {
    fn default() -> Self {
        Self::new()
    }
}
