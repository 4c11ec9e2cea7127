//! Mock answer composer: the "generation" half of the demo pipeline.
//!
//! Deterministic template work only. The point on the slide is that the
//! retrieved text is visibly the whole answer, so every output is framed
//! with an explicit simulation marker.

use crate::rag::retrieval::Document;

/// Marker prefix on every composed answer
const SIMULATION_MARKER: &str = "[SIMULATED GENERATION]";

/// Closing line appended to every non-empty answer
const CLOSING_MARKER: &str = "(End of simulated answer.)";

/// Composes a simulated answer by concatenating retrieved documents.
///
/// Pure: no side effects, no randomness, no external calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerComposer;

impl AnswerComposer {
    pub fn new() -> Self {
        Self
    }

    /// Render a simulated answer for `query` from `documents`, in input
    /// order. An empty slice yields the fixed no-match message with the
    /// query embedded verbatim.
    pub fn compose(&self, query: &str, documents: &[Document]) -> String {
        if documents.is_empty() {
            return format!(
                "{} No relevant documents found for: '{}'",
                SIMULATION_MARKER, query
            );
        }

        let snippets: Vec<String> = documents
            .iter()
            .map(|doc| format!("[doc {}]\n{}", doc.id, doc.text))
            .collect();

        format!(
            "{} Answer for query '{}':\n\n{}\n\n{}",
            SIMULATION_MARKER,
            query,
            snippets.join("\n\n"),
            CLOSING_MARKER
        )
    }
}
