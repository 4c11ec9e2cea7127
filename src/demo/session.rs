//! Scripted demo session
//!
//! Drives the presentation flow end to end: seed the pretend database,
//! walk the simulated admin actions, then run the offline RAG exercise
//! over documents drawn from the store.

use anyhow::Result;

use crate::audit::AuditLog;
use crate::demo::display::Display;
use crate::demo::input::PromptReader;
use crate::rag::{RagConfig, RagPipeline};
use crate::store::{LogStore, UserStore};

/// Static knowledge snippets indexed alongside the user rows
const KNOWLEDGE_SNIPPETS: &[(&str, &str)] = &[
    (
        "k1",
        "Admin actions can modify or delete data; keep audit logs and use least privilege.",
    ),
    (
        "k2",
        "Parameterized queries prevent SQL injection and are preferred over string formatting.",
    ),
];

/// Build the demo index: one document per user row (flattened to a single
/// text string) plus the static knowledge snippets.
pub fn build_demo_pipeline(store: &UserStore, config: RagConfig) -> RagPipeline {
    let mut pipeline = RagPipeline::with_config(config);

    for user in store.users() {
        pipeline.index(user.id.to_string(), user.as_document_text());
    }
    for (id, text) in KNOWLEDGE_SNIPPETS {
        pipeline.index(*id, *text);
    }

    pipeline
}

/// Interactive demo session state
pub struct DemoSession {
    store: UserStore,
    logs: LogStore,
    audit: AuditLog,
    display: Display,
    reader: PromptReader,
    rag_config: RagConfig,
    auto_yes: bool,
}

impl DemoSession {
    /// Create a session over a freshly seeded store
    pub fn new(display: Display, rag_config: RagConfig, auto_yes: bool) -> Result<Self> {
        Ok(DemoSession {
            store: UserStore::seed(),
            logs: LogStore::new(),
            audit: AuditLog::new(),
            display,
            reader: PromptReader::new()?,
            rag_config,
            auto_yes,
        })
    }

    /// Run the full scripted flow: admin stage, audit summary, RAG stage
    pub fn run_full(&mut self) -> Result<()> {
        self.display.banner(env!("CARGO_PKG_VERSION"));
        self.display
            .note("Demo: Simulated admin actions on an in-memory store (safe).");
        self.display.list_users(self.store.users());

        if self.confirm("\nProceed with simulated admin actions?")? {
            self.admin_stage()?;
            self.display.note(&self.audit.summary());
        } else {
            self.display.warn("Skipping simulated admin actions.");
        }

        if self.confirm("\nRun simulated RAG demo?")? {
            self.rag_stage(None)?;
        } else {
            self.display.warn("Skipping RAG demo.");
        }

        self.finish();
        Ok(())
    }

    /// Run only the admin-actions stage (the `admin` subcommand)
    pub fn run_admin_only(&mut self) -> Result<()> {
        self.display.banner(env!("CARGO_PKG_VERSION"));
        self.display.list_users(self.store.users());

        if self.confirm("\nProceed with simulated admin actions?")? {
            self.admin_stage()?;
            self.display.note(&self.audit.summary());
        } else {
            self.display.warn("Skipping simulated admin actions.");
        }

        self.finish();
        Ok(())
    }

    /// Run only the RAG stage (the `rag` subcommand)
    pub fn run_rag_only(&mut self, query: Option<&str>) -> Result<()> {
        self.display.banner(env!("CARGO_PKG_VERSION"));
        self.rag_stage(query)?;
        self.finish();
        Ok(())
    }

    /// Simulated admin actions: a safe, typed update followed by the
    /// create-and-drop "dangerous operation" prop.
    fn admin_stage(&mut self) -> Result<()> {
        self.display
            .stage("Granting admin to 'alice' (simulated) using a typed update");
        self.store.grant_admin("alice")?;
        self.audit.record("grant", "is_admin set for 'alice'");
        self.display.list_users(self.store.users());

        self.display
            .stage("Performing a 'dangerous' admin operation: dropping the logs table (simulated)");
        self.logs.append("sensitive event");
        self.display.note(&format!(
            "Created logs table with {} row. Now dropping it...",
            self.logs.len()
        ));
        let dropped = self.logs.drop_all();
        self.audit
            .record("drop", &format!("logs table dropped ({} row(s))", dropped));
        self.display
            .success(&format!("Dropped logs table ({} row(s) discarded).", dropped));

        Ok(())
    }

    /// Offline RAG exercise over the store contents
    fn rag_stage(&mut self, query_override: Option<&str>) -> Result<()> {
        let spinner = self.display.indexing_spinner("Indexing documents...");
        let pipeline = build_demo_pipeline(&self.store, self.rag_config.clone());
        spinner.finish_and_clear();
        self.display.detail(&format!(
            "indexed {} documents ({} users + {} snippets)",
            pipeline.document_count(),
            self.store.len(),
            KNOWLEDGE_SNIPPETS.len()
        ));

        let query = match query_override {
            Some(q) => q.trim().to_string(),
            None => {
                match self
                    .reader
                    .read_query("Enter a demo query (e.g. 'admin logs' or 'alice email'): ")?
                {
                    Some(q) => q,
                    None => {
                        self.display.warn("No query entered; skipping RAG demo.");
                        return Ok(());
                    }
                }
            }
        };

        let result = pipeline.answer(&query);
        self.display.show_matches(&result.matches);
        self.display.show_answer(&result.answer);

        Ok(())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        if self.auto_yes {
            return Ok(true);
        }
        self.reader.confirm(question)
    }

    fn finish(&self) {
        self.display
            .note("\nDemo complete. In-memory store discarded.");
    }

    /// Audit log accessor, used by the closing summary and tests
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}
