//! Terminal output for the demo session
//!
//! Color-coded, presentation-oriented formatting: banner, user table,
//! stage headers, retrieved-document previews.

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::Verbosity;
use crate::rag::ScoredMatch;
use crate::store::User;

/// Longest preview of a retrieved document, in characters
const PREVIEW_CHARS: usize = 80;

/// Display helper for demo output
pub struct Display {
    verbosity: Verbosity,
}

impl Display {
    pub fn new(verbosity: Verbosity) -> Self {
        Display { verbosity }
    }

    /// Show welcome banner
    pub fn banner(&self, version: &str) {
        if !self.verbosity.show_progress() {
            return;
        }

        let width = 64;
        let rule = "=".repeat(width);
        println!("\n{}", rule.cyan());
        println!(
            "{}",
            format!("  demobuddy {} - Security Awareness Demo", version)
                .bold()
                .cyan()
        );
        println!(
            "{}",
            "  In-memory only | No network | No credentials".dimmed()
        );
        println!("{}\n", rule.cyan());
    }

    /// Stage header, mirroring the presenter's talk track
    pub fn stage(&self, title: &str) {
        println!("\n{} {}", ">>>".yellow().bold(), title.bold());
    }

    pub fn note(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Per-step detail, only shown at -v
    pub fn detail(&self, msg: &str) {
        if self.verbosity.show_detail() {
            println!("  {}", msg.dimmed());
        }
    }

    pub fn success(&self, msg: &str) {
        println!("{} {}", "✓".green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        println!("{} {}", "!".yellow(), msg.yellow());
    }

    /// Render the user table
    pub fn list_users(&self, users: &[User]) {
        println!("\n{}", "Current users:".bold());
        for user in users {
            let admin_flag = if user.is_admin {
                "admin".red().bold().to_string()
            } else {
                "user".normal().to_string()
            };
            println!(
                "  #{:<3} {:<10} {:<22} {:<6} created {}",
                user.id,
                user.username,
                user.email,
                admin_flag,
                user.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
    }

    /// Render retrieved matches as id + short preview
    pub fn show_matches(&self, matches: &[ScoredMatch]) {
        println!("\n{}", "Retrieved documents:".bold());
        if matches.is_empty() {
            println!("  {}", "(none)".dimmed());
            return;
        }
        for m in matches {
            let preview: String = m.document.text.chars().take(PREVIEW_CHARS).collect();
            println!(
                "  - id={} score={} preview={}",
                m.document.id.cyan(),
                m.score,
                preview.dimmed()
            );
        }
    }

    /// Print the composed answer block
    pub fn show_answer(&self, answer: &str) {
        println!("\n{}\n", answer);
    }

    /// Spinner shown while the index is being built
    pub fn indexing_spinner(&self, msg: &str) -> ProgressBar {
        if !self.verbosity.show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::Document;

    #[test]
    fn test_display_creation() {
        let display = Display::new(Verbosity::Normal);
        assert!(display.verbosity.show_progress());
    }

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let display = Display::new(Verbosity::Quiet);
        let pb = display.indexing_spinner("indexing");
        assert!(pb.is_hidden());
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long_text = "é".repeat(200);
        let preview: String = long_text.chars().take(PREVIEW_CHARS).collect();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_show_matches_handles_empty_and_full() {
        let display = Display::new(Verbosity::Quiet);
        display.show_matches(&[]);
        display.show_matches(&[ScoredMatch {
            score: 1,
            document: Document::new("k1", "least privilege"),
        }]);
    }
}
