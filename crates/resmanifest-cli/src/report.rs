use serde::Serialize;

use resmanifest::{AdapterPackage, ExitStatus, Violation};

/// Outcome of one check, printable as text or JSON
#[derive(Debug, Serialize)]
pub struct Report {
    pub adapter: Option<String>,
    pub files: usize,
    pub ok: bool,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn new(package: &AdapterPackage, result: Result<(), Vec<Violation>>) -> Self {
        let violations = result.err().unwrap_or_default();
        Self {
            adapter: package.adapter_name().map(str::to_string),
            files: package.resources.len(),
            ok: violations.is_empty(),
            violations,
        }
    }

    pub fn status(&self) -> ExitStatus {
        if self.ok {
            ExitStatus::Clean
        } else {
            ExitStatus::Violations
        }
    }

    /// One line per violation on stderr; a summary on stdout when clean
    pub fn print_text(&self) {
        if self.ok {
            println!(
                "ok: {} ({} files)",
                self.adapter.as_deref().unwrap_or("<unnamed>"),
                self.files
            );
            return;
        }
        for violation in &self.violations {
            eprintln!("{}", violation);
        }
    }

    pub fn print_json(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}
