// file: src/app.rs
// description: wires configuration, lookup orchestration and rendering for the cli
// reference: application bootstrap and orchestration

use crate::client::PageFetcher;
use crate::config::{Config, FailurePolicy};
use crate::error::Result;
use crate::models::{SourcedDefinition, group_by_dictionary};
use crate::pipeline::LookupOrchestrator;
use crate::render::{render, render_banner};
use crate::utils::logging::{format_error, format_warning};
use futures::StreamExt;
use std::io::Write;
use std::pin::pin;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const USAGE: &str = "Provide a word to lookup.";

/// Writes the usage line when there is nothing to look up. Returns whether
/// it did, so callers can stop before any setup.
pub fn write_usage_if_empty<W: Write>(words: &[String], out: &mut W) -> Result<bool> {
    if !words.is_empty() {
        return Ok(false);
    }
    writeln!(out, "{}", USAGE)?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub struct App<F: PageFetcher + 'static> {
    orchestrator: LookupOrchestrator<F>,
    styled: bool,
    policy: FailurePolicy,
}

impl<F: PageFetcher + 'static> App<F> {
    pub fn new(fetcher: Arc<F>, config: &Config) -> Self {
        Self {
            orchestrator: LookupOrchestrator::new(fetcher, &config.lookup),
            styled: config.output.styled,
            policy: config.output.failure_policy,
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Looks up every word and writes one block per word, in input order.
    /// Under `Abort` nothing is written unless every lookup succeeds.
    pub async fn run<W: Write>(&self, words: &[String], out: &mut W) -> Result<RunSummary> {
        if write_usage_if_empty(words, out)? {
            return Ok(RunSummary::default());
        }

        info!("Looking up {} word(s)", words.len());

        match self.policy {
            FailurePolicy::Abort => {
                let results = self.orchestrator.lookup_all_or_abort(words).await?;
                for (word, definitions) in &results {
                    self.write_word(out, word, definitions)?;
                }
                Ok(RunSummary {
                    succeeded: results.len(),
                    failed: 0,
                })
            }
            FailurePolicy::Isolate => {
                let mut summary = RunSummary::default();
                let mut results = pin!(self.orchestrator.results(words));

                while let Some(lookup) = results.next().await {
                    match lookup.outcome {
                        Ok(definitions) => {
                            self.write_word(out, &lookup.word, &definitions)?;
                            summary.succeeded += 1;
                        }
                        Err(e) => {
                            error!("Lookup for '{}' failed: {}", lookup.word, e);
                            writeln!(out, "{}", render_banner(&lookup.word, self.styled))?;
                            writeln!(out, "{}\n", format_error(&e.to_string()))?;
                            summary.failed += 1;
                        }
                    }
                }

                Ok(summary)
            }
        }
    }

    fn write_word<W: Write>(
        &self,
        out: &mut W,
        word: &str,
        definitions: &[SourcedDefinition],
    ) -> Result<()> {
        writeln!(out, "{}", render_banner(word, self.styled))?;

        if definitions.is_empty() {
            warn!("No definitions found for '{}'", word);
            writeln!(
                out,
                "{}\n",
                format_warning(&format!("No definitions found for '{}'", word))
            )?;
            out.flush()?;
            return Ok(());
        }

        let grouped = group_by_dictionary(definitions.iter().cloned());
        write!(out, "{}", render(&grouped, self.styled))?;
        out.flush()?;
        Ok(())
    }
}
