//! One chat session: classifier + dispatch table + the REPL loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use cv_nlu::{HttpModelLoader, IntentPipeline, NluTables, PredictionGateway};
use cv_protocol::{PipelineResult, RouteOutcome};
use cv_router::{DispatchTable, prompt_label};

use crate::config::ChatConfig;
use crate::render::{render_outcome, render_result};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

pub struct ChatSession {
    pipeline: IntentPipeline,
    router: DispatchTable,
}

impl ChatSession {
    pub fn new(pipeline: IntentPipeline, router: DispatchTable) -> Self {
        Self { pipeline, router }
    }

    /// Build tables, gateway and router from configuration.
    ///
    /// The model is not loaded here; call [`ChatSession::warm_up`].
    pub fn from_config(config: &ChatConfig) -> anyhow::Result<Self> {
        let tables = match &config.tables_path {
            Some(path) => NluTables::from_file(path)
                .with_context(|| format!("loading classification tables from {path}"))?,
            None => NluTables::builtin().context("loading built-in classification tables")?,
        };

        let gateway = if config.predictor.enabled {
            tracing::info!(
                host = %config.predictor.host,
                model = %config.predictor.model,
                "zero-shot predictor enabled"
            );
            PredictionGateway::lazy(HttpModelLoader::new(config.predictor.clone()))
        } else {
            tracing::info!("zero-shot predictor disabled, keyword-only classification");
            PredictionGateway::disabled()
        };

        let router = DispatchTable::with_defaults();
        tracing::info!(tool_count = router.len(), "dispatch table initialized");

        Ok(Self::new(
            IntentPipeline::new(Arc::new(tables), gateway),
            router,
        ))
    }

    /// Load the model up front. Failure is reported, not fatal.
    pub fn warm_up(&self) -> anyhow::Result<()> {
        let gateway = self.pipeline.gateway();
        if !gateway.is_enabled() {
            anyhow::bail!("predictor disabled");
        }
        gateway
            .ensure_loaded()
            .context("warming up zero-shot predictor")?;
        Ok(())
    }

    /// Classify and route one utterance.
    pub fn process(&self, text: &str) -> (PipelineResult, RouteOutcome) {
        let result = self.pipeline.analyse(text);
        let outcome = self.router.route(&result);
        (result, outcome)
    }

    /// Read utterances from `input` until EOF or a quit word.
    pub fn run_repl<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            write!(out, "You ❯ ")?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                writeln!(out, "\n  Goodbye!")?;
                return Ok(());
            };

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&text.to_lowercase().as_str()) {
                writeln!(out, "  Goodbye!")?;
                return Ok(());
            }

            let (mut result, mut outcome) = self.process(text);
            writeln!(out, "\n{}", render_result(&result))?;
            writeln!(out, "{}\n", render_outcome(&outcome, result.domain.as_deref()))?;

            while let RouteOutcome::NeedsInput { missing, .. } = &outcome {
                let mut supplied = 0;
                for field in missing.clone() {
                    write!(out, "  {} ❯ ", prompt_label(&field))?;
                    out.flush()?;
                    let Some(answer) = read_line(&mut input)? else {
                        writeln!(out, "\n  Goodbye!")?;
                        return Ok(());
                    };
                    let answer = answer.trim();
                    if !answer.is_empty() {
                        result.supply(field, answer);
                        supplied += 1;
                    }
                }
                if supplied == 0 {
                    break;
                }
                self.pipeline.revalidate(&mut result);
                outcome = self.router.route(&result);
                writeln!(out, "{}\n", render_outcome(&outcome, result.domain.as_deref()))?;
            }
        }
    }
}

/// One line without its terminator; None at EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
