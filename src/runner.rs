//! Evaluation Runner
//!
//! Drives one full evaluation: render the prompt for each style, call the
//! provider, extract and persist the output, and hand the payloads to the
//! aggregator. A failure in one style never aborts the other; only a
//! failure of the reference solve degrades the whole report.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

use crate::agent::{extract_json, LLMProvider};
use crate::config::EvalConfig;
use crate::eval::{compare, CandidatePayload, ComparisonReport, PromptStyle};
use crate::problem::ProblemConfig;
use crate::prompt::build_prompt;
use crate::solver::ReferenceOracle;
use crate::utils::truncate_preview;

const RAW_PREVIEW_BYTES: usize = 200;

/// Outcome of querying the agent under one style.
pub struct StyleRun {
    pub style: PromptStyle,
    pub payload: CandidatePayload,
    pub output_path: PathBuf,
    pub raw_preview: String,
}

/// Query the agent under one style and persist its output.
///
/// Parsed output is written pretty-printed in the interchange shape;
/// unparsable output is written raw so the failure can be inspected.
pub async fn run_style(
    provider: &dyn LLMProvider,
    config: &EvalConfig,
    problem: &ProblemConfig,
    style: PromptStyle,
) -> Result<StyleRun> {
    let prompt = build_prompt(style, &problem.describe());
    info!("querying {} with {} prompt", config.model, style);
    let raw = provider.generate(&config.model, prompt, None).await?;

    let payload = match extract_json(&raw) {
        Some(json_str) => match serde_json::from_str::<Value>(&json_str) {
            Ok(value) => CandidatePayload::Parsed(value),
            Err(e) => CandidatePayload::Unparsable(format!("invalid JSON: {}", e)),
        },
        None => CandidatePayload::Unparsable("no JSON payload in response".to_string()),
    };

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.output_dir.join(format!("{}_output.json", style));
    match &payload {
        CandidatePayload::Parsed(value) => {
            fs::write(&output_path, serde_json::to_string_pretty(value)?)?;
        }
        CandidatePayload::Unparsable(_) => {
            fs::write(&output_path, &raw)?;
        }
    }

    Ok(StyleRun {
        style,
        payload,
        output_path,
        raw_preview: truncate_preview(&raw, RAW_PREVIEW_BYTES),
    })
}

/// Run both styles against the provider and score them against the
/// reference solution.
pub async fn run_eval(
    provider: &dyn LLMProvider,
    config: &EvalConfig,
    problem: &ProblemConfig,
    oracle: &ReferenceOracle,
) -> Result<ComparisonReport> {
    let reference = match oracle.solve_reference(problem) {
        Ok(solution) => solution,
        Err(e) => return Ok(ComparisonReport::degraded(e.to_string())),
    };

    let mut candidates = BTreeMap::new();
    for style in PromptStyle::ALL {
        match run_style(provider, config, problem, style).await {
            Ok(run) => {
                info!("{} output written to {}", style, run.output_path.display());
                candidates.insert(style, run.payload);
            }
            Err(e) => {
                warn!("{} evaluation errored: {}", style, e);
                candidates.insert(
                    style,
                    CandidatePayload::Unparsable(format!("provider error: {}", e)),
                );
            }
        }
    }

    Ok(compare(&reference, &candidates, problem.n_variables))
}
