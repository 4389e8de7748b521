//! Subcommand handlers.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::info;

use elemsim_config::Config;
use elemsim_core::{explain, filter_above, rank, Matcher, SimilarityExplanation};
use elemsim_dom_snapshot::{NodeId, SnapshotDocument};
use elemsim_protocols::Match;

use crate::cli::{AnchorArgs, OutputFormat};

/// One reported match.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchRow {
    node: NodeId,
    backend_node_id: i64,
    /// `None` when the score is undefined.
    score: Option<f64>,
    description: String,
}

fn load_anchor(args: &AnchorArgs) -> Result<(SnapshotDocument, NodeId)> {
    let doc = SnapshotDocument::load(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    let anchor = doc
        .find_nth(&args.tag, args.nth)
        .ok_or_else(|| anyhow!("No <{}> element at index {}", args.tag, args.nth))?;
    Ok((doc, anchor))
}

fn build_matcher(config: &Config) -> Result<Matcher> {
    Matcher::new(config.weights, config.extractor).context("Invalid matcher configuration")
}

/// Score candidates for the anchor and print those above the threshold.
pub(crate) fn run_match(
    config: &Config,
    args: &AnchorArgs,
    threshold: Option<f64>,
    all: bool,
    ranked: bool,
    format: OutputFormat,
) -> Result<()> {
    let (doc, anchor) = load_anchor(args)?;
    let matcher = build_matcher(config)?;
    let results = matcher.matches(&doc, anchor)?;

    let threshold = threshold.unwrap_or(config.matcher.threshold);
    let mut selected = if all {
        results.clone()
    } else {
        filter_above(&results, threshold)
    };
    if ranked {
        selected = rank(&selected);
    }
    info!(
        anchor = %anchor,
        candidates = results.len(),
        reported = selected.len(),
        threshold,
        "Match complete"
    );

    let rows: Vec<MatchRow> = selected.iter().map(|m| match_row(&doc, m)).collect();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            for row in &rows {
                let score = row
                    .score
                    .map(|s| format!("{:.4}", s))
                    .unwrap_or_else(|| "undefined".to_string());
                println!("{:>9}  {:>6}  {}", score, row.node.to_string(), row.description);
            }
        }
    }
    Ok(())
}

fn match_row(doc: &SnapshotDocument, m: &Match<NodeId>) -> MatchRow {
    MatchRow {
        node: m.element(),
        backend_node_id: doc.backend_node_id(m.element()),
        score: m.defined_score().ok(),
        description: doc.describe(m.element()),
    }
}

/// Print the anchor's feature vector.
pub(crate) fn run_features(config: &Config, args: &AnchorArgs) -> Result<()> {
    let (doc, anchor) = load_anchor(args)?;
    let features = build_matcher(config)?.extractor().extract(&doc, anchor)?;
    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}

/// Print the per-field breakdown of the anchor's similarity to another element.
pub(crate) fn run_explain(
    config: &Config,
    args: &AnchorArgs,
    other: usize,
    format: OutputFormat,
) -> Result<()> {
    let (doc, anchor) = load_anchor(args)?;
    let other = doc
        .find_nth(&args.tag, other)
        .ok_or_else(|| anyhow!("No <{}> element at index {}", args.tag, other))?;

    let matcher = build_matcher(config)?;
    let weights = matcher.effective_weights(&doc);
    let left = matcher.extractor().extract(&doc, anchor)?;
    let right = matcher.extractor().extract(&doc, other)?;
    let explanation = explain(&left, &right, &weights);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&explanation)?),
        OutputFormat::Table => print_explanation(&doc, anchor, other, &explanation),
    }
    Ok(())
}

fn print_explanation(
    doc: &SnapshotDocument,
    anchor: NodeId,
    other: NodeId,
    explanation: &SimilarityExplanation,
) {
    println!("a: {}", doc.describe(anchor));
    println!("b: {}", doc.describe(other));
    println!();
    println!(
        "{:<18} {:>10} {:>8} {:>12} {:>12} {:>12}",
        "field", "weight", "matches", "a.b", "a.a", "b.b"
    );
    for f in &explanation.fields {
        println!(
            "{:<18} {:>10} {:>8} {:>12.2} {:>12.2} {:>12.2}",
            f.field.name(),
            f.weight,
            f.matches,
            f.cross,
            f.left_self,
            f.right_self
        );
    }
    println!();
    println!("dot product: {:.4}", explanation.dot_product);
    println!("norms:       {:.4} / {:.4}", explanation.left_norm, explanation.right_norm);
    if explanation.cosine.is_nan() {
        println!("cosine:      undefined");
    } else {
        println!("cosine:      {:.4}", explanation.cosine);
    }
}
