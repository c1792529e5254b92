//! Command implementations. Each returns the text destined for stdout.

use std::fmt::Display;
use std::str::FromStr;

use ordo_core::{render, NodeArena, NodeId, ReverseStrategy, Reverser, SortStrategy, Sorter};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::config::OrdoConfig;
use crate::error::CliError;

/// Sample inputs used by `ordo demo`.
pub const DEMO_SEQUENCE: [i64; 13] = [8, 34, 64, 51, 33, 22, 44, 55, 88, 1, 0, 2, 2];
pub const DEMO_LIST: [i64; 5] = [0, 1, 3, 5, 7];

/// Largest recursion bound `ordo reverse` accepts; the recursive strategy
/// spends one main-thread stack frame per node.
pub const MAX_DEPTH_CEILING: usize = 20_000;

/// Element kind accepted by `ordo sort`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ElementKind {
    #[default]
    Int,
    Float,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_values<T: FromStr>(raw: &[String], kind: &'static str) -> Result<Vec<T>, CliError> {
    raw.iter()
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| CliError::Parse {
                value: value.clone(),
                kind,
            })
        })
        .collect()
}

fn sort_and_format<T>(
    strategy: SortStrategy,
    mut values: Vec<T>,
    format: OutputFormat,
    representable_in_json: impl Fn(&T) -> bool,
) -> Result<String, CliError>
where
    T: PartialOrd + Display + Serialize,
{
    // serde_json writes non-finite floats as `null`.
    if format == OutputFormat::Json {
        if let Some(value) = values.iter().find(|&value| !representable_in_json(value)) {
            return Err(CliError::NotJson {
                value: value.to_string(),
            });
        }
    }

    let sorted: &[T] = strategy.sort(&mut values)?;
    // Rendering validates that there is something to show.
    let text = render(sorted)?;
    match format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => Ok(serde_json::to_string(sorted)?),
    }
}

/// `ordo sort`: parse, sort and render `raw`.
pub fn run_sort(
    strategy: SortStrategy,
    raw: &[String],
    kind: ElementKind,
    format: OutputFormat,
) -> Result<String, CliError> {
    info!(%strategy, count = raw.len(), "sorting input");
    match kind {
        ElementKind::Int => {
            let values = parse_values::<i64>(raw, "an integer")?;
            sort_and_format(strategy, values, format, |_| true)
        }
        ElementKind::Float => {
            let values = parse_values::<f64>(raw, "a float")?;
            sort_and_format(strategy, values, format, |value| value.is_finite())
        }
    }
}

/// Format the chain from `head` as `[a,b,c]`; an empty chain is `[]`.
pub fn format_chain<T: Display>(arena: &NodeArena<T>, head: Option<NodeId>) -> String {
    let body = arena
        .iter_from(head)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{body}]")
}

/// `ordo reverse`: build a list from `raw`, reverse it, print head to tail.
pub fn run_reverse(
    strategy: ReverseStrategy,
    max_depth: usize,
    raw: &[String],
) -> Result<String, CliError> {
    if max_depth > MAX_DEPTH_CEILING {
        return Err(CliError::DepthCeiling {
            requested: max_depth,
            ceiling: MAX_DEPTH_CEILING,
        });
    }
    let values = parse_values::<i64>(raw, "an integer")?;
    info!(%strategy, count = values.len(), "reversing input");
    let (mut arena, head) = NodeArena::from_values(values);
    let new_head = strategy.reverser(max_depth).reverse(&mut arena, head)?;
    Ok(format_chain(&arena, new_head))
}

/// `ordo demo`: the reference scenarios, once per strategy.
pub fn run_demo(config: &OrdoConfig) -> Result<String, CliError> {
    let mut lines = Vec::new();

    for strategy in SortStrategy::iter() {
        let mut values = DEMO_SEQUENCE.to_vec();
        let sorted = strategy.sort(&mut values)?;
        lines.push(format!("sort/{strategy}: {}", render(sorted)?));
    }

    for strategy in ReverseStrategy::iter() {
        let (mut arena, head) = NodeArena::from_values(DEMO_LIST);
        let new_head = strategy
            .reverser(config.reverse.max_depth)
            .reverse(&mut arena, head)?;
        lines.push(format!(
            "reverse/{strategy}: {}",
            format_chain(&arena, new_head)
        ));
    }

    debug!(lines = lines.len(), "demo finished");
    Ok(lines.join("\n"))
}
