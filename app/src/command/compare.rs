use anyhow::Context;
use pathcards_config::CompareConfig;
use pathcards_core::{Card, CardComparator, ComparisonSummary};
use std::path::{Path, PathBuf};
use tracing::info;

/// Input parameters for the Compare command strategy.
#[derive(Debug, Clone)]
pub struct CompareInput {
    /// Curated cards.
    pub model: PathBuf,
    /// Inferred cards to annotate.
    pub inference: PathBuf,
    /// Where to write the annotated cards; stdout when absent.
    pub output: Option<PathBuf>,
    /// Force parallel classification regardless of config.
    pub parallel: bool,
    pub config: CompareConfig,
}

/// Strategy for classifying inferred cards against curated ones.
#[derive(Debug, Clone, Copy)]
pub struct CompareStrategy;

impl super::CommandStrategy for CompareStrategy {
    type Input = CompareInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let model = read_cards(&input.model).await?;
        let inference = read_cards(&input.inference).await?;

        let comparator = CardComparator::new();
        let annotated = if input.parallel || input.config.parallel {
            comparator.compare_cards_parallel(&model, &inference)
        } else {
            comparator.compare_cards(&model, &inference)
        };

        let summary = ComparisonSummary::from_cards(&annotated);
        info!("Comparison finished: {summary}");

        let json = if input.config.pretty {
            serde_json::to_string_pretty(&annotated)?
        } else {
            serde_json::to_string(&annotated)?
        };

        match input.output {
            Some(path) => {
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("Cannot write {}", path.display()))?;
                info!("Wrote {} cards to {}", annotated.len(), path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}

async fn read_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let cards = Card::parse_collection(&json)
        .with_context(|| format!("Invalid cards in {}", path.display()))?;
    info!("Read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}
