use anyhow::Context;
use pathcards_config::MiningConfig;
use pathcards_extractor::{
    Blacklist, MinerKind, ModificationCardMiner, PrecomputedSearcher, write_report,
};
use std::path::PathBuf;
use tracing::info;

/// Input parameters for the Mine command strategy.
#[derive(Debug, Clone)]
pub struct MineInput {
    /// Pattern search results, keyed by miner.
    pub matches: PathBuf,
    /// Overrides `mining.blacklist_path`.
    pub blacklist: Option<PathBuf>,
    /// Overrides `mining.report_path`.
    pub output: Option<PathBuf>,
    /// Overrides `mining.miners` when non-empty.
    pub miners: Vec<MinerKind>,
    pub config: MiningConfig,
}

/// Strategy for mining state changes and writing the delta report.
#[derive(Debug, Clone, Copy)]
pub struct MineStrategy;

impl super::CommandStrategy for MineStrategy {
    type Input = MineInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let MineInput {
            matches,
            blacklist,
            output,
            miners,
            config,
        } = input;

        let json = tokio::fs::read_to_string(&matches)
            .await
            .with_context(|| format!("Cannot read {}", matches.display()))?;
        let searcher = PrecomputedSearcher::from_json(&json)
            .with_context(|| format!("Invalid matches in {}", matches.display()))?;
        info!(
            "Loaded precomputed matches for {} patterns from {}",
            searcher.len(),
            matches.display()
        );

        let miners = if miners.is_empty() { config.miners } else { miners };
        let mut miner = ModificationCardMiner::new(miners);

        if let Some(path) = blacklist.or(config.blacklist_path) {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Cannot read {}", path.display()))?;
            let blacklist = Blacklist::parse(&text)
                .with_context(|| format!("Invalid blacklist {}", path.display()))?;
            info!("Loaded {} blacklisted ids from {}", blacklist.len(), path.display());
            miner = miner.with_blacklist(blacklist);
        }

        let stats = miner.mine_and_collect(&searcher)?;
        info!(
            "Inspected {} matches, {} skipped, {} with changes",
            stats.matches, stats.skipped, stats.changes
        );

        let mut report = Vec::new();
        let rows = write_report(miner.table(), &mut report)?;

        let output = output.unwrap_or(config.report_path);
        tokio::fs::write(&output, report)
            .await
            .with_context(|| format!("Cannot write {}", output.display()))?;
        info!("Wrote {rows} rows to {}", output.display());

        Ok(())
    }
}
