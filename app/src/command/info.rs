use pathcards_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Values come from `~/pathcards/config.json` when it exists, else from
/// the built-in defaults.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default();

        println!("=== pathcards Configuration ===\n");

        let path = Config::config_path()?;
        let source = if path.exists() { "" } else { " (not found, using defaults)" };
        println!("Config File: {}{source}", path.display());
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        println!("Compare:");
        println!("  Parallel: {}", config.compare.parallel);
        println!("  Pretty: {}", config.compare.pretty);
        println!();

        println!("Mining:");
        println!("  Report Path: {}", config.mining.report_path.display());
        match &config.mining.blacklist_path {
            Some(path) => println!("  Blacklist: {}", path.display()),
            None => println!("  Blacklist: (not set)"),
        }
        println!("  Miners:");
        for miner in &config.mining.miners {
            println!("    - {miner}");
        }

        Ok(())
    }
}
