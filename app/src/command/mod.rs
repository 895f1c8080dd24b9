//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input type, so
//! dispatch is resolved at compile time.

mod compare;
mod info;
mod init;
mod mine;
mod version;

pub use compare::{CompareInput, CompareStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use mine::{MineInput, MineStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
