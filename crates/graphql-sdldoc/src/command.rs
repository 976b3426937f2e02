use crate::Cli;
use crate::CommandResult;

/// A subcommand of `sdldoc`.
///
/// Commands report everything through the returned [`CommandResult`]; they
/// never print directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
