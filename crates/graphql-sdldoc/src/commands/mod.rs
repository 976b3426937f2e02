pub(crate) mod describe;
pub(crate) mod summarize;

use crate::Cli;
use crate::CommandResult;
use describe::DescribeCmd;
use summarize::SummarizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "sdldoc")]
pub(crate) enum CommandEnum {
    /// Print every query, mutation and type declared in the given schemas.
    Summarize(Box<SummarizeCmd>),

    /// Print the documentation and source of the operations or types with a
    /// given name.
    Describe(Box<DescribeCmd>),
}
impl CommandEnum {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Describe(_) => "describe",
            Self::Summarize(_) => "summarize",
        }
    }

    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        log::debug!("Running `sdldoc {}`.", self.name());
        match self {
            Self::Describe(cmd) => cmd.run(cli).await,
            Self::Summarize(cmd) => cmd.run(cli).await,
        }
    }
}
