use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "sdldoc",
    version,
    about = "Summarizes the operations and types declared in GraphQL schema files.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        help="Log more detail to stderr (`-v` for debug, `-vv` for trace). \
             Overrides the `LOG_LEVEL` environment variable.",
        long,
        short='v',
    )]
    pub verbose: u8,

    #[arg(
        conflicts_with="verbose",
        help="Only log errors.",
        long,
        short='q',
    )]
    pub quiet: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
