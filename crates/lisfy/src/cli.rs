use crate::commands;
use crate::commands::ReplCmd;
use crate::CommandResult;

#[derive(clap::Parser, Debug)]
#[command(
    name = "lisfy",
    version,
    about = "Read GraphQL operation documents and render them back out.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Render without optional whitespace.",
        long,
    )]
    pub minify: bool,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, start the interactive loop.
    pub(crate) async fn run_default(self) -> CommandResult {
        ReplCmd::default().run(self).await
    }
}
