mod render;
mod repl;

use crate::Cli;
use crate::CommandResult;
use render::RenderCmd;
pub(crate) use repl::ReplCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "lisfy")]
pub(crate) enum CommandEnum {
    /// Render every GraphQL file found at the given paths.
    Render(Box<RenderCmd>),

    /// Read documents line by line from stdin and echo their rendering.
    Repl(ReplCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await,
            Self::Repl(cmd) => cmd.run(cli).await,
        }
    }
}
