use crate::rep;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_lisfy::ReaderError;
use graphql_lisfy::ReaderErrorKind;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;

const PROMPT: &str = "lisfy> ";
const CONTINUATION_PROMPT: &str = "  ...> ";

#[derive(Debug, Default, clap::Args)]
pub(crate) struct ReplCmd {
    #[arg(
        help="Do not print a prompt before each line (useful when piping \
             input).",
        long,
    )]
    no_prompt: bool,
}

#[inherent::inherent]
impl RunnableCommand for ReplCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self.run_loop(cli.minify).await {
            Ok(stats) => {
                log::debug!(
                    "Read {} document(s), {} failed.",
                    stats.documents,
                    stats.failures,
                );
                CommandResult::success()
            },
            Err(e) => CommandResult::stderr(format_args!("{e:#}")),
        }
    }
}

#[derive(Debug, Default)]
struct ReplStats {
    documents: usize,
    failures: usize,
}

impl ReplCmd {
    async fn run_loop(&self, minify: bool) -> anyhow::Result<ReplStats> {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        let mut stats = ReplStats::default();

        // Holds the lines of a document that spans several input lines.
        let mut pending = String::new();

        loop {
            if !self.no_prompt {
                let prompt = if pending.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
                stdout.write_all(prompt.as_bytes()).await?;
                stdout.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if pending.is_empty() && line.trim().is_empty() {
                continue;
            }

            let blank_line = line.trim().is_empty();
            if !pending.is_empty() {
                pending.push('\n');
            }
            pending.push_str(&line);

            match rep::rep(&pending, minify) {
                Ok(output) => {
                    stdout.write_all(output.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stats.documents += 1;
                },
                // Keep reading until the document is complete; a blank line
                // gives up on it.
                Err(e) if is_incomplete(&e) && !blank_line => continue,
                Err(e) => {
                    stdout.flush().await?;
                    eprint!("{}", e.format_detailed(Some(&pending)));
                    stats.documents += 1;
                    stats.failures += 1;
                },
            }
            pending.clear();
        }

        if !pending.is_empty() {
            // EOF in the middle of a document: report what is missing.
            if let Err(e) = rep::rep(&pending, minify) {
                eprint!("{}", e.format_detailed(Some(&pending)));
                stats.failures += 1;
            }
        }
        stdout.flush().await?;
        Ok(stats)
    }
}

/// Whether more input could complete the document.
fn is_incomplete(error: &ReaderError) -> bool {
    matches!(
        error.kind(),
        ReaderErrorKind::UnexpectedEof { .. }
            | ReaderErrorKind::UnclosedDelimiter { .. }
            | ReaderErrorKind::UnterminatedString,
    )
}
