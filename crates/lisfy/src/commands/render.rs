use crate::output_utils;
use crate::rep;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_lisfy::ReaderOptions;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Print the AST of each file as JSON instead of rendering it.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be rendered.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let (file_paths, mut errors) = self.find_graphql_files();
        log::debug!(
            "Found {} GraphQL files to be rendered.",
            file_paths.len(),
        );

        let mut rendered: Vec<String> = vec![];
        let mut json_docs = serde_json::Map::new();
        for path in &file_paths {
            let source = match tokio::fs::read_to_string(path).await {
                Ok(source) => source,
                Err(e) => {
                    errors.push(format!("{e:#}: {path:#?}"));
                    continue;
                },
            };

            let options = ReaderOptions {
                file_path: Some(path.as_path()),
                ..ReaderOptions::default()
            };
            let value = match rep::read(&source, options) {
                Ok(value) => rep::eval(value),
                Err(e) => {
                    errors.push(e.format_detailed(Some(&source)));
                    continue;
                },
            };

            if self.json {
                match serde_json::to_value(&value) {
                    Ok(json) => {
                        json_docs.insert(path.display().to_string(), json);
                    },
                    Err(e) => errors.push(format!(
                        "Failed to serialize {path:#?}: {e}",
                    )),
                }
            } else if file_paths.len() == 1 {
                rendered.push(rep::print(&value, cli.minify));
            } else {
                rendered.push(format!(
                    "# {}\n{}",
                    path.display(),
                    rep::print(&value, cli.minify),
                ));
            }
        }

        if self.json {
            match serde_json::to_string_pretty(&json_docs) {
                Ok(json) => rendered.push(json),
                Err(e) => errors.push(format!("Failed to serialize output: {e}")),
            }
        }

        if errors.is_empty() {
            log::info!(
                "{} Rendered {} GraphQL files.",
                output_utils::GREEN_CHECK,
                file_paths.len(),
            );
        }

        let num_errors = errors.len();
        CommandResult {
            exit_code: if errors.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: (!errors.is_empty()).then(|| {
                format!(
                    "{}\n{} Encountered {num_errors} error(s) while rendering.",
                    errors.join("\n"),
                    output_utils::RED_X,
                )
            }),
            stdout: (!rendered.is_empty()).then(|| rendered.join("\n\n")),
        }
    }
}

impl RenderCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg. Problems walking the filesystem are returned
    /// alongside whatever was found.
    fn find_graphql_files(&self) -> (Vec<PathBuf>, Vec<String>) {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry.with_context(|| {
                    format!("Failed to walk files at/under {path:#?}")
                }) {
                    Ok(entry) => entry,
                    Err(e) => {
                        errors.push(format!("{e:#}"));
                        continue;
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                log::trace!("Found file at {entry_path:#?}.");
                if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext)
                {
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single file passed explicitly is rendered even when its
        // extension doesn't match `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file()
        {
            log::warn!(
                "Proceeding to render {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        if file_paths.is_empty() && errors.is_empty() {
            errors.push(format!(
                "{} No GraphQL files found under the given paths.",
                output_utils::RED_X,
            ));
        }

        (file_paths, errors)
    }
}
