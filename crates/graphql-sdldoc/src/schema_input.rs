use anyhow::Context;
use libgraphql_sdldoc::ReadSchemaError;
use libgraphql_sdldoc::ReservedHeaderPolicy;
use libgraphql_sdldoc::SchemaSummary;
use libgraphql_sdldoc::SummaryOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads schema files.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaInputArgs {
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
    pub graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=ReservedHeaderPolicy::HardBoundary,
        help="How a `type Query`, `type Mutation` or `type Subscription` \
             header that appears inside another definition is treated \
             (`hard-boundary` or `skip-line`).",
        long,
    )]
    pub reserved_header_policy: ReservedHeaderPolicy,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct CollectedPaths {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// A schema file along with its summary.
#[derive(Debug)]
pub(crate) struct LoadedSchema {
    pub file_path: PathBuf,
    pub summary: SchemaSummary,
}

#[derive(Debug, Default)]
pub(crate) struct LoadedSchemas {
    pub errors: Vec<anyhow::Error>,
    pub num_skipped: usize,
    pub schemas: Vec<LoadedSchema>,
}

impl SchemaInputArgs {
    pub(crate) fn summary_options(&self) -> SummaryOptions {
        SummaryOptions::new()
            .with_reserved_header_policy(self.reserved_header_policy)
    }

    /// Finds, reads and summarizes every schema file named by the args.
    pub(crate) async fn load(&self) -> LoadedSchemas {
        let CollectedPaths {
            mut errors,
            file_paths,
            num_skipped,
        } = collect_schema_paths(
            &self.file_or_dir_paths,
            &normalize_file_exts(&self.graphql_file_exts),
        );

        log::debug!("Found {} GraphQL files to be summarized.", file_paths.len());

        let options = self.summary_options();
        let mut tasks = tokio::task::JoinSet::new();
        for (idx, file_path) in file_paths.into_iter().enumerate() {
            let options = options.clone();
            tasks.spawn(async move {
                (idx, load_schema(file_path, &options).await)
            });
        }

        let mut loaded = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, Ok(schema))) => loaded.push((idx, schema)),
                Ok((_, Err(err))) => errors.push(err.into()),
                Err(join_err) => errors.push(
                    anyhow::Error::new(join_err)
                        .context("Schema summarization task failed"),
                ),
            }
        }
        loaded.sort_by_key(|(idx, _)| *idx);

        LoadedSchemas {
            errors,
            num_skipped,
            schemas: loaded.into_iter().map(|(_, schema)| schema).collect(),
        }
    }
}

async fn load_schema(
    file_path: PathBuf,
    options: &SummaryOptions,
) -> Result<LoadedSchema, ReadSchemaError> {
    let bytes = match tokio::fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(err) => return Err(ReadSchemaError::FileReadError { file_path, err }),
    };
    let source = libgraphql_sdldoc::decode_schema_bytes(&file_path, bytes)?;
    let summary = SchemaSummary::from_source_with_options(&source, options);
    log::debug!(
        "Summarized {file_path:?}: {} operations, {} type definitions.",
        summary.operations().len(),
        summary.type_definitions().len(),
    );

    Ok(LoadedSchema { file_path, summary })
}

/// Extensions without their leading `.`, matching what
/// [`Path::extension()`] returns.
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub(crate) fn has_schema_file_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.contains(ext.as_ref()))
}

/// Finds all schema files recursively located at or under each path.
pub(crate) fn collect_schema_paths(
    paths: &[PathBuf],
    file_exts: &HashSet<String>,
) -> CollectedPaths {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut errors: Vec<anyhow::Error> = vec![];
    let mut file_paths = vec![];
    let mut num_skipped = 0usize;
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(err.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }

            if !has_schema_file_ext(entry_path, file_exts) {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                num_skipped += 1;
                continue
            }

            match canonicalize(entry_path) {
                Ok(file_path) => file_paths.push(file_path),
                Err(err) => errors.push(err),
            }
        }
    }

    // A single explicit file argument is summarized even when its extension
    // isn't one of `file_exts`.
    if file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        match canonicalize(only_path) {
            Ok(file_path) => {
                log::warn!(
                    "Proceeding to summarize {file_path:#?} even though it \
                    doesn't match any of the --graphql-file-exts ({}).",
                    file_exts.iter()
                        .map(|ext| format!("`{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                num_skipped = num_skipped.saturating_sub(1);
                file_paths.push(file_path);
            },
            Err(err) => errors.push(err),
        }
    }

    CollectedPaths {
        errors,
        file_paths,
        num_skipped,
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path {path:?}"))
}
