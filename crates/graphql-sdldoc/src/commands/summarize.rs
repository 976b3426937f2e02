use crate::output_format::OutputFormat;
use crate::output_utils;
use crate::schema_input::LoadedSchema;
use crate::schema_input::LoadedSchemas;
use crate::schema_input::SchemaInputArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use indexmap::IndexMap;
use libgraphql_sdldoc::SchemaSummary;

#[derive(Debug, clap::Args)]
pub(crate) struct SummarizeCmd {
    #[arg(
        default_value_t=OutputFormat::Text,
        help="Output format (`text` or `json`).",
        long,
        short='f',
    )]
    format: OutputFormat,

    #[command(flatten)]
    input: SchemaInputArgs,
}

pub(crate) fn render_text(schemas: &[LoadedSchema]) -> anyhow::Result<String> {
    let mut out = String::new();
    for (idx, schema) in schemas.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        output_utils::write_summary_text(&mut out, &schema.file_path, &schema.summary)?;
    }
    Ok(out.trim_end().to_string())
}

/// Renders a JSON object keyed by file path, in the order the files were
/// found.
pub(crate) fn render_json(schemas: &[LoadedSchema]) -> anyhow::Result<String> {
    let by_file_path: IndexMap<String, &SchemaSummary> = schemas.iter()
        .map(|schema| (schema.file_path.display().to_string(), &schema.summary))
        .collect();
    Ok(serde_json::to_string_pretty(&by_file_path)?)
}

#[inherent::inherent]
impl RunnableCommand for SummarizeCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let LoadedSchemas {
            errors,
            num_skipped,
            schemas,
        } = self.input.load().await;
        log::debug!("Skipped {num_skipped} non-graphql files.");

        if schemas.is_empty() && errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }

        let rendered = match self.format {
            OutputFormat::Json => render_json(&schemas),
            OutputFormat::Text => render_text(&schemas),
        };
        let rendered = match rendered {
            Ok(rendered) => rendered,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to render summary: {err:#}",
                output_utils::RED_X,
            )),
        };

        if errors.is_empty() {
            return CommandResult::stdout(format_args!("{rendered}"));
        }

        let stderr = output_utils::format_input_errors(&errors);
        if schemas.is_empty() {
            CommandResult::stderr(format_args!("{stderr}"))
        } else {
            CommandResult::partial(rendered, stderr)
        }
    }
}
