use crate::output_utils;
use crate::schema_input::LoadedSchema;
use crate::schema_input::LoadedSchemas;
use crate::schema_input::SchemaInputArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DescribeCmd {
    #[arg(
        help="Name of the operation or type to describe.",
        name="NAME",
    )]
    name: String,

    #[command(flatten)]
    input: SchemaInputArgs,
}

/// Writes every operation and type definition named `name`, in file order.
/// Returns how many were written.
pub(crate) fn write_matches(
    out: &mut String,
    schemas: &[LoadedSchema],
    name: &str,
) -> Result<usize, std::fmt::Error> {
    let mut num_matches = 0;
    for schema in schemas {
        let ops = schema.summary.operations().iter()
            .filter(|op| op.name() == name);
        for op in ops {
            if num_matches > 0 {
                out.push('\n');
            }
            output_utils::write_operation_details(out, &schema.file_path, op)?;
            num_matches += 1;
        }

        let defs = schema.summary.type_definitions().iter()
            .filter(|def| def.name() == name);
        for def in defs {
            if num_matches > 0 {
                out.push('\n');
            }
            output_utils::write_type_definition_details(out, &schema.file_path, def)?;
            num_matches += 1;
        }
    }
    Ok(num_matches)
}

#[inherent::inherent]
impl RunnableCommand for DescribeCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let LoadedSchemas {
            errors,
            schemas,
            ..
        } = self.input.load().await;

        let mut out = String::new();
        let num_matches = match write_matches(&mut out, &schemas, &self.name) {
            Ok(num_matches) => num_matches,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to render `{}`: {err}",
                output_utils::RED_X,
                self.name,
            )),
        };

        if num_matches == 0 {
            let mut stderr = format!(
                "{} No operation or type named `{}` found in {} GraphQL files.",
                output_utils::RED_X,
                self.name,
                schemas.len(),
            );
            if !errors.is_empty() {
                stderr.push('\n');
                stderr.push_str(&output_utils::format_input_errors(&errors));
            }
            return CommandResult::stderr(format_args!("{stderr}"));
        }

        log::debug!("Found {num_matches} definitions named `{}`.", self.name);
        let stdout = out.trim_end().to_string();
        if errors.is_empty() {
            CommandResult::stdout(format_args!("{stdout}"))
        } else {
            CommandResult::partial(stdout, output_utils::format_input_errors(&errors))
        }
    }
}
