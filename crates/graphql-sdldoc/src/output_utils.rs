use libgraphql_sdldoc::Operation;
use libgraphql_sdldoc::OperationKind;
use libgraphql_sdldoc::SchemaSummary;
use libgraphql_sdldoc::TypeDefinition;
use std::fmt::Write;
use std::path::Path;

pub(crate) const RED_X: &str = "\u{274C}";

const INDENT: &str = "  ";

/// Lists every input that could not be read or summarized.
pub(crate) fn format_input_errors(errors: &[anyhow::Error]) -> String {
    format!(
        "{RED_X} Failed to summarize {} input(s):\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err:#}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// The heading a group of operations is listed under.
pub(crate) fn operation_group_heading(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Mutation => "Mutations",
        OperationKind::Query => "Queries",
    }
}

/// Writes the human-readable summary of one schema file.
///
/// Empty groups are omitted. Line numbers are 1-based.
pub(crate) fn write_summary_text(
    out: &mut impl Write,
    file_path: &Path,
    summary: &SchemaSummary,
) -> std::fmt::Result {
    writeln!(out, "{}", file_path.display())?;
    if summary.is_empty() {
        return writeln!(out, "{INDENT}(no operations or type definitions)");
    }

    for kind in OperationKind::ALL {
        let ops: Vec<_> = summary.operations_of_kind(kind).collect();
        if ops.is_empty() {
            continue
        }
        writeln!(out, "{INDENT}{} ({})", operation_group_heading(kind), ops.len())?;
        for op in ops {
            write_operation_line(out, op)?;
        }
    }

    let type_defs = summary.type_definitions();
    if !type_defs.is_empty() {
        writeln!(out, "{INDENT}Types ({})", type_defs.len())?;
        for def in type_defs {
            write_type_definition_line(out, def)?;
        }
    }

    Ok(())
}

fn write_operation_line(out: &mut impl Write, op: &Operation) -> std::fmt::Result {
    write!(out, "{INDENT}{INDENT}{}", op.name())?;
    if let Some(params) = op.parameters() {
        let params = params.iter()
            .map(|param| {
                let mut rendered = format!("{}: {}", param.name(), param.type_name());
                if param.required() {
                    rendered.push('!');
                }
                if let Some(default_value) = param.default_value() {
                    rendered.push_str(" = ");
                    rendered.push_str(default_value);
                }
                rendered
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(out, "({params})")?;
    }
    writeln!(out, ": {}  [line {}]", op.return_type(), op.line() + 1)?;
    write_description(out, op.description())
}

fn write_type_definition_line(
    out: &mut impl Write,
    def: &TypeDefinition,
) -> std::fmt::Result {
    writeln!(
        out,
        "{INDENT}{INDENT}{} {}  [line {}]",
        def.kind(),
        def.name(),
        def.line() + 1,
    )?;
    write_description(out, def.description())
}

fn write_description(
    out: &mut impl Write,
    description: Option<&str>,
) -> std::fmt::Result {
    match description {
        Some(description) => writeln!(out, "{INDENT}{INDENT}{INDENT}{description}"),
        None => Ok(()),
    }
}

/// Writes everything known about an operation: where it lives, its
/// description and its declaration.
pub(crate) fn write_operation_details(
    out: &mut impl Write,
    file_path: &Path,
    op: &Operation,
) -> std::fmt::Result {
    writeln!(
        out,
        "{} `{}` ({}:{})",
        op.kind(),
        op.name(),
        file_path.display(),
        op.line() + 1,
    )?;
    if let Some(description) = op.description() {
        writeln!(out, "{INDENT}{description}")?;
    }
    writeln!(out, "{INDENT}{}", op.content())
}

pub(crate) fn write_type_definition_details(
    out: &mut impl Write,
    file_path: &Path,
    def: &TypeDefinition,
) -> std::fmt::Result {
    writeln!(
        out,
        "{} `{}` ({}:{})",
        def.kind(),
        def.name(),
        file_path.display(),
        def.line() + 1,
    )?;
    if let Some(description) = def.description() {
        writeln!(out, "{INDENT}{description}")?;
    }
    for line in def.content().lines() {
        writeln!(out, "{INDENT}{line}")?;
    }
    Ok(())
}
