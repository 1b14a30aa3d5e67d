use crate::RunnableCommand;
use anyhow::Context;
use selectql::Client;
use selectql::OperationKind;
use selectql::SelectionArg;
use selectql::Settings;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct BuildCmd {
    #[arg(
        help="Name of the root field to build an operation for.",
        long,
    )]
    pub(super) field: String,

    #[arg(
        default_value_t=OperationKind::Query,
        help="Kind of operation: query, mutation or subscription.",
        long,
    )]
    pub(super) kind: OperationKind,

    #[arg(
        help="Accept (and drop) --var keys the root field does not declare.",
        long,
    )]
    pub(super) no_validate_variables: bool,

    #[arg(
        help="Path to an introspection JSON document.",
        long,
    )]
    pub(super) schema: PathBuf,

    #[arg(
        help="Selection as JSON: a field name, a list of selections, or an \
             object mapping field names to sub-selections. \
             e.g. '[\"id\", {\"characterConnection\": [\"totalCount\"]}]'",
        long,
    )]
    pub(super) select: Option<String>,

    #[arg(
        help="Argument for the root field as KEY=VALUE. VALUE is parsed as \
             JSON when possible and passed as a string otherwise.",
        long="var",
        value_parser=parse_var,
    )]
    pub(super) vars: Vec<(String, serde_json::Value)>,
}

impl RunnableCommand for BuildCmd {
    fn action(&self) -> String {
        format!("to build {} `{}`", self.kind, self.field)
    }

    /// Prints the operation document, then the JSON variables payload.
    fn run(&self, client: &Client) -> anyhow::Result<String> {
        let mut operation = client.operations(self.kind)
            .get(self.field.as_str())?
            .variables(self.vars.iter().cloned())?;

        if let Some(select) = &self.select {
            let select: serde_json::Value = serde_json::from_str(select)
                .context("parsing --select as JSON")?;
            log::debug!("Selecting {select} on `{}`.", self.field);
            operation = operation.select(SelectionArg::try_from(&select)?)?;
        }

        let variables = serde_json::to_string_pretty(operation.variable_values())?;
        Ok(format!("{}\n{variables}", operation.query()))
    }

    fn schema_path(&self) -> &Path {
        self.schema.as_path()
    }

    fn settings(&self) -> Settings {
        Settings {
            introspect: false,
            validate_variables: !self.no_validate_variables,
        }
    }
}

pub(super) fn parse_var(input: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found `{input}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing variable name in `{input}`"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
