use crate::output_utils;
use crate::RunnableCommand;
use selectql::Client;
use selectql::OperationKind;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Path to an introspection JSON document.",
        long,
    )]
    pub(super) schema: PathBuf,
}

impl RunnableCommand for InspectCmd {
    fn action(&self) -> String {
        format!("to inspect {}", self.schema.display())
    }

    /// A header line, then one section per defined root type with one line
    /// per operation: `name(arg: Type, ...): OutputType`.
    fn run(&self, client: &Client) -> anyhow::Result<String> {
        let mut out = String::new();
        writeln!(out, "{} {}", output_utils::GREEN_CHECK, self.schema.display())?;
        for kind in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
            let Some(root_type) = client.schema().root_type(kind) else {
                log::debug!("Schema defines no {kind} root type.");
                continue;
            };

            writeln!(out, "\n{kind} ({}):", root_type.name())?;
            for (name, field) in client.operations(kind).iter() {
                let args = field.args()
                    .values()
                    .map(|arg| format!("{}: {}", arg.name(), arg.type_ref()))
                    .collect::<Vec<_>>();
                if args.is_empty() {
                    writeln!(out, "  {name}: {}", field.type_ref())?;
                } else {
                    writeln!(out, "  {name}({}): {}", args.join(", "), field.type_ref())?;
                }
            }
        }
        Ok(out.trim_end().to_string())
    }

    fn schema_path(&self) -> &Path {
        self.schema.as_path()
    }
}
