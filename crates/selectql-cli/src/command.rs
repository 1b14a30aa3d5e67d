use crate::offline_backend;
use anyhow::Context;
use selectql::Client;
use selectql::Settings;
use std::path::Path;

/// A subcommand that works on a schema read from disk.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// What the command was doing, for the failure message.
    fn action(&self) -> String;

    fn run(&self, client: &Client) -> anyhow::Result<String>;

    fn schema_path(&self) -> &Path;

    fn settings(&self) -> Settings {
        Settings {
            introspect: false,
            ..Settings::default()
        }
    }
}

/// Build an offline [`Client`] for the command's schema and run the command
/// against it.
pub(crate) fn run_offline(command: &dyn RunnableCommand) -> anyhow::Result<String> {
    let schema_path = command.schema_path();
    log::debug!("Loading schema from {}.", schema_path.display());
    let client = offline_backend::offline_client(schema_path, command.settings())
        .with_context(|| format!("loading schema {}", schema_path.display()))?;
    command.run(&client)
}
