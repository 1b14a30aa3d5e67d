mod build;
mod inspect;
#[cfg(test)]
mod tests;

use crate::command;
use crate::CommandResult;
use crate::RunnableCommand;
use build::BuildCmd;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "selectql")]
pub(crate) enum CommandEnum {
    /// Compile a single root operation into a document and its variables.
    Build(Box<BuildCmd>),

    /// List the root operations a schema defines.
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    fn command(&self) -> &dyn RunnableCommand {
        match self {
            Self::Build(cmd) => &**cmd,
            Self::Inspect(cmd) => &**cmd,
        }
    }

    /// Run the command off the async workers: schema loading and the client
    /// are blocking.
    pub(crate) async fn run(self) -> CommandResult {
        let action = self.command().action();
        let outcome = tokio::task::spawn_blocking(move || command::run_offline(self.command()))
            .await
            .unwrap_or_else(|err| Err(anyhow::anyhow!("the command did not finish: {err}")));
        CommandResult::from_outcome(action.as_str(), outcome)
    }
}
