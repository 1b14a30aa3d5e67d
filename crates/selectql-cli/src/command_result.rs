use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    pub fn failure(action: &str, err: &anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} Failed {action}: {err:#}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn from_outcome(action: &str, outcome: anyhow::Result<String>) -> Self {
        match outcome {
            Ok(stdout) => Self::success(stdout),
            Err(err) => Self::failure(action, &err),
        }
    }

    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(stdout),
        }
    }
}
