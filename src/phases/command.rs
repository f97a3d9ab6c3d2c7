//! External command invocation.
//!
//! Every phase drives an out-of-process collaborator. Commands run with
//! inherited stdio so their output lands in the container log, and their
//! exit status is propagated faithfully rather than masked.

use std::io;
use std::time::Instant;

use tokio::process::Command;

/// Error type for external command invocations.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no command configured")]
    EmptyArgv,

    #[error("command {program:?} not found")]
    NotFound { program: String },

    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program:?} exited with {}", describe_exit(.code))]
    NonZeroExit { program: String, code: Option<i32> },
}

impl CommandError {
    /// Subprocess exit code, when one exists to propagate.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandError::NonZeroExit { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Run a command to completion, synchronously from the sequence's point of
/// view, with stdio inherited from the orchestrator.
pub async fn run_command(argv: &[String]) -> Result<(), CommandError> {
    let (program, args) = argv.split_first().ok_or(CommandError::EmptyArgv)?;

    let started = Instant::now();
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound {
                program: program.clone(),
            },
            _ => CommandError::Spawn {
                program: program.clone(),
                source,
            },
        })?;

    if status.success() {
        tracing::debug!(
            program = %program,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command completed"
        );
        Ok(())
    } else {
        Err(CommandError::NonZeroExit {
            program: program.clone(),
            code: status.code(),
        })
    }
}
