use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::CommandSpec;
use crate::error::{Error, Result};

/// Run `spec` with `extra` appended to its arguments and return its stdout.
///
/// The child is always waited on. If the returned future is dropped before
/// completion the child is killed and reaped by the runtime.
pub async fn run(spec: &CommandSpec, extra: &[String]) -> Result<String> {
    let program = spec.program.clone();
    debug!("running {} {:?}", spec, extra);

    let started = Instant::now();
    let output = Command::new(&spec.program)
        .args(&spec.args)
        .args(extra)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| Error::Spawn {
            program: program.clone(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !output.status.success() {
        let status = match output.status.code() {
            Some(code) => format!("exit code {}", code),
            None => "a signal".to_string(),
        };
        return Err(Error::Exit {
            program,
            status,
            stderr,
        });
    }
    if !stderr.is_empty() {
        warn!("{} wrote to stderr: {}", program, stderr);
    }

    debug!(
        "{} finished in {:?} with {} bytes of output",
        program,
        started.elapsed(),
        output.stdout.len()
    );

    String::from_utf8(output.stdout).map_err(|source| Error::Output { program, source })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", &["-c", script, "sh"])
    }

    #[tokio::test]
    async fn returns_stdout() {
        let out = run(&sh("echo hello"), &[]).await.unwrap();
        assert_eq!(out, "hello\n");
    }

    #[tokio::test]
    async fn appends_extra_args() {
        let extra = vec!["a".to_string(), "b".to_string()];
        let out = run(&sh("echo \"$@\""), &extra).await.unwrap();
        assert_eq!(out, "a b\n");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let err = run(&sh("echo boom >&2; exit 3"), &[]).await.unwrap_err();
        match err {
            Error::Exit { status, stderr, .. } => {
                assert_eq!(status, "exit code 3");
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let spec = CommandSpec::new("/nonexistent/jobtop-test-binary", &[]);
        let err = run(&spec, &[]).await.unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
