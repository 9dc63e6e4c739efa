//! Enumeration by running an external command.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::PortEnumerator;

/// Runs a program and hands back its combined output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnumerator {
    program: String,
    args: Vec<String>,
}

impl CommandEnumerator {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program and arguments joined with spaces, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Join stdout and stderr, keeping stderr on a line of its own.
///
/// Invalid UTF-8 is replaced rather than rejected; the affected lines
/// fail to parse and are skipped like any other malformed record.
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() && !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&String::from_utf8_lossy(stderr));
    text
}

impl PortEnumerator for CommandEnumerator {
    async fn enumerate(&self) -> Result<String> {
        debug!(command = %self.command_line(), "Running socket enumeration");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                Error::Enumeration(format!("Failed to run {}: {}", self.program, e))
            })?;

        let text = combine_output(&output.stdout, &output.stderr);

        if !output.status.success() {
            warn!(command = %self.command_line(), status = %output.status, "Socket enumeration failed");
            return Err(Error::Enumeration(format!(
                "{} exited with {}: {}",
                self.command_line(),
                output.status,
                text.trim()
            )));
        }

        debug!(bytes = text.len(), "Socket enumeration finished");
        Ok(text)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::{parse_used_ports, Protocol};

    #[tokio::test]
    async fn test_captures_stdout_then_stderr() {
        let enumerator = CommandEnumerator::new(
            "sh",
            ["-c", "echo 'tcp LISTEN 0 5 0.0.0.0:22 0.0.0.0:*'; echo warning >&2"],
        );
        let text = enumerator.enumerate().await.unwrap();
        assert_eq!(text, "tcp LISTEN 0 5 0.0.0.0:22 0.0.0.0:*\nwarning\n");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_enumeration_error() {
        let enumerator = CommandEnumerator::new("sh", ["-c", "echo boom >&2; exit 3"]);
        match enumerator.enumerate().await {
            Err(Error::Enumeration(message)) => assert!(message.contains("boom")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_enumeration_error() {
        let enumerator =
            CommandEnumerator::new("/nonexistent/port-randomizer-enumerator", Vec::<String>::new());
        assert!(matches!(
            enumerator.enumerate().await,
            Err(Error::Enumeration(_))
        ));
    }

    #[tokio::test]
    async fn test_non_zero_exit_with_invalid_utf8_is_enumeration_error() {
        let enumerator = CommandEnumerator::new("sh", ["-c", "printf '\\377'; exit 1"]);
        assert!(matches!(
            enumerator.enumerate().await,
            Err(Error::Enumeration(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_hide_valid_records() {
        let enumerator = CommandEnumerator::new(
            "sh",
            ["-c", "printf 'tcp LISTEN 0 5 0.0.0.0:22 0.0.0.0:*\\n\\377\\n'"],
        );
        let text = enumerator.enumerate().await.unwrap();
        assert_eq!(parse_used_ports(&text, Protocol::Tcp), vec![22]);
    }

    #[tokio::test]
    async fn test_stderr_starts_on_its_own_line() {
        let enumerator = CommandEnumerator::new(
            "sh",
            ["-c", "printf 'udp UNCONN 0 0 0.0.0.0:53'; printf ' x\\n' >&2"],
        );
        let text = enumerator.enumerate().await.unwrap();
        assert_eq!(text, "udp UNCONN 0 0 0.0.0.0:53\n x\n");
        assert!(parse_used_ports(&text, Protocol::Udp).is_empty());
    }

    #[test]
    fn test_combine_output() {
        assert_eq!(combine_output(b"a\n", b"b\n"), "a\nb\n");
        assert_eq!(combine_output(b"a", b""), "a");
        assert_eq!(combine_output(b"", b"b"), "b");
        assert_eq!(combine_output(b"ok\n\xff\n", b""), "ok\n\u{FFFD}\n");
    }

    #[test]
    fn test_command_line() {
        let enumerator = CommandEnumerator::new("ss", ["-tuln"]);
        assert_eq!(enumerator.command_line(), "ss -tuln");
    }
}
