//! External key generation

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Program used to create key pairs
pub const SSH_KEYGEN: &str = "ssh-keygen";

/// What the key generator reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeygenOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl KeygenOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Captured stdout and stderr, trimmed and joined
    pub fn combined(&self) -> String {
        [self.stdout.trim(), self.stderr.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Creates an RSA key pair without passphrase at a given path
pub trait KeyGenerator {
    fn generate_rsa(&self, path: &Path) -> io::Result<KeygenOutput>;
}

/// Runs `ssh-keygen -t rsa -N "" -f <path>`.
///
/// Waits for the process without a timeout.
#[derive(Debug, Clone)]
pub struct SshKeygen {
    program: String,
}

impl SshKeygen {
    pub fn new() -> Self {
        Self::with_program(SSH_KEYGEN)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SshKeygen {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGenerator for SshKeygen {
    fn generate_rsa(&self, path: &Path) -> io::Result<KeygenOutput> {
        debug!(program = %self.program, path = %path.display(), "running key generator");

        let output = Command::new(&self.program)
            .args(["-t", "rsa", "-N", ""])
            .arg("-f")
            .arg(path)
            .stdin(Stdio::null())
            .output()?;

        Ok(KeygenOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
