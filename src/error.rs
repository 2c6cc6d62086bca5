use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure while turning config text into a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unparsable line {line_no}: {line}")]
    Line { line_no: usize, line: String },

    #[error("Unparsable host {value}: {source}")]
    HostValue {
        value: String,
        #[source]
        source: shell_words::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("SSH key name '{0}' already exists")]
    AlreadyExists(String),

    #[error("ssh-keygen failed ({}): {output}", describe_exit(.code))]
    GenerationFailed { code: Option<i32>, output: String },

    #[error("Could not run key generator: {0}")]
    Spawn(#[source] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "killed by signal".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Only can list 'key' or 'host', got '{0}'")]
    UnsupportedListObject(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
