//! CLI command implementations

pub mod host;
pub mod key;
pub mod render;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{error, info_span, Span};

use crate::config;
use crate::error::{AppError, Result};

pub use render::{render, Output};

/// Key name used by `create-key` when none is given
pub const DEFAULT_KEY_NAME: &str = "id_rsa";

/// Paths and output options shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub key_dir: PathBuf,
    pub output: Output,
}

impl Settings {
    /// Fill in `~/.ssh/config` and `~/.ssh` where no explicit path was given
    pub fn resolve(
        config_path: Option<PathBuf>,
        key_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(p) => p,
            None => config::get_config_path()?,
        };
        let key_dir = match key_dir {
            Some(d) => d,
            None => config::get_ssh_dir()?,
        };

        Ok(Self {
            config_path,
            key_dir,
            output,
        })
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    List(Vec<String>),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Cell::Empty, |v| Cell::text(v))
    }

    pub fn opt_list(values: Option<&[String]>) -> Self {
        values.map_or(Cell::Empty, |v| Cell::List(v.to_vec()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(value) => f.write_str(value),
            Cell::List(values) => f.write_str(&values.join("\n")),
            Cell::Empty => Ok(()),
        }
    }
}

/// Column headers plus rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A command whose result is a table
pub trait RowSource {
    fn produce_rows(&self) -> Result<Table>;
}

/// Logging span handed to a command when it is built
pub fn command_span(name: &'static str) -> Span {
    info_span!("command", cmd = name)
}

/// Legacy `list <object>` form
pub fn list(settings: &Settings, object: &str) -> Result<()> {
    match object {
        "key" => key::list(settings),
        "host" => host::list(settings),
        other => {
            error!("only can list 'key' or 'host'");
            Err(AppError::UnsupportedListObject(other.to_string()))
        }
    }
}
