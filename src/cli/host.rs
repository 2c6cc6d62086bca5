//! Host listing

use std::path::PathBuf;

use colored::Colorize;
use tracing::{debug, Span};

use super::{command_span, render, Cell, Output, RowSource, Settings, Table};
use crate::config::{self, HostBlock};
use crate::error::Result;

pub const HOST_COLUMNS: [&str; 4] = ["host", "hostname", "user", "identityfile"];

/// Rows for every explicit `Host` block of a config file
pub struct ListHosts {
    config_path: PathBuf,
    span: Span,
}

impl ListHosts {
    pub fn new(config_path: impl Into<PathBuf>, span: Span) -> Self {
        Self {
            config_path: config_path.into(),
            span,
        }
    }
}

impl RowSource for ListHosts {
    fn produce_rows(&self) -> Result<Table> {
        let _enter = self.span.enter();

        let doc = config::parse(&self.config_path)?;
        debug!(blocks = doc.len(), "loaded config");

        let mut table = Table::new(HOST_COLUMNS);
        for block in doc.explicit_blocks() {
            table.push(host_row(block));
        }
        Ok(table)
    }
}

fn host_row(block: &HostBlock) -> Vec<Cell> {
    vec![
        Cell::List(block.patterns.clone()),
        Cell::List(block.effective_hostname()),
        Cell::opt_text(block.user()),
        Cell::opt_list(block.identity_files()),
    ]
}

/// Print the hosts of the configured ssh config
pub fn list(settings: &Settings) -> Result<()> {
    let command = ListHosts::new(&settings.config_path, command_span("list-host"));

    if settings.output == Output::Table {
        println!("{}", "=== SSH hosts ===".cyan().bold());
        println!();
    }

    println!("{}", render(&command, settings.output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SAMPLE: &str = "IdentityFile ~/.ssh/id_a
Host foo
  HostName 1.2.3.4
  User alice
  IdentityFile ~/.ssh/id_foo
  IdentityFile ~/.ssh/id_foo2

Host \"bar baz\" qux
  User bob
";

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_rows_skip_implicit_block() {
        let (_dir, path) = write_config(SAMPLE);
        let table = ListHosts::new(&path, Span::none()).produce_rows().unwrap();

        assert_eq!(table.columns, HOST_COLUMNS);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::List(vec!["foo".to_string()]),
                Cell::List(vec!["1.2.3.4".to_string()]),
                Cell::text("alice"),
                Cell::List(vec![
                    "~/.ssh/id_foo".to_string(),
                    "~/.ssh/id_foo2".to_string()
                ]),
            ]
        );
    }

    #[test]
    fn test_hostname_falls_back_to_patterns() {
        let (_dir, path) = write_config(SAMPLE);
        let table = ListHosts::new(&path, Span::none()).produce_rows().unwrap();

        let patterns = vec!["bar baz".to_string(), "qux".to_string()];
        assert_eq!(table.rows[1][0], Cell::List(patterns.clone()));
        assert_eq!(table.rows[1][1], Cell::List(patterns));
        assert_eq!(table.rows[1][2], Cell::text("bob"));
        assert_eq!(table.rows[1][3], Cell::Empty);
    }

    #[test]
    fn test_config_without_hosts_has_no_rows() {
        let (_dir, path) = write_config("User git\n");
        let table = ListHosts::new(&path, Span::none()).produce_rows().unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_error_propagates() {
        let (_dir, path) = write_config("Host a\n===broken===\n");

        assert!(ListHosts::new(&path, Span::none()).produce_rows().is_err());
    }

    #[test]
    fn test_json_output() {
        let (_dir, path) = write_config(SAMPLE);
        let json = render(&ListHosts::new(&path, Span::none()), Output::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value[0],
            serde_json::json!({
                "host": ["foo"],
                "hostname": ["1.2.3.4"],
                "user": "alice",
                "identityfile": ["~/.ssh/id_foo", "~/.ssh/id_foo2"]
            })
        );
        assert_eq!(value[1]["user"], "bob");
        assert!(value[1]["identityfile"].is_null());
    }
}
