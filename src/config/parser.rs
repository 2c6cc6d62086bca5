//! OpenSSH client config parser
//!
//! Reads `~/.ssh/config` style text into a [`ConfigDocument`]:
//! - `Key value` and `Key=value` directives, keys are case-insensitive
//! - `Host` lines open a new block; lines before the first one land in an
//!   implicit `*` block
//! - `IdentityFile`, `LocalForward` and `RemoteForward` accumulate, every
//!   other key keeps its first value
//! - `ProxyCommand none` is stored as [`SettingValue::Disabled`]
//!
//! [`SettingValue::Disabled`]: super::SettingValue::Disabled

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use super::host::{ConfigDocument, HostBlock};
use super::paths::ensure_parent_dir;
use crate::error::{ParseError, Result};

fn settings_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+)(?:\s*=\s*|\s+)(.+)$").expect("settings regex is valid"))
}

/// Parse the config file at `path`.
///
/// The parent directory is created when missing; a missing file is an error.
pub fn parse(path: &Path) -> Result<ConfigDocument> {
    ensure_parent_dir(path)?;

    let content = fs::read_to_string(path)?;
    let doc = parse_str(&content)?;

    debug!(path = %path.display(), blocks = doc.len(), "parsed ssh config");
    Ok(doc)
}

/// Parse config text already held in memory
pub fn parse_str(content: &str) -> std::result::Result<ConfigDocument, ParseError> {
    let mut blocks = Vec::new();
    let mut current = HostBlock::implicit();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let caps = settings_regex()
            .captures(line)
            .ok_or_else(|| ParseError::Line {
                line_no: idx + 1,
                line: line.to_string(),
            })?;

        let key = caps[1].to_lowercase();
        let value = &caps[2];

        if key == "host" {
            let patterns = split_host_patterns(value)?;
            trace!(?patterns, "opening host block");
            blocks.push(std::mem::replace(&mut current, HostBlock::new(patterns)));
        } else if key == "proxycommand" && value.eq_ignore_ascii_case("none") {
            current.disable(&key);
        } else {
            current.insert(&key, strip_quotes(value).to_string());
        }
    }

    blocks.push(current);
    Ok(ConfigDocument::from_blocks(blocks))
}

/// Split a `Host` value the way a POSIX shell splits words.
///
/// A `#` is an ordinary character here, even at the start of a word.
fn split_host_patterns(value: &str) -> std::result::Result<Vec<String>, ParseError> {
    shell_words::split(&escape_word_hashes(value)).map_err(|source| ParseError::HostValue {
        value: value.to_string(),
        source,
    })
}

/// Backslash every unquoted `#` that begins a word so the splitter keeps it
/// instead of reading the rest of the line as a comment
fn escape_word_hashes(value: &str) -> Cow<'_, str> {
    if !value.contains('#') {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    let mut quote: Option<char> = None;
    let mut word_start = true;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, '#') if word_start => escaped.push_str("\\#"),
            (None, '\\') | (Some('"'), '\\') => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            (None, '\'' | '"') => {
                quote = Some(c);
                escaped.push(c);
            }
            (Some(q), c) if c == q => {
                quote = None;
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
        word_start = quote.is_none() && matches!(c, ' ' | '\t' | '\n');
    }

    Cow::Owned(escaped)
}

/// Remove one layer of surrounding double quotes
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
