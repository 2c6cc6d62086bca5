//! sshconf - small SSH configuration and key management tool
//!
//! This crate:
//! - Parses `~/.ssh/config` into ordered host blocks
//! - Lists RSA private keys in `~/.ssh`
//! - Creates new key pairs through `ssh-keygen`

pub mod cli;
pub mod config;
pub mod error;
pub mod keys;

pub use config::{parse, parse_str, ConfigDocument, HostBlock, SettingValue};
pub use error::{AppError, KeyError, ParseError, Result};
pub use keys::{GeneratedKey, KeyStore};
