//! SSH client configuration
//!
//! Handles:
//! - Parsing `~/.ssh/config` into host blocks
//! - Locating the ssh directory and config file

mod host;
mod parser;
mod paths;

pub use host::{ConfigDocument, HostBlock, SettingValue, ValuePolicy, MULTI_VALUED_KEYS};
pub use parser::{parse, parse_str};
pub use paths::{ensure_dir, ensure_parent_dir, get_config_path, get_home_dir, get_ssh_dir};
