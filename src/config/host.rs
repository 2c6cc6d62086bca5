//! Host block structures

use serde::{Serialize, Serializer};
use tracing::debug;

/// Keys that may be given several times and are tried by ssh in order.
pub const MULTI_VALUED_KEYS: &[&str] = &["identityfile", "localforward", "remoteforward"];

/// How repeated occurrences of a key inside one block are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Keep the first value, drop the rest
    FirstWins,
    /// Append every value in source order
    Accumulate,
}

impl ValuePolicy {
    /// Look up the policy for a lower-cased key
    pub fn for_key(key: &str) -> Self {
        if MULTI_VALUED_KEYS.contains(&key) {
            ValuePolicy::Accumulate
        } else {
            ValuePolicy::FirstWins
        }
    }
}

/// A single setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Single(String),
    Multi(Vec<String>),
    /// `ProxyCommand none`
    Disabled,
}

/// One `Host` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostBlock {
    /// Host patterns as written after `Host`
    pub patterns: Vec<String>,
    /// Lower-cased option name to value, in first-seen order
    #[serde(serialize_with = "settings_as_map")]
    settings: Vec<(String, SettingValue)>,
}

impl HostBlock {
    /// Create an empty block for the given patterns
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            settings: Vec::new(),
        }
    }

    /// The block that holds everything before the first `Host` line
    pub fn implicit() -> Self {
        Self::new(vec!["*".to_string()])
    }

    /// Store a value according to the key's policy.
    ///
    /// `key` must already be lower-cased.
    pub fn insert(&mut self, key: &str, value: String) {
        match ValuePolicy::for_key(key) {
            ValuePolicy::Accumulate => match self.get_mut(key) {
                Some(SettingValue::Multi(values)) => values.push(value),
                Some(other) => {
                    debug!(key, existing = ?other, "dropping value, key holds a non-list value");
                }
                None => self
                    .settings
                    .push((key.to_string(), SettingValue::Multi(vec![value]))),
            },
            ValuePolicy::FirstWins => {
                self.insert_first(key, SettingValue::Single(value));
            }
        }
    }

    /// Mark a key as explicitly disabled, unless it is already set
    pub fn disable(&mut self, key: &str) {
        self.insert_first(key, SettingValue::Disabled);
    }

    fn insert_first(&mut self, key: &str, value: SettingValue) {
        if self.contains_key(key) {
            debug!(key, "ignoring repeated setting, first value wins");
            return;
        }
        self.settings.push((key.to_string(), value));
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut SettingValue> {
        self.settings
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a setting (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        let key = key.to_lowercase();
        self.settings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Single string value of a key, if that is its shape
    pub fn get_single(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            SettingValue::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Accumulated values of a multi-valued key
    pub fn get_multi(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            SettingValue::Multi(values) => Some(values),
            _ => None,
        }
    }

    /// Whether a key holds the explicit `none` marker
    pub fn is_disabled(&self, key: &str) -> bool {
        matches!(self.get(key), Some(SettingValue::Disabled))
    }

    pub fn hostname(&self) -> Option<&str> {
        self.get_single("hostname")
    }

    pub fn user(&self) -> Option<&str> {
        self.get_single("user")
    }

    pub fn identity_files(&self) -> Option<&[String]> {
        self.get_multi("identityfile")
    }

    /// The `HostName` setting, or the patterns themselves when absent
    pub fn effective_hostname(&self) -> Vec<String> {
        match self.hostname() {
            Some(hostname) => vec![hostname.to_string()],
            None => self.patterns.clone(),
        }
    }

    /// Iterate over settings in first-seen order
    pub fn settings(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

fn settings_as_map<S>(settings: &[(String, SettingValue)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(settings.iter().map(|(k, v)| (k, v)))
}

/// Parsed config file: host blocks in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    blocks: Vec<HostBlock>,
}

impl ConfigDocument {
    pub(crate) fn from_blocks(blocks: Vec<HostBlock>) -> Self {
        Self { blocks }
    }

    /// All blocks, the implicit `*` block first
    pub fn blocks(&self) -> &[HostBlock] {
        &self.blocks
    }

    /// Blocks opened by an explicit `Host` line
    pub fn explicit_blocks(&self) -> &[HostBlock] {
        self.blocks.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Write the document back to disk. Not supported yet; does nothing.
    pub fn dump(&self) {
        debug!("dump is not implemented, config left untouched");
    }

    /// Normalise the file's formatting. Not supported yet; does nothing.
    pub fn reformat(&self) {
        debug!("reformat is not implemented, config left untouched");
    }
}

impl<'a> IntoIterator for &'a ConfigDocument {
    type Item = &'a HostBlock;
    type IntoIter = std::slice::Iter<'a, HostBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
