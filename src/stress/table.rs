use super::resolve::normalize;
use crate::input::LoadError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Dictionary compiled into the binary, used when no `--dict` is given.
const BUILTIN_DICTIONARY: &str = include_str!("../../assets/dict.json");

/// Immutable word → stress-code mapping.
///
/// Keys are stored normalized, so every entry is reachable through
/// [`super::resolve`]. Built once at startup and only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StressTable {
    entries: HashMap<String, String>,
}

impl StressTable {
    /// Build a table from `(word, code)` pairs, normalizing each word.
    ///
    /// When two words normalize to the same key the first one wins.
    /// Words that normalize to nothing are dropped.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, code) in entries {
            let key = normalize(word.as_ref());
            if key.is_empty() {
                log::debug!("skipping dictionary entry {:?}: empty key", word.as_ref());
                continue;
            }
            if map.contains_key(&key) {
                log::warn!(
                    "dictionary entry {:?} collides with existing key {:?}",
                    word.as_ref(),
                    key
                );
                continue;
            }
            map.insert(key, code.into());
        }
        Self { entries: map }
    }

    /// Parse a JSON object of the form `{ "word": "code", ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| LoadError::Dictionary(e.to_string()))?;

        let mut pairs = Vec::with_capacity(object.len());
        for (word, value) in object {
            match value {
                serde_json::Value::String(code) => pairs.push((word, code)),
                other => {
                    return Err(LoadError::Dictionary(format!(
                        "entry {:?} has non-string stress code {}",
                        word, other
                    )))
                }
            }
        }

        Ok(Self::from_entries(pairs))
    }

    /// The dictionary shipped with the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_DICTIONARY)
    }

    /// Load a JSON dictionary from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let table = Self::from_json_str(&json)?;
        log::info!("loaded {} dictionary entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Look up an already-normalized word.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_dictionary_parses() {
        let table = StressTable::builtin().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get("water"), Some("'_"));
    }

    #[test]
    fn test_builtin_keys_are_normalized() {
        let table = StressTable::builtin().unwrap();
        for (key, _) in table.iter() {
            assert_eq!(normalize(key), key);
        }
    }

    #[test]
    fn test_from_json_normalizes_keys() {
        let table = StressTable::from_json_str(r#"{"Well-Known": "'_"}"#).unwrap();
        assert_eq!(table.get("wellknown"), Some("'_"));
        assert_eq!(table.get("Well-Known"), None);
    }

    #[test]
    fn test_first_entry_wins_on_collision() {
        let table = StressTable::from_entries([("A-B", "'"), ("ab", "_")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ab"), Some("'"));
    }

    #[test]
    fn test_from_json_rejects_non_string_code() {
        let result = StressTable::from_json_str(r#"{"cat": 1}"#);
        assert!(matches!(result, Err(LoadError::Dictionary(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let result = StressTable::from_json_str("[not an object");
        assert!(matches!(result, Err(LoadError::Dictionary(_))));
    }

    #[test]
    fn test_empty_key_is_dropped() {
        let table = StressTable::from_entries([("--", "'"), ("cat", "'")]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = StressTable::load(Path::new("/nonexistent/stressmark/dict.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"cimorene": "'_`"}"#).unwrap();

        let table = StressTable::load(file.path()).unwrap();
        assert_eq!(table.get("cimorene"), Some("'_`"));
    }
}
