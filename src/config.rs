//! Vocabulary configuration.
//!
//! [`CharactersConfig`] captures exactly the parameters a [`Vocabulary`] is
//! built from, so a persisted config reconstructs an identical vocabulary.
//! [`VocabConfig`] is the outer record a model config embeds; its
//! `characters` section is optional and falls back to the default graphemes.
//!
//! [`Vocabulary`]: crate::vocab::Vocabulary

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::symbols::symbol_set;
use crate::Result;

/// Construction parameters for a character vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharactersConfig {
    // --- Inventory ---
    /// Main symbols, one per char.
    #[serde(default)]
    pub characters: String,
    /// Punctuation, appended after the main symbols. Never sorted.
    #[serde(default)]
    pub punctuations: String,

    // --- Control tokens (absent or empty = not in the vocabulary) ---
    #[serde(default)]
    pub pad: Option<String>,
    #[serde(default)]
    pub eos: Option<String>,
    #[serde(default)]
    pub bos: Option<String>,
    #[serde(default)]
    pub blank: Option<String>,

    // --- Flags ---
    /// Deduplicate `characters` before assembly.
    #[serde(default)]
    pub is_unique: bool,
    /// Sort `characters` by code point before assembly.
    #[serde(default = "default_is_sorted")]
    pub is_sorted: bool,

    /// Precomputed symbol → id mapping. When present and non-empty it takes
    /// precedence over everything above except the control tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab_dict: Option<HashMap<String, usize>>,
}

fn default_is_sorted() -> bool {
    true
}

impl Default for CharactersConfig {
    fn default() -> Self {
        Self::graphemes()
    }
}

impl CharactersConfig {
    /// An empty inventory with no control tokens.
    pub fn empty() -> Self {
        Self {
            characters: String::new(),
            punctuations: String::new(),
            pad: None,
            eos: None,
            bos: None,
            blank: None,
            is_unique: false,
            is_sorted: default_is_sorted(),
            vocab_dict: None,
        }
    }

    /// Default grapheme inventory with all four control tokens.
    pub fn graphemes() -> Self {
        let set = symbol_set();
        Self {
            characters: set.characters.clone(),
            punctuations: set.punctuations.to_string(),
            pad: Some(set.pad.to_string()),
            eos: Some(set.eos.to_string()),
            bos: Some(set.bos.to_string()),
            blank: Some(set.blank.to_string()),
            is_unique: false,
            is_sorted: true,
            vocab_dict: None,
        }
    }

    /// Default IPA inventory with all four control tokens.
    ///
    /// Uniqueness is enforced and sorting keeps the result reproducible.
    pub fn phonemes() -> Self {
        Self {
            characters: symbol_set().phonemes.clone(),
            is_unique: true,
            is_sorted: true,
            ..Self::graphemes()
        }
    }

    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = characters.into();
        self
    }

    pub fn with_punctuations(mut self, punctuations: impl Into<String>) -> Self {
        self.punctuations = punctuations.into();
        self
    }

    pub fn with_pad(mut self, pad: Option<&str>) -> Self {
        self.pad = pad.map(str::to_string);
        self
    }

    pub fn with_eos(mut self, eos: Option<&str>) -> Self {
        self.eos = eos.map(str::to_string);
        self
    }

    pub fn with_bos(mut self, bos: Option<&str>) -> Self {
        self.bos = bos.map(str::to_string);
        self
    }

    pub fn with_blank(mut self, blank: Option<&str>) -> Self {
        self.blank = blank.map(str::to_string);
        self
    }

    pub fn with_unique(mut self, is_unique: bool) -> Self {
        self.is_unique = is_unique;
        self
    }

    pub fn with_sorted(mut self, is_sorted: bool) -> Self {
        self.is_sorted = is_sorted;
        self
    }

    pub fn with_vocab_dict(mut self, vocab_dict: HashMap<String, usize>) -> Self {
        self.vocab_dict = Some(vocab_dict);
        self
    }

    /// Control tokens that are set and non-empty, in pad, eos, bos, blank order.
    pub fn control_tokens(&self) -> Vec<&str> {
        [&self.pad, &self.eos, &self.bos, &self.blank]
            .into_iter()
            .filter_map(|token| present(token.as_deref()))
            .collect()
    }

    /// Whether a non-empty precomputed mapping is configured.
    pub fn has_vocab_dict(&self) -> bool {
        self.vocab_dict.as_ref().is_some_and(|dict| !dict.is_empty())
    }
}

/// Treats `Some("")` the same as `None`.
pub(crate) fn present(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

/// Outer configuration record carrying an optional characters section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabConfig {
    #[serde(default)]
    pub characters: Option<CharactersConfig>,
}

impl VocabConfig {
    pub fn new(characters: CharactersConfig) -> Self {
        Self {
            characters: Some(characters),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{BLANK, PAD, PUNCTUATIONS};

    #[test]
    fn test_default_config() {
        let cfg = CharactersConfig::default();
        assert_eq!(cfg.pad.as_deref(), Some(PAD));
        assert_eq!(cfg.blank.as_deref(), Some(BLANK));
        assert_eq!(cfg.punctuations, PUNCTUATIONS);
        assert!(!cfg.is_unique);
        assert!(cfg.is_sorted);
        assert!(cfg.vocab_dict.is_none());
    }

    #[test]
    fn test_phoneme_preset() {
        let cfg = CharactersConfig::phonemes();
        assert!(cfg.is_unique);
        assert!(cfg.is_sorted);
        assert!(cfg.characters.contains('ʃ'));
        assert_eq!(cfg.pad, CharactersConfig::graphemes().pad);
    }

    #[test]
    fn test_control_tokens_skip_empty() {
        let cfg = CharactersConfig::empty()
            .with_pad(Some("<PAD>"))
            .with_eos(Some(""))
            .with_blank(Some("<BLNK>"));
        assert_eq!(cfg.control_tokens(), vec!["<PAD>", "<BLNK>"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg: CharactersConfig = serde_json::from_str(r#"{"characters": "abc"}"#).unwrap();
        assert_eq!(cfg.characters, "abc");
        assert_eq!(cfg.punctuations, "");
        assert!(cfg.pad.is_none());
        assert!(!cfg.is_unique);
        assert!(cfg.is_sorted);
    }

    #[test]
    fn test_vocab_dict_presence() {
        let cfg = CharactersConfig::empty();
        assert!(!cfg.has_vocab_dict());
        let cfg = cfg.with_vocab_dict(HashMap::new());
        assert!(!cfg.has_vocab_dict());
        let cfg = cfg.with_vocab_dict(HashMap::from([("a".to_string(), 0)]));
        assert!(cfg.has_vocab_dict());
    }

    #[test]
    fn test_vocab_dict_not_serialized_when_absent() {
        let json = serde_json::to_string(&CharactersConfig::empty()).unwrap();
        assert!(!json.contains("vocab_dict"));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        let cfg = VocabConfig::new(
            CharactersConfig::empty()
                .with_characters("cba")
                .with_punctuations("!")
                .with_pad(Some("<PAD>")),
        );
        cfg.save(&path).unwrap();
        let loaded = VocabConfig::from_file(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_missing_characters_section() {
        let cfg = VocabConfig::from_json_str("{}").unwrap();
        assert!(cfg.characters.is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = VocabConfig::from_json_str("{\"characters\": 3}").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
