//! Symbol vocabulary with bidirectional id lookup.
//!
//! A [`Vocabulary`] is built once and never mutated. Ids are positions in the
//! ordered symbol table:
//!
//! ```text
//! [pad] [eos] [bos] [blank] characters.. punctuations..
//!   0     1     2     3       4 ..
//! ```
//!
//! (control tokens that are not configured are skipped, shifting everything
//! after them down).
//!
//! Two construction modes, see [`VocabSource`]:
//!
//! - character groups — the table is assembled from a [`CharactersConfig`]
//! - precomputed — a persisted `symbol → id` mapping is restored as-is
//!
//! Submodules:
//!
//! - `assembly` — ordering, deduplication and duplicate detection
//! - `sequence` — encode/decode and control-token insertion

mod assembly;
mod sequence;

use std::collections::HashMap;
use std::fmt;

use crate::config::{present, CharactersConfig, VocabConfig};
use crate::{Error, Result};

/// How a vocabulary is to be constructed. Resolved once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabSource {
    /// Restore a persisted mapping. Ids must be exactly `0..len`.
    Precomputed {
        vocab_dict: HashMap<String, usize>,
        pad: Option<String>,
        eos: Option<String>,
        bos: Option<String>,
        blank: Option<String>,
    },
    /// Assemble from character groups and control tokens.
    CharacterGroups(CharactersConfig),
}

impl VocabSource {
    /// Precomputed iff `vocab_dict` is present and non-empty.
    pub fn from_characters_config(config: &CharactersConfig) -> Self {
        match &config.vocab_dict {
            Some(dict) if config.has_vocab_dict() => VocabSource::Precomputed {
                vocab_dict: dict.clone(),
                pad: config.pad.clone(),
                eos: config.eos.clone(),
                bos: config.bos.clone(),
                blank: config.blank.clone(),
            },
            _ => VocabSource::CharacterGroups(config.clone()),
        }
    }
}

/// Ordered symbol table plus its symbol → id and id → symbol lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// id → symbol.
    symbols: Vec<String>,
    /// symbol → id. For repeated symbols the last position wins.
    char_to_id: HashMap<String, usize>,
    pad: Option<String>,
    eos: Option<String>,
    bos: Option<String>,
    blank: Option<String>,
    /// Construction parameters; `None` for precomputed vocabularies.
    params: Option<CharactersConfig>,
}

impl Vocabulary {
    /// Assemble a vocabulary from character groups.
    ///
    /// With `is_unique` set, any symbol occurring twice in the final table
    /// (e.g. a character that is also listed as punctuation) is an
    /// [`Error::DuplicateSymbols`].
    pub fn build(params: &CharactersConfig) -> Result<Self> {
        if params.is_unique && !params.is_sorted {
            tracing::warn!(
                "is_unique without is_sorted: symbol order follows first occurrence in the input"
            );
        }

        let symbols = assembly::assemble(params);
        let char_to_id = index(&symbols);

        if params.is_unique && char_to_id.len() != symbols.len() {
            return Err(Error::DuplicateSymbols(assembly::duplicates(&symbols)));
        }

        tracing::debug!(
            num_symbols = symbols.len(),
            is_unique = params.is_unique,
            is_sorted = params.is_sorted,
            "built vocabulary"
        );

        Ok(Self {
            symbols,
            char_to_id,
            pad: params.pad.clone(),
            eos: params.eos.clone(),
            bos: params.bos.clone(),
            blank: params.blank.clone(),
            params: Some(params.clone()),
        })
    }

    /// Restore a lookup-only vocabulary from a persisted `symbol → id` mapping.
    ///
    /// Ids must cover `0..len` exactly, and every configured control token
    /// must be one of the mapped symbols. Stored ids are validated rather
    /// than silently re-enumerated, so a mapping with gaps is an error.
    pub fn from_precomputed(
        vocab_dict: HashMap<String, usize>,
        pad: Option<String>,
        eos: Option<String>,
        bos: Option<String>,
        blank: Option<String>,
    ) -> Result<Self> {
        let mut entries: Vec<(String, usize)> = vocab_dict.into_iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut symbols = Vec::with_capacity(entries.len());
        for (position, (symbol, id)) in entries.into_iter().enumerate() {
            if id != position {
                return Err(Error::Config(format!(
                    "vocab_dict ids must be contiguous from 0: expected id {position} for {symbol:?}, found {id}"
                )));
            }
            symbols.push(symbol);
        }
        let char_to_id = index(&symbols);

        for (name, token) in [("pad", &pad), ("eos", &eos), ("bos", &bos), ("blank", &blank)] {
            if let Some(token) = present(token.as_deref()) {
                if !char_to_id.contains_key(token) {
                    return Err(Error::Config(format!(
                        "{name} token {token:?} is not in vocab_dict"
                    )));
                }
            }
        }

        tracing::debug!(num_symbols = symbols.len(), "restored precomputed vocabulary");

        Ok(Self {
            symbols,
            char_to_id,
            pad,
            eos,
            bos,
            blank,
            params: None,
        })
    }

    pub fn from_source(source: VocabSource) -> Result<Self> {
        match source {
            VocabSource::Precomputed {
                vocab_dict,
                pad,
                eos,
                bos,
                blank,
            } => Self::from_precomputed(vocab_dict, pad, eos, bos, blank),
            VocabSource::CharacterGroups(params) => Self::build(&params),
        }
    }

    /// Build from an outer config, returning the config the vocabulary
    /// corresponds to.
    ///
    /// Without a `characters` section the default graphemes are used and
    /// written back into the returned config.
    pub fn from_config(config: VocabConfig) -> Result<(Self, VocabConfig)> {
        match &config.characters {
            Some(characters) => {
                let vocab = Self::from_source(VocabSource::from_characters_config(characters))?;
                Ok((vocab, config))
            }
            None => {
                let vocab = Self::build(&CharactersConfig::default())?;
                let config = VocabConfig {
                    characters: vocab.to_config(),
                };
                Ok((vocab, config))
            }
        }
    }

    /// Rebuild after editing this vocabulary's construction parameters.
    ///
    /// ```
    /// # use vitts_symbols::{CharactersConfig, Vocabulary};
    /// let vocab = Vocabulary::build(&CharactersConfig::default()).unwrap();
    /// let no_pad = vocab.rebuild_with(|p| p.with_pad(None)).unwrap();
    /// assert_eq!(no_pad.num_symbols(), vocab.num_symbols() - 1);
    /// ```
    pub fn rebuild_with(
        &self,
        edit: impl FnOnce(CharactersConfig) -> CharactersConfig,
    ) -> Result<Self> {
        let params = self.params.clone().ok_or_else(|| {
            Error::Config("precomputed vocabulary has no construction parameters".into())
        })?;
        Self::build(&edit(params))
    }

    // --- Lookup ---

    /// Exact-match lookup; no case folding or trimming.
    pub fn symbol_to_id(&self, symbol: &str) -> Result<usize> {
        self.char_to_id
            .get(symbol)
            .copied()
            .ok_or_else(|| Error::UnknownSymbol(symbol.to_string()))
    }

    pub fn id_to_symbol(&self, id: usize) -> Result<&str> {
        self.symbols
            .get(id)
            .map(String::as_str)
            .ok_or(Error::UnknownId(id))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.char_to_id.contains_key(symbol)
    }

    /// Id of the pad token, or [`num_symbols`](Self::num_symbols) when no pad
    /// is configured. The sentinel is outside the valid id range.
    pub fn pad_id(&self) -> usize {
        self.control_id(self.pad())
    }

    /// Id of the blank token, or [`num_symbols`](Self::num_symbols) when no
    /// blank is configured.
    pub fn blank_id(&self) -> usize {
        self.control_id(self.blank())
    }

    /// Id of the bos token, or [`num_symbols`](Self::num_symbols).
    pub fn bos_id(&self) -> usize {
        self.control_id(self.bos())
    }

    /// Id of the eos token, or [`num_symbols`](Self::num_symbols).
    pub fn eos_id(&self) -> usize {
        self.control_id(self.eos())
    }

    fn control_id(&self, token: Option<&str>) -> usize {
        // Configured tokens are always in the table: assembly inserts them and
        // `from_precomputed` checks them.
        present(token)
            .and_then(|t| self.char_to_id.get(t).copied())
            .unwrap_or(self.symbols.len())
    }

    pub fn num_symbols(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    // --- Configuration ---

    pub fn pad(&self) -> Option<&str> {
        self.pad.as_deref()
    }

    pub fn eos(&self) -> Option<&str> {
        self.eos.as_deref()
    }

    pub fn bos(&self) -> Option<&str> {
        self.bos.as_deref()
    }

    pub fn blank(&self) -> Option<&str> {
        self.blank.as_deref()
    }

    /// Main characters as supplied, before dedup/sort. `None` if precomputed.
    pub fn characters(&self) -> Option<&str> {
        self.params.as_ref().map(|p| p.characters.as_str())
    }

    pub fn punctuations(&self) -> Option<&str> {
        self.params.as_ref().map(|p| p.punctuations.as_str())
    }

    pub fn params(&self) -> Option<&CharactersConfig> {
        self.params.as_ref()
    }

    /// The parameters this vocabulary was built from, for persistence.
    /// `None` for precomputed vocabularies.
    pub fn to_config(&self) -> Option<CharactersConfig> {
        self.params.clone()
    }

    /// Current `symbol → id` mapping, restorable with
    /// [`from_precomputed`](Self::from_precomputed).
    ///
    /// A table that repeats symbols (built without `is_unique`) has no such
    /// mapping and yields [`Error::DuplicateSymbols`].
    pub fn to_vocab_dict(&self) -> Result<HashMap<String, usize>> {
        if self.char_to_id.len() != self.symbols.len() {
            return Err(Error::DuplicateSymbols(assembly::duplicates(&self.symbols)));
        }
        Ok(self.char_to_id.clone())
    }

    // --- Diagnostics ---

    /// Human-readable dump of the vocabulary state, indented by `level` tabs.
    pub fn describe(&self, level: usize) -> String {
        let indent = "\t".repeat(level);
        let show = |value: Option<&str>| value.unwrap_or("None").to_string();
        [
            format!("{indent}| > Characters: {}", show(self.characters())),
            format!("{indent}| > Punctuations: {}", show(self.punctuations())),
            format!("{indent}| > Pad: {}", show(self.pad())),
            format!("{indent}| > EOS: {}", show(self.eos())),
            format!("{indent}| > BOS: {}", show(self.bos())),
            format!("{indent}| > Blank: {}", show(self.blank())),
            format!("{indent}| > Vocab: {:?}", self.symbols),
            format!("{indent}| > Num chars: {}", self.num_symbols()),
        ]
        .join("\n")
    }

    pub fn log_summary(&self) {
        for line in self.describe(0).lines() {
            tracing::info!("{line}");
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vocabulary({} symbols, pad_id={}, blank_id={})",
            self.num_symbols(),
            self.pad_id(),
            self.blank_id()
        )
    }
}

fn index(symbols: &[String]) -> HashMap<String, usize> {
    symbols
        .iter()
        .enumerate()
        .map(|(id, symbol)| (symbol.clone(), id))
        .collect()
}
