//! Symbol vocabularies for VITS-style text-to-speech in pure Rust.
//!
//! Maps graphemes, IPA phonemes, punctuation and control tokens to the
//! integer ids a sequence model consumes, and back.
//!
//! ## Pipeline
//!
//! ```text
//! SymbolSet (default inventories)
//!        ↓
//! CharactersConfig ── or ── persisted vocab_dict
//!        ↓                         ↓
//!        └──────── Vocabulary ─────┘
//!                      ↓
//!      symbol_to_id / id_to_symbol / encode
//! ```
//!
//! ## Modules
//!
//! - [`symbols`] — default grapheme and phoneme inventories, control tokens
//! - [`config`] — serde construction parameters, JSON load/save
//! - [`vocab`] — the symbol table and its lookups

pub mod config;
pub mod symbols;
pub mod vocab;

mod error;

pub use config::{CharactersConfig, VocabConfig};
pub use error::{Error, Result};
pub use symbols::{symbol_set, SymbolSet};
pub use vocab::{VocabSource, Vocabulary};
