//! Id-sequence helpers for the downstream model.
//!
//! Text is mapped one char per symbol. Control tokens are never produced by
//! [`Vocabulary::encode`]; they are added explicitly with
//! [`Vocabulary::pad_with_bos_eos`] and [`Vocabulary::intersperse_blank`].

use super::Vocabulary;
use crate::config::present;
use crate::{Error, Result};

impl Vocabulary {
    /// Map every char of `text` to its id.
    ///
    /// Fails on the first char that is not in the vocabulary.
    pub fn encode(&self, text: &str) -> Result<Vec<usize>> {
        let mut buf = [0u8; 4];
        text.chars()
            .map(|c| self.symbol_to_id(c.encode_utf8(&mut buf)))
            .collect()
    }

    /// Concatenate the symbols for `ids`.
    pub fn decode(&self, ids: &[usize]) -> Result<String> {
        let mut text = String::with_capacity(ids.len());
        for &id in ids {
            text.push_str(self.id_to_symbol(id)?);
        }
        Ok(text)
    }

    /// Wrap `ids` as `[bos, ids.., eos]`.
    pub fn pad_with_bos_eos(&self, ids: &[usize]) -> Result<Vec<usize>> {
        let bos = self.required_id(self.bos(), "bos")?;
        let eos = self.required_id(self.eos(), "eos")?;
        let mut out = Vec::with_capacity(ids.len() + 2);
        out.push(bos);
        out.extend_from_slice(ids);
        out.push(eos);
        Ok(out)
    }

    /// Insert the blank id between and around `ids`: `[blank, a, blank, b, blank]`.
    pub fn intersperse_blank(&self, ids: &[usize]) -> Result<Vec<usize>> {
        let blank = self.required_id(self.blank(), "blank")?;
        let mut out = Vec::with_capacity(ids.len() * 2 + 1);
        out.push(blank);
        for &id in ids {
            out.push(id);
            out.push(blank);
        }
        Ok(out)
    }

    fn required_id(&self, token: Option<&str>, name: &str) -> Result<usize> {
        let token = present(token)
            .ok_or_else(|| Error::Config(format!("no {name} token configured")))?;
        self.symbol_to_id(token)
    }
}
