//! Symbol table assembly.
//!
//! Produces the ordered table `[pad, eos, bos, blank, characters.., punctuations..]`
//! from a [`CharactersConfig`]. Control tokens are included only when set and
//! non-empty. `is_unique` and `is_sorted` act on `characters` alone; punctuation
//! is appended verbatim.

use std::collections::{HashMap, HashSet};

use crate::config::CharactersConfig;

/// Assemble the ordered symbol table for `params`.
pub(crate) fn assemble(params: &CharactersConfig) -> Vec<String> {
    let mut base: Vec<char> = params.characters.chars().collect();
    if params.is_unique {
        base = dedup_first_occurrence(base);
    }
    if params.is_sorted {
        base.sort_unstable();
    }

    let control = params.control_tokens();
    let mut symbols =
        Vec::with_capacity(control.len() + base.len() + params.punctuations.chars().count());
    symbols.extend(control.into_iter().map(str::to_string));
    symbols.extend(base.into_iter().map(String::from));
    symbols.extend(params.punctuations.chars().map(String::from));
    symbols
}

/// Keep the first occurrence of every char, preserving order.
fn dedup_first_occurrence(chars: Vec<char>) -> Vec<char> {
    let mut seen = HashSet::with_capacity(chars.len());
    chars.into_iter().filter(|c| seen.insert(*c)).collect()
}

/// Symbols occurring more than once, sorted.
pub(crate) fn duplicates(symbols: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for symbol in symbols {
        *counts.entry(symbol.as_str()).or_default() += 1;
    }
    let mut repeated: Vec<String> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(symbol, _)| symbol.to_string())
        .collect();
    repeated.sort();
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(symbols: &[String]) -> Vec<&str> {
        symbols.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_control_tokens_lead_in_fixed_order() {
        let params = CharactersConfig::empty()
            .with_characters("xy")
            .with_punctuations(".")
            .with_blank(Some("<BLNK>"))
            .with_bos(Some("<BOS>"))
            .with_eos(Some("<EOS>"))
            .with_pad(Some("<PAD>"));
        assert_eq!(
            strs(&assemble(&params)),
            vec!["<PAD>", "<EOS>", "<BOS>", "<BLNK>", "x", "y", "."]
        );
    }

    #[test]
    fn test_punctuation_never_sorted() {
        let params = CharactersConfig::empty()
            .with_characters("ba")
            .with_punctuations("?!,");
        assert_eq!(strs(&assemble(&params)), vec!["a", "b", "?", "!", ","]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let params = CharactersConfig::empty()
            .with_characters("cab")
            .with_sorted(false);
        assert_eq!(strs(&assemble(&params)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let params = CharactersConfig::empty()
            .with_characters("abcab")
            .with_unique(true)
            .with_sorted(false);
        assert_eq!(strs(&assemble(&params)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_not_unique_keeps_repeats() {
        let params = CharactersConfig::empty().with_characters("aba");
        assert_eq!(strs(&assemble(&params)), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_empty_control_token_skipped() {
        let params = CharactersConfig::empty()
            .with_characters("a")
            .with_pad(Some(""));
        assert_eq!(strs(&assemble(&params)), vec!["a"]);
    }

    #[test]
    fn test_sort_is_by_code_point() {
        let params = CharactersConfig::empty().with_characters("éaZ");
        assert_eq!(strs(&assemble(&params)), vec!["Z", "a", "é"]);
    }

    #[test]
    fn test_duplicates_sorted() {
        let symbols: Vec<String> = ["b", "a", "b", "c", "a", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(duplicates(&symbols), vec!["a", "b"]);
        assert!(duplicates(&symbols[2..4]).is_empty());
    }
}
