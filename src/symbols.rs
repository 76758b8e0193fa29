//! Default symbol inventories used to seed vocabularies.
//!
//! Two families are provided:
//!
//! - graphemes — ASCII letters, the Vietnamese extended letters (`Đ`, `Ă`, `Ơ`, …)
//!   and their precomposed tone-marked forms
//! - phonemes — the IPA inventory, grouped the way the IPA chart groups it
//!
//! Groups are concatenated as-is, without deduplication. Consumers that merge
//! inventories (e.g. graphemes and phonemes, which share ASCII letters) must
//! deduplicate themselves.

use once_cell::sync::Lazy;

/// Padding token. Ignored by the model.
pub const PAD: &str = "<PAD>";
/// End-of-sequence token.
pub const EOS: &str = "<EOS>";
/// Beginning-of-sequence token.
pub const BOS: &str = "<BOS>";
/// Blank token, interspersed between symbols by some models.
pub const BLANK: &str = "<BLNK>";

// --- Graphemes ---

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const EXTENDED_LETTERS: &str = "ĐĂÂÊÔƠƯđăâêôơư";
pub const ACCENTED_LETTERS: &str = "ÁẠÃẢÀẮẰẲẴẶẤẦẨẪẬÉÈẺẼẸẾỀỂỄỆÓÒỎÕỌỐỒỔỖỘỚỜỞỠỢÚÙỦŨỤỨỪỬỮỰáạãảàắằẳẵặấầẩẫậéèẻẽẹếềểễệóòỏõọốồổỗộớờởỡợúùủũụứừửữự";

/// Punctuation. Order is significant: it becomes the tail of the vocabulary.
pub const PUNCTUATIONS: &str = "!'(),-.:;? ";

// --- IPA phonemes ---

pub const VOWELS: &str = "iyɨʉɯuɪʏʊeøɘəɵɤoɛœɜɞʌɔæɐaɶɑɒᵻ";
pub const NON_PULMONIC_CONSONANTS: &str = "ʘɓǀɗǃʄǂɠǁʛ";
pub const PULMONIC_CONSONANTS: &str = "pbtdʈɖcɟkɡqɢʔɴŋɲɳnɱmʙrʀⱱɾɽɸβfvθðszʃʒʂʐçʝxɣχʁħʕhɦɬɮʋɹɻjɰlɭʎʟ";
pub const SUPRASEGMENTALS: &str = "ˈˌːˑ";
pub const OTHER_SYMBOLS: &str = "ʍwɥʜʢʡɕʑɺɧʲ";
pub const DIACRITICS: &str = "ɚ˞ɫ";

/// A complete inventory: control tokens plus the character groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    pub pad: &'static str,
    pub eos: &'static str,
    pub bos: &'static str,
    pub blank: &'static str,
    /// Base, extended and accented letters, in that order. Not deduplicated.
    pub characters: String,
    pub punctuations: &'static str,
    /// All IPA sub-groups, in chart order. Not deduplicated.
    pub phonemes: String,
}

static DEFAULT_SYMBOLS: Lazy<SymbolSet> = Lazy::new(|| SymbolSet {
    pad: PAD,
    eos: EOS,
    bos: BOS,
    blank: BLANK,
    characters: [LETTERS, EXTENDED_LETTERS, ACCENTED_LETTERS].concat(),
    punctuations: PUNCTUATIONS,
    phonemes: [
        VOWELS,
        NON_PULMONIC_CONSONANTS,
        PULMONIC_CONSONANTS,
        SUPRASEGMENTALS,
        OTHER_SYMBOLS,
        DIACRITICS,
    ]
    .concat(),
});

/// The process-wide default inventory.
pub fn symbol_set() -> &'static SymbolSet {
    &DEFAULT_SYMBOLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_characters_concatenation() {
        let set = symbol_set();
        assert!(set.characters.starts_with(LETTERS));
        assert!(set.characters.ends_with(ACCENTED_LETTERS));
        assert_eq!(
            set.characters.chars().count(),
            LETTERS.chars().count()
                + EXTENDED_LETTERS.chars().count()
                + ACCENTED_LETTERS.chars().count()
        );
        // 52 ASCII + 14 extended + 100 accented
        assert_eq!(set.characters.chars().count(), 166);
    }

    #[test]
    fn test_grapheme_groups_are_disjoint() {
        let letters: HashSet<char> = LETTERS.chars().collect();
        assert!(EXTENDED_LETTERS.chars().all(|c| !letters.contains(&c)));
        assert!(ACCENTED_LETTERS.chars().all(|c| !letters.contains(&c)));
        let unique: HashSet<char> = symbol_set().characters.chars().collect();
        assert_eq!(unique.len(), symbol_set().characters.chars().count());
    }

    #[test]
    fn test_phonemes_concatenation() {
        let set = symbol_set();
        assert!(set.phonemes.starts_with(VOWELS));
        assert!(set.phonemes.ends_with(DIACRITICS));
        assert_eq!(set.phonemes.chars().count(), 116);
        let unique: HashSet<char> = set.phonemes.chars().collect();
        assert!(unique.contains(&'ə'));
        assert!(unique.contains(&'ˈ'));
    }

    #[test]
    fn test_punctuation_ends_with_space() {
        assert_eq!(symbol_set().punctuations.chars().last(), Some(' '));
        assert_eq!(symbol_set().blank, "<BLNK>");
    }
}
