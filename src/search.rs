//! Letter/template word search over an extracted word list.
//!
//! Finds words spellable from a multiset of candidate letters that also fit
//! a positional template, e.g. letters `ebsls` and template `b....` find
//! `bless`. Results are ranked by descending frequency.

use crate::error::{Result, WordmillError};
use crate::wordlist::{FreqTable, WordList};

/// One search request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Candidate letters; each may be used at most as often as it appears.
    pub letters: String,

    /// Positional template. The template length selects the word length;
    /// a lower-case letter fixes that position, anything else is a
    /// wildcard.
    pub template: String,
}

/// Find all words matching the request, most frequent first; ties are
/// broken ascending lexicographically.
pub fn find_words(
    list: &WordList,
    freqs: &FreqTable,
    request: &SearchRequest,
) -> Result<Vec<String>> {
    if request.letters.is_empty() || request.template.is_empty() {
        return Err(WordmillError::invalid_argument(
            "letters and template must be non-empty",
        ));
    }
    if !request.letters.is_ascii() {
        return Err(WordmillError::invalid_argument(
            "candidate letters must be ASCII",
        ));
    }
    if !request.template.is_ascii() {
        return Err(WordmillError::invalid_argument("template must be ASCII"));
    }

    let letters = request.letters.to_ascii_lowercase();
    let template = request.template.to_ascii_lowercase();

    let mut letter_tab = [0u32; 256];
    for b in letters.bytes() {
        letter_tab[b as usize] += 1;
    }

    let template = template.as_bytes();
    let mut found = Vec::new();

    for word in list.words_of_len(template.len()) {
        if word.len() != template.len() {
            continue;
        }

        let mut remaining = letter_tab;
        let mut fits = true;
        for (i, w) in word.bytes().enumerate() {
            if remaining[w as usize] == 0 {
                fits = false;
                break;
            }
            let t = template[i];
            if t.is_ascii_lowercase() && t != w {
                fits = false;
                break;
            }
            remaining[w as usize] -= 1;
        }

        if fits {
            found.push(word.clone());
        }
    }

    found.sort_unstable_by(|a, b| {
        let fa = freqs.get(a).copied().unwrap_or(0);
        let fb = freqs.get(b).copied().unwrap_or(0);
        fb.cmp(&fa).then_with(|| a.cmp(b))
    });

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(letters: &str, template: &str) -> SearchRequest {
        SearchRequest {
            letters: letters.to_string(),
            template: template.to_string(),
        }
    }

    fn list() -> WordList {
        WordList::from_words(["bless", "bells", "less", "sell", "lass", "cat"])
    }

    #[test]
    fn test_wildcard_template_matches_spellable_words() {
        let words = find_words(&list(), &FreqTable::new(), &request("ebsls", ".....")).unwrap();
        assert_eq!(words, vec!["bless"]);

        let words = find_words(&list(), &FreqTable::new(), &request("eblsls", ".....")).unwrap();
        assert_eq!(words, vec!["bells", "bless"]);
    }

    #[test]
    fn test_fixed_positions_constrain_matches() {
        let words = find_words(&list(), &FreqTable::new(), &request("ebsls", "b....")).unwrap();
        assert_eq!(words, vec!["bless"]);
    }

    #[test]
    fn test_letters_are_a_multiset() {
        // Every four-letter candidate needs a doubled letter 'lesa' lacks.
        let words = find_words(&list(), &FreqTable::new(), &request("lesa", "....")).unwrap();
        assert!(words.is_empty());

        let words = find_words(&list(), &FreqTable::new(), &request("lessa", "....")).unwrap();
        assert_eq!(words, vec!["lass", "less"]);
    }

    #[test]
    fn test_frequency_orders_results() {
        let mut freqs = FreqTable::new();
        freqs.insert("less".to_string(), 100);
        freqs.insert("lass".to_string(), 10);

        let words = find_words(&list(), &freqs, &request("lessa", "....")).unwrap();
        assert_eq!(words, vec!["less", "lass"]);
    }

    #[test]
    fn test_mixed_case_input_is_folded() {
        let words = find_words(&list(), &FreqTable::new(), &request("EBSLS", "B....")).unwrap();
        assert_eq!(words, vec!["bless"]);
    }

    #[test]
    fn test_template_longer_than_letters_finds_nothing() {
        let words = find_words(&list(), &FreqTable::new(), &request("cat", ".....")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_non_ascii_input_is_rejected() {
        assert!(find_words(&list(), &FreqTable::new(), &request("héllo", ".....")).is_err());
        assert!(find_words(&list(), &FreqTable::new(), &request("hello", "é....")).is_err());
        assert!(find_words(&list(), &FreqTable::new(), &request("", "....")).is_err());
    }
}
