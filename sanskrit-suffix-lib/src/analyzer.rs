// Longest-suffix analyser.
//
// A word is matched against every registered suffix; the longest suffix that
// ends the word wins, and the word is split into stem + suffix around it.
// Equal-length matches resolve to the entry inserted first.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::registry::SuffixRegistry;
use crate::types::*;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// True if `candidate` is a non-empty trailing substring of `word`.
pub fn is_suffix_of(word: &str, candidate: &str) -> bool {
    !word.is_empty()
        && !candidate.is_empty()
        && candidate.len() <= word.len()
        && word.as_bytes().ends_with(candidate.as_bytes())
}

/// Find the registered suffix with the greatest length that ends `word`.
pub fn find_best_match<'r>(registry: &'r SuffixRegistry, word: &str) -> Option<&'r SuffixEntry> {
    let mut best: Option<&SuffixEntry> = None;
    let mut best_len = 0;

    for entry in registry.entries() {
        if !is_suffix_of(word, &entry.suffix) {
            continue;
        }
        trace!(word, suffix = %entry.suffix, "candidate suffix");
        // Strictly greater: earlier entries keep ties.
        if entry.suffix.len() > best_len {
            best_len = entry.suffix.len();
            best = Some(entry);
        }
    }

    best
}

/// All registered suffixes that end `word`, longest first. Entries of equal
/// length keep their insertion order, so the head is always the best match.
pub fn candidates<'r>(registry: &'r SuffixRegistry, word: &str) -> Vec<&'r SuffixEntry> {
    let mut out: Vec<&SuffixEntry> = registry
        .entries()
        .filter(|e| is_suffix_of(word, &e.suffix))
        .collect();
    // sort_by is stable.
    out.sort_by(|a, b| b.suffix.len().cmp(&a.suffix.len()));
    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split `word` into stem + suffix using the longest matching suffix.
///
/// An empty word is rejected without consulting the registry. A word with no
/// matching suffix yields [`AnalysisOutcome::NoMatch`].
pub fn analyze(registry: &SuffixRegistry, word: &str) -> Result<AnalysisOutcome> {
    if word.is_empty() {
        return Err(Error::EmptyInput);
    }

    let entry = match find_best_match(registry, word) {
        Some(e) => e,
        None => {
            debug!(word, "no known suffix");
            return Ok(AnalysisOutcome::NoMatch {
                word: word.to_string(),
            });
        }
    };

    let analysis = split(word, entry);
    debug!(
        word,
        stem = %analysis.stem,
        suffix = %analysis.suffix,
        "resolved suffix"
    );
    Ok(AnalysisOutcome::Match(analysis))
}

/// Like [`analyze`], but also report every suffix that matched.
pub fn analyze_detailed(registry: &SuffixRegistry, word: &str) -> Result<DetailedAnalysis> {
    let outcome = analyze(registry, word)?;
    let candidates = candidates(registry, word).into_iter().cloned().collect();
    Ok(DetailedAnalysis {
        outcome,
        candidates,
    })
}

fn split(word: &str, entry: &SuffixEntry) -> Analysis {
    // The match contract keeps the suffix no longer than the word, but a
    // non-positive stem length still maps to the sentinel.
    let stem = match word.len().checked_sub(entry.suffix.len()) {
        Some(n) if n > 0 => word[..n].to_string(),
        _ => NO_STEM.to_string(),
    };
    Analysis {
        word: word.to_string(),
        stem,
        suffix: entry.suffix.clone(),
        category: entry.category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SuffixRegistry {
        SuffixRegistry::seeded()
    }

    #[test]
    fn test_is_suffix_of() {
        assert!(is_suffix_of("Ramah", "ah"));
        assert!(is_suffix_of("ah", "ah"));
        assert!(!is_suffix_of("ah", "yah"));
        assert!(!is_suffix_of("", "ah"));
        assert!(!is_suffix_of("Ramah", ""));
        assert!(!is_suffix_of("RamAH", "ah"), "matching is case-sensitive");
    }

    #[test]
    fn test_ramah() {
        let out = analyze(&seeded(), "Ramah").unwrap();
        let a = out.as_match().expect("Ramah should match -ah");
        assert_eq!(a.stem, "Ram");
        assert_eq!(a.suffix, "ah");
        assert!(a.category.contains("Nominative singular masculine"));
    }

    #[test]
    fn test_longest_wins() {
        // {vanesu} ends in both -esu and -su.
        let out = analyze(&seeded(), "vanesu").unwrap();
        let a = out.as_match().unwrap();
        assert_eq!(a.suffix, "esu");
        assert_eq!(a.stem, "van");

        // {devasya} ends in -asya only; {ramena} in -ena (and not -e).
        let devasya = analyze(&seeded(), "devasya").unwrap();
        assert_eq!(devasya.as_match().unwrap().suffix, "asya");
        let ramena = analyze(&seeded(), "ramena").unwrap();
        assert_eq!(ramena.as_match().unwrap().stem, "ram");
    }

    #[test]
    fn test_yah_beats_ah() {
        let a = analyze(&seeded(), "karyah").unwrap();
        assert_eq!(a.as_match().unwrap().suffix, "yah");
        assert_eq!(a.as_match().unwrap().stem, "kar");
    }

    #[test]
    fn test_tie_first_inserted_wins() {
        let mut reg = SuffixRegistry::new();
        reg.insert("ta", "first");
        reg.insert("ka", "unrelated");
        reg.insert("ta", "second");
        let best = find_best_match(&reg, "gata").unwrap();
        assert_eq!(best.category, "first");
    }

    #[test]
    fn test_no_match() {
        let out = analyze(&seeded(), "xyz").unwrap();
        assert_eq!(
            out,
            AnalysisOutcome::NoMatch {
                word: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_empty_word() {
        assert!(matches!(analyze(&seeded(), ""), Err(Error::EmptyInput)));
        assert!(matches!(analyze(&SuffixRegistry::new(), ""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_whole_word_is_suffix() {
        let mut reg = seeded();
        reg.insert("ena", "bare");
        let out = analyze(&reg, "ena").unwrap();
        let a = out.as_match().unwrap();
        assert_eq!(a.stem, NO_STEM);
        assert!(!a.has_stem());
        // The seed -ena precedes the bare one.
        assert_eq!(a.category, "Instrumental singular (e.g. 'ramena')");
    }

    #[test]
    fn test_candidates_order() {
        let reg = seeded();
        let c: Vec<&str> = candidates(&reg, "vanesu")
            .iter()
            .map(|e| e.suffix.as_str())
            .collect();
        assert_eq!(c, vec!["esu", "su"]);
        assert!(candidates(&reg, "xyz").is_empty());
    }

    #[test]
    fn test_detailed() {
        let d = analyze_detailed(&seeded(), "ramena").unwrap();
        assert_eq!(d.outcome.as_match().unwrap().suffix, "ena");
        assert_eq!(d.candidates.len(), 1);
    }
}
