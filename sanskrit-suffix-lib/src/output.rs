// Output formatting for analysis results and suffix listings.

use serde::Serialize;

use crate::error::Result;
use crate::registry::SuffixRegistry;
use crate::types::*;

/// Render an outcome as the human-readable report block.
///
/// Format (match):
///   `Word           : Ramah`
///   `Identified stem: Ram`
///   `Identified suffix: ah`
///   `Category       : Nominative singular masculine (e.g. 'Ramah')`
pub fn to_report(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Match(a) => format!(
            "Word           : {}\nIdentified stem: {}\nIdentified suffix: {}\nCategory       : {}\n",
            a.word, a.stem, a.suffix, a.category
        ),
        AnalysisOutcome::NoMatch { word } => {
            format!("Word: {word}\nNo known suffix found in the list.\n")
        }
    }
}

/// Render the registry as a numbered table, one entry per line.
pub fn to_listing(registry: &SuffixRegistry) -> String {
    if registry.is_empty() {
        return "No suffixes in the list.\n".to_string();
    }

    let mut out = String::from("Current Suffix List:\n--------------------\n");
    for (i, e) in registry.entries().enumerate() {
        out.push_str(&format!("{:2}. {:<10} -> {}\n", i + 1, e.suffix, e.category));
    }
    out
}

/// Serialize any result to JSON, optionally pretty-printed.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_match() {
        let outcome = AnalysisOutcome::Match(Analysis {
            word: "vanesu".to_string(),
            stem: "van".to_string(),
            suffix: "esu".to_string(),
            category: "Locative plural (e.g. 'vanesu')".to_string(),
        });
        assert_eq!(
            to_report(&outcome),
            "Word           : vanesu\n\
             Identified stem: van\n\
             Identified suffix: esu\n\
             Category       : Locative plural (e.g. 'vanesu')\n"
        );
    }

    #[test]
    fn test_report_no_match() {
        let outcome = AnalysisOutcome::NoMatch {
            word: "xyz".to_string(),
        };
        assert_eq!(
            to_report(&outcome),
            "Word: xyz\nNo known suffix found in the list.\n"
        );
    }

    #[test]
    fn test_listing() {
        let mut reg = SuffixRegistry::new();
        assert_eq!(to_listing(&reg), "No suffixes in the list.\n");

        reg.insert("ah", "Nominative");
        reg.insert("bhih", "Instrumental plural");
        assert_eq!(
            to_listing(&reg),
            "Current Suffix List:\n\
             --------------------\n \
             1. ah         -> Nominative\n \
             2. bhih       -> Instrumental plural\n"
        );
    }

    #[test]
    fn test_listing_two_digit_index() {
        let reg = SuffixRegistry::seeded();
        let listing = to_listing(&reg);
        assert!(listing.contains("\n12. yah        -> Future passive"));
        assert!(listing.contains("\n 1. ah         -> Nominative"));
    }

    #[test]
    fn test_json_tagging() {
        let outcome = AnalysisOutcome::NoMatch {
            word: "xyz".to_string(),
        };
        assert_eq!(
            to_json(&outcome, false).unwrap(),
            r#"{"outcome":"no_match","word":"xyz"}"#
        );
    }
}
