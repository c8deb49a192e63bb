//! Flight code extraction from OCR text
//!
//! Scans raw recognized text for airline-prefix + flight-number substrings.
//! The airline prefix allow-list comes from configuration so new carriers
//! can be added without a code change.

use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

/// Extractor construction errors
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("airline prefix allow-list is empty")]
    EmptyAllowList,

    #[error("invalid airline prefix pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Regex-based flight code extractor
///
/// Matches a configured 2-character airline prefix, optionally separated by
/// whitespace from 3-4 digits. Matching is case-insensitive; output codes
/// are uppercased with the separator removed.
pub struct FlightCodeExtractor {
    pattern: Regex,
}

impl FlightCodeExtractor {
    /// Build an extractor for the given airline prefix allow-list.
    pub fn new(prefixes: &[String]) -> Result<Self, ExtractorError> {
        if prefixes.is_empty() {
            return Err(ExtractorError::EmptyAllowList);
        }

        let alternation = prefixes
            .iter()
            .map(|prefix| regex::escape(prefix))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)({alternation})\s?([0-9]{{3,4}})"))?;

        Ok(Self { pattern })
    }

    /// Extract normalized flight codes from `text`.
    ///
    /// Codes are deduplicated by exact normalized equality and returned in
    /// order of first appearance. No matches is a valid empty result.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut codes = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let code = format!("{}{}", caps[1].to_uppercase(), &caps[2]);
            if seen.insert(code.clone()) {
                codes.push(code);
            }
        }

        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extractor() -> FlightCodeExtractor {
        let prefixes: Vec<String> = ["AF", "U2", "FR", "KL", "DL"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        FlightCodeExtractor::new(&prefixes).unwrap()
    }

    #[test]
    fn extracts_codes_with_and_without_separator() {
        let codes = default_extractor().extract("AF1234 landed, U2 567 delayed");
        assert_eq!(codes, vec!["AF1234".to_string(), "U2567".to_string()]);
    }

    #[test]
    fn matching_is_case_insensitive_and_output_uppercased() {
        let codes = default_extractor().extract("boarding af1234 gate 12");
        assert_eq!(codes, vec!["AF1234".to_string()]);
    }

    #[test]
    fn duplicates_collapse_to_one_code() {
        let codes = default_extractor().extract("KL 808 ... KL808 ... kl808");
        assert_eq!(codes, vec!["KL808".to_string()]);
    }

    #[test]
    fn three_and_four_digit_numbers_both_match() {
        let codes = default_extractor().extract("FR123 and DL4567");
        assert_eq!(codes, vec!["FR123".to_string(), "DL4567".to_string()]);
    }

    #[test]
    fn prefixes_outside_allow_list_are_ignored() {
        let codes = default_extractor().extract("XX123 BA456");
        assert!(codes.is_empty());
    }

    #[test]
    fn no_matches_is_an_empty_result() {
        assert!(default_extractor().extract("").is_empty());
        assert!(default_extractor().extract("GATE B42 SEAT 17A").is_empty());
    }

    #[test]
    fn every_extracted_code_matches_the_normalized_shape() {
        let shape = Regex::new(r"^(AF|U2|FR|KL|DL)[0-9]{3,4}$").unwrap();
        let text = "af 999 U2567 FR1234 junk DL88 KL12345";
        for code in default_extractor().extract(text) {
            assert!(shape.is_match(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        assert!(matches!(
            FlightCodeExtractor::new(&[]),
            Err(ExtractorError::EmptyAllowList)
        ));
    }
}
