//! # Entity Repair
//!
//! lsdvd writes some display-format labels without escaping the ampersand,
//! which makes the report malformed XML. The rules here patch those known
//! spots on the raw bytes before the document is parsed.

use std::borrow::Cow;

use regex::bytes::{NoExpand, Regex};

use crate::error::Result;

/// Literal substitutions, applied in this order.
const RULES: &[(&str, &str)] = &[
    ("Pan&Scan", "Pan&amp;Scan"),
    ("&Letterbox", "&amp;Letterbox"),
];

struct RepairRule {
    pattern: Regex,
    replacement: &'static [u8],
}

/// Blind textual repair of unescaped ampersands in lsdvd output.
///
/// Every literal occurrence of a known defect is replaced, whether or not
/// the surrounding text already happens to form a valid escape.
pub struct EntityRepair {
    rules: Vec<RepairRule>,
}

impl EntityRepair {
    /// Compiles the repair rules.
    ///
    /// # Errors
    ///
    /// Returns `DvdError::RegexError` if a rule fails to compile
    /// (should never happen with the static literals defined here).
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|&(literal, replacement)| -> Result<RepairRule> {
                Ok(RepairRule {
                    pattern: Regex::new(&regex::escape(literal))?,
                    replacement: replacement.as_bytes(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Applies every rule to `data`.
    ///
    /// Borrows the input unchanged when no rule matches.
    #[must_use]
    pub fn apply<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        let mut out = Cow::Borrowed(data);
        for rule in &self.rules {
            let repaired = match rule.pattern.replace_all(&out, NoExpand(rule.replacement)) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(bytes) => bytes,
            };
            out = Cow::Owned(repaired);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(input: &str) -> String {
        let repair = EntityRepair::new().unwrap();
        String::from_utf8(repair.apply(input.as_bytes()).into_owned()).unwrap()
    }

    #[test]
    fn repairs_pan_and_scan() {
        assert_eq!(repair("<df>Pan&Scan</df>"), "<df>Pan&amp;Scan</df>");
    }

    #[test]
    fn repairs_letterbox() {
        assert_eq!(
            repair("<df>Pan&Scan&Letterbox</df>"),
            "<df>Pan&amp;Scan&amp;Letterbox</df>"
        );
    }

    #[test]
    fn repairs_every_occurrence() {
        assert_eq!(
            repair("Pan&Scan Pan&Scan &Letterbox"),
            "Pan&amp;Scan Pan&amp;Scan &amp;Letterbox"
        );
    }

    #[test]
    fn clean_input_is_borrowed() {
        let repair = EntityRepair::new().unwrap();
        let input = b"<df>Letterbox</df><df>Pan&amp;Scan</df>";
        assert!(matches!(repair.apply(input), Cow::Borrowed(_)));
    }

    #[test]
    fn repair_is_byte_oriented() {
        let repair = EntityRepair::new().unwrap();
        let input = b"\xff Pan&Scan \xfe";
        assert_eq!(repair.apply(input).as_ref(), b"\xff Pan&amp;Scan \xfe");
    }
}
