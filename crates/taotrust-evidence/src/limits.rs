//! Decode limits for untrusted evidence documents

use serde::Deserialize;

/// Default cap on elements in a single evidence list
pub const DEFAULT_MAX_LIST_ELEMENTS: usize = 16;

/// Default cap on lists in a single collection
pub const DEFAULT_MAX_COLLECTION_LISTS: usize = 16;

/// Caps applied while decoding untrusted evidence
///
/// Limits are enforced before per-element work begins, so an oversized
/// document is rejected without decoding any of its statements. The list
/// cap counts the terminal the verifier will append, which is why a list
/// may carry at most `max_list_elements - 1` wire statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeLimits {
    /// Most elements allowed in one evidence list, terminal included
    pub max_list_elements: usize,
    /// Most lists allowed in one collection
    pub max_collection_lists: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_list_elements: DEFAULT_MAX_LIST_ELEMENTS,
            max_collection_lists: DEFAULT_MAX_COLLECTION_LISTS,
        }
    }
}

impl DecodeLimits {
    /// Room left for wire statements once the terminal is accounted for
    pub(crate) fn wire_statement_limit(&self) -> usize {
        self.max_list_elements.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = DecodeLimits::default();
        assert_eq!(limits.max_list_elements, 16);
        assert_eq!(limits.max_collection_lists, 16);
        assert_eq!(limits.wire_statement_limit(), 15);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let limits: DecodeLimits = serde_json::from_str(r#"{"maxListElements": 4}"#).unwrap();
        assert_eq!(limits.max_list_elements, 4);
        assert_eq!(limits.max_collection_lists, 16);
    }
}
