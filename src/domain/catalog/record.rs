//! Document records and browse categories.

use serde::Serialize;

/// A legal document template the assistant can pitch.
///
/// # Invariants
///
/// - `key` is lowercase and unique within a store
/// - every field is populated; `use_cases` and `key_clauses` are non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Canonical lowercase lookup key (e.g. `"nda"`).
    pub key: &'static str,
    /// Display name (e.g. `"Non-Disclosure Agreement"`).
    pub full_name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub key_clauses: &'static [&'static str],
    /// Why our version beats a free template.
    #[serde(rename = "why_legalgram")]
    pub sales_pitch: &'static str,
}

impl DocumentRecord {
    /// URL slug of the document's creation wizard.
    pub fn slug(&self) -> String {
        self.full_name.to_lowercase().replace(' ', "-")
    }

    /// Path of the creation wizard, used by the "Create" action button.
    pub fn create_path(&self) -> String {
        format!("/documents/{}", self.slug())
    }

    /// Lowercased display name with hyphens flattened to spaces.
    pub(crate) fn normalized_name(&self) -> String {
        normalize(self.full_name)
    }
}

/// A browse category for the document library listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentCategory {
    pub name: &'static str,
    pub documents: &'static [&'static str],
}

/// Lowercases and turns hyphens into spaces.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocumentRecord {
        DocumentRecord {
            key: "nda",
            full_name: "Non-Disclosure Agreement",
            category: "Business Security",
            description: "Protects secrets.",
            use_cases: &["Partners"],
            key_clauses: &["Definitions"],
            sales_pitch: "Attorney-reviewed.",
        }
    }

    #[test]
    fn slug_lowercases_and_hyphenates_spaces() {
        assert_eq!(sample().slug(), "non-disclosure-agreement");
        assert_eq!(sample().create_path(), "/documents/non-disclosure-agreement");
    }

    #[test]
    fn normalized_name_flattens_hyphens() {
        assert_eq!(sample().normalized_name(), "non disclosure agreement");
    }

    #[test]
    fn sales_pitch_serializes_under_legacy_field_name() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["why_legalgram"], "Attorney-reviewed.");
        assert!(json.get("sales_pitch").is_none());
    }
}
