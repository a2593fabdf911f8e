//! The fixed catalog of prebuilt voices the remote model accepts.

use serde::Serialize;

/// Voice used whenever a caller supplies a name outside the catalog.
pub const DEFAULT_VOICE: &str = "Kore";

/// A prebuilt voice preset and its style description.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Voice {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every prebuilt voice the remote model accepts, with the vendor's style
/// description.
pub const VOICES: &[Voice] = &[
    Voice { name: "Zephyr", description: "Bright" },
    Voice { name: "Puck", description: "Upbeat" },
    Voice { name: "Charon", description: "Informative" },
    Voice { name: "Kore", description: "Firm" },
    Voice { name: "Fenrir", description: "Excitable" },
    Voice { name: "Leda", description: "Youthful" },
    Voice { name: "Orus", description: "Firm" },
    Voice { name: "Aoede", description: "Breezy" },
    Voice { name: "Callirrhoe", description: "Easy-going" },
    Voice { name: "Autonoe", description: "Bright" },
    Voice { name: "Enceladus", description: "Breathy" },
    Voice { name: "Iapetus", description: "Clear" },
    Voice { name: "Umbriel", description: "Easy-going" },
    Voice { name: "Algieba", description: "Smooth" },
    Voice { name: "Despina", description: "Smooth" },
    Voice { name: "Erinome", description: "Clear" },
    Voice { name: "Algenib", description: "Gravelly" },
    Voice { name: "Rasalgethi", description: "Informative" },
    Voice { name: "Laomedeia", description: "Upbeat" },
    Voice { name: "Achernar", description: "Soft" },
    Voice { name: "Alnilam", description: "Firm" },
    Voice { name: "Schedar", description: "Even" },
    Voice { name: "Gacrux", description: "Mature" },
    Voice { name: "Pulcherrima", description: "Forward" },
    Voice { name: "Achird", description: "Friendly" },
    Voice { name: "Zubenelgenubi", description: "Casual" },
    Voice { name: "Vindemiatrix", description: "Gentle" },
    Voice { name: "Sadachbia", description: "Lively" },
    Voice { name: "Sadaltager", description: "Knowledgeable" },
    Voice { name: "Sulafat", description: "Warm" },
];

/// Whether `name` is in the catalog.
pub fn is_valid(name: &str) -> bool {
    VOICES.iter().any(|v| v.name == name)
}

/// Check a requested voice against the catalog.
///
/// An unknown name is substituted with [`DEFAULT_VOICE`] and the
/// substitution logged; it is never an error.
pub fn validate(name: &str) -> &str {
    if is_valid(name) {
        name
    } else {
        tracing::warn!(
            requested = name,
            fallback = DEFAULT_VOICE,
            "unknown voice, substituting default"
        );
        DEFAULT_VOICE
    }
}

/// All catalog voice names, in catalog order.
pub fn names() -> Vec<&'static str> {
    VOICES.iter().map(|v| v.name).collect()
}

/// `Name - description` labels for selection UIs.
pub fn display_labels() -> Vec<String> {
    VOICES
        .iter()
        .map(|v| format!("{} - {}", v.name, v.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_default_voice() {
        assert!(is_valid(DEFAULT_VOICE));
        assert_eq!(VOICES.len(), 30);
    }

    #[test]
    fn valid_name_passes_through() {
        assert_eq!(validate("Puck"), "Puck");
    }

    #[test]
    fn unknown_name_substitutes_default() {
        assert_eq!(validate("NotAVoice"), DEFAULT_VOICE);
        assert_eq!(validate(""), DEFAULT_VOICE);
    }

    #[test]
    fn validation_is_case_sensitive() {
        assert_eq!(validate("kore"), DEFAULT_VOICE);
    }

    #[test]
    fn display_labels_carry_descriptions() {
        let labels = display_labels();
        assert_eq!(labels.len(), VOICES.len());
        assert!(labels.iter().any(|l| l == "Kore - Firm"));
    }
}
