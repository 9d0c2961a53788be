//! Emoji catalogue
//!
//! Reaction buttons refer to emojis by a human-readable descriptor; the
//! simulation only ever carries the resolved glyph.

use crate::error::SimError;

/// A reaction the UI can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emoji {
    pub descriptor: &'static str,
    pub value: &'static str,
}

/// All reactions, in button order
pub const EMOJIS: &[Emoji] = &[
    Emoji { descriptor: "Grinning face", value: "\u{1F603}" },
    Emoji { descriptor: "Beaming face with smiling eyes", value: "\u{1F601}" },
    Emoji { descriptor: "Rolling on the floor laughing", value: "\u{1F923}" },
    Emoji { descriptor: "Winking face with tongue", value: "\u{1F61C}" },
    Emoji { descriptor: "Face screaming in fear", value: "\u{1F631}" },
    Emoji { descriptor: "Unamused face", value: "\u{1F612}" },
    Emoji { descriptor: "Loudly Crying Face", value: "\u{1F62D}" },
    Emoji { descriptor: "Red heart", value: "\u{2764}\u{FE0F}" },
];

/// Older descriptors still sent by existing buttons, mapped to the current one
pub const ALIASES: &[(&str, &str)] = &[("Red heard", "Red heart")];

/// Resolve a descriptor (or alias) to its glyph
pub fn lookup(descriptor: &str) -> Result<&'static str, SimError> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == descriptor)
        .map_or(descriptor, |(_, current)| *current);
    EMOJIS
        .iter()
        .find(|e| e.descriptor == canonical)
        .map(|e| e.value)
        .ok_or_else(|| SimError::UnknownContent(descriptor.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        assert_eq!(lookup("Grinning face"), Ok("😃"));
        assert_eq!(lookup("Red heart"), Ok("❤️"));
    }

    #[test]
    fn test_lookup_legacy_descriptor() {
        assert_eq!(lookup("Red heard"), lookup("Red heart"));
        for (_, current) in ALIASES {
            assert!(lookup(current).is_ok(), "alias target {current} missing");
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            lookup("grinning face"),
            Err(SimError::UnknownContent("grinning face".into()))
        );
    }

    #[test]
    fn test_descriptors_unique() {
        for (i, a) in EMOJIS.iter().enumerate() {
            assert!(EMOJIS[i + 1..].iter().all(|b| b.descriptor != a.descriptor));
        }
    }
}
