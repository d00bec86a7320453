//! # Character Classification
//!
//! Decides, per character, whether the printer's resident font can print it
//! or whether it has to be drawn from a font file and uploaded as gaiji.
//!
//! ## Decision Order
//!
//! The JIS tiers overlap, so the first match wins:
//!
//! | # | Test | Result |
//! |---|------|--------|
//! | 1 | ASCII, JIS X 0201 or JIS X 0208 | built-in (Shift_JIS bytes) |
//! | 2 | JIS X 0212 or JIS X 0213:2004 | gaiji, kanji font |
//! | 3 | emoji | gaiji, emoji font |
//! | 4 | anything else | gaiji, fallback font |
//!
//! Built-in bytes come from the Shift_JIS encoder, then from the codes in
//! the mapping tables. A resident character with neither is drawn as gaiji
//! rather than dropped.

use log::warn;

use super::{CharsetOracle, EmojiOracle, JisSet, sjis};
use crate::printer::config::{FontProfile, SessionConfig};

/// Which font a gaiji is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontTier {
    Kanji,
    Emoji,
    Fallback,
}

/// How one character reaches paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Printable from the resident code page; carries the encoded bytes.
    Builtin(Vec<u8>),
    /// Must be rasterized with `profile` and registered as a custom glyph.
    Custom {
        tier: FontTier,
        profile: &'a FontProfile,
    },
}

/// The three gaiji font profiles of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontProfiles {
    pub kanji: FontProfile,
    pub emoji: FontProfile,
    pub fallback: FontProfile,
}

impl FontProfiles {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            kanji: config.kanji.clone(),
            emoji: config.emoji.clone(),
            fallback: config.fallback.clone(),
        }
    }

    pub fn get(&self, tier: FontTier) -> &FontProfile {
        match tier {
            FontTier::Kanji => &self.kanji,
            FontTier::Emoji => &self.emoji,
            FontTier::Fallback => &self.fallback,
        }
    }
}

/// Per-character classifier over pluggable charset and emoji oracles.
pub struct Classifier {
    charsets: Box<dyn CharsetOracle>,
    emoji: Box<dyn EmojiOracle>,
    fonts: FontProfiles,
}

impl Classifier {
    pub fn new(
        charsets: impl CharsetOracle + 'static,
        emoji: impl EmojiOracle + 'static,
        fonts: FontProfiles,
    ) -> Self {
        Self {
            charsets: Box::new(charsets),
            emoji: Box::new(emoji),
            fonts,
        }
    }

    pub fn fonts(&self) -> &FontProfiles {
        &self.fonts
    }

    /// Tier a character falls into, or `None` if the printer has it built in.
    pub fn tier(&self, ch: char) -> Option<FontTier> {
        match self.classify(ch) {
            Classification::Builtin(_) => None,
            Classification::Custom { tier, .. } => Some(tier),
        }
    }

    pub fn classify(&self, ch: char) -> Classification<'_> {
        if self.is_resident(ch) {
            let mut bytes = sjis::encode_char(ch);
            if bytes.is_empty() {
                bytes = self.charsets.shift_jis(ch).unwrap_or_default();
            }
            if !bytes.is_empty() {
                return Classification::Builtin(bytes);
            }
            warn!(
                "{} (U+{:04X}) has no Shift_JIS code, printing as gaiji",
                ch, ch as u32
            );
        }

        let tier = self.custom_tier(ch);
        Classification::Custom {
            tier,
            profile: self.fonts.get(tier),
        }
    }

    fn is_resident(&self, ch: char) -> bool {
        ch.is_ascii()
            || self.charsets.contains(JisSet::X0201, ch)
            || self.charsets.contains(JisSet::X0208, ch)
    }

    fn custom_tier(&self, ch: char) -> FontTier {
        if self.charsets.contains(JisSet::X0212, ch) || self.charsets.contains(JisSet::X0213, ch) {
            FontTier::Kanji
        } else if self.emoji.is_emoji(ch) {
            FontTier::Emoji
        } else {
            FontTier::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::jis::parse_mapping;
    use crate::charset::{JisTables, UnicodeEmoji};

    fn classifier() -> Classifier {
        let mut tables = JisTables::new();
        tables.extend(JisSet::X0201, ['｡', 'ｱ', '¥']);
        tables.extend(JisSet::X0208, ['あ', 'ア', '亜', '★']);
        tables.extend(JisSet::X0212, ['丂', '侄']);
        tables.extend(JisSet::X0213, ['俱', '剝', '亜', '①']);
        Classifier::new(
            tables,
            UnicodeEmoji,
            FontProfiles::from_config(&SessionConfig::default()),
        )
    }

    #[test]
    fn test_ascii_is_builtin() {
        let c = classifier();
        for b in 0u8..0x80 {
            let ch = b as char;
            assert_eq!(c.classify(ch), Classification::Builtin(vec![b]));
        }
    }

    #[test]
    fn test_resident_sets_are_builtin() {
        let c = classifier();
        assert_eq!(c.classify('ｱ'), Classification::Builtin(vec![0xB1]));
        assert_eq!(c.classify('亜'), Classification::Builtin(vec![0x88, 0x9F]));
        // In JIS X 0208 and in the emoji ranges: resident wins
        assert_eq!(c.tier('★'), None);
    }

    #[test]
    fn test_supplementary_sets_use_kanji_font() {
        let c = classifier();
        for ch in ['丂', '侄', '俱', '剝', '①'] {
            match c.classify(ch) {
                Classification::Custom { tier, profile } => {
                    assert_eq!(tier, FontTier::Kanji);
                    assert_eq!(profile, &c.fonts().kanji);
                }
                other => panic!("{} classified as {:?}", ch, other),
            }
        }
    }

    #[test]
    fn test_emoji_and_fallback() {
        let c = classifier();
        assert_eq!(c.tier('👍'), Some(FontTier::Emoji));
        assert_eq!(c.tier('🛰'), Some(FontTier::Emoji));
        assert_eq!(c.tier('য'), Some(FontTier::Fallback));
        assert_eq!(c.tier('모'), Some(FontTier::Fallback));
        assert_eq!(c.tier('对'), Some(FontTier::Fallback));
    }

    #[test]
    fn test_custom_profile_matches_tier() {
        let c = classifier();
        match c.classify('য') {
            Classification::Custom { profile, .. } => assert_eq!(profile, &c.fonts().fallback),
            other => panic!("unexpected {:?}", other),
        }
        match c.classify('😁') {
            Classification::Custom { profile, .. } => assert_eq!(profile, &c.fonts().emoji),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_table_codes_cover_encoder_gaps() {
        let jis0208 = "\
0x8160\t0x2141\t0x301C\t# WAVE DASH
0x8191\t0x2171\t0x00A2\t# CENT SIGN
0x8161\t0x2142\t0x2016\t# DOUBLE VERTICAL LINE
";
        let mut tables = JisTables::new();
        tables.add(JisSet::X0208, parse_mapping(jis0208.as_bytes(), 2).unwrap());
        let c = Classifier::new(
            tables,
            UnicodeEmoji,
            FontProfiles::from_config(&SessionConfig::default()),
        );

        assert_eq!(c.classify('〜'), Classification::Builtin(vec![0x81, 0x60]));
        assert_eq!(c.classify('¢'), Classification::Builtin(vec![0x81, 0x91]));
        assert_eq!(c.classify('‖'), Classification::Builtin(vec![0x81, 0x61]));
    }

    #[test]
    fn test_unencodable_resident_falls_back_to_gaiji() {
        let mut tables = JisTables::new();
        tables.insert(JisSet::X0208, '〜');
        let c = Classifier::new(
            tables,
            UnicodeEmoji,
            FontProfiles::from_config(&SessionConfig::default()),
        );

        assert_eq!(c.tier('〜'), Some(FontTier::Fallback));
    }
}
