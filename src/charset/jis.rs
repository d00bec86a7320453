//! JIS character set tables.
//!
//! Loads the unicode.org mapping files (`JIS0201.TXT`, `JIS0208.TXT`,
//! `JIS0212.TXT`) and the JIS X 0213:2004 table in the same tab-separated
//! layout. The tables answer "is this character in set S". For the two
//! resident sets the first column is the device code, which is kept so
//! characters the Shift_JIS encoder has no mapping for (〜, ¢, ‖, ...) can
//! still be printed from the resident font.
//!
//! ```text
//! # JIS0208.TXT: SJIS <tab> JIS <tab> Unicode <tab> # comment
//! 0x889F	0x3021	0x4E9C	# <CJK>
//! ```

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use super::CharsetOracle;
use crate::error::GaijiError;

/// The four JIS repertoires, from the printer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JisSet {
    /// JIS X 0201: Roman and half-width katakana (resident)
    X0201,
    /// JIS X 0208: primary kanji and kana (resident)
    X0208,
    /// JIS X 0212: supplementary kanji (needs gaiji)
    X0212,
    /// JIS X 0213:2004: extended kanji (needs gaiji)
    X0213,
}

impl JisSet {
    pub const ALL: [JisSet; 4] = [JisSet::X0201, JisSet::X0208, JisSet::X0212, JisSet::X0213];

    /// Column holding the Unicode code point in this set's mapping file.
    pub fn unicode_column(self) -> usize {
        match self {
            JisSet::X0208 => 2,
            _ => 1,
        }
    }

    /// Whether the printer's resident font covers this set
    pub fn is_resident(self) -> bool {
        matches!(self, JisSet::X0201 | JisSet::X0208)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Characters of one mapping file.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    pub chars: HashSet<char>,
    /// First-column code per character, where that column is plain hex
    pub codes: HashMap<char, u32>,
}

/// Parse one mapping file, collecting the characters in `column`.
///
/// Comment lines and rows whose column is not a single code point (such
/// as base + combining pairs in the JIS X 0213 table) are skipped.
pub fn parse_mapping<R: BufRead>(reader: R, column: usize) -> Result<Mapping, GaijiError> {
    let mut mapping = Mapping::default();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.get(column).and_then(|f| parse_code_point(f)) {
            Some(ch) => {
                mapping.chars.insert(ch);
                if let Some(code) = fields.first().and_then(|f| parse_hex(f)) {
                    mapping.codes.insert(ch, code);
                }
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("skipped {} unparsable mapping rows", skipped);
    }
    Ok(mapping)
}

/// `0x4E9C` / `U+4E9C` / `4E9C` → 0x4E9C
fn parse_hex(field: &str) -> Option<u32> {
    let field = field.trim();
    let hex = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .or_else(|| field.strip_prefix("U+"))
        .unwrap_or(field);
    u32::from_str_radix(hex, 16).ok()
}

/// `0x4E9C` / `U+4E9C` → '亜'
fn parse_code_point(field: &str) -> Option<char> {
    parse_hex(field).and_then(char::from_u32)
}

/// In-memory JIS membership tables.
#[derive(Debug, Clone, Default)]
pub struct JisTables {
    sets: [HashSet<char>; 4],
    /// Device codes of resident characters
    codes: HashMap<char, u16>,
}

impl JisTables {
    /// Empty tables; everything non-ASCII will be treated as gaiji.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the four mapping files.
    ///
    /// A missing or unreadable file is a configuration error.
    pub fn load(
        x0201: &Path,
        x0208: &Path,
        x0212: &Path,
        x0213: &Path,
    ) -> Result<Self, GaijiError> {
        let mut tables = Self::new();
        for (set, path) in JisSet::ALL.into_iter().zip([x0201, x0208, x0212, x0213]) {
            let file = File::open(path).map_err(|e| {
                GaijiError::Configuration(format!(
                    "Failed to open {:?} table {}: {}",
                    set,
                    path.display(),
                    e
                ))
            })?;
            let mapping = parse_mapping(BufReader::new(file), set.unicode_column())?;
            info!(
                "loaded {} characters for {:?} from {}",
                mapping.chars.len(),
                set,
                path.display()
            );
            tables.add(set, mapping);
        }
        Ok(tables)
    }

    /// Merge a parsed mapping into `set`, keeping device codes for the
    /// resident sets.
    pub fn add(&mut self, set: JisSet, mapping: Mapping) {
        if set.is_resident() {
            for (ch, code) in mapping.codes {
                if let Ok(code) = u16::try_from(code) {
                    self.codes.entry(ch).or_insert(code);
                }
            }
        }
        self.sets[set.index()].extend(mapping.chars);
    }

    pub fn insert(&mut self, set: JisSet, ch: char) {
        self.sets[set.index()].insert(ch);
    }

    pub fn extend(&mut self, set: JisSet, chars: impl IntoIterator<Item = char>) {
        self.sets[set.index()].extend(chars);
    }

    pub fn len(&self, set: JisSet) -> usize {
        self.sets[set.index()].len()
    }
}

impl CharsetOracle for JisTables {
    fn contains(&self, set: JisSet, ch: char) -> bool {
        self.sets[set.index()].contains(&ch)
    }

    fn shift_jis(&self, ch: char) -> Option<Vec<u8>> {
        self.codes.get(&ch).map(|&code| match u8::try_from(code) {
            Ok(byte) => vec![byte],
            Err(_) => code.to_be_bytes().to_vec(),
        })
    }
}
