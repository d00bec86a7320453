//! Shift_JIS encoding for characters printed from the resident font.
//!
//! The session selects the Katakana code page and the Shift_JIS kanji
//! code system, so this is exactly the byte form the printer expects for
//! ASCII, half-width katakana and JIS X 0208.

use encoding_rs::{EncoderResult, SHIFT_JIS};

/// Encode one character as Shift_JIS.
///
/// Characters with no Shift_JIS form encode to nothing, so a stray
/// unmappable character is dropped rather than printed as `?`.
///
/// ## Example
///
/// ```
/// use gaiji::charset::sjis;
///
/// assert_eq!(sjis::encode_char('A'), vec![0x41]);
/// assert_eq!(sjis::encode_char('亜'), vec![0x88, 0x9F]);
/// assert_eq!(sjis::encode_char('ｱ'), vec![0xB1]);
/// assert!(sjis::encode_char('😁').is_empty());
/// ```
pub fn encode_char(ch: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let src = ch.encode_utf8(&mut buf);

    let mut encoder = SHIFT_JIS.new_encoder();
    let mut out = [0u8; 4];
    let (result, _read, written) = encoder.encode_from_utf8_without_replacement(src, &mut out, true);

    match result {
        EncoderResult::InputEmpty => out[..written].to_vec(),
        EncoderResult::Unmappable(_) | EncoderResult::OutputFull => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        for b in 0u8..0x80 {
            assert_eq!(encode_char(b as char), vec![b]);
        }
    }

    #[test]
    fn test_kana_and_kanji() {
        assert_eq!(encode_char('あ'), vec![0x82, 0xA0]);
        assert_eq!(encode_char('ア'), vec![0x83, 0x41]);
        assert_eq!(encode_char('亜'), vec![0x88, 0x9F]);
        assert_eq!(encode_char('　'), vec![0x81, 0x40]);
    }

    #[test]
    fn test_unmappable_is_empty() {
        assert!(encode_char('য').is_empty());
        // In JIS0208.TXT, but mapped to the fullwidth forms by the encoder
        assert!(encode_char('〜').is_empty());
        assert!(encode_char('¢').is_empty());
    }
}
