//! UTF-8 and UTF-16 encoders for single scalar values

const SURROGATE_OFFSET: u32 = 0x10000;
const HIGH_SURROGATE_BASE: u32 = 0xD800;
const LOW_SURROGATE_BASE: u32 = 0xDC00;

/// UTF-8 bytes of `ch`, 1 to 4 of them.
pub fn utf8_bytes(ch: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf).as_bytes().to_vec()
}

/// UTF-16 code units of `ch`: one unit below U+10000, a surrogate pair above.
pub fn utf16_units(ch: char) -> Vec<u16> {
    let value = u32::from(ch);
    if value < SURROGATE_OFFSET {
        return vec![value as u16];
    }
    let offset = value - SURROGATE_OFFSET;
    let high = HIGH_SURROGATE_BASE + (offset >> 10);
    let low = LOW_SURROGATE_BASE + (offset & 0x3FF);
    vec![high as u16, low as u16]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_lengths() {
        assert_eq!(utf8_bytes('A'), vec![0x41]);
        assert_eq!(utf8_bytes('é'), vec![0xC3, 0xA9]);
        assert_eq!(utf8_bytes('一'), vec![0xE4, 0xB8, 0x80]);
        assert_eq!(utf8_bytes('🥰'), vec![0xF0, 0x9F, 0xA5, 0xB0]);
    }

    #[test]
    fn utf16_pairs() {
        assert_eq!(utf16_units('A'), vec![0x0041]);
        assert_eq!(utf16_units('\u{FFFF}'), vec![0xFFFF]);
        assert_eq!(utf16_units('\u{10000}'), vec![0xD800, 0xDC00]);
        assert_eq!(utf16_units('\u{1F970}'), vec![0xD83E, 0xDD70]);
        assert_eq!(utf16_units('\u{10FFFF}'), vec![0xDBFF, 0xDFFF]);
    }

    #[test]
    fn utf16_agrees_with_std_across_planes() {
        let mut buf = [0u16; 2];
        for value in (0..=0x10FFFF).step_by(0x101) {
            if let Some(ch) = char::from_u32(value) {
                assert_eq!(utf16_units(ch), ch.encode_utf16(&mut buf).to_vec());
            }
        }
    }
}
