//! Source text codec.
//!
//! Program files carry no declared encoding. A byte-order mark selects one
//! of the Unicode encodings; without a mark every byte is one 8-bit
//! character (Latin-1). The detected encoding is remembered so a save
//! writes the file back the way it came in.

use std::fmt;
use std::fs;
use std::path::Path;

use toroid_foundation::{Error, ErrorContext, Result};

/// A source file encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per character, no byte-order mark.
    #[default]
    Latin1,
    /// UTF-8 with a byte-order mark.
    Utf8,
    /// UTF-16, little endian.
    Utf16Le,
    /// UTF-16, big endian.
    Utf16Be,
    /// UTF-32, little endian.
    Utf32Le,
    /// UTF-32, big endian.
    Utf32Be,
    /// UTF-7.
    Utf7,
}

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];
const BOM_UTF32_LE: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const BOM_UTF32_BE: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];

impl Encoding {
    /// Detects the encoding from a leading byte-order mark.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(BOM_UTF32_LE) {
            Self::Utf32Le
        } else if bytes.starts_with(BOM_UTF32_BE) {
            Self::Utf32Be
        } else if bytes.starts_with(BOM_UTF8) {
            Self::Utf8
        } else if bytes.starts_with(BOM_UTF16_LE) {
            Self::Utf16Le
        } else if bytes.starts_with(BOM_UTF16_BE) {
            Self::Utf16Be
        } else if bytes.len() >= 4
            && bytes.starts_with(b"+/v")
            && matches!(bytes[3], b'8' | b'9' | b'+' | b'/')
        {
            Self::Utf7
        } else {
            Self::Latin1
        }
    }

    /// Decodes bytes, detecting the encoding first.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the bytes are malformed for the
    /// detected encoding.
    pub fn decode_detected(bytes: &[u8]) -> Result<(String, Self)> {
        let encoding = Self::detect(bytes);
        let text = encoding.decode(bytes)?;
        Ok((text, encoding))
    }

    /// Decodes bytes in this encoding, dropping any byte-order mark.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the bytes are malformed.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Utf8 => {
                let body = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
                String::from_utf8(body.to_vec()).map_err(|e| Error::encoding(e.to_string()))
            }
            Self::Utf16Le | Self::Utf16Be => {
                let units = utf16_units(bytes, self == Self::Utf16Le)?;
                let text = String::from_utf16(&units).map_err(|e| Error::encoding(e.to_string()))?;
                Ok(strip_bom(text))
            }
            Self::Utf32Le | Self::Utf32Be => {
                if bytes.len() % 4 != 0 {
                    return Err(Error::encoding("utf-32 input length is not a multiple of 4"));
                }
                let mut text = String::with_capacity(bytes.len() / 4);
                for chunk in bytes.chunks_exact(4) {
                    let raw = [chunk[0], chunk[1], chunk[2], chunk[3]];
                    let code = if self == Self::Utf32Le {
                        u32::from_le_bytes(raw)
                    } else {
                        u32::from_be_bytes(raw)
                    };
                    let c = char::from_u32(code)
                        .ok_or_else(|| Error::encoding(format!("invalid code point {code:#x}")))?;
                    text.push(c);
                }
                Ok(strip_bom(text))
            }
            Self::Utf7 => utf7::decode(bytes).map(strip_bom),
        }
    }

    /// Encodes text in this encoding, re-emitting the byte-order mark.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if a character cannot be represented
    /// (only possible for Latin-1).
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c))
                        .map_err(|_| Error::encoding(format!("'{c}' does not fit in 8 bits")))
                })
                .collect(),
            Self::Utf8 => {
                let mut out = BOM_UTF8.to_vec();
                out.extend_from_slice(text.as_bytes());
                Ok(out)
            }
            Self::Utf16Le | Self::Utf16Be => {
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                for unit in std::iter::once(0xFEFF_u16).chain(text.encode_utf16()) {
                    if self == Self::Utf16Le {
                        out.extend_from_slice(&unit.to_le_bytes());
                    } else {
                        out.extend_from_slice(&unit.to_be_bytes());
                    }
                }
                Ok(out)
            }
            Self::Utf32Le | Self::Utf32Be => {
                let mut out = Vec::with_capacity(4 + text.len() * 4);
                for c in std::iter::once('\u{FEFF}').chain(text.chars()) {
                    let code = u32::from(c);
                    if self == Self::Utf32Le {
                        out.extend_from_slice(&code.to_le_bytes());
                    } else {
                        out.extend_from_slice(&code.to_be_bytes());
                    }
                }
                Ok(out)
            }
            Self::Utf7 => {
                let mut with_bom = String::with_capacity(text.len() + 3);
                with_bom.push('\u{FEFF}');
                with_bom.push_str(text);
                Ok(utf7::encode(&with_bom))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latin1 => "latin-1",
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Utf32Le => "utf-32le",
            Self::Utf32Be => "utf-32be",
            Self::Utf7 => "utf-7",
        };
        f.write_str(name)
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

fn utf16_units(bytes: &[u8], little_endian: bool) -> Result<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(Error::encoding("utf-16 input has an odd number of bytes"));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect())
}

/// Reads and decodes a text file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an encoding error if
/// its contents are malformed.
pub fn read_text_file(path: &Path) -> Result<(String, Encoding)> {
    let bytes = fs::read(path).map_err(|e| {
        Error::io(e.to_string()).with_context(ErrorContext::new().with_source(path.display().to_string()))
    })?;
    Encoding::decode_detected(&bytes)
        .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
}

/// Encodes and writes a text file, replacing any existing contents.
///
/// # Errors
///
/// Returns an encoding error if the text cannot be represented, or an I/O
/// error if the file cannot be written.
pub fn write_text_file(path: &Path, text: &str, encoding: Encoding) -> Result<()> {
    let bytes = encoding.encode(text)?;
    fs::write(path, bytes).map_err(|e| {
        Error::io(e.to_string()).with_context(ErrorContext::new().with_source(path.display().to_string()))
    })
}

mod utf7 {
    //! Minimal UTF-7 (RFC 2152) codec.

    use toroid_foundation::{Error, Result};

    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    fn sextet(b: u8) -> Option<u32> {
        ALPHABET.iter().position(|&a| a == b).map(|i| i as u32)
    }

    fn is_direct(c: char) -> bool {
        c.is_ascii() && c != '+' && c != '\\' && c != '~' && (c >= ' ' || matches!(c, '\t' | '\n' | '\r'))
    }

    pub(super) fn decode(bytes: &[u8]) -> Result<String> {
        let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b != b'+' {
                if !b.is_ascii() {
                    return Err(Error::encoding("utf-7 input contains a non-ascii byte"));
                }
                units.push(u16::from(b));
                i += 1;
                continue;
            }
            i += 1;
            if bytes.get(i) == Some(&b'-') {
                units.push(u16::from(b'+'));
                i += 1;
                continue;
            }
            let mut bits: u32 = 0;
            let mut nbits = 0;
            while let Some(value) = bytes.get(i).copied().and_then(sextet) {
                bits = (bits << 6) | value;
                nbits += 6;
                if nbits >= 16 {
                    nbits -= 16;
                    #[allow(clippy::cast_possible_truncation)]
                    units.push((bits >> nbits) as u16);
                    bits &= (1 << nbits) - 1;
                }
                i += 1;
            }
            if bytes.get(i) == Some(&b'-') {
                i += 1;
            }
        }
        String::from_utf16(&units).map_err(|e| Error::encoding(e.to_string()))
    }

    pub(super) fn encode(text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len());
        let mut pending: Vec<u16> = Vec::new();

        let flush = |pending: &mut Vec<u16>, out: &mut Vec<u8>| {
            if pending.is_empty() {
                return;
            }
            out.push(b'+');
            let mut bits: u32 = 0;
            let mut nbits = 0;
            for unit in pending.drain(..) {
                bits = (bits << 16) | u32::from(unit);
                nbits += 16;
                while nbits >= 6 {
                    nbits -= 6;
                    out.push(ALPHABET[((bits >> nbits) & 0x3F) as usize]);
                }
            }
            if nbits > 0 {
                out.push(ALPHABET[((bits << (6 - nbits)) & 0x3F) as usize]);
            }
            out.push(b'-');
        };

        for c in text.chars() {
            if c == '+' && pending.is_empty() {
                out.extend_from_slice(b"+-");
            } else if is_direct(c) {
                flush(&mut pending, &mut out);
                out.push(c as u8);
            } else {
                let mut buf = [0u16; 2];
                pending.extend_from_slice(c.encode_utf16(&mut buf));
            }
        }
        flush(&mut pending, &mut out);
        out
    }
}
