//! Encoding fallback module
//!
//! Decodes raw file bytes by trying an ordered chain of codecs. The default chain
//! ends with ISO-8859-1, which maps every byte to a code point, so it never fails.

use encoding_rs::Encoding;
use std::borrow::Cow;

use crate::error::DecodeError;

/// A named text codec that can appear in an [`EncodingChain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Strict UTF-8, no replacement characters
    Utf8,
    /// GBK (simplified Chinese, Windows code page 936).
    ///
    /// Restricted to one- and two-byte sequences. `encoding_rs` decodes GBK with
    /// its GB18030 decoder, so four-byte sequences are rejected here and left to
    /// [`Codec::Gb18030`]. Single byte 0x80 still decodes to U+20AC.
    Gbk,
    /// GB18030, including four-byte sequences (e.g. `95 32 82 36` is U+20000).
    ///
    /// Python-style `gbk`/`gb2312` codecs reject these, so text that only
    /// decodes here yields CJK characters a GBK-only chain would not report.
    Gb18030,
    /// ISO-8859-1: each byte becomes the code point of the same value
    Latin1,
}

impl Codec {
    /// Human-readable codec name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Gbk => "GBK",
            Self::Gb18030 => "GB18030",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Whether this codec accepts every possible byte sequence
    pub fn is_total(self) -> bool {
        matches!(self, Self::Latin1)
    }

    /// Decode `bytes` strictly. Returns `None` on the first malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Self::Gbk => {
                decode_strict(encoding_rs::GBK, bytes).filter(|_| !has_four_byte_sequence(bytes))
            }
            Self::Gb18030 => decode_strict(encoding_rs::GB18030, bytes),
            Self::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
        }
    }
}

fn decode_strict<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Scan well-formed GB18030 bytes for a four-byte sequence (lead byte, then an ASCII digit)
fn has_four_byte_sequence(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if (0x81..=0xFE).contains(&bytes[i]) {
            if bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
                return true;
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    false
}

/// Text produced by a successful decode, tagged with the codec that produced it
#[derive(Debug)]
pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    pub codec: Codec,
}

/// Ordered list of codecs tried in turn until one succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingChain {
    codecs: Vec<Codec>,
}

impl Default for EncodingChain {
    fn default() -> Self {
        Self {
            codecs: vec![Codec::Utf8, Codec::Gbk, Codec::Gb18030, Codec::Latin1],
        }
    }
}

impl EncodingChain {
    /// Create a chain from an explicit codec order
    pub fn new(codecs: Vec<Codec>) -> Self {
        Self { codecs }
    }

    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    /// True when the last codec in the chain cannot fail
    pub fn is_total(&self) -> bool {
        self.codecs.last().is_some_and(|codec| codec.is_total())
    }

    /// Decode `bytes` with the first codec that accepts them
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Decoded<'a>, DecodeError> {
        for &codec in &self.codecs {
            if let Some(text) = codec.decode(bytes) {
                return Ok(Decoded { text, codec });
            }
        }

        Err(DecodeError {
            tried: self.codecs.iter().map(|c| c.name()).collect(),
        })
    }
}
