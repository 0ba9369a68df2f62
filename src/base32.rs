use crate::error::Base32Error;

/// RFC 4648 base32 alphabet. Output is never padded.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const GROUP_MASK: u32 = 0x1F;

/// Number of characters `encode` produces for `byte_count` bytes, `ceil(8n / 5)`.
pub fn encoded_len(byte_count: usize) -> usize {
    // Split on the 5 byte period so the multiplication can't overflow.
    (byte_count / 5) * 8 + ((byte_count % 5) * 8).div_ceil(5)
}

/// Number of bytes a string of `char_count` characters decodes to.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidLength`] when a string one character shorter
/// would carry the same number of bytes. The encoder always picks the shortest
/// length, so such a length can only come from malformed input.
pub fn decoded_len(char_count: usize) -> Result<usize, Base32Error> {
    let byte_count = bytes_for_chars(char_count);

    if char_count > 0 && bytes_for_chars(char_count - 1) == byte_count {
        log::debug!("rejecting base32 length {char_count}, {byte_count} bytes need fewer characters");
        return Err(Base32Error::InvalidLength {
            length: char_count,
            byte_count,
        });
    }

    Ok(byte_count)
}

// floor(5L / 8), split on the 8 character period.
fn bytes_for_chars(char_count: usize) -> usize {
    (char_count / 8) * 5 + (char_count % 8) * 5 / 8
}

fn char_value(character: char) -> Option<u32> {
    match character {
        'A'..='Z' => Some(character as u32 - 'A' as u32),
        '2'..='7' => Some(character as u32 - '2' as u32 + 26),
        _ => None,
    }
}

// Base32 encoder
pub fn encode(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(bytes.len()));
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            let value = (buffer >> bits) & GROUP_MASK;
            result.push(ALPHABET[value as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    // Input ran out mid-group: leftover bits become the high bits of the last character.
    if bits > 0 {
        let value = (buffer << (5 - bits)) & GROUP_MASK;
        result.push(ALPHABET[value as usize] as char);
    }

    debug_assert_eq!(result.len(), encoded_len(bytes.len()));
    result
}

// Base32 decoder
pub fn decode(text: &str) -> Result<Vec<u8>, Base32Error> {
    let byte_count = decoded_len(text.chars().count())?;

    let mut result = Vec::with_capacity(byte_count);
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for (position, character) in text.chars().enumerate() {
        let Some(value) = char_value(character) else {
            log::debug!("rejecting base32 input, {character:?} at position {position}");
            return Err(Base32Error::InvalidCharacter {
                character,
                position,
            });
        };

        buffer = (buffer << 5) | value;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            if result.len() < byte_count {
                result.push((buffer >> bits) as u8);
            }
        }
        buffer &= (1 << bits) - 1;
    }

    // Whatever is left in the buffer is the zero fill of the final character.
    log::trace!("decoded {} base32 characters into {byte_count} bytes", text.len());
    Ok(result)
}

/// Like [`encode`], for callers whose input may be absent.
pub fn try_encode(bytes: Option<&[u8]>) -> Result<String, Base32Error> {
    let bytes = bytes.ok_or(Base32Error::MissingInput { argument: "bytes" })?;
    Ok(encode(bytes))
}

/// Like [`decode`], for callers whose input may be absent.
pub fn try_decode(text: Option<&str>) -> Result<Vec<u8>, Base32Error> {
    let text = text.ok_or(Base32Error::MissingInput { argument: "text" })?;
    decode(text)
}
