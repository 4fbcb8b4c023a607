//! Encoding and decoding of null-delimited text field lists

use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::util::text::{TextEncoding, decode_chunk};

use std::iter::repeat_n;

/// Verify an encoding byte read from a frame body
///
/// An unknown byte is only an error in [`ParsingMode::Strict`]. Otherwise the
/// caller is handed `None` and is expected to leave the frame untouched.
pub(crate) fn verify_encoding(
	encoding: u8,
	parse_mode: ParsingMode,
) -> Result<Option<TextEncoding>> {
	match TextEncoding::from_u8(encoding) {
		Some(encoding) => Ok(Some(encoding)),
		None => {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(TextDecode("Found invalid encoding")),
				DEFAULT: {
					log::warn!("Found invalid encoding {encoding}, discarding frame content");
					Ok(None)
				}
			)
		},
	}
}

/// Split a frame payload into its decoded fields
///
/// Trailing zero bytes are stripped first, with the remaining length rounded
/// back up to a delimiter boundary so a wide encoding never loses half of its
/// final code unit. Empty fields produced by consecutive delimiters are
/// dropped.
pub(crate) fn decode_fields(
	encoding: TextEncoding,
	payload: &[u8],
	parse_mode: ParsingMode,
) -> Result<Vec<String>> {
	let delimiter_len = encoding.delimiter_len();

	let mut trimmed_len = payload.len();
	while trimmed_len > 0 && payload[trimmed_len - 1] == 0 {
		trimmed_len -= 1;
	}

	if trimmed_len < payload.len() {
		// Round back up to a delimiter boundary, clamped to the payload
		trimmed_len = std::cmp::min(
			payload.len(),
			trimmed_len + (delimiter_len - (trimmed_len % delimiter_len)) % delimiter_len,
		);
	}

	let mut fields = Vec::new();
	for chunk in split_delimited(&payload[..trimmed_len], delimiter_len) {
		if chunk.is_empty() {
			continue;
		}

		match decode_chunk(encoding, chunk) {
			Ok(text) => {
				if !text.is_empty() {
					fields.push(text);
				}
			},
			Err(e) => {
				parse_mode_choice!(
					parse_mode,
					STRICT: return Err(e),
					DEFAULT: log::warn!("Failed to decode a text field, discarding it: {e}")
				);
			},
		}
	}

	Ok(fields)
}

/// Render a field list, prefixed with its encoding byte
pub(crate) fn encode_fields(encoding: TextEncoding, fields: &[String]) -> Vec<u8> {
	let mut content = vec![encoding as u8];

	let mut first = true;
	for field in fields {
		if !first {
			content.extend(repeat_n(0, encoding.delimiter_len()));
		}

		content.extend(encoding.encode(field));
		first = false;
	}

	content
}

// Splits on the delimiter while respecting its alignment, so a zero byte
// inside a UTF-16 code unit is never mistaken for a terminator.
fn split_delimited(data: &[u8], delimiter_len: usize) -> Vec<&[u8]> {
	let mut chunks = Vec::new();

	let mut start = 0;
	let mut pos = 0;
	while pos + delimiter_len <= data.len() {
		if data[pos..pos + delimiter_len].iter().all(|&b| b == 0) {
			chunks.push(&data[start..pos]);
			start = pos + delimiter_len;
		}

		pos += delimiter_len;
	}

	chunks.push(&data[start..]);
	chunks
}

#[cfg(test)]
mod tests {
	use super::split_delimited;

	#[test_log::test]
	fn split_respects_alignment() {
		// "A\0" in UTF-16LE followed by a wide delimiter and "B\0"
		let data = [b'A', 0x00, 0x00, 0x00, b'B', 0x00];
		let chunks = split_delimited(&data, 2);

		assert_eq!(chunks, vec![&[b'A', 0x00][..], &[b'B', 0x00][..]]);
	}

	#[test_log::test]
	fn split_single_byte() {
		let data = [b'a', 0x00, b'b', b'c'];
		let chunks = split_delimited(&data, 1);

		assert_eq!(chunks, vec![&[b'a'][..], &[b'b', b'c'][..]]);
	}
}
