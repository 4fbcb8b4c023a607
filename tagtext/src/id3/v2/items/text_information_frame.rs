use crate::config::{ParsingMode, WriteOptions};
use crate::error::Result;
use crate::id3::v1::GENRES;
use crate::id3::v2::FrameId;
use crate::id3::v2::frame::content::{decode_fields, encode_fields, verify_encoding};
use crate::id3::v2::util::mappings::tag_name_for_id;
use crate::id3::v2::util::pairs::{involved_people_properties, musician_credits_properties};
use crate::tag::PropertyMap;
use crate::util::text::{TextEncoding, check_text_encoding};

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::Read;

use byteorder::ReadBytesExt;

/// An `ID3v2` text frame
///
/// This frame holds a list of values, though most frames will only ever
/// carry one. It covers every "T..." frame except `TXXX`, which is handled
/// by [`ExtendedTextFrame`](crate::id3::v2::ExtendedTextFrame).
#[derive(Clone, Debug, Eq)]
pub struct TextInformationFrame<'a> {
	pub(crate) id: FrameId<'a>,
	/// The encoding of the text
	pub encoding: TextEncoding,
	values: Vec<String>,
}

impl PartialEq for TextInformationFrame<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for TextInformationFrame<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl<'a> TextInformationFrame<'a> {
	/// Create a new, empty `TextInformationFrame`
	pub fn new(id: FrameId<'a>, encoding: TextEncoding) -> Self {
		Self {
			id,
			encoding,
			values: Vec::new(),
		}
	}

	/// Returns the ID of the frame
	pub fn id(&self) -> &FrameId<'a> {
		&self.id
	}

	/// Read a `TextInformationFrame` from a frame body
	///
	/// A body too short to carry an encoding byte and any content leaves the
	/// frame empty rather than erroring.
	///
	/// # Errors
	///
	/// With [`ParsingMode::Strict`]:
	///
	/// * The encoding byte is invalid
	/// * A field fails to decode in the stated encoding
	pub fn parse<R>(reader: &mut R, id: FrameId<'a>, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read,
	{
		let mut frame = Self::new(id, TextEncoding::Latin1);
		frame.parse_fields(reader, parse_mode)?;

		Ok(frame)
	}

	/// Replace the frame content from a frame body
	///
	/// This follows the behavior described in [`TextInformationFrame::parse`],
	/// except the existing values survive when the body is too short to parse.
	///
	/// # Errors
	///
	/// See [`TextInformationFrame::parse`]
	pub fn parse_fields<R>(&mut self, reader: &mut R, parse_mode: ParsingMode) -> Result<()>
	where
		R: Read,
	{
		let Ok(encoding_byte) = reader.read_u8() else {
			// Empty frame body
			return Ok(());
		};

		let mut payload = Vec::new();
		reader.read_to_end(&mut payload)?;

		if payload.is_empty() {
			// An encoding byte with nothing behind it
			return Ok(());
		}

		let Some(encoding) = verify_encoding(encoding_byte, parse_mode)? else {
			return Ok(());
		};

		self.encoding = encoding;
		self.values = decode_fields(encoding, &payload, parse_mode)?;

		Ok(())
	}

	/// Returns the fields of the frame
	pub fn values(&self) -> &[String] {
		&self.values
	}

	/// Replace the fields of the frame
	pub fn set_values(&mut self, values: Vec<String>) {
		self.values = values;
	}

	/// Replace the fields of the frame with a single value
	pub fn set_value(&mut self, value: String) {
		self.values = vec![value];
	}

	pub(crate) fn values_mut(&mut self) -> &mut Vec<String> {
		&mut self.values
	}

	/// Render the frame body, including the encoding byte
	///
	/// The stated encoding is upgraded when it cannot represent every field,
	/// and substituted when it does not exist in the requested revision. See
	/// [`WriteOptions::use_id3v23`].
	pub fn as_bytes(&self, write_options: WriteOptions) -> Vec<u8> {
		let mut encoding = check_text_encoding(self.encoding, &self.values);
		if write_options.use_id3v23 {
			encoding = encoding.to_id3v23();
		}

		encode_fields(encoding, &self.values)
	}

	/// Translate the frame into its property representation
	///
	/// `TIPL` and `TMCL` are expanded into one property per role. Any
	/// other frame maps to a single property under its canonical key, with a
	/// few value adjustments:
	///
	/// * `TCON` values holding an ID3v1 genre index are resolved to the genre
	///   name
	/// * `TDRC` timestamps have their date/time separator normalized to a space
	///
	/// A frame with no canonical key, or one whose role list cannot be
	/// translated, is recorded as unsupported instead.
	pub fn as_properties(&self) -> PropertyMap {
		match self.id.as_str() {
			"TIPL" => return involved_people_properties(&self.id, &self.values),
			"TMCL" => return musician_credits_properties(&self.id, &self.values),
			_ => {},
		}

		let mut properties = PropertyMap::new();

		let Some(tag_name) = tag_name_for_id(self.id.as_str()) else {
			properties.mark_unsupported(self.id.as_str());
			return properties;
		};

		for value in &self.values {
			let mut value = value.clone();
			match tag_name {
				"GENRE" => {
					if let Some(genre) = value.parse::<usize>().ok().and_then(|i| GENRES.get(i)) {
						value = (*genre).to_string();
					}
				},
				"DATE" => {
					// Timestamps use a 'T' date/time separator
					if let Some(t_pos) = value.find('T') {
						value.replace_range(t_pos..=t_pos, " ");
					}
				},
				_ => {},
			}

			properties.insert(tag_name.to_string(), vec![value]);
		}

		properties
	}

	/// Obtains an owned instance
	pub fn into_owned(self) -> TextInformationFrame<'static> {
		TextInformationFrame {
			id: self.id.into_owned(),
			encoding: self.encoding,
			values: self.values,
		}
	}
}

impl Display for TextInformationFrame<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.values.join(" "))
	}
}
