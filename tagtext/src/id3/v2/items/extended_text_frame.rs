use crate::config::{ParsingMode, WriteOptions};
use crate::error::Result;
use crate::id3::v2::FrameId;
use crate::id3::v2::items::TextInformationFrame;
use crate::tag::PropertyMap;
use crate::util::text::TextEncoding;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::Read;

const FRAME_ID: FrameId<'static> = FrameId(Cow::Borrowed("TXXX"));

/// An `ID3v2` user-defined text frame (`TXXX`)
///
/// The first field of the underlying text frame is the description, the
/// remainder are the values. Both a description field and at least one value
/// field always exist, even if empty.
#[derive(Clone, Debug, Eq)]
pub struct ExtendedTextFrame<'a> {
	frame: TextInformationFrame<'a>,
}

impl PartialEq for ExtendedTextFrame<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.description() == other.description()
	}
}

impl Hash for ExtendedTextFrame<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.description().hash(state);
	}
}

impl<'a> ExtendedTextFrame<'a> {
	/// Create a new `ExtendedTextFrame`
	pub fn new(encoding: TextEncoding, description: String, content: String) -> Self {
		let mut frame = TextInformationFrame::new(FRAME_ID, encoding);
		frame.set_values(vec![description, content]);

		Self { frame }
	}

	/// Returns the ID of the frame, always `"TXXX"`
	pub fn id(&self) -> &FrameId<'a> {
		self.frame.id()
	}

	/// Read an `ExtendedTextFrame` from a frame body
	///
	/// Missing description or value fields are filled in with empty strings.
	///
	/// # Errors
	///
	/// See [`TextInformationFrame::parse`]
	pub fn parse<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read,
	{
		let frame = TextInformationFrame::parse(reader, FRAME_ID, parse_mode)?;

		let mut frame = Self { frame };
		frame.check_fields();
		Ok(frame)
	}

	// A parsed body may be missing the description, the value, or both.
	fn check_fields(&mut self) {
		let values = self.frame.values_mut();
		while values.len() < 2 {
			values.push(String::new());
		}
	}

	/// Returns the description of the frame
	pub fn description(&self) -> &str {
		self.frame.values().first().map_or("", String::as_str)
	}

	/// Replace the description of the frame
	pub fn set_description(&mut self, description: String) {
		let values = self.frame.values_mut();
		if values.is_empty() {
			values.push(description);
		} else {
			values[0] = description;
		}
	}

	/// Returns the first value of the frame
	pub fn content(&self) -> &str {
		self.frame.values().get(1).map_or("", String::as_str)
	}

	/// Returns all values of the frame
	pub fn values(&self) -> &[String] {
		let values = self.frame.values();
		if values.len() < 2 {
			return &[];
		}

		&values[1..]
	}

	/// Replace the values of the frame, keeping the description
	pub fn set_values(&mut self, values: Vec<String>) {
		let description = self.description().to_string();

		let mut fields = Vec::with_capacity(values.len() + 1);
		fields.push(description);
		fields.extend(values);

		self.frame.set_values(fields);
		self.check_fields();
	}

	/// Replace the values of the frame with a single value, keeping the description
	pub fn set_content(&mut self, content: String) {
		self.set_values(vec![content]);
	}

	/// Returns the encoding of the frame
	pub fn encoding(&self) -> TextEncoding {
		self.frame.encoding
	}

	/// Replace the encoding of the frame
	pub fn set_encoding(&mut self, encoding: TextEncoding) {
		self.frame.encoding = encoding;
	}

	/// Render the frame body, including the encoding byte
	///
	/// See [`TextInformationFrame::as_bytes`]
	pub fn as_bytes(&self, write_options: WriteOptions) -> Vec<u8> {
		self.frame.as_bytes(write_options)
	}

	/// Translate the frame into its property representation
	///
	/// The description becomes the key, after stripping anything up to and
	/// including the first `"::"` namespace separator. Values equal to the
	/// description are skipped.
	///
	/// A description that does not normalize to a valid key records the frame
	/// as unsupported under `"TXXX/<description>"`.
	pub fn as_properties(&self) -> PropertyMap {
		let mut properties = PropertyMap::new();

		let description = self.description();

		let mut proposed = description;
		if let Some(pos) = proposed.find("::") {
			proposed = &proposed[pos + 2..];
		}

		let Some(key) = PropertyMap::prepare_key(proposed) else {
			properties.mark_unsupported(format!("TXXX/{description}"));
			return properties;
		};

		for value in self.values() {
			if value == description {
				continue;
			}

			properties.insert(key.clone(), vec![value.clone()]);
		}

		properties
	}

	/// Obtains an owned instance
	pub fn into_owned(self) -> ExtendedTextFrame<'static> {
		ExtendedTextFrame {
			frame: self.frame.into_owned(),
		}
	}
}

impl Display for ExtendedTextFrame<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.description(), self.values().join(" "))
	}
}
