pub(super) mod content;
mod id;

pub use id::FrameId;

use crate::config::WriteOptions;
use crate::id3::v2::items::{ExtendedTextFrame, TextInformationFrame};
use crate::tag::PropertyMap;

/// Represents an `ID3v2` frame
///
/// ## Outdated Frames
///
/// ### ID3v2.4
///
/// `TDRC`, `TDOR`, etc. are only valid in an ID3v2.4 tag. When rendering with
/// [`WriteOptions::use_id3v23`], the frame content is re-encoded where
/// necessary, but the IDs themselves are left alone.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Frame<'a> {
	/// Represents a "T..." (excluding TXXX) frame
	Text(TextInformationFrame<'a>),
	/// Represents a "TXXX" frame
	UserText(ExtendedTextFrame<'a>),
}

impl<'a> Frame<'a> {
	/// Returns the ID of the frame
	pub fn id(&self) -> &FrameId<'a> {
		match self {
			Frame::Text(frame) => frame.id(),
			Frame::UserText(frame) => frame.id(),
		}
	}

	/// Obtains an owned instance
	pub fn into_owned(self) -> Frame<'static> {
		match self {
			Frame::Text(frame) => Frame::Text(frame.into_owned()),
			Frame::UserText(frame) => Frame::UserText(frame.into_owned()),
		}
	}

	/// Translate the frame into its property representation
	///
	/// The returned map either carries the translated key/value pairs, or
	/// records the frame as unsupported. See [`TextInformationFrame::as_properties`]
	/// and [`ExtendedTextFrame::as_properties`].
	pub fn as_properties(&self) -> PropertyMap {
		match self {
			Frame::Text(frame) => frame.as_properties(),
			Frame::UserText(frame) => frame.as_properties(),
		}
	}

	/// Render the frame body, including the encoding byte
	pub fn as_bytes(&self, write_options: WriteOptions) -> Vec<u8> {
		match self {
			Frame::Text(frame) => frame.as_bytes(write_options),
			Frame::UserText(frame) => frame.as_bytes(write_options),
		}
	}
}

impl<'a> From<TextInformationFrame<'a>> for Frame<'a> {
	fn from(value: TextInformationFrame<'a>) -> Self {
		Self::Text(value)
	}
}

impl<'a> From<ExtendedTextFrame<'a>> for Frame<'a> {
	fn from(value: ExtendedTextFrame<'a>) -> Self {
		Self::UserText(value)
	}
}
