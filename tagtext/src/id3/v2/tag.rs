use crate::id3::v2::frame::{Frame, FrameId};
use crate::id3::v2::items::ExtendedTextFrame;
use crate::tag::PropertyMap;

/// An `ID3v2` tag
///
/// This is a flat collection of frames. Frames are considered duplicates
/// according to their [`PartialEq`] implementations, meaning text frames are
/// unique by ID and user-defined frames are unique by description.
///
/// ## Conversions
///
/// A tag can be translated wholesale into a [`PropertyMap`] with
/// [`Id3v2Tag::properties`].
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Id3v2Tag {
	pub(crate) frames: Vec<Frame<'static>>,
}

impl Id3v2Tag {
	/// Create a new empty `Id3v2Tag`
	pub fn new() -> Self {
		Self::default()
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag contains any frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// An iterator over the frames in the tag
	pub fn iter(&self) -> std::slice::Iter<'_, Frame<'static>> {
		self.frames.iter()
	}

	/// Gets a [`Frame`] by its ID
	///
	/// For `"TXXX"`, this returns the first user-defined frame regardless of
	/// description; see [`Id3v2Tag::get_user_text`] for lookup by description.
	pub fn get(&self, id: &FrameId<'_>) -> Option<&Frame<'static>> {
		self.frames.iter().find(|f| f.id() == id)
	}

	/// Inserts a [`Frame`], replacing any existing duplicate
	///
	/// The replaced frame is returned, if one existed.
	pub fn insert(&mut self, frame: Frame<'static>) -> Option<Frame<'static>> {
		let replaced = self
			.frames
			.iter()
			.position(|f| f == &frame)
			.map(|pos| self.frames.remove(pos));

		self.frames.push(frame);
		replaced
	}

	/// Removes all frames with the given ID
	pub fn remove(&mut self, id: &FrameId<'_>) {
		self.frames.retain(|f| f.id() != id);
	}

	/// Gets the user-defined frame with the given description
	pub fn get_user_text_frame(&self, description: &str) -> Option<&ExtendedTextFrame<'static>> {
		self.frames.iter().find_map(|frame| match frame {
			Frame::UserText(user_text) if user_text.description() == description => Some(user_text),
			_ => None,
		})
	}

	/// Gets the content of the user-defined frame with the given description
	///
	/// # Examples
	///
	/// ```rust
	/// use tagtext::TextEncoding;
	/// use tagtext::id3::v2::{ExtendedTextFrame, Id3v2Tag};
	///
	/// let mut tag = Id3v2Tag::new();
	/// tag.insert(
	/// 	ExtendedTextFrame::new(
	/// 		TextEncoding::UTF8,
	/// 		String::from("MOOD"),
	/// 		String::from("Calm"),
	/// 	)
	/// 	.into(),
	/// );
	///
	/// assert_eq!(tag.get_user_text("MOOD"), Some("Calm"));
	/// assert_eq!(tag.get_user_text("TEMPO"), None);
	/// ```
	pub fn get_user_text(&self, description: &str) -> Option<&str> {
		self.get_user_text_frame(description)
			.map(ExtendedTextFrame::content)
	}

	/// Translate every frame in the tag into a single [`PropertyMap`]
	///
	/// Value lists of frames mapping to the same key are concatenated, and the
	/// unsupported records of every untranslatable frame are collected.
	pub fn properties(&self) -> PropertyMap {
		let mut properties = PropertyMap::new();
		for frame in &self.frames {
			properties.merge(frame.as_properties());
		}

		properties
	}
}

impl IntoIterator for Id3v2Tag {
	type Item = Frame<'static>;
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a Id3v2Tag {
	type Item = &'a Frame<'static>;
	type IntoIter = std::slice::Iter<'a, Frame<'static>>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}
