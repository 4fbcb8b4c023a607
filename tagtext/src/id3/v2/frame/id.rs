use crate::error::{self, Id3v2Error, Id3v2ErrorKind};

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An `ID3v2` frame ID
///
/// This is the 4 character identifier from the frame envelope, e.g. `"TIT2"`.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct FrameId<'a>(pub(crate) Cow<'a, str>);

impl<'a> FrameId<'a> {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be `'A'..='Z'` or `'0'..='9'`)
	/// * `id` is not 4 characters
	///
	/// # Examples
	///
	/// ```rust
	/// use tagtext::id3::v2::FrameId;
	///
	/// # fn main() -> tagtext::error::Result<()> {
	/// let id = FrameId::new("TPE1")?;
	/// assert_eq!(id.as_str(), "TPE1");
	///
	/// assert!(FrameId::new("tpe1").is_err());
	/// assert!(FrameId::new("TPE").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new<I>(id: I) -> error::Result<Self>
	where
		I: Into<Cow<'a, str>>,
	{
		Self::new_cow(id.into())
	}

	// Split from generic, public method to avoid code bloat by monomorphization.
	fn new_cow(id: Cow<'a, str>) -> error::Result<Self> {
		Self::verify_id(&id)?;

		if id.len() != 4 {
			return Err(
				Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id.into_owned().into_bytes())).into(),
			);
		}

		Ok(Self(id))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Obtains an owned instance
	pub fn into_owned(self) -> FrameId<'static> {
		FrameId(Cow::Owned(self.0.into_owned()))
	}

	fn verify_id(id_str: &str) -> error::Result<()> {
		for c in id_str.chars() {
			if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(
					id_str.as_bytes().to_vec(),
				))
				.into());
			}
		}

		Ok(())
	}
}

impl Display for FrameId<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
