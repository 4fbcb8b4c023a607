/// Options to control how frames are rendered
///
/// This is best used as an application global config that gets set once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) use_id3v23: bool,
}

impl WriteOptions {
	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagtext::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self { use_id3v23: false }
	}

	/// Whether to render frames for ID3v2.3 consumers
	///
	/// ID3v2.4 introduced the UTF-8 and BOM-less UTF-16 BE text encodings, which
	/// older readers do not understand. When this is set, those encodings are
	/// substituted with UTF-16 at render time.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagtext::config::WriteOptions;
	///
	/// // The reader on the other end is stuck on ID3v2.3
	/// let options = WriteOptions::new().use_id3v23(true);
	/// ```
	pub fn use_id3v23(mut self, use_id3v23: bool) -> Self {
		self.use_id3v23 = use_id3v23;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	///     use_id3v23: false,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
