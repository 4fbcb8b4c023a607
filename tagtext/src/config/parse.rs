/// The parsing strictness mode
///
/// This is passed to the frame parsers to control how malformed field data
/// is handled.
///
/// # Examples
///
/// ```rust
/// use tagtext::config::ParsingMode;
/// use tagtext::id3::v2::{FrameId, TextInformationFrame};
///
/// # fn main() -> tagtext::error::Result<()> {
/// // We only want to read spec-compliant inputs
/// let frame = TextInformationFrame::parse(
/// 	&mut &b"\x00Foo"[..],
/// 	FrameId::new("TIT2")?,
/// 	ParsingMode::Strict,
/// )?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any non-spec-compliant input.
	///
	/// ## Examples of behavior
	///
	/// * Invalid encoding byte - The parser will error and the frame body is discarded
	/// * Unable to decode a field - The parser will error and the frame body is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// This mode will attempt to fill in any holes where possible in otherwise valid,
	/// spec-compliant input.
	///
	/// ## Examples of behavior
	///
	/// * Invalid encoding byte - The frame body is skipped, the frame keeps its prior state
	/// * Unable to decode a field - The field is dropped and the parser moves on
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// This mode will discard any invalid fields, and ignore the majority of non-fatal errors.
	///
	/// ## Examples of behavior
	///
	/// * Invalid encoding byte - The frame body is skipped, the frame keeps its prior state
	/// * Unable to decode a field - The field is dropped and the parser moves on
	Relaxed,
}
