//! Tests for translating frames into the generic property model

use tagtext::TextEncoding;
use tagtext::id3::v2::{ExtendedTextFrame, FrameId, Id3v2Tag, TextInformationFrame};

fn text_frame(id: &str, values: &[&str]) -> TextInformationFrame<'static> {
	let mut frame =
		TextInformationFrame::new(FrameId::new(id.to_string()).unwrap(), TextEncoding::UTF8);
	frame.set_values(values.iter().map(|v| (*v).to_string()).collect());
	frame
}

fn user_text_frame(description: &str, content: &str) -> ExtendedTextFrame<'static> {
	ExtendedTextFrame::new(
		TextEncoding::UTF8,
		description.to_string(),
		content.to_string(),
	)
}

#[test_log::test]
fn generic_translation() {
	let properties = text_frame("TIT2", &["Title"]).as_properties();
	assert_eq!(properties.get("TITLE"), Some(&[String::from("Title")][..]));
	assert!(properties.unsupported().is_empty());

	// Multiple values all land under the same key
	let properties = text_frame("TPE1", &["Foo", "Bar"]).as_properties();
	assert_eq!(
		properties.get("ARTIST"),
		Some(&[String::from("Foo"), String::from("Bar")][..])
	);
}

#[test_log::test]
fn unknown_frame_id_is_unsupported() {
	let properties = text_frame("TZZZ", &["Foo"]).as_properties();

	assert!(properties.is_empty());
	assert_eq!(properties.unsupported(), &[String::from("TZZZ")]);
}

#[test_log::test]
fn genre_numbers_are_resolved() {
	let properties = text_frame("TCON", &["13"]).as_properties();
	assert_eq!(properties.get("GENRE"), Some(&[String::from("Pop")][..]));

	// Names pass through unchanged
	let properties = text_frame("TCON", &["Disco"]).as_properties();
	assert_eq!(properties.get("GENRE"), Some(&[String::from("Disco")][..]));

	// As do out-of-range numbers
	let properties = text_frame("TCON", &["300"]).as_properties();
	assert_eq!(properties.get("GENRE"), Some(&[String::from("300")][..]));
}

#[test_log::test]
fn date_separator_is_normalized() {
	let properties = text_frame("TDRC", &["2008-01-01T12:00"]).as_properties();
	assert_eq!(
		properties.get("DATE"),
		Some(&[String::from("2008-01-01 12:00")][..])
	);

	// Only the first 'T' is a separator
	let properties = text_frame("TDRC", &["2008-01-01T12:00:00T"]).as_properties();
	assert_eq!(
		properties.get("DATE"),
		Some(&[String::from("2008-01-01 12:00:00T")][..])
	);
}

#[test_log::test]
fn paired_list_dispatch() {
	let properties = text_frame("TIPL", &["PRODUCER", "Carol"]).as_properties();
	assert_eq!(
		properties.get("PRODUCER"),
		Some(&[String::from("Carol")][..])
	);

	let properties = text_frame("TMCL", &["Violin", "Alice"]).as_properties();
	assert_eq!(properties.get("VIOLIN"), Some(&[String::from("Alice")][..]));

	// The all-or-nothing rule applies through the frame entry point too
	let properties = text_frame("TIPL", &["ARRANGER", "Alice", "BADROLE", "Bob"]).as_properties();
	assert!(properties.is_empty());
	assert_eq!(properties.unsupported(), &[String::from("TIPL")]);
}

#[test_log::test]
fn user_text_translation() {
	let properties = user_text_frame("MOOD", "hello").as_properties();
	assert_eq!(properties.get("MOOD"), Some(&[String::from("hello")][..]));

	// Keys are normalized to uppercase
	let properties = user_text_frame("mood", "hello").as_properties();
	assert_eq!(properties.get("MOOD"), Some(&[String::from("hello")][..]));
}

#[test_log::test]
fn user_text_namespace_prefix_is_stripped() {
	let properties = user_text_frame("QuodLibet::mood", "hello").as_properties();
	assert_eq!(properties.get("MOOD"), Some(&[String::from("hello")][..]));
}

#[test_log::test]
fn user_text_invalid_description_is_unsupported() {
	let properties = user_text_frame("A=B", "hello").as_properties();

	assert!(properties.is_empty());
	assert_eq!(properties.unsupported(), &[String::from("TXXX/A=B")]);

	// An empty description cannot be a key either
	let properties = user_text_frame("", "hello").as_properties();
	assert_eq!(properties.unsupported(), &[String::from("TXXX/")]);
}

#[test_log::test]
fn user_text_values_matching_description_are_skipped() {
	let mut frame = user_text_frame("MOOD", "Calm");
	frame.set_values(vec![String::from("MOOD"), String::from("Calm")]);

	let properties = frame.as_properties();
	assert_eq!(properties.get("MOOD"), Some(&[String::from("Calm")][..]));
}

#[test_log::test]
fn tag_insert_replaces_duplicates() {
	let mut tag = Id3v2Tag::new();

	assert!(tag.insert(text_frame("TIT2", &["First"]).into()).is_none());
	assert_eq!(tag.len(), 1);

	// Same ID, so the earlier frame is replaced
	let replaced = tag.insert(text_frame("TIT2", &["Second"]).into());
	assert!(replaced.is_some());
	assert_eq!(tag.len(), 1);

	let id = FrameId::new("TIT2").unwrap();
	let frame = tag.get(&id).unwrap();
	assert_eq!(frame.as_properties().get("TITLE"), Some(&[String::from("Second")][..]));

	// User-defined frames are unique by description, not ID
	tag.insert(user_text_frame("MOOD", "Calm").into());
	tag.insert(user_text_frame("TEMPO", "120").into());
	assert_eq!(tag.len(), 3);

	tag.insert(user_text_frame("MOOD", "Angry").into());
	assert_eq!(tag.len(), 3);
	assert_eq!(tag.get_user_text("MOOD"), Some("Angry"));
}

#[test_log::test]
fn tag_user_text_lookup() {
	let mut tag = Id3v2Tag::new();
	tag.insert(text_frame("TIT2", &["Title"]).into());
	tag.insert(user_text_frame("MOOD", "Calm").into());

	assert_eq!(tag.get_user_text("MOOD"), Some("Calm"));
	assert!(tag.get_user_text_frame("TEMPO").is_none());
}

#[test_log::test]
fn tag_properties_merges_all_frames() {
	let mut tag = Id3v2Tag::new();
	tag.insert(text_frame("TIT2", &["Title"]).into());
	tag.insert(text_frame("TPE1", &["Artist"]).into());
	tag.insert(text_frame("TZZZ", &["???"]).into());
	tag.insert(user_text_frame("MOOD", "Calm").into());

	let properties = tag.properties();
	assert_eq!(properties.get("TITLE"), Some(&[String::from("Title")][..]));
	assert_eq!(properties.get("ARTIST"), Some(&[String::from("Artist")][..]));
	assert_eq!(properties.get("MOOD"), Some(&[String::from("Calm")][..]));
	assert_eq!(properties.unsupported(), &[String::from("TZZZ")]);
}
