//! Tests for parsing and rendering text frame bodies

use tagtext::TextEncoding;
use tagtext::config::{ParsingMode, WriteOptions};
use tagtext::id3::v2::{ExtendedTextFrame, FrameId, TextInformationFrame};

fn parse_text_frame(body: &[u8], parse_mode: ParsingMode) -> TextInformationFrame<'static> {
	TextInformationFrame::parse(&mut &body[..], FrameId::new("TIT2").unwrap(), parse_mode).unwrap()
}

#[test_log::test]
fn round_trip_all_encodings() {
	for encoding in [
		TextEncoding::Latin1,
		TextEncoding::UTF16,
		TextEncoding::UTF16BE,
		TextEncoding::UTF8,
	] {
		let mut frame =
			TextInformationFrame::new(FrameId::new("TIT2").unwrap(), encoding);
		frame.set_values(vec![String::from("Foo"), String::from("Bar")]);

		let body = frame.as_bytes(WriteOptions::new());
		assert_eq!(body[0], encoding as u8);

		let parsed = parse_text_frame(&body, ParsingMode::Strict);
		assert_eq!(parsed.encoding, encoding);
		assert_eq!(parsed.values(), ["Foo", "Bar"]);
	}
}

#[test_log::test]
fn empty_body_keeps_existing_fields() {
	let mut frame =
		TextInformationFrame::new(FrameId::new("TIT2").unwrap(), TextEncoding::UTF8);
	frame.set_value(String::from("Keep me"));

	// No encoding byte at all
	frame
		.parse_fields(&mut &b""[..], ParsingMode::Strict)
		.unwrap();
	assert_eq!(frame.values(), ["Keep me"]);

	// An encoding byte with no content behind it
	frame
		.parse_fields(&mut &b"\x01"[..], ParsingMode::Strict)
		.unwrap();
	assert_eq!(frame.values(), ["Keep me"]);
	assert_eq!(frame.encoding, TextEncoding::UTF8);
}

#[test_log::test]
fn invalid_encoding_byte() {
	let body = b"\x04Foo";

	// Strict refuses the body outright
	let strict = TextInformationFrame::parse(
		&mut &body[..],
		FrameId::new("TIT2").unwrap(),
		ParsingMode::Strict,
	);
	assert!(strict.is_err());

	// Everything else skips the body, keeping the frame's prior state
	let mut frame =
		TextInformationFrame::new(FrameId::new("TIT2").unwrap(), TextEncoding::UTF8);
	frame.set_value(String::from("Keep me"));

	frame
		.parse_fields(&mut &body[..], ParsingMode::BestAttempt)
		.unwrap();
	assert_eq!(frame.values(), ["Keep me"]);
}

#[test_log::test]
fn trailing_padding_is_stripped() {
	let frame = parse_text_frame(b"\x00Foo\x00\x00\x00", ParsingMode::Strict);
	assert_eq!(frame.values(), ["Foo"]);

	// UTF-16 padding is stripped down to a code unit boundary, so the zero
	// half of the final code unit survives
	let frame = parse_text_frame(
		b"\x01\xFF\xFE\x46\x00\x6F\x00\x6F\x00\x00\x00\x00\x00",
		ParsingMode::Strict,
	);
	assert_eq!(frame.values(), ["Foo"]);
}

#[test_log::test]
fn consecutive_delimiters_collapse() {
	let frame = parse_text_frame(b"\x00\x00\x61", ParsingMode::Strict);
	assert_eq!(frame.values(), ["a"]);
}

#[test_log::test]
fn utf16be_delimiter() {
	let frame = parse_text_frame(b"\x02\x00F\x00o\x00o\x00\x00\x00B\x00a\x00r", ParsingMode::Strict);

	assert_eq!(frame.encoding, TextEncoding::UTF16BE);
	assert_eq!(frame.values(), ["Foo", "Bar"]);
}

#[test_log::test]
fn undecodable_field() {
	// Second field is a BOM-less UTF-16 string
	let body = b"\x01\xFF\xFEF\x00\x00\x00o\x00";

	let strict = TextInformationFrame::parse(
		&mut &body[..],
		FrameId::new("TIT2").unwrap(),
		ParsingMode::Strict,
	);
	assert!(strict.is_err());

	// The bad field is dropped, the rest survive
	let frame = parse_text_frame(body, ParsingMode::BestAttempt);
	assert_eq!(frame.values(), ["F"]);
}

#[test_log::test]
fn latin1_upgrades_on_render() {
	let mut frame =
		TextInformationFrame::new(FrameId::new("TIT2").unwrap(), TextEncoding::Latin1);
	frame.set_value(String::from("\u{3042}"));

	let body = frame.as_bytes(WriteOptions::new());
	assert_eq!(body[0], TextEncoding::UTF8 as u8);

	// The stored encoding is untouched
	assert_eq!(frame.encoding, TextEncoding::Latin1);

	// Latin-1 representable text is left alone
	let mut frame =
		TextInformationFrame::new(FrameId::new("TIT2").unwrap(), TextEncoding::Latin1);
	frame.set_value(String::from("B\u{00e4}r"));
	assert_eq!(frame.as_bytes(WriteOptions::new())[0], TextEncoding::Latin1 as u8);
}

#[test_log::test]
fn id3v23_substitutes_new_encodings() {
	let write_options = WriteOptions::new().use_id3v23(true);

	for encoding in [TextEncoding::UTF8, TextEncoding::UTF16BE] {
		let mut frame = TextInformationFrame::new(FrameId::new("TIT2").unwrap(), encoding);
		frame.set_value(String::from("Foo"));

		let body = frame.as_bytes(write_options);
		assert_eq!(body[0], TextEncoding::UTF16 as u8);
	}

	// The old encodings pass through
	let mut frame =
		TextInformationFrame::new(FrameId::new("TIT2").unwrap(), TextEncoding::Latin1);
	frame.set_value(String::from("Foo"));
	assert_eq!(frame.as_bytes(write_options)[0], TextEncoding::Latin1 as u8);
}

#[test_log::test]
fn user_text_always_has_description_and_value() {
	// A fresh frame holds two empty fields
	let frame = ExtendedTextFrame::new(TextEncoding::UTF8, String::new(), String::new());
	assert_eq!(frame.description(), "");
	assert_eq!(frame.content(), "");

	// A parsed body missing the value field gets one filled in
	let frame =
		ExtendedTextFrame::parse(&mut &b"\x00MOOD"[..], ParsingMode::Strict).unwrap();
	assert_eq!(frame.description(), "MOOD");
	assert_eq!(frame.content(), "");

	// Same for a body with nothing at all
	let frame = ExtendedTextFrame::parse(&mut &b"\x00"[..], ParsingMode::Strict).unwrap();
	assert_eq!(frame.description(), "");
	assert_eq!(frame.content(), "");
}

#[test_log::test]
fn user_text_round_trip() {
	let frame = ExtendedTextFrame::new(
		TextEncoding::UTF8,
		String::from("MOOD"),
		String::from("Calm"),
	);

	let body = frame.as_bytes(WriteOptions::new());
	assert_eq!(body.as_slice(), b"\x03MOOD\x00Calm");

	let parsed = ExtendedTextFrame::parse(&mut &body[..], ParsingMode::Strict).unwrap();
	assert_eq!(parsed.description(), "MOOD");
	assert_eq!(parsed.content(), "Calm");
}

#[test_log::test]
fn user_text_mutation_keeps_invariants() {
	let mut frame = ExtendedTextFrame::new(TextEncoding::UTF8, String::new(), String::new());

	frame.set_description(String::from("MOOD"));
	frame.set_content(String::from("hello"));
	assert_eq!(frame.description(), "MOOD");
	assert_eq!(frame.content(), "hello");

	frame.set_values(vec![String::from("a"), String::from("b")]);
	assert_eq!(frame.description(), "MOOD");
	assert_eq!(frame.values(), ["a", "b"]);

	// Even emptied out, both fields remain
	frame.set_values(Vec::new());
	assert_eq!(frame.description(), "MOOD");
	assert_eq!(frame.content(), "");
}
