//! Parse, render, and translate ID3v2 text identification frames.
//!
//! This crate is the text-metadata layer of an audio tag library. It converts
//! between the binary body of ID3v2 `T...` frames and a generic, string-keyed
//! [`PropertyMap`](tag::PropertyMap), covering the plain text frames, the
//! paired-list frames (`TIPL`/`TMCL`), and the user-defined `TXXX` frame.
//!
//! The frame envelope (ID, size, flags) is expected to have been stripped by
//! the caller; the parsers here only see the raw field body.
//!
//! # Examples
//!
//! ## Parsing a text frame body
//!
//! ```rust
//! use tagtext::config::{ParsingMode, WriteOptions};
//! use tagtext::id3::v2::{FrameId, TextInformationFrame};
//!
//! # fn main() -> tagtext::error::Result<()> {
//! // Latin-1, two null delimited values
//! let body = b"\x00Foo\x00Bar";
//!
//! let frame =
//! 	TextInformationFrame::parse(&mut &body[..], FrameId::new("TIT2")?, ParsingMode::BestAttempt)?;
//! assert_eq!(frame.values(), ["Foo", "Bar"]);
//!
//! // Rendering gives back the original body
//! assert_eq!(frame.as_bytes(WriteOptions::new()), body);
//! # Ok(()) }
//! ```
//!
//! ## Translating to properties
//!
//! ```rust
//! use tagtext::TextEncoding;
//! use tagtext::id3::v2::{FrameId, TextInformationFrame};
//!
//! # fn main() -> tagtext::error::Result<()> {
//! let mut frame = TextInformationFrame::new(FrameId::new("TIT2")?, TextEncoding::UTF8);
//! frame.set_value(String::from("Title"));
//!
//! let properties = frame.as_properties();
//! assert_eq!(properties.get("TITLE"), Some(&[String::from("Title")][..]));
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod tag;
mod util;

pub use util::text::TextEncoding;
