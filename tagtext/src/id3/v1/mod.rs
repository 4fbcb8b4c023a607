//! ID3v1 items
//!
//! Only the genre list lives here. ID3v2 has no concept of genre numbers, but
//! plenty of software still writes ID3v1-style indexes into `TCON` frames, so
//! the property translation resolves them against this table.

pub(crate) mod constants;

pub use constants::GENRES;
