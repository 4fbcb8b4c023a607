//! ID3v2 text frames and utilities
//!
//! ## Important notes
//!
//! See:
//!
//! * [`Id3v2Tag`]
//! * [`Frame`]

mod frame;
mod items;
pub(crate) mod tag;
pub(crate) mod util;

// Exports

pub use tag::Id3v2Tag;

pub use items::{ExtendedTextFrame, TextInformationFrame};

pub use frame::{Frame, FrameId};
