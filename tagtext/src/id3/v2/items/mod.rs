mod extended_text_frame;
mod text_information_frame;

pub use extended_text_frame::ExtendedTextFrame;
pub use text_information_frame::TextInformationFrame;
