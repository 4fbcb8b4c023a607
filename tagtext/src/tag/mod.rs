//! The generic, format-independent property model

mod properties;

pub use properties::PropertyMap;
