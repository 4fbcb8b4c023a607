//! ID3 specific items

pub mod v1;
pub mod v2;
