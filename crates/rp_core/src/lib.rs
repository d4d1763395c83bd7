//! Reading, pairing and writing for reStructuredText/gettext translation pairs.

pub mod error;
pub mod formats;
pub mod pairing;
pub mod session;
pub mod workspace;
