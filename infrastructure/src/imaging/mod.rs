//! Image decoding adapter

mod decoder;

pub use decoder::ImageCrateDecoder;
