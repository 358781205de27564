//! Perceptual difference hashing (dHash) for near-duplicate image
//! detection.
//!
//! A dhash fingerprints the horizontal luminance gradients of a
//! downsized grayscale rendition of an image. Two encodings of the
//! same picture (say a JPEG and a PNG) hash identically after decode,
//! and visually similar images land a small Hamming distance apart,
//! so callers can detect near-duplicates without caring about the
//! container format or minor re-encoding artifacts.
//!
//! Image decoding is the caller's job: any decoder that yields an
//! [`image::DynamicImage`] works.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = image::open("photo.jpg")?;
//! let b = image::open("photo.png")?;
//!
//! let hash_a = dhash::hash(&a, 8)?;
//! let hash_b = dhash::hash(&b, 8)?;
//! let distance = dhash::hamming_distance(&hash_a, &hash_b)?;
//! println!("{} bits differ", distance);
//! # Ok(())
//! # }
//! ```

mod distance;
mod error;
mod hash;

pub use distance::{hamming_distance, hamming_distance_hex, within_distance};
pub use error::HashError;
pub use hash::{hash, hash_hex};
