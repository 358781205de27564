//! Difference hash computation.
//!
//! The dhash algorithm:
//! 1. Convert the image to grayscale
//! 2. Resize to (hash_len + 1) x hash_len with a Lanczos3 filter
//! 3. Compare adjacent pixels horizontally, one bit per comparison
//! 4. Pack the hash_len * hash_len bits into bytes

use crate::error::HashError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use tracing::debug;

/// Compute the difference hash of an image.
///
/// `hash_len` is the number of gradient bits per row (and the number of
/// rows), so the result packs `hash_len * hash_len` bits into
/// `ceil(hash_len^2 / 8)` bytes. The hash is derived from the decoded
/// pixel data, not the container it was read from, so the same picture
/// decoded from different lossless formats hashes identically.
///
/// Fails with [`HashError::InvalidHashLength`] when `hash_len` is zero.
pub fn hash(image: &DynamicImage, hash_len: u32) -> Result<Vec<u8>, HashError> {
    if hash_len == 0 {
        return Err(HashError::InvalidHashLength);
    }

    let gray = grayscale(image);
    let resized = resample(&gray, hash_len);
    let packed = gradient_hash(&resized);
    debug!(
        "dhash: {}x{} image packed into {} hash bytes",
        image.width(),
        image.height(),
        packed.len()
    );

    Ok(packed)
}

/// Compute the difference hash of an image as a lowercase hex string.
///
/// Two characters per byte, no separators, leading zero bytes kept.
pub fn hash_hex(image: &DynamicImage, hash_len: u32) -> Result<String, HashError> {
    Ok(hex::encode(hash(image, hash_len)?))
}

/// Convert an image to grayscale, keeping its dimensions.
fn grayscale(image: &DynamicImage) -> GrayImage {
    imageops::grayscale(image)
}

/// Resize a grayscale image to (hash_len + 1) x hash_len.
///
/// Lanczos3 keeps the gradient structure stable across minor
/// re-encodings; cheaper filters shift which adjacent-pixel
/// comparisons flip sign near edges and change the hash.
fn resample(gray: &GrayImage, hash_len: u32) -> GrayImage {
    imageops::resize(gray, hash_len + 1, hash_len, FilterType::Lanczos3)
}

/// Compare horizontally adjacent pixels and pack the resulting bits.
///
/// The grid must be one pixel wider than the number of comparisons per
/// row. Bit x of row y is 1 when pixel (x, y) is strictly darker than
/// pixel (x + 1, y); a tie is 0. Bits are collected row-major with x
/// fastest and packed most-significant-bit-first, chunked into 8-bit
/// groups aligned to the least-significant end of the sequence, so
/// when the bit count is not a multiple of 8 the spare bits sit in the
/// low positions of the first byte.
fn gradient_hash(gray: &GrayImage) -> Vec<u8> {
    let rows = gray.height();
    let cols = gray.width() - 1;
    let total = rows as usize * cols as usize;

    let mut packed = vec![0u8; total.div_ceil(8)];
    let last = packed.len() - 1;

    let mut i = 0;
    for y in 0..rows {
        for x in 0..cols {
            let left = gray.get_pixel(x, y)[0];
            let right = gray.get_pixel(x + 1, y)[0];
            if left < right {
                let pos = total - 1 - i;
                packed[last - pos / 8] |= 1 << (pos % 8);
            }
            i += 1;
        }
    }

    packed
}
