//! Stable file names for extracted images.

use phf::phf_map;
use sha2::{Digest, Sha256};

static EXTENSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "image/png" => "png",
    "image/jpeg" => "jpg",
    "image/jpg" => "jpg",
    "image/gif" => "gif",
    "image/bmp" => "bmp",
    "image/tiff" => "tiff",
};

/// File extension for a MIME type. Unknown types map to `png`.
pub fn extension_for(content_type: &str) -> &'static str {
    EXTENSIONS
        .get(content_type.trim().to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or("png")
}

/// `slide_{NN}_{hash8}.{ext}`: slide number padded to two digits, the first
/// eight hex digits of the SHA-256 of the bytes, and the extension for
/// `content_type`.
pub fn image_file_name(blob: &[u8], content_type: &str, slide_number: usize) -> String {
    let digest = Sha256::digest(blob);
    let hash = hex::encode(&digest[..4]);
    format!("slide_{:02}_{}.{}", slide_number, hash, extension_for(content_type))
}
