/// Picture shapes (`p:pic`).
use crate::ooxml::drawings::blip::blip_embed;
use crate::ooxml::element::Element;
use crate::presentation::ImageData;
use tracing::debug;

/// Looks up the image part behind a relationship ID of the current slide.
pub type ImageResolver<'a> = dyn Fn(&str) -> Option<ImageData> + 'a;

/// Bytes and MIME type of the embedded image of a `p:pic`.
///
/// Linked or dangling images yield `None`.
pub fn resolve_picture(pic: &Element, images: &ImageResolver<'_>) -> Option<ImageData> {
    let Some(r_id) = blip_embed(pic) else {
        debug!("picture without embedded image");
        return None;
    };
    let image = images(r_id);
    if image.is_none() {
        debug!(r_id, "picture relationship does not resolve to an image part");
    }
    image
}
