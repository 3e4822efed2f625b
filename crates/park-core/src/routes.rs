//! Links and asset paths derived from catalog records.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::AttractionId;

pub const ATTRACTIONS_PATH: &str = "/attractions";
pub const ATTRACTION_IMAGES_PATH: &str = "/assets/img/desktop/attractions";
pub const PARK_MAP_IMAGE: &str = "/assets/img/desktop/zombieland_map.webp";

const FILE_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-');

/// Detail page of an attraction
pub fn attraction_href(id: AttractionId) -> String {
    format!("{}/{}", ATTRACTIONS_PATH, id)
}

/// Image file name for an attraction, e.g. "Haunted House" -> "haunted-house.webp"
pub fn image_file_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() || ch == '\'' || ch == '’' {
            pending_dash = true;
            continue;
        }
        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.push(ch);
    }
    format!("{}.webp", utf8_percent_encode(&slug, FILE_NAME))
}

pub fn attraction_image_url(name: &str) -> String {
    format!("{}/{}", ATTRACTION_IMAGES_PATH, image_file_name(name))
}
