//! Process-wide table of named images used by `/json` and `/random`.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// A named image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Display name, emitted as `header` in the JSON body
    #[serde(rename = "header")]
    pub name: &'static str,
    /// Absolute image URL
    #[serde(rename = "image")]
    pub url: &'static str,
}

/// Built once on first use and never mutated afterwards.
pub static IMAGES: Lazy<Vec<Image>> = Lazy::new(|| {
    vec![
        Image {
            name: "streets",
            url: "https://iili.io/JV1pSV.jpg",
        },
        Image {
            name: "bread",
            url: "https://iili.io/Jj9MWG.jpg",
        },
    ]
});

/// Pick one image uniformly at random.
pub fn random_image<R: Rng + ?Sized>(rng: &mut R) -> &'static Image {
    // The table is a non-empty literal.
    IMAGES.choose(rng).unwrap_or(&IMAGES[0])
}
