//! Fallback photographs for remote images that fail to load.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

pub const CARD_FALLBACK: &str =
    "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?q=80&w=800&auto=format&fit=crop";
pub const HERO_FALLBACK: &str =
    "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?q=80&w=2000&auto=format&fit=crop";
pub const HERITAGE_FALLBACK: &str =
    "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=2000&auto=format&fit=crop";

/// Where an image is shown, which decides its fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    /// Catalog cards, cart lines, details gallery.
    Card,
    Hero,
    /// Heritage section and story modal.
    Heritage,
}

impl ImageRole {
    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Card => CARD_FALLBACK,
            Self::Hero => HERO_FALLBACK,
            Self::Heritage => HERITAGE_FALLBACK,
        }
    }
}

/// Source to render given whether the original has already failed.
#[must_use]
pub fn resolve_src(src: &str, failed: bool, role: ImageRole) -> String {
    if failed || src.is_empty() {
        role.fallback().to_owned()
    } else {
        src.to_owned()
    }
}
