//! Built-in content
//!
//! Used whenever the asset store cannot provide its own copy.

/// Canonical image set. Every selected image is one of these.
pub const IMAGES: [&str; 6] = [
    "esquie1.jpg",
    "esquie2.jpg",
    "esquie3.jpg",
    "esquie4.jpg",
    "esquie5.jpg",
    "esquie6.jpg",
];

/// Quotes served when `quotes.json` is missing or unusable
pub const FALLBACK_QUOTES: [&str; 9] = [
    r#"I too am "Whooo." But I'm also "Wheee!" So the "Wheee" balances the "Whooo.""#,
    "Mon ami!",
    "Losing a rock is better than never having a rock!",
    "Stars are the apples of the sky.",
    "Want a hug?",
    "Esquie can be sad or bad or even rad! But never ever mad.",
    "Men trip not on mountains; they stumble upon stones.",
    "I get sad too, when I lose my stones. But I always find them again. You will find them again too.",
    "First means number one. Second means number two!",
];

/// Fit mode applied to images without a styling entry
pub const DEFAULT_OBJECT_FIT: &str = "cover";

/// Position applied to images without a styling entry
pub const DEFAULT_OBJECT_POSITION: &str = "center center";

/// Images whose built-in styling differs from the default, as `(image, fit)`
pub const FALLBACK_FIT_OVERRIDES: [(&str, &str); 1] = [("esquie1.jpg", "contain")];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_quotes_are_usable() {
        assert!(FALLBACK_QUOTES.len() >= 9);
        assert!(FALLBACK_QUOTES.iter().all(|q| !q.trim().is_empty()));
    }

    #[test]
    fn test_images_are_unique() {
        let unique: HashSet<_> = IMAGES.iter().collect();
        assert_eq!(unique.len(), IMAGES.len());
    }

    #[test]
    fn test_overrides_reference_known_images() {
        for (image, _) in FALLBACK_FIT_OVERRIDES {
            assert!(IMAGES.contains(&image));
        }
    }
}
