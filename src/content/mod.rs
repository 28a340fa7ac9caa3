//! Content module
//!
//! Quotes, images, their styling, and the random pairing of the two.

pub mod defaults;
pub mod loader;
pub mod selector;
pub mod style;

pub use defaults::{FALLBACK_QUOTES, IMAGES};
pub use loader::{load_image_config, load_quotes, load_with_fallback};
pub use selector::{select_combination, select_combination_with, select_image, Combination};
pub use style::{ImageConfig, ImageStyle};
