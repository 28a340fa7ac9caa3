//! Random combination selection

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A single quote/image pairing, built fresh for each response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub quote: String,
    pub image: String,
}

/// Draw one quote and one image, each uniformly and independently
pub fn select_combination<Q, I>(quotes: &[Q], images: &[I]) -> Result<Combination, ContentError>
where
    Q: AsRef<str>,
    I: AsRef<str>,
{
    select_combination_with(&mut rand::thread_rng(), quotes, images)
}

/// Same as [`select_combination`] but driven by the given RNG
pub fn select_combination_with<R, Q, I>(
    rng: &mut R,
    quotes: &[Q],
    images: &[I],
) -> Result<Combination, ContentError>
where
    R: Rng + ?Sized,
    Q: AsRef<str>,
    I: AsRef<str>,
{
    if quotes.is_empty() {
        return Err(ContentError::EmptyQuotes);
    }
    if images.is_empty() {
        return Err(ContentError::EmptyImages);
    }

    let quote = &quotes[rng.gen_range(0..quotes.len())];
    let image = &images[rng.gen_range(0..images.len())];

    Ok(Combination {
        quote: quote.as_ref().to_string(),
        image: image.as_ref().to_string(),
    })
}

/// Pick a single image, used for the initial page render
pub fn select_image<I: AsRef<str>>(images: &[I]) -> Result<String, ContentError> {
    if images.is_empty() {
        return Err(ContentError::EmptyImages);
    }
    let idx = rand::thread_rng().gen_range(0..images.len());
    Ok(images[idx].as_ref().to_string())
}
