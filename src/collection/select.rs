use rand::seq::SliceRandom;
use rand::Rng;

use super::CollectionItem;
use crate::error::{Result, ShuffleError};

/// Pick one item uniformly at random.
///
/// `owner` is only used to name the collection in the error when it is empty.
pub fn select_random<'a, R: Rng + ?Sized>(
    items: &'a [CollectionItem],
    owner: &str,
    rng: &mut R,
) -> Result<&'a CollectionItem> {
    items
        .choose(rng)
        .ok_or_else(|| ShuffleError::EmptyCollection(owner.to_string()))
}
