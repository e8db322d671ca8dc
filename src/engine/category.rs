//! Category selection for the secret word / question
//!
//! Every tier applies the same eligibility rule (`Category::is_eligible`),
//! so a locked category is never picked through a fallback.

use crate::types::{Category, CategoryId};
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Distinct ids from `category_ids` that resolve to an eligible category,
/// minus `exclude_id`
fn eligible_ids<'a>(
    category_ids: &'a [CategoryId],
    all_categories: &[Category],
    exclude_id: Option<&str>,
) -> Vec<&'a CategoryId> {
    let mut seen = HashSet::new();
    category_ids
        .iter()
        .filter(|id| Some(id.as_str()) != exclude_id)
        .filter(|id| {
            all_categories
                .iter()
                .any(|c| &c.id == *id && c.is_eligible())
        })
        .filter(|&id| seen.insert(id))
        .collect()
}

/// Distinct ids of every eligible catalog category, minus `exclude_id`
fn catalog_ids<'a>(
    all_categories: &'a [Category],
    exclude_id: Option<&str>,
) -> Vec<&'a CategoryId> {
    let mut seen = HashSet::new();
    all_categories
        .iter()
        .filter(|c| Some(c.id.as_str()) != exclude_id && c.is_eligible())
        .map(|c| &c.id)
        .filter(|&id| seen.insert(id))
        .collect()
}

/// Pick one of the selected categories.
///
/// Falls back to the first selected id when none of them is eligible, and to
/// `None` when nothing was selected at all.
pub fn select_any(category_ids: &[CategoryId], all_categories: &[Category]) -> Option<CategoryId> {
    let eligible = eligible_ids(category_ids, all_categories, None);

    match eligible.choose(&mut rand::rng()) {
        Some(id) => Some((*id).clone()),
        None => {
            tracing::warn!(
                selected = category_ids.len(),
                "No eligible category among selection, using first selected"
            );
            category_ids.first().cloned()
        }
    }
}

/// Pick a category other than `exclude_id`, used on "Play Again".
///
/// Tries the selected categories first, then every eligible category in the
/// catalog. Only when there is no alternative at all is `exclude_id`
/// returned again.
pub fn select_excluding(
    category_ids: &[CategoryId],
    all_categories: &[Category],
    exclude_id: &str,
) -> CategoryId {
    let mut rng = rand::rng();

    let eligible = eligible_ids(category_ids, all_categories, Some(exclude_id));
    if let Some(id) = eligible.choose(&mut rng) {
        return (*id).clone();
    }

    let everything = catalog_ids(all_categories, Some(exclude_id));
    if let Some(id) = everything.choose(&mut rng) {
        tracing::debug!(
            category_id = %id,
            "Selection exhausted, picked from the whole catalog"
        );
        return (*id).clone();
    }

    tracing::debug!(category_id = %exclude_id, "No alternative category, repeating");
    exclude_id.to_string()
}

/// Pick any eligible category, used when the players didn't choose one
pub fn select_single_random(all_categories: &[Category]) -> Option<CategoryId> {
    catalog_ids(all_categories, None)
        .choose(&mut rand::rng())
        .map(|id| (*id).clone())
}
