//! Search over the cached item list.

use crate::models::Item;

/// Returns the items whose name, size or notes contain `query`, ignoring case.
///
/// A blank query returns every item in store order.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .collect()
}

fn matches_query(item: &Item, needle: &str) -> bool {
    [&item.item, &item.size, &item.notes]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
