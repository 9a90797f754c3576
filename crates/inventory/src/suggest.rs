use crate::item::Item;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Autocomplete candidates for a partially typed name.
///
/// Names starting with the query come first, then shorter names; ties keep
/// catalogue order.
pub fn suggest<'a>(query: &str, items: &'a [Item], limit: usize) -> Vec<&'a Item> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(&Item, bool)> = items
        .iter()
        .filter_map(|item| {
            let name = item.name.to_lowercase();
            name.contains(&query).then(|| (item, name.starts_with(&query)))
        })
        .collect();

    matches.sort_by_key(|(item, prefix)| (!*prefix, item.name.chars().count()));
    matches.into_iter().take(limit).map(|(item, _)| item).collect()
}
