//! Admin → client category mapping.
//!
//! The admin dashboard files products under a fine-grained taxonomy; the
//! ordering client and homepage group them under fewer display categories.
//! The table is fixed at compile time and looked up by exact match only.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Display category for any admin label not present in the table.
pub const DEFAULT_CLIENT_CATEGORY: &str = "기타";

/// `(admin category, client display category)` pairs.
const CATEGORY_TABLE: &[(&str, &str)] = &[
    ("근조화환", "근조화환"),
    ("근조3단화환", "근조화환"),
    ("근조쌀화환", "근조화환"),
    ("근조바구니", "근조화환"),
    ("근조장구", "근조화환"),
    ("영정바구니", "근조화환"),
    ("축하화환", "축하화환"),
    ("축하3단화환", "축하화환"),
    ("축하쌀화환", "축하화환"),
    ("꽃다발", "꽃상품"),
    ("꽃바구니", "꽃상품"),
    ("꽃상자", "꽃상품"),
    ("플라워박스", "꽃상품"),
    ("동양란", "관엽/난"),
    ("서양란", "관엽/난"),
    ("관엽식물", "관엽/난"),
    ("기타", DEFAULT_CLIENT_CATEGORY),
];

static CATEGORY_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CATEGORY_TABLE.iter().copied().collect());

/// Map an admin category label to the client-facing display category.
///
/// No trimming or case folding is applied: `" 꽃다발"` is an unknown label.
pub fn map_to_client_category(admin_category: &str) -> &'static str {
    CATEGORY_MAP
        .get(admin_category)
        .copied()
        .unwrap_or(DEFAULT_CLIENT_CATEGORY)
}

/// The full mapping table in declaration order.
pub fn category_table() -> &'static [(&'static str, &'static str)] {
    CATEGORY_TABLE
}

/// Distinct client display categories in first-seen order.
pub fn client_categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for &(_, client) in CATEGORY_TABLE {
        if !seen.contains(&client) {
            seen.push(client);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bouquet_maps_to_flower_products() {
        assert_eq!(map_to_client_category("꽃다발"), "꽃상품");
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(map_to_client_category("알수없음"), "기타");
        assert_eq!(map_to_client_category(""), "기타");
    }

    #[test]
    fn every_table_key_maps_to_its_value() {
        for &(admin, client) in category_table() {
            assert_eq!(map_to_client_category(admin), client, "key {admin}");
        }
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert_eq!(map_to_client_category(" 꽃다발"), DEFAULT_CLIENT_CATEGORY);
        assert_eq!(map_to_client_category("꽃다발 "), DEFAULT_CLIENT_CATEGORY);
        assert_eq!(map_to_client_category("꽃"), DEFAULT_CLIENT_CATEGORY);
    }

    #[test]
    fn table_keys_are_unique() {
        assert_eq!(CATEGORY_MAP.len(), CATEGORY_TABLE.len());
    }

    #[test]
    fn client_categories_are_deduplicated() {
        let cats = client_categories();
        assert_eq!(cats.first(), Some(&"근조화환"));
        assert!(cats.contains(&DEFAULT_CLIENT_CATEGORY));
        let mut sorted = cats.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), cats.len());
    }
}
