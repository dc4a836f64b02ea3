//! Variant price resolution
//!
//! A unit price shown to a customer must not silently change if the catalog
//! updates mid-session, so a snapshotted price always wins over
//! recomputation. Without a snapshot the selected variant's current price
//! applies, and an unknown variant label falls back to the display price
//! rather than failing the line.

use shared::models::CatalogItem;

/// Resolve the effective unit price for a cart line.
///
/// Precedence: `snapshot_price` > matching `selected_variant` option >
/// display price.
pub fn resolve_unit_price(
    item: &CatalogItem,
    selected_variant: Option<&str>,
    snapshot_price: Option<f64>,
) -> f64 {
    if let Some(price) = snapshot_price {
        return price;
    }

    if let Some(label) = selected_variant {
        if let Some(option) = item.variant_options.iter().find(|v| v.label == label) {
            return option.price;
        }
        tracing::debug!(
            item_id = %item.id,
            variant = label,
            "variant label not found, falling back to display price"
        );
    }

    item.display_price()
}

/// The variant pre-selected in the UI: the first option, if any.
pub fn default_variant(item: &CatalogItem) -> Option<&str> {
    item.variant_options.first().map(|v| v.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ItemKind, VariantOption};

    fn item_with_variants(options: Vec<(&str, f64)>) -> CatalogItem {
        CatalogItem {
            id: "product:p1".to_string(),
            kind: ItemKind::Product,
            name: "Phone".to_string(),
            base_price: 500.0,
            previous_price: None,
            variant_options: options
                .into_iter()
                .map(|(label, price)| VariantOption {
                    label: label.to_string(),
                    price,
                })
                .collect(),
            in_stock: true,
            images: vec![],
            colors: vec![],
        }
    }

    #[test]
    fn snapshot_price_always_wins() {
        let item = item_with_variants(vec![("128GB", 5000.0), ("256GB", 6000.0)]);
        assert_eq!(
            resolve_unit_price(&item, Some("256GB"), Some(5500.0)),
            5500.0
        );
        // Even with no variant selected
        assert_eq!(resolve_unit_price(&item, None, Some(4999.0)), 4999.0);
    }

    #[test]
    fn selected_variant_resolves_current_price() {
        let item = item_with_variants(vec![("128GB", 5000.0), ("256GB", 6000.0)]);
        assert_eq!(resolve_unit_price(&item, Some("256GB"), None), 6000.0);
        assert_eq!(resolve_unit_price(&item, Some("128GB"), None), 5000.0);
    }

    #[test]
    fn unknown_variant_falls_back_to_display_price() {
        let item = item_with_variants(vec![("128GB", 5000.0)]);
        assert_eq!(resolve_unit_price(&item, Some("512GB"), None), 5000.0);
    }

    #[test]
    fn no_variants_resolves_base_price() {
        let item = item_with_variants(vec![]);
        assert_eq!(resolve_unit_price(&item, None, None), 500.0);
    }

    #[test]
    fn default_variant_is_first_option() {
        let item = item_with_variants(vec![("128GB", 5000.0), ("256GB", 6000.0)]);
        assert_eq!(default_variant(&item), Some("128GB"));
        assert_eq!(default_variant(&item_with_variants(vec![])), None);
    }
}
