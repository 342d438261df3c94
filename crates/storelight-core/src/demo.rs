//! The static demo catalog.
//!
//! Served whenever the hosted backend is absent or failing. Identifiers are
//! short fixed slugs with no creation timestamp, so demo records never pass
//! the remote-record heuristic.

use crate::model::Product;

/// Build the demo product list.
pub fn demo_products() -> Vec<Product> {
    let items: [(&str, &str, &str, u32, &str); 6] = [
        (
            "demo-1",
            "Wireless Headphones",
            "Over-ear, noise cancelling, 30h battery",
            19999,
            "audio",
        ),
        (
            "demo-2",
            "Mechanical Keyboard",
            "Tenkeyless, hot-swappable switches",
            12999,
            "peripherals",
        ),
        (
            "demo-3",
            "Smart Watch",
            "Heart rate, GPS, 7-day battery",
            24999,
            "wearables",
        ),
        (
            "demo-4",
            "USB-C Hub",
            "7-in-1: HDMI, SD, 100W pass-through",
            4999,
            "accessories",
        ),
        (
            "demo-5",
            "Laptop Stand",
            "Aluminium, adjustable height",
            3999,
            "accessories",
        ),
        (
            "demo-6",
            "Desk Lamp",
            "LED, warm/cool dimming, USB charging",
            5999,
            "lighting",
        ),
    ];

    items
        .into_iter()
        .map(|(id, name, description, price_cents, category)| Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price_cents,
            category: category.into(),
            in_stock: true,
            created_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FALLBACK_PRODUCT_COUNT;

    #[test]
    fn demo_catalog_matches_fallback_count() {
        assert_eq!(demo_products().len(), FALLBACK_PRODUCT_COUNT);
    }

    #[test]
    fn demo_records_never_look_remote() {
        assert!(demo_products().iter().all(|p| !p.looks_remote()));
    }

    #[test]
    fn demo_ids_are_unique() {
        let products = demo_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}
