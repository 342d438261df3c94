// ── Wire → domain conversion ──

use storelight_api::ProductRecord;

use crate::model::Product;

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price_cents: record.price_cents,
            category: record.category,
            in_stock: record.in_stock,
            created_at: record.created_at,
        }
    }
}
