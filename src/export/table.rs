// src/export/table.rs
use crate::models::Business;

/// Fixed output column order; row 0 of every export.
pub const HEADER: [&str; 8] = [
    "virksomhed",
    "kategori",
    "adresse",
    "post nr.",
    "by",
    "telefonnummer",
    "website",
    "timepris hvis angivet",
];

/// Header row followed by one row per business, columns in `HEADER` order.
pub fn business_rows(businesses: &[Business]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(businesses.len() + 1);
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());

    for b in businesses {
        rows.push(vec![
            b.name.clone(),
            b.category.clone(),
            b.address.clone(),
            b.postal_code.clone(),
            b.city.clone(),
            b.phone.clone(),
            b.website.clone(),
            b.hourly_price.clone(),
        ]);
    }

    rows
}
