use serde::Serialize;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One discovered emergency-service business candidate.
///
/// Every field is plain text and an empty string means "unknown". The
/// pipeline only admits records whose name and phone are both non-empty;
/// the type itself allows empty fields while extraction is in flight.
#[derive(Debug, Clone, Serialize)]
pub struct Business {
    pub name: String,
    pub category: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub website: String,
    pub hourly_price: String,
}
