//! Closed vocabularies offered as checkboxes in profile and product forms.
//!
//! Matching against these lists is case-sensitive and exact: anything the
//! backend returns that is not verbatim in a list is treated as a
//! user-entered custom value.

/// Kategori produk UMKM.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Makanan Olahan",
    "Minuman",
    "Kerajinan",
    "Tekstil & Fashion",
    "Furnitur",
    "Perawatan Tubuh",
    "Rempah & Bumbu",
];

/// Jenis usaha pembeli internasional.
pub const BUSINESS_TYPES: &[&str] = &[
    "Importir",
    "Distributor",
    "Wholesaler",
    "Retailer",
    "Marketplace",
    "Horeka",
];

/// Jenis layanan freight forwarder.
pub const SERVICE_TYPES: &[&str] = &[
    "Ocean Freight (FCL)",
    "Ocean Freight (LCL)",
    "Air Freight",
    "Door to Door",
    "Customs Clearance",
    "Pergudangan",
];
