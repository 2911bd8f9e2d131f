pub mod a001_buyer_profile;
pub mod a002_forwarder_profile;
pub mod a003_product;
pub mod a004_catalog;
pub mod a005_export_analysis;
