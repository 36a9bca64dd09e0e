//! Request extractors that reject with the error envelope.

mod product;
pub use product::{lookup_path_id, parse_product_id, product_path_id, ValidProduct};
