//! Lắp catalog từ tất cả lesson crates

use lessons_core::{AppConfig, Catalog};

pub fn build(config: &AppConfig) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.register_all(clean_code::lessons(config));
    catalog.register_all(design_patterns::lessons(config));
    catalog.register_all(oop::lessons(config));
    catalog.register_all(solid::lessons(config));

    log::debug!("Catalog ready with {} lessons", catalog.len());
    catalog
}
