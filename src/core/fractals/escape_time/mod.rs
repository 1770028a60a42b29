pub mod algorithm;
pub mod colour_map;
pub mod explorer_config;
pub mod result;
