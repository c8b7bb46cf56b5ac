pub mod artifact_copier;
pub mod card_generator;
pub mod config_converter;
pub mod large_files;
