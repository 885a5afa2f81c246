pub mod settings;
pub mod sheets;

pub use settings::{AdapterSettings, AppConfig, PathSettings};
pub use sheets::normalize_format;
