mod settings;

pub use settings::{
    DEFAULT_OUTPUT_DIR, DEFAULT_UTC_OFFSET_HOURS, ExportConfig, Settings, SlackConfig,
    load_settings,
};
