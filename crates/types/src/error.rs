use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("scene config has no palettes")]
    NoPalettes,

    #[error("scene config field `{name}` has invalid value {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("flash interval is inverted: min {min_ms}ms > max {max_ms}ms")]
    InvalidFlashInterval { min_ms: u32, max_ms: u32 },

    #[error("flash duration {duration_ms}ms must be non-zero and shorter than the {interval_min_ms}ms minimum interval")]
    InvalidFlashDuration { duration_ms: u32, interval_min_ms: u32 },
}
