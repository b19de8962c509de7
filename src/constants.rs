//! Application constants and configuration

pub const APP_NAME: &str = "Scheme Frontend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "scheme-frontend.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Name the native backend greets unless settings override it
pub const DEFAULT_GREETING_NAME: &str = "scheme-frontend";

/// Sample pair shown in the result view
pub const SAMPLE_EXPRESSION: &str = "(+ 1 2)";
pub const SAMPLE_RESULT: &str = "3";

pub const EXPRESSION_PROMPT: &str = "uinput ]=> ";
pub const RESULT_PROMPT: &str = "answer]=> ";

pub const GREET_BUTTON_LABEL: &str = "from my scheme backend";

/// Toast timing (seconds)
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;
