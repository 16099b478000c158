// Project-wide constants
//
// Generation parameters live here so the solver and the validator use one
// source of truth. Import via `use crate::config::constants::*;`.

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST endpoint root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default bind address for the web tool (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8501";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Low randomness keeps derivations consistent between runs.
pub const SOLVE_TEMPERATURE: f32 = 0.1;

/// Output cap for a full step-by-step solution.
pub const SOLVE_MAX_TOKENS: u32 = 2000;

pub const CLARITY_TEMPERATURE: f32 = 0.1;

/// Output cap for the short clarity judgment.
pub const CLARITY_MAX_TOKENS: u32 = 300;
