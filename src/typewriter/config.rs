use serde::Deserialize;

/// Typewriter configuration
#[derive(Debug, Clone)]
pub struct TypewriterSettings {
    /// Ordered phrase list the headline rotates through
    pub titles: Vec<String>,
    /// Base delay per typed character
    pub type_speed_ms: u32,
    /// Base delay per deleted character
    pub delete_speed_ms: u32,
    /// Hold time after a phrase is fully typed
    pub pause_delay_ms: u32,
    /// Hold time before the next phrase starts
    pub next_delay_ms: u32,
    /// Random extra delay per typed character (exclusive upper bound)
    pub type_jitter_ms: u32,
    /// Random extra delay per deleted character (exclusive upper bound)
    pub delete_jitter_ms: u32,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            titles: vec![
                "Software Engineer".to_string(),
                "Web Developer".to_string(),
                "Tech Enthusiast".to_string(),
            ],
            type_speed_ms: 100,
            delete_speed_ms: 50,
            pause_delay_ms: 2000,
            next_delay_ms: 500,
            type_jitter_ms: 50,
            delete_jitter_ms: 20,
        }
    }
}

/// Partial settings document. A `titles` entry goes through the same
/// validation and reset as an explicit list replacement.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterOverrides {
    pub titles: Option<Vec<String>>,
    pub type_speed_ms: Option<u32>,
    pub delete_speed_ms: Option<u32>,
    pub pause_delay_ms: Option<u32>,
    pub next_delay_ms: Option<u32>,
    pub type_jitter_ms: Option<u32>,
    pub delete_jitter_ms: Option<u32>,
}

impl TypewriterOverrides {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
