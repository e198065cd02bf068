//! Build-time settings baked into the wasm bundle.

/// Web API key of the identity project, from `ZENFLORA_FIREBASE_API_KEY` at build time.
pub fn firebase_api_key() -> Option<&'static str> {
    option_env!("ZENFLORA_FIREBASE_API_KEY").filter(|key| !key.trim().is_empty())
}
