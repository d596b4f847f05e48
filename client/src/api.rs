use serde::de::DeserializeOwned;

use dossier_shared::{AchievementInfo, GameMetadata, ItemRecord, PlayerProfile, ProfileSearchEntry};

/// Community profile API; one JSON document per account.
const PROFILE_API_BASE: &str = "https://player.tarkov.dev";

/// Reference datasets shipped alongside the site as static assets.
const ITEMS_URL: &str = "/data/items.json";
const METADATA_URL: &str = "/data/metadata.json";
const ACHIEVEMENTS_URL: &str = "/data/achievements.json";

/// How a fetch failed, which decides what the caller does with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure, non-success status, or undecodable body.
    /// Logged and swallowed; callers keep their current value.
    Transport(String),
    /// Error payload embedded in a successful response. Surfaced to the
    /// user; the current value is not replaced.
    Api(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "{msg}"),
            Self::Api(msg) => write!(f, "{msg}"),
        }
    }
}

async fn get_json(url: &str) -> Result<serde_json::Value, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(format!("fetch error: {e}")))?;
    if !resp.ok() {
        return Err(FetchError::Transport(format!("HTTP {}", resp.status())));
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| FetchError::Transport(format!("parse error: {e}")))
}

async fn get_typed<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(format!("fetch error: {e}")))?;
    if !resp.ok() {
        return Err(FetchError::Transport(format!("HTTP {}", resp.status())));
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Transport(format!("parse error: {e}")))
}

/// The profile API embeds failures in 200 responses as `{err, errmsg}`.
/// Anything truthy in `err` counts as a failure, mirroring the service.
fn reject_api_error(value: &serde_json::Value) -> Result<(), FetchError> {
    let Some(err) = value.get("err") else {
        return Ok(());
    };
    let failed = match err {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(code) => code.as_i64() != Some(0),
        _ => true,
    };
    if failed {
        let message = value
            .get("errmsg")
            .and_then(|msg| msg.as_str())
            .unwrap_or("profile service error")
            .to_string();
        return Err(FetchError::Api(message));
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Transport(format!("parse error: {e}")))
}

/// Fetch one player profile by numeric account id.
pub async fn fetch_profile(account_id: u64) -> Result<PlayerProfile, FetchError> {
    let value = get_json(&format!("{PROFILE_API_BASE}/account/{account_id}")).await?;
    reject_api_error(&value)?;
    decode(value)
}

/// Search accounts by nickname.
pub async fn search_profiles(name: &str) -> Result<Vec<ProfileSearchEntry>, FetchError> {
    let encoded = js_sys::encode_uri_component(name)
        .as_string()
        .unwrap_or_default();
    let value = get_json(&format!("{PROFILE_API_BASE}/name/{encoded}")).await?;
    reject_api_error(&value)?;
    decode(value)
}

/// Resolve a nickname to an account id: the case-insensitive exact match
/// among the search hits wins; near-misses are ignored.
pub async fn resolve_account_id(name: &str) -> Result<Option<u64>, FetchError> {
    let hits = search_profiles(name).await?;
    Ok(hits
        .iter()
        .find(|hit| hit.name.eq_ignore_ascii_case(name))
        .map(|hit| hit.aid))
}

pub async fn fetch_items() -> Result<Vec<ItemRecord>, FetchError> {
    get_typed(ITEMS_URL).await
}

pub async fn fetch_metadata() -> Result<GameMetadata, FetchError> {
    get_typed(METADATA_URL).await
}

pub async fn fetch_achievements() -> Result<Vec<AchievementInfo>, FetchError> {
    get_typed(ACHIEVEMENTS_URL).await
}
