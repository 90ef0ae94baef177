//! Files compiled into the binary: stylesheet, favicon and the default catalog.

use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::warn;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("embedded asset {0} not found")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`; empty if the file failed to embed.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| or_empty(embedded_text("main.css"))).as_str()
}

/// `data:` URI for the favicon; empty if the file failed to embed.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| or_empty(data_uri("favicon.svg")))
        .as_str()
}

/// Raw bytes of an embedded file, e.g. `catalog/venues.json`.
pub fn embedded_file(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
}

pub fn embedded_text(path: &str) -> Result<String, AssetError> {
    let data = embedded_file(path).ok_or_else(|| AssetError::Missing(path.to_string()))?;
    String::from_utf8(data.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn data_uri(path: &str) -> Result<String, AssetError> {
    let data = embedded_file(path).ok_or_else(|| AssetError::Missing(path.to_string()))?;
    Ok(format!("data:{};base64,{}", mime_for(path), encode_base64(&data)))
}

fn or_empty(result: Result<String, AssetError>) -> String {
    result.unwrap_or_else(|err| {
        warn!("{err}");
        String::new()
    })
}

/// Accepts `/assets/x`, `assets/x` and `x`.
fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed.strip_prefix("assets/").unwrap_or(trimmed).to_string()
}

fn mime_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let bytes = [chunk[0], chunk.get(1).copied().unwrap_or(0), chunk.get(2).copied().unwrap_or(0)];
        let packed = (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);

        for index in 0..4 {
            if index <= chunk.len() {
                let sextet = (packed >> (18 - 6 * index)) & 0x3f;
                output.push(TABLE[sextet as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_partial_chunks() {
        assert_eq!(encode_base64(b"M"), "TQ==");
        assert_eq!(encode_base64(b"Ma"), "TWE=");
        assert_eq!(encode_base64(b"Man"), "TWFu");
        assert_eq!(encode_base64(b""), "");
    }

    #[test]
    fn asset_paths_accept_leading_prefix() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("catalog/venues.json"), "catalog/venues.json");
    }

    #[test]
    fn catalog_files_are_embedded() {
        assert!(embedded_file("catalog/influencers.json").is_some());
        assert!(embedded_file("/assets/catalog/venues.json").is_some());
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(!main_css().is_empty());
    }

    #[test]
    fn missing_asset_is_reported() {
        assert_eq!(
            embedded_text("nope.txt"),
            Err(AssetError::Missing("nope.txt".to_string()))
        );
    }
}
