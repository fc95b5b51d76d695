//! カタログ取得
//!
//! ローカルファイルまたは HTTP(S) URL からカタログ JSON を 1 回だけ読み込む。
//! リトライは行わず、失敗はそのまま `GalleryError` として返す。

use crate::catalog::RawCategory;
use crate::config::HttpConfig;
use crate::error::{GalleryError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// カタログの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` / `https://` で始まれば URL、それ以外はファイルパス
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            CatalogSource::Url(value.to_string())
        } else {
            CatalogSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Url(url) => f.write_str(url),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// カタログを読み込んでデコードする
pub async fn load_catalog(source: &CatalogSource, http: &HttpConfig) -> Result<Vec<RawCategory>> {
    tracing::debug!(%source, "loading catalog");

    let bytes = match source {
        CatalogSource::Url(url) => fetch_bytes(url, http).await?,
        CatalogSource::File(path) => std::fs::read(path)?,
    };

    let categories = decode_catalog(&bytes)?;
    tracing::info!(
        %source,
        categories = categories.len(),
        items = crate::catalog::item_count(&categories),
        "catalog loaded"
    );
    Ok(categories)
}

/// カタログ JSON をデコード
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<RawCategory>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// スピナー付きで URL の本文を取得
async fn fetch_bytes(url: &str, http: &HttpConfig) -> Result<Vec<u8>> {
    let client = http.build_client();

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching {url}"));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = request_bytes(&client, url).await;

    pb.finish_and_clear();

    if let Err(e) = &result {
        tracing::warn!(url, error = %e, "catalog fetch failed");
    }
    result
}

async fn request_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GalleryError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
