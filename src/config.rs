//! 設定ファイルと HTTP 設定
//!
//! `~/.owo/config.toml`（または `--config` / `OWO_CONFIG`）を読み込む。
//! ファイルが無ければ既定値で動作する。

use crate::env::EnvVar;
use crate::error::{GalleryError, Result};
use crate::source::CatalogSource;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 既定のカタログパス
pub const DEFAULT_CATALOG: &str = ".json/artalk-emoji.json";

/// 既定のタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 既定の User-Agent
const DEFAULT_USER_AGENT: &str = "owo-gallery";

/// 設定ファイルのルート構造
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// カタログのパスまたは URL
    pub catalog: Option<String>,
    /// HTTP タイムアウト（秒）。0 でタイムアウトなし
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    /// `owo generate` の既定値
    pub generate: GenerateConfig,
}

/// `[generate]` テーブル
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub artalk_base_url: Option<String>,
    pub twikoo_base_url: Option<String>,
    pub folders: Option<Vec<String>>,
}

impl GalleryConfig {
    /// 既定の設定ファイルパス（`OWO_CONFIG` > `~/.owo/config.toml`）
    pub fn default_path() -> Option<PathBuf> {
        EnvVar::get(EnvVar::CONFIG).map(PathBuf::from).or_else(|| {
            EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".owo").join("config.toml"))
        })
    }

    /// 設定を読み込む
    ///
    /// 明示されたパスが存在しない場合はエラー、既定パスが存在しない場合は既定値。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GalleryError::InvalidConfig {
                        path: path.to_path_buf(),
                        message: "file not found".to_string(),
                    });
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| GalleryError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// TOML 文字列をパース
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| GalleryError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// カタログソースを決定する
    ///
    /// 優先順位: CLI 引数 > `OWO_CATALOG` > 設定ファイル > 既定パス
    pub fn catalog_source(&self, cli: Option<&str>) -> CatalogSource {
        let value = cli
            .map(str::to_string)
            .or_else(|| EnvVar::get(EnvVar::CATALOG))
            .or_else(|| self.catalog.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_CATALOG.to_string());
        CatalogSource::parse(&value)
    }

    /// HTTP 設定を構築
    pub fn http(&self) -> HttpConfig {
        let timeout = match self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        HttpConfig {
            timeout,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// HTTP設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        GalleryConfig::default().http()
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
