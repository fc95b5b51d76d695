use std::path::PathBuf;
use thiserror::Error;

/// ギャラリー統一エラー型
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config {}: {}", .path.display(), .message)]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Emoji not found: {0}")]
    EmojiNotFound(String),

    #[error("Terminal error: {0}")]
    Tui(String),

    #[error("Generate error: {0}")]
    Generate(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// カタログ読み込み失敗（取得・デコード）かどうか
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            GalleryError::Network(_)
                | GalleryError::HttpStatus { .. }
                | GalleryError::Io(_)
                | GalleryError::Json(_)
        )
    }

    /// エラーコード（カテゴリ接頭辞付き）
    pub fn code(&self) -> &'static str {
        match self {
            GalleryError::Network(_) => "NET001",
            GalleryError::HttpStatus { status, .. } if *status >= 500 => "API004",
            GalleryError::HttpStatus { status: 404, .. } => "API003",
            GalleryError::HttpStatus { .. } => "API001",
            GalleryError::Io(_) => "IO001",
            GalleryError::Json(_) => "CAT001",
            GalleryError::InvalidConfig { .. } => "CFG001",
            GalleryError::EmojiNotFound(_) => "EMO001",
            GalleryError::Tui(_) => "TUI001",
            GalleryError::Generate(_) => "GEN001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> GalleryError {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        GalleryError::Json(err)
    }

    #[test]
    fn load_failures_are_distinguishable() {
        assert!(json_error().is_load_failure());
        assert!(GalleryError::HttpStatus {
            url: "https://example.com/a.json".to_string(),
            status: 404,
        }
        .is_load_failure());
        assert!(
            GalleryError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
                .is_load_failure()
        );
    }

    #[test]
    fn other_errors_are_not_load_failures() {
        assert!(!GalleryError::EmojiNotFound("x".to_string()).is_load_failure());
        assert!(!GalleryError::Generate("x".to_string()).is_load_failure());
        assert!(!GalleryError::InvalidConfig {
            path: PathBuf::from("config.toml"),
            message: "bad".to_string(),
        }
        .is_load_failure());
    }

    #[test]
    fn http_status_codes() {
        let err = |status| GalleryError::HttpStatus {
            url: String::new(),
            status,
        };
        assert_eq!(err(404).code(), "API003");
        assert_eq!(err(503).code(), "API004");
        assert_eq!(err(403).code(), "API001");
    }

    #[test]
    fn display_includes_url_and_status() {
        let err = GalleryError::HttpStatus {
            url: "https://example.com/a.json".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error: https://example.com/a.json returned status 500"
        );
    }
}
