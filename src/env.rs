/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// カタログソースの上書き
    pub const CATALOG: &'static str = "OWO_CATALOG";

    /// 設定ファイルパスの上書き
    pub const CONFIG: &'static str = "OWO_CONFIG";

    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
