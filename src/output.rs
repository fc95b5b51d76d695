use owo_colors::OwoColorize;
use std::fmt;

/// 一覧表示の末尾に出すサマリ行
pub struct ResultSummary {
    pub prefix: String,
    pub message: String,
}

impl ResultSummary {
    pub fn format(shown: usize, total: usize) -> Self {
        match (shown, total) {
            (_, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "Catalog is empty".to_string(),
            },
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: "No emoji matched".to_string(),
            },
            (s, t) if s == t => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} emoji", s),
            },
            (s, t) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} emoji shown", s, t),
            },
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
