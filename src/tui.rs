//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した表情ギャラリーを提供する。

mod gallery;

pub use gallery::run as run_gallery;
