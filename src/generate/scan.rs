//! 表情フォルダの走査

use std::path::Path;
use walkdir::WalkDir;

/// フォルダ直下の表情ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiFile {
    /// ファイル名（拡張子付き）
    pub file_name: String,
    /// 拡張子を除いたファイル名
    pub stem: String,
}

/// フォルダ直下の通常ファイルをファイル名順で列挙する
///
/// フォルダが存在しない、またはディレクトリでない場合は `None`。
pub fn scan_folder(dir: &Path) -> Option<Vec<EmojiFile>> {
    if !dir.is_dir() {
        return None;
    }

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = entry.path();
            EmojiFile {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                stem: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }
        })
        .collect();

    Some(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_folder_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_folder(&dir.path().join("nope")).is_none());
    }

    #[test]
    fn file_instead_of_folder_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("qingzhu");
        std::fs::write(&file, "").unwrap();
        assert!(scan_folder(&file).is_none());
    }

    #[test]
    fn lists_direct_files_sorted_and_skips_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.gif"), "").unwrap();
        std::fs::write(dir.path().join("a.b.png"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.png"), "").unwrap();

        let files = scan_folder(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                EmojiFile {
                    file_name: "a.b.png".to_string(),
                    stem: "a.b".to_string(),
                },
                EmojiFile {
                    file_name: "b.gif".to_string(),
                    stem: "b".to_string(),
                },
            ]
        );
    }
}
