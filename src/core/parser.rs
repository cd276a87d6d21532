use crate::domain::model::LinkEntry;
use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

// `.` 不跨行，因此每筆連結必須寫在同一行內
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\. \[(.+?)\]\(\./(.+?)\)").expect("link pattern is a valid regex")
});

/// 擷取文件中所有編號連結，保留出現順序
pub fn parse_link_entries(content: &str) -> Vec<LinkEntry> {
    LINK_PATTERN
        .captures_iter(content)
        .map(|caps| LinkEntry::new(&caps[1], &caps[2]))
        .collect()
}

/// 檢查連結路徑是否可寫入，回傳拒絕原因。
/// `contain` 為 true 時，不允許 `..` 跳出輸出目錄
pub fn check_link_path(path: &str, contain: bool) -> Option<String> {
    let mut has_normal = false;

    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            Component::ParentDir if contain => {
                return Some("path must not contain '..' components".to_string())
            }
            Component::ParentDir => {}
            Component::RootDir | Component::Prefix(_) => {
                return Some("path must be relative".to_string())
            }
        }
    }

    if has_normal {
        None
    } else {
        Some("path does not name a file".to_string())
    }
}
