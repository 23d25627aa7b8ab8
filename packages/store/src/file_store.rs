//! # Filesystem-backed key/value storage
//!
//! [`FileStorage`] persists each key as one small file under a base
//! directory. The desktop launcher uses it so the session survives restarts,
//! the same way the browser keeps `localStorage`.
//!
//! ```text
//! <base_dir>/
//! ├── akram_token   # bearer token
//! └── akram_user    # user profile JSON
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `akram-monitor` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/akram-monitor/` |
//! | Linux | `~/.local/share/akram-monitor/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\akram-monitor\` |

use std::path::PathBuf;

use crate::storage::KeyValueStore;

/// Filesystem-backed storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so a key can never
        // escape the base directory.
        let file: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(file)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}
