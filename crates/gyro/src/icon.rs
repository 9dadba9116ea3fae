use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Lookup size requested from the icon theme. SVG themes ignore it.
const LOOKUP_SIZE: u16 = 256;

/// Either a freedesktop icon-theme name (`list-add-symbolic`) or an absolute
/// path to an image file.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl IconName {
    /// Single uppercase character used when no image could be found.
    pub fn initial(&self) -> String {
        let stem = Path::new(self.as_str())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.as_str());
        stem.chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

static CACHE: OnceLock<RwLock<HashMap<IconName, Option<PathBuf>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<IconName, Option<PathBuf>>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    if let Some(hit) = cache().read().get(icon_name) {
        return hit.clone();
    }

    let found = resolve(icon_name);
    if found.is_none() {
        log::warn!("No icon found for '{}'", icon_name);
    }
    cache().write().insert(icon_name.clone(), found.clone());
    found
}

fn resolve(icon_name: &IconName) -> Option<PathBuf> {
    let path = Path::new(icon_name.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(LOOKUP_SIZE)
        .with_scale(1)
        .find()
}
