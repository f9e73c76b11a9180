//! Directory-backed asset oracle.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use skirmish_core::{AssetError, AssetOracle, IconHandle, Race};

/// Resolves icons to files under `<root>/<race>/<icon>`.
///
/// `icon` must be a single file name, so data files cannot reach outside the
/// race directory. Each distinct file gets a stable handle id on first
/// resolution; resolving the same icon again returns the same handle.
#[derive(Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
    loaded: Mutex<HashMap<PathBuf, u32>>,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct icons resolved so far.
    pub fn loaded_count(&self) -> usize {
        self.loaded.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl AssetOracle for DirectoryAssets {
    fn resolve_icon(&self, race: Race, icon: &str) -> Result<IconHandle, AssetError> {
        if !is_plain_file_name(icon) {
            tracing::warn!(icon, "rejected icon name");
            return Err(AssetError::InvalidName {
                icon: icon.to_string(),
            });
        }

        let path = self.root.join(race.path()).join(icon);
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "icon not found");
            return Err(AssetError::NotFound {
                race,
                icon: icon.to_string(),
            });
        }

        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());
        let id = match loaded.get(&path) {
            Some(id) => *id,
            None => {
                let id = u32::try_from(loaded.len())
                    .map_err(|_| AssetError::HandlesExhausted)?;
                loaded.insert(path.clone(), id);
                id
            }
        };

        Ok(IconHandle::new(id, path.display().to_string()))
    }
}

fn is_plain_file_name(icon: &str) -> bool {
    let mut components = Path::new(icon).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets_with(files: &[&str]) -> (tempfile::TempDir, DirectoryAssets) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, b"icon").unwrap();
        }
        let assets = DirectoryAssets::new(dir.path());
        (dir, assets)
    }

    #[test]
    fn resolves_by_race_directory() {
        let (_dir, assets) = assets_with(&["human/peasant.png", "orc/peon.png"]);

        let peasant = assets.resolve_icon(Race::Human, "peasant.png").unwrap();
        assert!(peasant.source().ends_with("peasant.png"));

        let err = assets.resolve_icon(Race::Orc, "peasant.png").unwrap_err();
        assert_eq!(
            err,
            AssetError::NotFound {
                race: Race::Orc,
                icon: "peasant.png".to_string()
            }
        );
    }

    #[test]
    fn same_icon_keeps_its_handle() {
        let (_dir, assets) = assets_with(&["orc/peon.png", "orc/grunt.png"]);

        let first = assets.resolve_icon(Race::Orc, "peon.png").unwrap();
        let grunt = assets.resolve_icon(Race::Orc, "grunt.png").unwrap();
        let again = assets.resolve_icon(Race::Orc, "peon.png").unwrap();

        assert_eq!(first, again);
        assert_ne!(first.id(), grunt.id());
        assert_eq!(assets.loaded_count(), 2);
    }

    #[test]
    fn icon_names_cannot_leave_the_race_directory() {
        let (dir, assets) = assets_with(&["human/peasant.png", "secret.png"]);
        let absolute = dir.path().join("secret.png");

        for icon in [
            "../secret.png",
            "../human/peasant.png",
            "nested/peasant.png",
            absolute.to_str().unwrap(),
            "",
            ".",
            "..",
        ] {
            assert_eq!(
                assets.resolve_icon(Race::Human, icon),
                Err(AssetError::InvalidName {
                    icon: icon.to_string()
                }),
                "{icon:?} should be rejected"
            );
        }
        assert_eq!(assets.loaded_count(), 0);
        assert!(assets.resolve_icon(Race::Human, "peasant.png").is_ok());
    }
}
