// educe_core/src/assets/manifest.rs
use serde::{Deserialize, Serialize};

/// World size of a level, in screens.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelMeta {
    pub screens_wide: usize,
    pub screens_tall: usize,
}

impl Default for LevelMeta {
    fn default() -> Self {
        Self {
            screens_wide: 1,
            screens_tall: 1,
        }
    }
}

/// One level the hub can offer: an id, the world file to lazily load, and
/// display metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LevelEntry {
    pub id: String,
    pub path: String,
    pub meta: LevelMeta,
}

/// The level manifest file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LevelManifest {
    pub levels: Vec<LevelEntry>,
}

impl LevelManifest {
    pub fn level(&self, id: &str) -> Option<&LevelEntry> {
        self.levels.iter().find(|level| level.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_with_defaulted_meta() {
        let json = r#"{
            "levels": [
                {"id": "hub", "path": "levels/hub.json"},
                {"id": "caves", "path": "levels/caves.json",
                 "meta": {"screensWide": 2, "screensTall": 2}}
            ]
        }"#;
        let manifest: LevelManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.levels.len(), 2);
        assert_eq!(manifest.level("hub").unwrap().meta.screens_wide, 1);
        assert_eq!(manifest.level("caves").unwrap().meta.screens_tall, 2);
        assert!(manifest.level("missing").is_none());
    }
}
