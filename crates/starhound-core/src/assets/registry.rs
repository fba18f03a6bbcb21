use crate::api::SpriteId;
use crate::assets::manifest::SpriteManifest;
use crate::assets::AssetError;

/// Registry of named sprites, built from a SpriteManifest.
/// Provides name-based sprite id lookup for game code.
pub struct SpriteRegistry {
    names: Vec<String>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a registry from a parsed SpriteManifest. Ids follow manifest
    /// order, so the same manifest always yields the same ids.
    pub fn from_manifest(manifest: &SpriteManifest) -> Self {
        Self {
            names: manifest.sprites.iter().map(|s| s.name.clone()).collect(),
        }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<SpriteId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| SpriteId(i as u32))
    }

    /// Look up a sprite the game cannot run without.
    pub fn require(&self, name: &str) -> Result<SpriteId, AssetError> {
        self.get(name)
            .ok_or_else(|| AssetError::MissingSprite(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SpriteRegistry {
        let json = r#"{
            "sprites": [
                { "name": "ship", "path": "ship.png" },
                { "name": "enemy", "path": "enemy.png" },
                { "name": "bullet", "path": "bullet.png" }
            ]
        }"#;
        let manifest = SpriteManifest::from_json(json).unwrap();
        SpriteRegistry::from_manifest(&manifest)
    }

    #[test]
    fn ids_follow_manifest_order() {
        let reg = registry();
        assert_eq!(reg.get("ship"), Some(SpriteId(0)));
        assert_eq!(reg.get("enemy"), Some(SpriteId(1)));
        assert_eq!(reg.get("bullet"), Some(SpriteId(2)));
    }

    #[test]
    fn unknown_returns_none() {
        let reg = registry();
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn require_reports_the_missing_name() {
        let reg = registry();
        assert!(reg.require("ship").is_ok());
        match reg.require("boss") {
            Err(AssetError::MissingSprite(name)) => assert_eq!(name, "boss"),
            other => panic!("expected MissingSprite, got {other:?}"),
        }
    }
}
