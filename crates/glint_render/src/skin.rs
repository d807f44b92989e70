//! Skin metadata loading and region resolution.
//!
//! GUI skins pack widget graphics into one sheet; a JSON metadata file
//! names rectangular pixel regions of that sheet. `SkinRegistry::build`
//! uploads the sheet once through any `TextureLoader` and hands out one
//! `TextureHandle` per named region, so widgets drawing different regions
//! still batch into a single draw call.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use glint_core::render::{TextureHandle, TextureLoader};

use crate::texture::region_uv;

#[derive(Debug, Deserialize, Clone)]
pub struct SkinFile {
    pub version: String,
    pub skin_id: String,
    pub texture: SkinTexture,
    pub regions: Vec<SkinRegion>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkinTexture {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkinRegion {
    pub name: String,
    pub rect_px: SkinRectPx,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SkinRectPx {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

pub fn load_skin_from_path(path: &Path) -> Result<SkinFile, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read skin metadata {}: {e}", path.display()))?;
    let skin: SkinFile = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse skin metadata {}: {e}", path.display()))?;
    validate_skin(&skin)?;
    Ok(skin)
}

fn validate_skin(skin: &SkinFile) -> Result<(), String> {
    if skin.version != "0.1" {
        return Err(format!(
            "Skin validation failed: unsupported version '{}'",
            skin.version
        ));
    }
    if skin.texture.width == 0 || skin.texture.height == 0 {
        return Err("Skin validation failed: texture width/height must be > 0".to_string());
    }

    let mut names = HashSet::new();
    for region in &skin.regions {
        if !names.insert(region.name.clone()) {
            return Err(format!(
                "Skin validation failed: duplicate region name '{}'",
                region.name
            ));
        }
        if region.rect_px.w == 0 || region.rect_px.h == 0 {
            return Err(format!(
                "Skin validation failed: region '{}' has zero-sized rect",
                region.name
            ));
        }
        let right = region.rect_px.x.checked_add(region.rect_px.w).ok_or_else(|| {
            format!(
                "Skin validation failed: region '{}' rect overflows u32 range",
                region.name
            )
        })?;
        let bottom = region.rect_px.y.checked_add(region.rect_px.h).ok_or_else(|| {
            format!(
                "Skin validation failed: region '{}' rect overflows u32 range",
                region.name
            )
        })?;
        if right > skin.texture.width || bottom > skin.texture.height {
            return Err(format!(
                "Skin validation failed: region '{}' rect exceeds sheet bounds",
                region.name
            ));
        }
    }

    Ok(())
}

/// Name -> handle map over one uploaded skin sheet.
#[derive(Debug, Clone)]
pub struct SkinRegistry {
    pub skin_id: String,
    regions: HashMap<String, TextureHandle>,
}

impl SkinRegistry {
    /// Upload the sheet and derive a region handle per name. Returns None
    /// (after the loader has logged) when the sheet texture cannot be
    /// loaded.
    pub fn build(skin: &SkinFile, loader: &mut dyn TextureLoader) -> Option<Self> {
        let sheet = loader.load_file(&skin.texture.path)?;

        // Region rects were validated against the declared sheet size; a
        // stale metadata file pointing at a resized sheet would otherwise
        // yield silently wrong UVs.
        if let Some((w, h)) = loader.texture_size(sheet.id) {
            if (w, h) != (skin.texture.width, skin.texture.height) {
                log::error!(
                    "Skin '{}' declares a {}x{} sheet but '{}' is {w}x{h}",
                    skin.skin_id,
                    skin.texture.width,
                    skin.texture.height,
                    skin.texture.path
                );
                return None;
            }
        }

        let mut regions = HashMap::new();
        for region in &skin.regions {
            let r = region.rect_px;
            regions.insert(
                region.name.clone(),
                TextureHandle {
                    id: sheet.id,
                    uv: region_uv(
                        skin.texture.width,
                        skin.texture.height,
                        r.x,
                        r.y,
                        r.x + r.w - 1,
                        r.y + r.h - 1,
                    ),
                },
            );
        }
        Some(Self {
            skin_id: skin.skin_id.clone(),
            regions,
        })
    }

    pub fn resolve(&self, name: &str) -> Option<TextureHandle> {
        self.regions.get(name).copied()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::render::TextureId;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "glint_skin_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    const VALID_SKIN: &str = r#"
    {
      "version": "0.1",
      "skin_id": "test",
      "texture": { "path": "assets/skins/test.png", "width": 64, "height": 64 },
      "regions": [
        { "name": "button", "rect_px": { "x": 0, "y": 0, "w": 32, "h": 32 } },
        { "name": "button_hover", "rect_px": { "x": 32, "y": 0, "w": 32, "h": 32 } }
      ]
    }
    "#;

    #[test]
    fn load_skin_from_path_parses_valid_file() {
        let path = temp_file_path("valid");
        fs::write(&path, VALID_SKIN).expect("failed to write temp skin file");

        let skin = load_skin_from_path(&path).expect("skin should load");
        assert_eq!(skin.skin_id, "test");
        assert_eq!(skin.regions.len(), 2);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_skin_rejects_duplicate_region_names() {
        let path = temp_file_path("dup");
        let json = r#"
        {
          "version": "0.1",
          "skin_id": "test",
          "texture": { "path": "t.png", "width": 64, "height": 64 },
          "regions": [
            { "name": "button", "rect_px": { "x": 0, "y": 0, "w": 8, "h": 8 } },
            { "name": "button", "rect_px": { "x": 8, "y": 0, "w": 8, "h": 8 } }
          ]
        }
        "#;
        fs::write(&path, json).expect("failed to write temp skin file");

        let err = load_skin_from_path(&path).expect_err("duplicate should fail");
        assert!(err.contains("duplicate region name"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_skin_rejects_out_of_bounds_rect() {
        let path = temp_file_path("oob");
        let json = r#"
        {
          "version": "0.1",
          "skin_id": "test",
          "texture": { "path": "t.png", "width": 64, "height": 64 },
          "regions": [
            { "name": "big", "rect_px": { "x": 32, "y": 0, "w": 64, "h": 8 } }
          ]
        }
        "#;
        fs::write(&path, json).expect("failed to write temp skin file");

        let err = load_skin_from_path(&path).expect_err("out of bounds should fail");
        assert!(err.contains("exceeds sheet bounds"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_skin_rejects_overflowing_rect() {
        let path = temp_file_path("overflow");
        let json = r#"
        {
          "version": "0.1",
          "skin_id": "test",
          "texture": { "path": "t.png", "width": 64, "height": 64 },
          "regions": [
            { "name": "huge", "rect_px": { "x": 4294967295, "y": 0, "w": 8, "h": 8 } }
          ]
        }
        "#;
        fs::write(&path, json).expect("failed to write temp skin file");

        let err = load_skin_from_path(&path).expect_err("overflow should fail");
        assert!(err.contains("overflows u32 range"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_skin_rejects_zero_sized_rect() {
        let path = temp_file_path("zero");
        let json = r#"
        {
          "version": "0.1",
          "skin_id": "test",
          "texture": { "path": "t.png", "width": 64, "height": 64 },
          "regions": [
            { "name": "empty", "rect_px": { "x": 0, "y": 0, "w": 0, "h": 8 } }
          ]
        }
        "#;
        fs::write(&path, json).expect("failed to write temp skin file");

        let err = load_skin_from_path(&path).expect_err("zero rect should fail");
        assert!(err.contains("zero-sized rect"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_skin_rejects_unknown_version() {
        let path = temp_file_path("version");
        let json = r#"
        {
          "version": "9.9",
          "skin_id": "test",
          "texture": { "path": "t.png", "width": 64, "height": 64 },
          "regions": []
        }
        "#;
        fs::write(&path, json).expect("failed to write temp skin file");

        let err = load_skin_from_path(&path).expect_err("bad version should fail");
        assert!(err.contains("unsupported version"));

        let _ = fs::remove_file(path);
    }

    /// Loader double that records requests and issues sequential handles
    /// without a GPU.
    struct FakeLoader {
        loaded: Vec<String>,
        fail: bool,
        sheet_size: (u32, u32),
    }

    impl FakeLoader {
        fn new() -> Self {
            Self {
                loaded: Vec::new(),
                fail: false,
                sheet_size: (64, 64),
            }
        }
    }

    impl TextureLoader for FakeLoader {
        fn load_file(&mut self, path: &str) -> Option<TextureHandle> {
            if self.fail {
                return None;
            }
            self.loaded.push(path.to_string());
            Some(TextureHandle::whole(TextureId(self.loaded.len() as u32)))
        }

        fn load_file_region(
            &mut self,
            path: &str,
            _min_x: u32,
            _min_y: u32,
            _max_x: u32,
            _max_y: u32,
        ) -> Option<TextureHandle> {
            self.load_file(path)
        }

        fn load_rgba(&mut self, _pixels: &[u8], _width: u32, _height: u32) -> Option<TextureHandle> {
            None
        }

        fn load_rgba_region(
            &mut self,
            _pixels: &[u8],
            _width: u32,
            _height: u32,
            _min_x: u32,
            _min_y: u32,
            _max_x: u32,
            _max_y: u32,
        ) -> Option<TextureHandle> {
            None
        }

        fn texture_size(&self, _id: TextureId) -> Option<(u32, u32)> {
            Some(self.sheet_size)
        }

        fn clean(&mut self) {
            self.loaded.clear();
        }
    }

    #[test]
    fn registry_uploads_sheet_once_and_shares_its_id() {
        let skin: SkinFile = serde_json::from_str(VALID_SKIN).expect("parse");
        let mut loader = FakeLoader::new();

        let registry = SkinRegistry::build(&skin, &mut loader).expect("build");
        assert_eq!(loader.loaded, vec!["assets/skins/test.png".to_string()]);
        assert_eq!(registry.region_count(), 2);

        let a = registry.resolve("button").expect("button");
        let b = registry.resolve("button_hover").expect("button_hover");
        assert_eq!(a.id, b.id);
        assert_ne!(a.uv, b.uv);
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn registry_region_uv_selects_pixel_rect() {
        let skin: SkinFile = serde_json::from_str(VALID_SKIN).expect("parse");
        let mut loader = FakeLoader::new();
        let registry = SkinRegistry::build(&skin, &mut loader).expect("build");

        // "button" is the left 32x32 of a 64x64 sheet: top half of the
        // sheet in image rows, upper-left quadrant in bottom-left UV space.
        let handle = registry.resolve("button").expect("button");
        assert_eq!(handle.uv, [0.0, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn registry_build_rejects_mismatched_sheet_dimensions() {
        let skin: SkinFile = serde_json::from_str(VALID_SKIN).expect("parse");
        let mut loader = FakeLoader::new();
        // Metadata declares 64x64 but the sheet on disk was resized.
        loader.sheet_size = (128, 128);
        assert!(SkinRegistry::build(&skin, &mut loader).is_none());
    }

    #[test]
    fn registry_build_fails_when_sheet_load_fails() {
        let skin: SkinFile = serde_json::from_str(VALID_SKIN).expect("parse");
        let mut loader = FakeLoader::new();
        loader.fail = true;
        assert!(SkinRegistry::build(&skin, &mut loader).is_none());
    }
}
