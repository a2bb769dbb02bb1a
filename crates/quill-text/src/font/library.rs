use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;

use crate::error::Result;
use crate::font::FontFace;

/// Key identifying a font within the library.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Font index within the file (for collections).
    pub index: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, index: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index: index as u32,
        }
    }
}

/// Explicitly constructed font service.
///
/// This replaces ambient process-wide font library state: callers build one
/// `FontLibrary` per process, pass it where faces are needed, and drop it at
/// shutdown. Faces are shared via `Arc`, so the library can be dropped while
/// layouts still hold faces.
#[derive(Debug, Default)]
pub struct FontLibrary {
    faces: HashMap<FontKey, Arc<FontFace>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
        }
    }

    /// Get a font face from the library or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: usize) -> Result<Arc<FontFace>> {
        let key = FontKey::new(&path, index);
        if let Some(face) = self.faces.get(&key) {
            return Ok(face.clone());
        }
        let face = Arc::new(FontFace::from_path(&key.path, index)?);
        self.faces.insert(key, face.clone());
        Ok(face)
    }

    /// Insert an already constructed font face under an explicit key.
    pub fn insert(&mut self, key: FontKey, face: Arc<FontFace>) {
        self.faces.insert(key, face);
    }

    /// Retrieve a face by key if it was loaded.
    pub fn get(&self, key: &FontKey) -> Option<Arc<FontFace>> {
        self.faces.get(key).cloned()
    }
}
