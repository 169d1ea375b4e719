use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use usvg::fontdb;

use crate::foundation::error::{TraceGifError, TraceGifResult};

/// File name of the preferred terminal font.
pub const DEFAULT_FONT_FILE: &str = "DejaVuSansMono.ttf";
/// Family name of the preferred terminal font.
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans Mono";
/// Text size used for every line of a frame.
pub const DEFAULT_FONT_SIZE_PX: f32 = 18.0;

/// How a [`MonoFont`] was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// Loaded from an explicitly configured path.
    Explicit,
    /// Matched the requested file or family name.
    Named,
    /// The requested font was unavailable; another installed face stands in.
    Fallback,
}

impl std::fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::Named => "named",
            Self::Fallback => "fallback",
        })
    }
}

/// Font bytes and metadata used by the text renderer.
#[derive(Clone)]
pub struct MonoFont {
    /// Raw font file bytes.
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes` (non-zero for collections).
    pub index: u32,
    /// Primary family name reported by the face.
    pub family: String,
    /// File the face was loaded from, when known.
    pub source: Option<PathBuf>,
    /// How the face was found.
    pub origin: FontOrigin,
    /// Text size in pixels.
    pub size_px: f32,
}

impl std::fmt::Debug for MonoFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonoFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .field("source", &self.source)
            .field("origin", &self.origin)
            .field("size_px", &self.size_px)
            .finish()
    }
}

/// Where and how to look for the terminal font.
#[derive(Clone, Debug)]
pub struct FontRequest {
    /// Explicit font file. When set, failing to load it is an error.
    pub path: Option<PathBuf>,
    /// File name to look for among discovered fonts.
    pub file_name: String,
    /// Family name to look for when no file name matches.
    pub family: String,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub search_dirs: Vec<PathBuf>,
    /// Include fonts installed on the system.
    pub system_fonts: bool,
    /// Text size in pixels.
    pub size_px: f32,
}

impl Default for FontRequest {
    fn default() -> Self {
        Self {
            path: None,
            file_name: DEFAULT_FONT_FILE.to_string(),
            family: DEFAULT_FONT_FAMILY.to_string(),
            search_dirs: vec![PathBuf::from("fonts")],
            system_fonts: true,
            size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl FontRequest {
    /// Resolve the request to a concrete face.
    ///
    /// Lookup order: explicit path, matching file name, matching family, a monospace face, any
    /// face. `Ok(None)` means no font is installed at all; frames then render without text.
    pub fn resolve(&self) -> TraceGifResult<Option<MonoFont>> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(TraceGifError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        if let Some(path) = &self.path {
            return self.load_explicit(path).map(Some);
        }

        let db = self.build_fontdb();
        let font = self.resolve_in(&db);
        if font.is_none() {
            tracing::warn!("no fonts available, frames will render without text");
        }
        Ok(font)
    }

    fn resolve_in(&self, db: &fontdb::Database) -> Option<MonoFont> {
        let named = self
            .named_candidates(db)
            .into_iter()
            .find_map(|id| self.load_face(db, id, FontOrigin::Named));
        if named.is_some() {
            return named;
        }

        tracing::warn!(
            file = %self.file_name,
            family = %self.family,
            "requested font not found, falling back"
        );
        fallback_candidates(db)
            .into_iter()
            .find_map(|id| self.load_face(db, id, FontOrigin::Fallback))
    }

    fn load_explicit(&self, path: &Path) -> TraceGifResult<MonoFont> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;

        let mut db = fontdb::Database::new();
        db.load_font_data(bytes.clone());
        let face = db.faces().next().ok_or_else(|| {
            TraceGifError::font(format!("'{}' contains no usable font face", path.display()))
        })?;

        Ok(MonoFont {
            index: face.index,
            family: primary_family(face),
            bytes: Arc::new(bytes),
            source: Some(path.to_path_buf()),
            origin: FontOrigin::Explicit,
            size_px: self.size_px,
        })
    }

    fn build_fontdb(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();
        if self.system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.search_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        db
    }

    /// Faces matching the requested file name, then the best match for the requested family.
    fn named_candidates(&self, db: &fontdb::Database) -> Vec<fontdb::ID> {
        let mut ids: Vec<fontdb::ID> = db
            .faces()
            .filter(|face| {
                face_path(face)
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(&self.file_name))
            })
            .map(|face| face.id)
            .collect();

        let has_family = db.faces().any(|face| {
            face.families
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(&self.family))
        });
        if has_family {
            ids.extend(db.query(&regular_query(&[fontdb::Family::Name(&self.family)])));
        }
        ids
    }

    fn load_face(
        &self,
        db: &fontdb::Database,
        id: fontdb::ID,
        origin: FontOrigin,
    ) -> Option<MonoFont> {
        let face = db.face(id)?;
        let Some((bytes, index)) = db.with_face_data(id, |data, index| (data.to_vec(), index))
        else {
            tracing::debug!(family = %primary_family(face), "font face data unreadable");
            return None;
        };
        tracing::debug!(family = %primary_family(face), %origin, "resolved font");
        Some(MonoFont {
            bytes: Arc::new(bytes),
            index,
            family: primary_family(face),
            source: face_path(face).map(Path::to_path_buf),
            origin,
            size_px: self.size_px,
        })
    }
}

/// Generic monospace match, then every monospaced face, then every face.
fn fallback_candidates(db: &fontdb::Database) -> Vec<fontdb::ID> {
    let preferred = db.query(&regular_query(&[fontdb::Family::Monospace]));
    let monospaced = db.faces().filter(|f| f.monospaced).map(|f| f.id);
    let rest = db.faces().filter(|f| !f.monospaced).map(|f| f.id);
    preferred.into_iter().chain(monospaced).chain(rest).collect()
}

fn regular_query<'a>(families: &'a [fontdb::Family<'a>]) -> fontdb::Query<'a> {
    fontdb::Query {
        families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    }
}

fn primary_family(face: &fontdb::FaceInfo) -> String {
    face.families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| face.post_script_name.clone())
}

fn face_path(face: &fontdb::FaceInfo) -> Option<&Path> {
    match &face.source {
        fontdb::Source::File(path) => Some(path.as_path()),
        fontdb::Source::SharedFile(path, _) => Some(path.as_path()),
        _ => None,
    }
}

fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}
