//! The `.rst`/`.po` file pair being worked on.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::LoadError;
use crate::formats::po::{parse_catalog, write_catalog, Catalog};
use crate::formats::rst::{extract_paragraphs, ExtractOptions};
use crate::session::PairingSession;

pub const DEFAULT_MERGED_DIR: &str = "merged";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub rst_path: PathBuf,
    pub po_path: PathBuf,
}

impl Workspace {
    /// `<basename>.rst` and `<basename>.po`.
    pub fn from_basename(basename: &str) -> Self {
        Self {
            rst_path: PathBuf::from(format!("{basename}.rst")),
            po_path: PathBuf::from(format!("{basename}.po")),
        }
    }

    pub fn ensure_exists(&self) -> Result<(), LoadError> {
        for path in [&self.rst_path, &self.po_path] {
            if !path.is_file() {
                return Err(LoadError::NotFound { path: path.clone() });
            }
        }
        Ok(())
    }

    pub fn load(&self, options: &ExtractOptions) -> Result<PairingSession, LoadError> {
        let catalog = parse_catalog(&read_text(&self.po_path)?);
        let paragraphs = extract_paragraphs(&read_text(&self.rst_path)?, options);
        info!(
            "loaded {} messages from {} and {} paragraphs from {}",
            catalog.messages.len(),
            self.po_path.display(),
            paragraphs.len(),
            self.rst_path.display()
        );
        Ok(PairingSession::new(paragraphs, catalog))
    }

    /// `<dir of the .po>/<merged_dir>/<file name of the .po>`.
    pub fn merged_path(&self, merged_dir: &str) -> PathBuf {
        let parent = self.po_path.parent().unwrap_or_else(|| Path::new(""));
        let file_name = self
            .po_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.po_path.clone());
        parent.join(merged_dir).join(file_name)
    }

    pub fn save_merged(&self, catalog: &Catalog, merged_dir: &str) -> Result<PathBuf, LoadError> {
        let path = self.merged_path(merged_dir);
        save_catalog(catalog, &path)?;
        Ok(path)
    }
}

pub fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Writes the catalog, creating missing parent directories.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), LoadError> {
    let write_err = |source: std::io::Error| LoadError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, write_catalog(catalog)).map_err(write_err)?;
    info!("saved {} messages to {}", catalog.messages.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn t_ws_001_basename_paths() {
        let ws = Workspace::from_basename("docs/intro");
        assert_eq!(ws.rst_path, PathBuf::from("docs/intro.rst"));
        assert_eq!(ws.po_path, PathBuf::from("docs/intro.po"));
        assert_eq!(
            ws.merged_path(DEFAULT_MERGED_DIR),
            PathBuf::from("docs/merged/intro.po")
        );
    }

    #[test]
    fn t_ws_002_merged_path_without_directory() {
        let ws = Workspace::from_basename("intro");
        assert_eq!(ws.merged_path("out"), PathBuf::from("out/intro.po"));
    }

    #[test]
    fn t_ws_003_load_and_save_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("guide");
        std::fs::write(base.with_extension("rst"), "Szia\n\nVilág\n").expect("write rst");
        std::fs::write(
            base.with_extension("po"),
            "\u{feff}#: guide.rst:1\nmsgid \"Hello\"\nmsgstr \"\"\n",
        )
        .expect("write po");

        let ws = Workspace::from_basename(base.to_str().expect("utf-8 path"));
        ws.ensure_exists().expect("files exist");
        let mut session = ws.load(&ExtractOptions::default()).expect("load");
        assert_eq!(session.paragraphs().len(), 2);
        session.pair_paragraph(0).expect("pair");

        let saved = ws
            .save_merged(session.catalog(), DEFAULT_MERGED_DIR)
            .expect("save");
        assert_eq!(saved, dir.path().join("merged").join("guide.po"));
        assert_eq!(
            std::fs::read_to_string(saved).expect("read saved"),
            "#: guide.rst:1\nmsgid \"Hello\"\nmsgstr \"Szia\"\n"
        );
    }

    #[test]
    fn t_ws_004_missing_files_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ws = Workspace::from_basename(dir.path().join("nothing").to_str().expect("path"));
        let err = ws.ensure_exists().expect_err("missing");
        assert!(err.to_string().starts_with("no file: "));
        assert!(err.to_string().ends_with("nothing.rst"));
    }

    #[test]
    fn t_ws_005_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.po");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");
        assert!(matches!(
            read_text(&path),
            Err(LoadError::NotUtf8 { .. })
        ));
    }
}
