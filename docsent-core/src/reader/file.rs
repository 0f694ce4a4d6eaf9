//! Documents read from a file or a directory tree

use super::{CollectionSource, DocumentReader};
use crate::config::ReaderConfig;
use crate::document::Document;
use crate::error::{ReadError, ReaderError};
use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

/// Reader yielding one document per file
///
/// The root may be a single file or a directory. Directories are walked
/// recursively and files are visited in sorted path order.
#[derive(Debug)]
pub struct FileCollectionReader {
    files: Vec<PathBuf>,
    position: usize,
    encoding: &'static Encoding,
}

impl FileCollectionReader {
    /// Open a reader with default settings
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, ReaderError> {
        Self::with_config(root, &ReaderConfig::default())
    }

    /// Open a reader with explicit settings
    pub fn with_config<P: AsRef<Path>>(
        root: P,
        config: &ReaderConfig,
    ) -> Result<Self, ReaderError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(ReaderError::NotFound(root.to_path_buf()));
        }

        let encoding = Encoding::for_label(config.encoding.as_bytes())
            .ok_or_else(|| ReaderError::UnknownEncoding(config.encoding.clone()))?;

        let pattern = config
            .pattern
            .as_deref()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| ReaderError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        // The name filter only applies to files found by walking a directory
        let mut files = Vec::new();
        if root.is_dir() {
            collect_files(root, config.include_hidden, &mut files)?;
            if let Some(pattern) = &pattern {
                files.retain(|path| {
                    path.file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| pattern.matches(name))
                });
            }
            files.sort();
        } else {
            files.push(root.to_path_buf());
        }

        log::debug!("Found {} documents under {}", files.len(), root.display());

        Ok(Self {
            files,
            position: 0,
            encoding,
        })
    }

    /// Total number of documents in the collection
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the collection holds no documents at all
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Paths that make up the collection, in reading order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

fn collect_files(
    dir: &Path,
    include_hidden: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), ReaderError> {
    let entries = fs::read_dir(dir).map_err(|source| ReaderError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ReaderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden && !include_hidden {
            continue;
        }

        let file_type = entry.file_type().map_err(|source| ReaderError::Io {
            path: path.clone(),
            source,
        })?;
        if file_type.is_dir() {
            collect_files(&path, include_hidden, files)?;
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        } else if file_type.is_symlink() {
            log::debug!("Not following directory link {}", path.display());
        }
    }

    Ok(())
}

impl DocumentReader for FileCollectionReader {
    fn has_next(&self) -> bool {
        self.position < self.files.len()
    }

    fn get_next(&mut self, document: &mut Document) -> Result<(), ReadError> {
        let path = self
            .files
            .get(self.position)
            .cloned()
            .ok_or(ReadError::Exhausted)?;
        self.position += 1;

        let bytes = fs::read(&path).map_err(|source| ReadError::Io {
            path: path.clone(),
            source,
        })?;

        let (text, _, had_errors) = self.encoding.decode(&bytes);
        if had_errors {
            return Err(ReadError::Decode {
                path,
                encoding: self.encoding.name().to_string(),
            });
        }

        document.set_text(text.into_owned());
        document.set_uri(path.display().to_string());
        Ok(())
    }
}

/// Source that opens a [`FileCollectionReader`] over a root path
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
    config: ReaderConfig,
}

impl FileSource {
    /// Source with default reader settings
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_config(root, ReaderConfig::default())
    }

    /// Source with explicit reader settings
    pub fn with_config<P: Into<PathBuf>>(root: P, config: ReaderConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Corpus root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CollectionSource for FileSource {
    fn open(&self) -> Result<Box<dyn DocumentReader>, ReaderError> {
        Ok(Box::new(FileCollectionReader::with_config(
            &self.root,
            &self.config,
        )?))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
