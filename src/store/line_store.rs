// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Whether writes are fsync'ed before being reported as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteDurability {
    #[default]
    Fast,
    Durable,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("entry {entry:?} does not fit on a single line")]
    InvalidEntry { entry: String },
}

/// A line-oriented text store: an ordered list of lines that may not exist yet.
///
/// Absence is not an error: readers get `None` and decide what an absent store means.
pub trait LineStore {
    /// All lines, or `None` when the store does not exist.
    fn read_lines(&self) -> Result<Option<Vec<String>>, StoreError>;

    /// At most `limit` leading lines. A store shorter than `limit` yields what it has.
    fn read_leading_lines(&self, limit: usize) -> Result<Option<Vec<String>>, StoreError> {
        Ok(self.read_lines()?.map(|mut lines| {
            lines.truncate(limit);
            lines
        }))
    }

    /// Adds `line` after the last existing line, creating the store if needed.
    fn append_line(&mut self, line: &str) -> Result<(), StoreError>;

    /// Replaces the whole store with `lines`.
    fn replace_lines(&mut self, lines: &[String]) -> Result<(), StoreError>;
}

/// A store backed by a text file with one `\n`-terminated entry per line.
#[derive(Debug, Clone)]
pub struct FileLineStore {
    path: PathBuf,
    durability: WriteDurability,
}

impl FileLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::Fast,
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineStore for FileLineStore {
    fn read_lines(&self) -> Result<Option<Vec<String>>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text.lines().map(str::to_owned).collect())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn read_leading_lines(&self, limit: usize) -> Result<Option<Vec<String>>, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines().take(limit) {
            lines.push(line.map_err(|source| self.io_error(source))?);
        }
        Ok(Some(lines))
    }

    fn append_line(&mut self, line: &str) -> Result<(), StoreError> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let mut contents = String::with_capacity(line.len() + 2);
        if !ends_with_newline(&mut file).map_err(|source| self.io_error(source))? {
            contents.push('\n');
        }
        contents.push_str(line);
        contents.push('\n');
        file.write_all(contents.as_bytes())
            .map_err(|source| self.io_error(source))?;

        if self.durability == WriteDurability::Durable {
            file.sync_all().map_err(|source| self.io_error(source))?;
        }
        Ok(())
    }

    fn replace_lines(&mut self, lines: &[String]) -> Result<(), StoreError> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        write_atomic(&self.path, contents.as_bytes(), self.durability)
    }
}

/// Whether `file` is empty or its last byte is `\n`.
fn ends_with_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// An in-process store that starts absent unless seeded with lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLineStore {
    lines: Option<Vec<String>>,
}

impl MemoryLineStore {
    /// A store that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn exists(&self) -> bool {
        self.lines.is_some()
    }
}

impl LineStore for MemoryLineStore {
    fn read_lines(&self) -> Result<Option<Vec<String>>, StoreError> {
        Ok(self.lines.clone())
    }

    fn append_line(&mut self, line: &str) -> Result<(), StoreError> {
        self.lines.get_or_insert_with(Vec::new).push(line.to_owned());
        Ok(())
    }

    fn replace_lines(&mut self, lines: &[String]) -> Result<(), StoreError> {
        self.lines = Some(lines.to_vec());
        Ok(())
    }
}

/// Writes `contents` to a sibling temp file and renames it over `path`, so readers never see a
/// half-written store.
/// An existing `path` is replaced; on failure the temp file is removed and `path` is untouched.
fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let io_error = |path: &Path, source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let Some(file_name) = path.file_name() else {
        return Err(io_error(path, io::Error::other("path has no file name")));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".pipegrid.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| io_error(&tmp_path, source))?;

    file.write_all(contents)
        .map_err(|source| io_error(&tmp_path, source))?;

    if durability == WriteDurability::Durable {
        file.sync_all()
            .map_err(|source| io_error(&tmp_path, source))?;
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(path, source));
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| io_error(parent, source))?;
            dir.sync_all().map_err(|source| io_error(parent, source))?;
        }
    }

    Ok(())
}
