// source.rs - Where table files come from.
//
// The registry asks a `TableSource` for each file by name. `SearchPath`
// looks through a list of directories, `MemorySource` serves bytes that
// are already in memory.

use std::collections::HashMap;
use std::env;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Environment variable read by [`SearchPath::from_env`].
pub const UCDATA_PATH: &str = "UCDATA_PATH";

/// Opens table files by name.
pub trait TableSource {
    /// Open the file `name` (e.g. `"ctype.dat"`) for reading.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>>;
}

impl<S: TableSource + ?Sized> TableSource for &S {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

// === SearchPath ===

/// Ordered list of directories; the first one holding a file wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        SearchPath {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a path list such as `"/usr/share/ucdata:."`, using the
    /// platform's list separator. Empty entries are skipped.
    pub fn parse<S: AsRef<OsStr> + ?Sized>(paths: &S) -> Self {
        SearchPath {
            dirs: env::split_paths(paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Directories from `UCDATA_PATH`, or the current directory if unset.
    pub fn from_env() -> Self {
        match env::var_os(UCDATA_PATH) {
            Some(paths) if !paths.is_empty() => Self::parse(&paths),
            _ => Self::new(["."]),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn push<P: Into<PathBuf>>(&mut self, dir: P) {
        self.dirs.push(dir.into());
    }

    /// First existing file `name` along the path.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
    }
}

impl TableSource for SearchPath {
    /// Entries that are not regular files or fail to open are skipped; the
    /// last open error is returned if no directory yields the file.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        let mut last_err = None;
        for dir in &self.dirs {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            match File::open(&path) {
                Ok(file) => {
                    log::trace!("opened {}", path.display());
                    return Ok(Box::new(BufReader::new(file)));
                }
                Err(err) => {
                    log::trace!("skipping {}: {}", path.display(), err);
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found in search path", name),
            )
        }))
    }
}

impl From<&Path> for SearchPath {
    fn from(dir: &Path) -> Self {
        SearchPath::new([dir])
    }
}

// === MemorySource ===

/// Table files held in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Into<String>>(&mut self, name: N, bytes: Vec<u8>) -> Option<Vec<u8>> {
        self.files.insert(name.into(), bytes)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<N: Into<String>>(mut self, name: N, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name)
    }

}

impl TableSource for MemorySource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.files.get(name) {
            Some(bytes) => Ok(Box::new(bytes.as_slice())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not in memory source", name),
            )),
        }
    }
}
