use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Level, Mt22Result, impl_mt22_error};
use crate::location::Location;

/// An MT22 source file, read fully into memory.
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl Script {
    pub fn new(path: PathBuf) -> Mt22Result<Self> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            MissingScriptError::new(&path, format!("Missing script at {:?}: {}", path, e))
        })?;
        debug!("loaded script {} ({} bytes)", path.display(), content.len());
        Ok(Script {
            name,
            path,
            content,
        })
    }

    /// Builds a script that does not live on disk (tests, stdin, editors).
    pub fn from_source(name: &str, content: &str) -> Self {
        Script {
            name: name.to_string(),
            path: PathBuf::from(name),
            content: content.to_string(),
        }
    }

    /// Loads every file matching a glob pattern, in path order.
    ///
    /// A pattern that matches nothing is reported as a missing script so the
    /// caller never silently processes zero files.
    pub fn discover(pattern: &str) -> Mt22Result<Vec<Script>> {
        let paths = glob::glob(pattern).map_err(|e| {
            MissingScriptError::new(
                Path::new(pattern),
                format!("Invalid script pattern {:?}: {}", pattern, e.msg),
            )
        })?;

        let mut scripts = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                MissingScriptError::new(e.path(), format!("Unreadable path {:?}", e.path()))
            })?;
            if path.is_file() {
                scripts.push(Script::new(path)?);
            }
        }

        if scripts.is_empty() {
            return Err(MissingScriptError::new(
                Path::new(pattern),
                format!("No script matches {:?}", pattern),
            )
            .into());
        }
        Ok(scripts)
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn start_location(&self) -> Location {
        Location::new(self.name.clone(), 1, 1)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script: {} at {:?}", self.name, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct MissingScriptError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<crate::location::Span>,
    pub path: PathBuf,
}

impl MissingScriptError {
    pub fn new(path: &Path, message: String) -> Self {
        MissingScriptError {
            level: Level::Error,
            message,
            issuer: "mt22.script".to_string(),
            location: None,
            span: None,
            path: path.to_path_buf(),
        }
    }
}

impl_mt22_error!(MissingScriptError);
