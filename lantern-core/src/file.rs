use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// A generated Swift source file.
pub struct SourceFile {
    path: PathBuf,
    content: String,
    header: Option<String>,
    overwrite: Overwrite,
}

impl SourceFile {
    /// Create a new file with the given path and content (always overwritten, no header)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            header: None,
            overwrite: Overwrite::Always,
        }
    }

    /// Prefix the content with a comment block, one `//` line per header line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full file text, header included.
    pub fn render(&self) -> String {
        let Some(header) = &self.header else {
            return self.content.clone();
        };
        let mut out = String::new();
        for line in header.lines() {
            if line.is_empty() {
                out.push_str("//\n");
            } else {
                out.push_str("//  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str("//\n\n");
        out.push_str(&self.content);
        out
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Sources").join("Model").join("Person.swift");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_render_without_header() {
        let file = SourceFile::new("Person.swift", "struct Person {}\n");
        assert_eq!(file.render(), "struct Person {}\n");
    }

    #[test]
    fn test_render_with_header() {
        let file = SourceFile::new("Person.swift", "struct Person {}\n")
            .header("Person.swift\n\nCreated by Lantern.");
        assert_eq!(
            file.render(),
            "//  Person.swift\n//\n//  Created by Lantern.\n//\n\nstruct Person {}\n"
        );
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Person.swift");

        fs::write(&path, "original").unwrap();

        let result = SourceFile::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.swift");

        let result = SourceFile::new(&path, "new content")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.swift");

        fs::write(&path, "original").unwrap();

        let result = SourceFile::new(&path, "should not write")
            .overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
