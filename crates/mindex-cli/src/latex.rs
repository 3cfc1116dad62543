use log::debug;
use mindex_engine::typeset::{DocumentViewer, TypesetError, Typesetter, ViewError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Basename for the generated files inside the scratch directory.
const JOB_NAME: &str = "mindex";

/// Runs a LaTeX engine inside a private scratch directory.
///
/// The directory, and with it the generated document, lives as long as this
/// value does.
pub struct PdfLatex {
    command: String,
    workdir: TempDir,
}

impl PdfLatex {
    pub fn new(command: String) -> std::io::Result<Self> {
        let workdir = TempDir::new()?;
        debug!("typesetting in {}", workdir.path().display());
        Ok(Self { command, workdir })
    }
}

impl Typesetter for PdfLatex {
    fn render_document(&self, source: &str) -> Result<PathBuf, TypesetError> {
        let tex_file = self.workdir.path().join(format!("{JOB_NAME}.tex"));
        fs::write(&tex_file, source)?;

        debug!("running {} on {}", self.command, tex_file.display());
        let output = Command::new(&self.command)
            .arg("-interaction=nonstopmode")
            .arg(JOB_NAME)
            .current_dir(self.workdir.path())
            .output()
            .map_err(|source| TypesetError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(TypesetError::Failed {
                command: self.command.clone(),
                status: output.status,
                output: combined,
            });
        }

        Ok(self.workdir.path().join(format!("{JOB_NAME}.pdf")))
    }
}

/// Opens documents with whatever the desktop environment associates with them.
pub struct PlatformViewer;

impl DocumentViewer for PlatformViewer {
    fn open_document(&self, path: &Path) -> Result<(), ViewError> {
        let mut command = if cfg!(target_os = "linux") {
            let mut c = Command::new("xdg-open");
            c.arg(path);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(path);
            c
        } else if cfg!(target_os = "windows") {
            // `start` needs an explicit (empty) window title before the path
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c.arg(path);
            c
        } else {
            return Err(ViewError::UnsupportedPlatform);
        };

        let program = command.get_program().to_string_lossy().into_owned();
        debug!("opening {} with {program}", path.display());

        let status = command.status().map_err(|source| ViewError::Launch {
            command: program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ViewError::Failed {
                command: program,
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_a_spawn_error() {
        let typesetter = PdfLatex::new("no-such-tex-engine-anywhere".to_string()).unwrap();

        let result = typesetter.render_document("\\documentclass{article}");

        assert!(matches!(result, Err(TypesetError::Spawn { .. })));
    }

    #[test]
    fn test_source_is_written_into_the_scratch_dir() {
        let typesetter = PdfLatex::new("no-such-tex-engine-anywhere".to_string()).unwrap();

        let _ = typesetter.render_document("hello index");

        let tex_file = typesetter.workdir.path().join("mindex.tex");
        assert_eq!(fs::read_to_string(tex_file).unwrap(), "hello index");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_reports_failed() {
        let typesetter = PdfLatex::new("false".to_string()).unwrap();

        match typesetter.render_document("whatever") {
            Err(TypesetError::Failed { status, .. }) => assert!(!status.success()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
