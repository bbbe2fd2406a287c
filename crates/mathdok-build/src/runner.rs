//! LaTeX engine invocation
//!
//! A `LatexRunner` holds the configuration for executing the external
//! engine on a generated `.tex` file. The call is blocking and carries
//! no timeout, matching the reference behavior of the surrounding
//! editor.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::BuildError;

/// Outcome of one engine run
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Whether the engine exited successfully
    pub success: bool,
    /// Raw exit code, if the process was not killed by a signal
    pub status: Option<i32>,
    /// Combined captured stdout and stderr
    pub log: String,
    /// Where the produced PDF is expected
    pub pdf_path: PathBuf,
}

/// Configuration for executing the external LaTeX engine
pub struct LatexRunner {
    engine: String,
    output_dir: PathBuf,
    extra_args: Vec<String>,
}

impl LatexRunner {
    /// Runner for `pdflatex` writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine: "pdflatex".to_string(),
            output_dir: output_dir.into(),
            extra_args: Vec::new(),
        }
    }

    /// Use a different engine binary, e.g. `xelatex`
    pub fn with_engine(mut self, engine: &str) -> Self {
        self.engine = engine.to_string();
        self
    }

    /// Append extra engine arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Run the engine on a `.tex` file, capturing combined output.
    ///
    /// Returns `Err` only when the engine cannot be spawned at all; a
    /// failing compilation is a `CompileOutput` with `success == false`.
    pub fn compile(&self, tex_path: &Path) -> Result<CompileOutput, BuildError> {
        let mut cmd = Command::new(&self.engine);
        cmd.arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", self.output_dir.display()))
            .args(&self.extra_args)
            .arg(tex_path);
        if let Some(dir) = tex_path.parent() {
            if !dir.as_os_str().is_empty() {
                cmd.current_dir(dir);
            }
        }

        let output = cmd.output().map_err(|source| BuildError::Spawn {
            engine: self.engine.clone(),
            source,
        })?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        log.push('\n');
        log.push_str(&String::from_utf8_lossy(&output.stderr));

        let stem = tex_path.file_stem().unwrap_or_default();
        let pdf_path = self.output_dir.join(stem).with_extension("pdf");

        Ok(CompileOutput {
            success: output.status.success(),
            status: output.status.code(),
            log,
            pdf_path,
        })
    }
}
