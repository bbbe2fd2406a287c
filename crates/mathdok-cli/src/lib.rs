//! mathdok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for mathdok, including:
//! - Render: Compile problem markup to a LaTeX document
//! - Build: Compile problem markup all the way to a PDF
//! - Template: List built-in templates or instantiate one
//! - Config: Initialize or inspect a style configuration
//!
//! # Binary Usage
//!
//! ```bash
//! # Compile markup to LaTeX
//! mathdok render problem.mdk --output problem.tex
//!
//! # Compile and run the LaTeX engine
//! mathdok build problem.mdk --output-dir build/
//!
//! # Start from a built-in template
//! mathdok template new basic_problem \
//!     -s "description=Solve the following equation:" \
//!     -s "equation=x + 5 = 12" \
//!     -s "question=What is x?" \
//!     -o problem.mdk
//! ```

pub mod app;

pub use app::{
    build_command, config_init_command, config_show_command, render_command,
    template_list_command, template_new_command,
};
pub use app::run_cli;
