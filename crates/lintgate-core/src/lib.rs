//! # lintgate-core
//!
//! Scoping and reporting for running an external style checker from a
//! version-control hook.
//!
//! This crate decides *which* files the engine sees and how its findings are
//! reported. It includes:
//!
//! - [`path_math`] for common roots and ancestor-directory search
//! - [`resolve_ignore_list`] for the sidecar ignore list
//! - [`ScopeBuilder`] for turning a file list, file, or directory into an
//!   [`AnalysisContext`]
//! - [`AnalysisEngine`] and [`ProcessEngine`] for running the checker
//! - [`render`] for the per-file report and exit status
//!
//! ## Example
//!
//! ```no_run
//! use lintgate_core::{render, AnalysisEngine, Config, FileSource, ProcessEngine, ScopeBuilder, ScopeOptions};
//!
//! let config = Config::default();
//! let scope = ScopeBuilder::new(ScopeOptions::from_config(&config, None));
//! let ctx = scope.build(&FileSource::Directory("src".into()))?;
//!
//! let violations = ProcessEngine::from_config(&config.engine).analyze(&ctx)?;
//! let report = render(&violations, ctx.targets().as_slice());
//! eprint!("{}", report.text);
//! std::process::exit(report.exit_code);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod ignore_list;
mod report;
mod scope;
mod types;

/// String path helpers shared by the scoping code.
pub mod path_math;

pub use config::{has_extension, Config, ConfigError, EngineConfig};
pub use context::AnalysisContext;
pub use engine::{parse_output, AnalysisEngine, EngineError, ProcessEngine};
pub use ignore_list::{deepest_path, resolve_ignore_list, IgnoreListError, IgnoreSet};
pub use report::{render, RenderedReport, EXIT_CLEAN, EXIT_VIOLATIONS};
pub use scope::{
    apply_ignore, read_list_file, scan_directory, FileSource, ScopeBuilder, ScopeError,
    ScopeOptions,
};
pub use types::{TargetFileSet, Violation};
