//! Codetrail - a CLI for tracking code history
//!
//! Codetrail is a single-binary tool that manages the metadata layer of a
//! version-controlled directory: locating repositories, initializing new
//! ones, and maintaining a scoped key-value configuration persisted inside
//! the repository.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Repository discovery, layout, initialization, and configuration
//!
//! # Correctness Invariants
//!
//! Codetrail maintains the following invariants:
//!
//! 1. A repository is never created inside another repository, above or below
//! 2. Command objects are validated at construction; invalid commands cannot exist
//! 3. Only recognized configuration sections and options are ever persisted
pub mod cli;
pub mod core;
