//! Gator - command-line account management.
//!
//! Gator keeps a per-user JSON config (`~/.gatorconfig.json`) recording the
//! database URL and the logged-in user, and manages user records in a
//! PostgreSQL table. The main pieces are:
//!
//! - A file-access seam so config persistence is testable in memory
//! - A command registry dispatching names to handlers
//! - A user store trait with PostgreSQL and in-memory implementations
//!
//! # Quick Start
//!
//! ```rust
//! use gator::{
//!     cli::{Command, CommandRegistry, State},
//!     config::{Config, MemoryFileAccess},
//!     users::MemoryUserStore,
//! };
//!
//! let fs = MemoryFileAccess::new("/home/demo");
//! let mut state = State::new(Config::default(), MemoryUserStore::new());
//! let registry = CommandRegistry::with_default_commands();
//!
//! let command = Command::new("register", vec!["kahya".to_string()]);
//! registry.run(&fs, &mut state, &command).unwrap();
//!
//! assert_eq!(Config::load(&fs).unwrap().current_user_name, "kahya");
//! ```

/// Command registry, handlers, and CLI formatting.
pub mod cli;

/// Persisted configuration and the file-access seam.
pub mod config;

/// Tracing subscriber setup.
pub mod tracing_config;

/// User records and stores.
pub mod users;
