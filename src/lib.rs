//! Finance Tracker - personal income/expense tracking with monthly budgets
//!
//! This library provides the core of the `fintrack` command line tool:
//! transactions and per-category monthly budgets, persisted as JSON
//! documents, and a set of reports derived from them on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, months)
//! - `forms`: Raw user input and its per-field validation
//! - `storage`: Key-value persistence of the record collections
//! - `stores`: In-memory record collections and their mutations
//! - `reports`: Aggregations, budget overview and spending insights
//! - `tracker`: The state holder tying stores, storage and notifications together
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{Settings, TrackerPaths};
//! use finance_tracker::storage::open_file_store;
//! use finance_tracker::Tracker;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = Tracker::load(open_file_store(&paths)?, &settings);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod notification;
pub mod pagination;
pub mod reports;
pub mod storage;
pub mod stores;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
pub use tracker::Tracker;
