//! # oxide-dialects-sqlite
//!
//! SQLite driver for `oxide-dialects-core`.
//!
//! - [`read_catalog`] fills a [`CatalogSnapshot`](oxide_dialects_core::CatalogSnapshot)
//!   from `sqlite_master` and the `pragma_*` table-valued functions, ready
//!   for [`introspect`](oxide_dialects_core::introspect).
//! - [`SqliteExecutor`] runs synthesized DDL with a per-statement
//!   [`FailurePolicy`].
//!
//! # What the catalog cannot tell
//!
//! - **Foreign key names**: `pragma_foreign_key_list` reports none; names
//!   are taken from `CONSTRAINT ... FOREIGN KEY` clauses of the stored
//!   CREATE TABLE text, and synthesized when absent.
//! - **[AUTOINCREMENT]**: detected from the CREATE TABLE text as well.
//! - **Comments**: SQLite has none.
//!
//! [AUTOINCREMENT]: https://www.sqlite.org/autoinc.html
//!
//! ## Example
//!
//! ```rust,ignore
//! use oxide_dialects_sqlite::SqliteExecutor;
//! use sqlx::sqlite::SqlitePool;
//!
//! let pool = SqlitePool::connect("sqlite://app.db").await?;
//! let executor = SqliteExecutor::new(pool);
//! for table in executor.introspect().await? {
//!     println!("{}", table.name());
//! }
//! ```

mod catalog;
mod error;
mod executor;

pub use catalog::read_catalog;
pub use error::{Result, SqliteError};
pub use executor::{ExecutionReport, FailurePolicy, SqliteExecutor, StatementFailure};
