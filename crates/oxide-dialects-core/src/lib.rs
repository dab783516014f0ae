//! # oxide-dialects-core
//!
//! One schema model, many SQL dialects.
//!
//! This crate provides:
//! - A closed set of engine-independent type tokens
//! - A registry of dialect descriptors (H2, MySQL, PostgreSQL, SQLite,
//!   Oracle, SQL Server, DB2, ...) holding type templates, quoting rules and
//!   reserved words
//! - A DDL synthesizer turning table models into ordered CREATE / ALTER /
//!   DROP statements
//! - Pagination clauses for every registered dialect
//! - Driver-agnostic catalog introspection and a Rust source emitter
//!
//! ## Building DDL
//!
//! ```rust
//! use oxide_dialects_core::dialect;
//! use oxide_dialects_core::model::{integer, varchar, TableModel};
//!
//! let mut t = TableModel::new("user_t")?;
//! t.add_column(varchar("first_name", 20).pkey())?
//!     .add_column(varchar("last_name", 20).pkey())?
//!     .add_column(integer("age"))?;
//!
//! let h2 = dialect::resolve("H2Dialect")?;
//! let ddl = h2.to_create_ddl(&t)?;
//! assert_eq!(ddl.len(), 1);
//! assert!(ddl[0].ends_with("PRIMARY KEY (first_name, last_name))"));
//! # Ok::<(), oxide_dialects_core::DdlError>(())
//! ```
//!
//! ## Pagination
//!
//! ```rust
//! use oxide_dialects_core::dialect::{ORACLE10G, SQLSERVER2012};
//!
//! let sql = SQLSERVER2012.paginate(2, 10, "select * from t order by id")?;
//! assert_eq!(sql, "select * from t order by id OFFSET 10 ROWS FETCH NEXT 10 ROWS ONLY");
//!
//! let sql = ORACLE10G.paginate(1, 5, "select * from t")?;
//! assert_eq!(sql, "SELECT * FROM (select * from t) WHERE ROWNUM <= 5");
//! # Ok::<(), oxide_dialects_core::DdlError>(())
//! ```

pub mod codegen;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod identifier;
pub mod introspect;
pub mod model;
pub mod paging;
pub mod types;

pub use ddl::{DdlOptions, DdlSynthesizer};
pub use dialect::DialectDescriptor;
pub use error::{DdlError, Result};
pub use introspect::{introspect, CatalogSnapshot, CatalogSource};
pub use model::{ColumnModel, TableModel};
pub use paging::paginate;
pub use types::{TypeParams, TypeToken};
