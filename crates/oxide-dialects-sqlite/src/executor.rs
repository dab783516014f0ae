//! DDL execution against SQLite.

use oxide_dialects_core::dialect::SQLITE;
use oxide_dialects_core::model::{ColumnRef, TableModel};
use oxide_dialects_core::{introspect, CatalogSnapshot, DdlOptions, DdlSynthesizer};
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info, warn};

use crate::catalog::read_catalog;
use crate::error::{Result, SqliteError};

/// What to do when one statement of a sequence fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    Abort,
    /// Log the failure and run the remaining statements.
    Continue,
}

/// A statement that failed under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct StatementFailure {
    pub sql: String,
    pub error: sqlx::Error,
}

/// Outcome of running a statement sequence.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    /// Statements that ran successfully.
    pub executed: usize,
    /// Tolerated failures, in execution order.
    pub failures: Vec<StatementFailure>,
}

impl ExecutionReport {
    /// Whether every statement succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs synthesized DDL against a SQLite database.
///
/// Creates and column additions abort on the first failure; drops keep
/// going, since their leading constraint and index drops may legitimately
/// fail on a partially created schema.
pub struct SqliteExecutor {
    pool: SqlitePool,
    options: DdlOptions,
    dry_run: bool,
}

impl SqliteExecutor {
    /// Creates an executor on `pool`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            options: DdlOptions::new(),
            dry_run: false,
        }
    }

    /// Sets the synthesis options.
    #[must_use]
    pub fn options(mut self, options: DdlOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables dry-run mode (SQL is printed but not executed).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The SQLite synthesizer with this executor's options.
    #[must_use]
    pub fn synthesizer(&self) -> DdlSynthesizer<'static> {
        DdlSynthesizer::with_options(&SQLITE, self.options)
    }

    /// Creates `tables` with their indexes and constraints.
    ///
    /// # Errors
    ///
    /// [`SqliteError::Ddl`] for an invalid model, [`SqliteError::Statement`]
    /// for the first statement the database rejects.
    pub async fn create_tables(&self, tables: &[TableModel]) -> Result<ExecutionReport> {
        let statements = self.synthesizer().create_ddl_all(tables)?;
        self.execute(&statements, FailurePolicy::Abort).await
    }

    /// Drops `tables`, tolerating individual failures.
    ///
    /// # Errors
    ///
    /// None in practice; failures are collected in the report.
    pub async fn drop_tables(&self, tables: &[TableModel]) -> Result<ExecutionReport> {
        let statements = self.synthesizer().drop_ddl_all(tables);
        self.execute(&statements, FailurePolicy::Continue).await
    }

    /// Adds `column` to its existing table.
    ///
    /// # Errors
    ///
    /// [`SqliteError::Ddl`] when the column cannot be added after the fact,
    /// [`SqliteError::Statement`] when the database rejects it.
    pub async fn add_column(&self, column: ColumnRef<'_>) -> Result<ExecutionReport> {
        let statements = self.synthesizer().add_column_ddl(column)?;
        self.execute(&statements, FailurePolicy::Abort).await
    }

    /// Drops `column` and the indexes covering it.
    ///
    /// # Errors
    ///
    /// None in practice; failures are collected in the report.
    pub async fn drop_column(&self, column: ColumnRef<'_>) -> Result<ExecutionReport> {
        let statements = self.synthesizer().drop_column_ddl(column);
        self.execute(&statements, FailurePolicy::Continue).await
    }

    /// Reads the current catalog.
    ///
    /// # Errors
    ///
    /// [`SqliteError::Database`] when a catalog query fails.
    pub async fn catalog(&self) -> Result<CatalogSnapshot> {
        read_catalog(&self.pool).await
    }

    /// Reads the current catalog into table models.
    ///
    /// # Errors
    ///
    /// [`SqliteError::Database`] when a catalog query fails,
    /// [`SqliteError::Ddl`] when the catalog cannot be modeled.
    pub async fn introspect(&self) -> Result<Vec<TableModel>> {
        let snapshot = self.catalog().await?;
        Ok(introspect(&snapshot, &SQLITE)?)
    }

    /// Executes `statements` in order under `policy`.
    ///
    /// # Errors
    ///
    /// [`SqliteError::Statement`] for the first failure under
    /// [`FailurePolicy::Abort`].
    pub async fn execute(
        &self,
        statements: &[String],
        policy: FailurePolicy,
    ) -> Result<ExecutionReport> {
        let mut report = ExecutionReport::default();
        for sql in statements {
            debug!(sql = %sql, "Executing SQL");
            if self.dry_run {
                println!("{sql};");
                report.executed += 1;
                continue;
            }
            match sqlx::query(sql).execute(&self.pool).await {
                Ok(_) => report.executed += 1,
                Err(error) => match policy {
                    FailurePolicy::Abort => {
                        return Err(SqliteError::Statement {
                            sql: sql.clone(),
                            source: error,
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!(sql = %sql, error = %error, "Statement failed, continuing");
                        report.failures.push(StatementFailure {
                            sql: sql.clone(),
                            error,
                        });
                    }
                },
            }
        }
        info!(
            executed = report.executed,
            failed = report.failures.len(),
            "Statements executed"
        );
        Ok(report)
    }
}
