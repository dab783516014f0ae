//! DDL synthesis.
//!
//! Turns a [`TableModel`] into an ordered list of DDL statements for one
//! dialect. Statements carry no terminator; callers execute them one by
//! one or join them as they see fit.
//!
//! Statement order for a create:
//!
//! 1. sequences backing identity columns (sequence dialects only)
//! 2. CREATE TABLE, a separate primary-key ALTER where the dialect needs
//!    one, and `COMMENT ON` statements
//! 3. CREATE INDEX per index, in declaration order
//! 4. unique constraints
//! 5. foreign keys (unless the dialect declares them inline)
//!
//! Drops run the other way round: foreign keys, indexes and uniques, the
//! table, then sequences.

mod order;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::dialect::template::fill_pairs;
use crate::dialect::{
    CommentStyle, DialectDescriptor, IdentityStrategy, Placement, UniquePlacement,
};
use crate::error::{DdlError, Result};
use crate::model::{ColumnModel, ColumnRef, FKeyModel, TableModel};
use crate::types::TypeToken;

/// Options injected into a [`DdlSynthesizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DdlOptions {
    /// Log every produced statement at INFO level.
    pub show_sql: bool,
    /// Quote every identifier with the dialect's delimiters.
    pub quote_identifiers: bool,
}

impl DdlOptions {
    /// Default options: no logging, no quoting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_sql: false,
            quote_identifiers: false,
        }
    }

    #[must_use]
    pub const fn show_sql(mut self, show: bool) -> Self {
        self.show_sql = show;
        self
    }

    #[must_use]
    pub const fn quote_identifiers(mut self, quote: bool) -> Self {
        self.quote_identifiers = quote;
        self
    }
}

/// Renders model objects as DDL for one dialect.
///
/// Pure and synchronous; the synthesizer never mutates the models it
/// renders.
#[derive(Debug, Clone, Copy)]
pub struct DdlSynthesizer<'d> {
    dialect: &'d DialectDescriptor,
    options: DdlOptions,
}

/// Create statements of one table, grouped by phase.
#[derive(Debug, Default)]
struct CreatePhases {
    sequences: Vec<String>,
    tables: Vec<String>,
    indexes: Vec<String>,
    uniques: Vec<String>,
    fkeys: Vec<String>,
}

impl CreatePhases {
    fn append(&mut self, other: Self) {
        self.sequences.extend(other.sequences);
        self.tables.extend(other.tables);
        self.indexes.extend(other.indexes);
        self.uniques.extend(other.uniques);
        self.fkeys.extend(other.fkeys);
    }

    fn into_statements(self) -> Vec<String> {
        let mut out = self.sequences;
        out.extend(self.tables);
        out.extend(self.indexes);
        out.extend(self.uniques);
        out.extend(self.fkeys);
        out
    }
}

/// Drop statements of one table, grouped by phase.
#[derive(Debug, Default)]
struct DropPhases {
    fkeys: Vec<String>,
    indexes: Vec<String>,
    tables: Vec<String>,
    sequences: Vec<String>,
}

impl DropPhases {
    fn append(&mut self, other: Self) {
        self.fkeys.extend(other.fkeys);
        self.indexes.extend(other.indexes);
        self.tables.extend(other.tables);
        self.sequences.extend(other.sequences);
    }

    fn into_statements(self) -> Vec<String> {
        let mut out = self.fkeys;
        out.extend(self.indexes);
        out.extend(self.tables);
        out.extend(self.sequences);
        out
    }
}

impl<'d> DdlSynthesizer<'d> {
    /// Creates a synthesizer with default options.
    #[must_use]
    pub const fn new(dialect: &'d DialectDescriptor) -> Self {
        Self {
            dialect,
            options: DdlOptions::new(),
        }
    }

    /// Creates a synthesizer with explicit options.
    #[must_use]
    pub const fn with_options(dialect: &'d DialectDescriptor, options: DdlOptions) -> Self {
        Self { dialect, options }
    }

    /// Target dialect.
    #[must_use]
    pub const fn dialect(&self) -> &'d DialectDescriptor {
        self.dialect
    }

    // ============================================================
    // Public operations
    // ============================================================

    /// CREATE statements for one table.
    ///
    /// Foreign keys to other tables are rendered unchecked; a foreign key
    /// to the table itself must name existing columns.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] when the table has no columns
    /// or a constraint names a column the table does not have.
    pub fn create_ddl(&self, table: &TableModel) -> Result<Vec<String>> {
        self.validate_table(table)?;
        for fk in table.fkeys() {
            if fk.ref_table().eq_ignore_ascii_case(table.name()) {
                check_ref_columns(table, fk)?;
            }
        }
        let statements = self.create_phases(table)?.into_statements();
        Ok(self.emit(statements))
    }

    /// DROP statements for one table. Works on tables without columns.
    #[must_use]
    pub fn drop_ddl(&self, table: &TableModel) -> Vec<String> {
        let statements = self.drop_phases(table).into_statements();
        self.emit(statements)
    }

    /// CREATE statements for a set of tables.
    ///
    /// All tables come before any index, unique constraint or foreign key.
    /// Where foreign keys are declared inline, referenced tables are
    /// created before the tables referencing them.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] for an invalid table, duplicate
    /// table names, a foreign key to a table outside the set or to a
    /// missing column, or (inline foreign keys only) a reference cycle.
    pub fn create_ddl_all(&self, tables: &[TableModel]) -> Result<Vec<String>> {
        order::check_unique_names(tables)?;
        for table in tables {
            self.validate_table(table)?;
            for fk in table.fkeys() {
                let target = tables
                    .iter()
                    .find(|t| t.name().eq_ignore_ascii_case(fk.ref_table()))
                    .ok_or_else(|| {
                        DdlError::invalid_model(format!(
                            "foreign key '{}' on '{}' references unknown table '{}'",
                            fk.name(),
                            table.name(),
                            fk.ref_table()
                        ))
                    })?;
                check_ref_columns(target, fk)?;
            }
        }
        let sequence: Vec<usize> = if self.dialect.constraints.foreign_key == Placement::Inline {
            order::dependency_order(tables)?
        } else {
            (0..tables.len()).collect()
        };
        let mut phases = CreatePhases::default();
        for index in sequence {
            phases.append(self.create_phases(&tables[index])?);
        }
        Ok(self.emit(phases.into_statements()))
    }

    /// DROP statements for a set of tables: every foreign key before any
    /// table, referencing tables before referenced ones.
    #[must_use]
    pub fn drop_ddl_all(&self, tables: &[TableModel]) -> Vec<String> {
        let mut sequence =
            order::dependency_order(tables).unwrap_or_else(|_| (0..tables.len()).collect());
        sequence.reverse();
        let mut phases = DropPhases::default();
        for index in sequence {
            phases.append(self.drop_phases(&tables[index]));
        }
        self.emit(phases.into_statements())
    }

    /// ALTER statements adding `column` to its table.
    ///
    /// # Errors
    ///
    /// [`DdlError::InvalidModelDefinition`] for primary-key columns, which
    /// cannot be added after the fact, and for rowid-alias identity
    /// columns.
    pub fn add_column_ddl(&self, column: ColumnRef<'_>) -> Result<Vec<String>> {
        let table = column.table();
        let col = column.column();
        if col.is_pkey() {
            return Err(DdlError::invalid_model(format!(
                "cannot add primary key column '{}' to existing table '{}'",
                col.name(),
                table.name()
            )));
        }
        if col.is_auto_id() && self.dialect.identity == IdentityStrategy::RowidAlias {
            return Err(DdlError::invalid_model(format!(
                "{} cannot add auto-increment column '{}' to an existing table",
                self.dialect.name,
                col.name()
            )));
        }

        let t = self.ident(table.name());
        let c = self.ident(col.name());
        let mut out = Vec::new();
        if let (true, IdentityStrategy::Sequence { create, .. }) =
            (col.is_auto_id(), self.dialect.identity)
        {
            let name = self.sequence_name(table, col);
            out.push(fill_pairs(create, &[('n', &name)]));
        }

        let alter = self.dialect.column_alter;
        match alter.split {
            Some(split) if col.default_value().is_some() || !col.is_nullable() => {
                let definition = self.column_definition(table, col, false)?;
                out.push(fill_pairs(alter.add, &[('t', &t), ('d', &definition)]));
                if let Some(default) = col.default_value() {
                    let value = default.to_sql(self.dialect);
                    out.push(fill_pairs(
                        split.set_default,
                        &[('t', &t), ('c', &c), ('v', &value)],
                    ));
                }
                if !col.is_nullable() {
                    out.push(fill_pairs(split.set_not_null, &[('t', &t), ('c', &c)]));
                }
            }
            _ => {
                let definition = self.column_definition(table, col, true)?;
                out.push(fill_pairs(alter.add, &[('t', &t), ('d', &definition)]));
            }
        }

        if let (CommentStyle::CommentOn, Some(comment)) = (self.dialect.comments, col.comment()) {
            out.push(format!(
                "COMMENT ON COLUMN {t}.{c} IS {}",
                quote_literal(comment)
            ));
        }
        Ok(self.emit(out))
    }

    /// ALTER statements dropping `column` from its table.
    ///
    /// Foreign keys, indexes and unique constraints of the owning table
    /// that cover the column are dropped first. These are best-effort: a
    /// caller executing them may tolerate failures of the leading drops.
    #[must_use]
    pub fn drop_column_ddl(&self, column: ColumnRef<'_>) -> Vec<String> {
        let table = column.table();
        let col = column.column();
        let covers = |columns: &[String]| columns.iter().any(|c| c.eq_ignore_ascii_case(col.name()));
        let t = self.ident(table.name());
        let mut out = Vec::new();

        if let Placement::AlterTable { drop, .. } = self.dialect.constraints.foreign_key {
            for fk in table.fkeys().iter().filter(|f| covers(f.column_names())) {
                out.push(fill_pairs(drop, &[('t', &t), ('n', &self.ident(fk.name()))]));
            }
        }
        for index in table.indexes().iter().filter(|i| covers(i.column_names())) {
            out.push(self.drop_index(&t, index.name()));
        }
        for unique in table.uniques().iter().filter(|u| covers(u.column_names())) {
            out.push(self.drop_unique(&t, unique.name()));
        }

        let c = self.ident(col.name());
        out.push(fill_pairs(self.dialect.column_alter.drop, &[('t', &t), ('c', &c)]));

        if let (true, IdentityStrategy::Sequence { drop, .. }) =
            (col.is_auto_id(), self.dialect.identity)
        {
            let name = self.sequence_name(table, col);
            out.push(fill_pairs(drop, &[('n', &name)]));
        }
        self.emit(out)
    }

    // ============================================================
    // Phases
    // ============================================================

    fn create_phases(&self, table: &TableModel) -> Result<CreatePhases> {
        let dialect = self.dialect;
        let t = self.ident(table.name());
        let mut phases = CreatePhases::default();

        if let IdentityStrategy::Sequence { create, .. } = dialect.identity {
            for col in table.columns().iter().filter(|c| c.is_auto_id()) {
                let name = self.sequence_name(table, col);
                phases.sequences.push(fill_pairs(create, &[('n', &name)]));
            }
        }

        let mut parts = Vec::with_capacity(table.columns().len() + 2);
        for col in table.columns() {
            parts.push(self.column_definition(table, col, true)?);
        }

        let pkey: Vec<String> = table
            .pkey_columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let rowid_pkey = dialect.identity == IdentityStrategy::RowidAlias
            && table.columns().iter().any(ColumnModel::is_auto_id);
        let mut pkey_alter = None;
        if !pkey.is_empty() && !rowid_pkey {
            match dialect.constraints.primary_key {
                Placement::Inline => {
                    parts.push(format!("PRIMARY KEY ({})", self.ident_list(&pkey)));
                }
                Placement::AlterTable { add, .. } => {
                    let name = self.synthesized_ident(&format!("PK_{}", table.name()));
                    let columns = self.ident_list(&pkey);
                    pkey_alter = Some(fill_pairs(add, &[('t', &t), ('n', &name), ('c', &columns)]));
                }
            }
        }

        if dialect.constraints.foreign_key == Placement::Inline {
            for fk in table.fkeys() {
                parts.push(format!(
                    "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}){}",
                    self.ident(fk.name()),
                    self.ident_list(fk.column_names()),
                    self.ident(fk.ref_table()),
                    self.ident_list(fk.ref_column_names()),
                    self.fk_actions(fk)
                ));
            }
        }

        let mut create = format!("CREATE TABLE {t} ({})", parts.join(", "));
        if let Some(tail) = table.tail().or(dialect.table_tail) {
            create.push(' ');
            create.push_str(tail);
        }
        if let (CommentStyle::Inline, Some(comment)) = (dialect.comments, table.comment()) {
            create.push_str(" COMMENT=");
            create.push_str(&quote_literal(comment));
        }
        phases.tables.push(create);
        phases.tables.extend(pkey_alter);

        match dialect.comments {
            CommentStyle::CommentOn => {
                if let Some(comment) = table.comment() {
                    phases
                        .tables
                        .push(format!("COMMENT ON TABLE {t} IS {}", quote_literal(comment)));
                }
                for col in table.columns() {
                    if let Some(comment) = col.comment() {
                        phases.tables.push(format!(
                            "COMMENT ON COLUMN {t}.{} IS {}",
                            self.ident(col.name()),
                            quote_literal(comment)
                        ));
                    }
                }
            }
            CommentStyle::Unsupported => {
                if table.comment().is_some() || table.columns().iter().any(|c| c.comment().is_some()) {
                    debug!(dialect = dialect.id, table = table.name(), "Comments not supported, skipped");
                }
            }
            CommentStyle::Inline => {}
        }

        for index in table.indexes() {
            phases.indexes.push(format!(
                "CREATE {}INDEX {} ON {t} ({})",
                if index.is_unique() { "UNIQUE " } else { "" },
                self.ident(index.name()),
                self.ident_list(index.column_names())
            ));
        }

        for unique in table.uniques() {
            let name = self.ident(unique.name());
            let columns = self.ident_list(unique.column_names());
            phases.uniques.push(match dialect.constraints.unique {
                UniquePlacement::AlterTable { add, .. } => {
                    fill_pairs(add, &[('t', &t), ('n', &name), ('c', &columns)])
                }
                UniquePlacement::UniqueIndex => {
                    format!("CREATE UNIQUE INDEX {name} ON {t} ({columns})")
                }
            });
        }

        if let Placement::AlterTable { add, .. } = dialect.constraints.foreign_key {
            for fk in table.fkeys() {
                let name = self.ident(fk.name());
                let columns = self.ident_list(fk.column_names());
                let ref_table = self.ident(fk.ref_table());
                let ref_columns = self.ident_list(fk.ref_column_names());
                let actions = self.fk_actions(fk);
                phases.fkeys.push(fill_pairs(
                    add,
                    &[
                        ('t', &t),
                        ('n', &name),
                        ('c', &columns),
                        ('r', &ref_table),
                        ('v', &ref_columns),
                        ('a', &actions),
                    ],
                ));
            }
        }

        Ok(phases)
    }

    fn drop_phases(&self, table: &TableModel) -> DropPhases {
        let dialect = self.dialect;
        let t = self.ident(table.name());
        let mut phases = DropPhases::default();

        if let Placement::AlterTable { drop, .. } = dialect.constraints.foreign_key {
            for fk in table.fkeys() {
                phases
                    .fkeys
                    .push(fill_pairs(drop, &[('t', &t), ('n', &self.ident(fk.name()))]));
            }
        }
        for index in table.indexes() {
            phases.indexes.push(self.drop_index(&t, index.name()));
        }
        for unique in table.uniques() {
            phases.indexes.push(self.drop_unique(&t, unique.name()));
        }

        phases.tables.push(fill_pairs(dialect.drops.table, &[('t', &t)]));

        if let IdentityStrategy::Sequence { drop, .. } = dialect.identity {
            for col in table.columns().iter().filter(|c| c.is_auto_id()) {
                let name = self.sequence_name(table, col);
                phases.sequences.push(fill_pairs(drop, &[('n', &name)]));
            }
        }
        phases
    }

    // ============================================================
    // Rendering helpers
    // ============================================================

    /// Renders one column definition. Without `full`, DEFAULT and NOT NULL
    /// are left out for dialects that apply them in follow-up statements.
    fn column_definition(&self, table: &TableModel, col: &ColumnModel, full: bool) -> Result<String> {
        let dialect = self.dialect;
        let mut sql = self.ident(col.name());
        sql.push(' ');

        let mut rowid = false;
        match (col.is_auto_id(), dialect.identity) {
            (true, IdentityStrategy::RowidAlias) => {
                sql.push_str("INTEGER PRIMARY KEY AUTOINCREMENT");
                rowid = true;
            }
            (true, IdentityStrategy::SerialType { integer, bigint }) => {
                let wide = matches!(col.token(), TypeToken::Bigint | TypeToken::Long);
                sql.push_str(if wide { bigint } else { integer });
            }
            _ => sql.push_str(&dialect.render_type(col.token(), col.params())?),
        }

        if full {
            if let Some(default) = col.default_value() {
                sql.push_str(" DEFAULT ");
                sql.push_str(&default.to_sql(dialect));
            }
        }

        if col.is_auto_id() {
            match dialect.identity {
                IdentityStrategy::Keyword(keyword) => {
                    sql.push(' ');
                    sql.push_str(keyword);
                }
                IdentityStrategy::Sequence {
                    default: Some(template),
                    ..
                } => {
                    let name = self.sequence_name(table, col);
                    sql.push_str(" DEFAULT ");
                    sql.push_str(&fill_pairs(template, &[('n', &name)]));
                }
                _ => {}
            }
        }

        if full && !col.is_nullable() && !rowid {
            sql.push_str(" NOT NULL");
        }
        if let Some(check) = col.check() {
            sql.push_str(" CHECK (");
            sql.push_str(check);
            sql.push(')');
        }
        if let (CommentStyle::Inline, Some(comment)) = (dialect.comments, col.comment()) {
            sql.push_str(" COMMENT ");
            sql.push_str(&quote_literal(comment));
        }
        Ok(sql)
    }

    fn fk_actions(&self, fk: &FKeyModel) -> String {
        let supported = self.dialect.constraints.actions;
        let mut sql = String::new();
        for (keyword, action, allowed) in [
            ("DELETE", fk.delete_action(), supported.on_delete),
            ("UPDATE", fk.update_action(), supported.on_update),
        ] {
            let Some(action) = action else { continue };
            if allowed {
                sql.push_str(" ON ");
                sql.push_str(keyword);
                sql.push(' ');
                sql.push_str(action.as_sql());
            } else {
                debug!(
                    dialect = self.dialect.id,
                    fkey = fk.name(),
                    action = keyword,
                    "Referential action not supported, skipped"
                );
            }
        }
        sql
    }

    fn drop_index(&self, table: &str, name: &str) -> String {
        fill_pairs(
            self.dialect.drops.index,
            &[('t', table), ('n', &self.ident(name))],
        )
    }

    fn drop_unique(&self, table: &str, name: &str) -> String {
        match self.dialect.constraints.unique {
            UniquePlacement::AlterTable { drop, .. } => {
                fill_pairs(drop, &[('t', table), ('n', &self.ident(name))])
            }
            UniquePlacement::UniqueIndex => self.drop_index(table, name),
        }
    }

    fn sequence_name(&self, table: &TableModel, col: &ColumnModel) -> String {
        self.synthesized_ident(&format!("{}_{}_seq", table.name(), col.name()))
    }

    /// Renders a name the model does not carry, fitted to the dialect's
    /// identifier limit.
    fn synthesized_ident(&self, name: &str) -> String {
        let escaped = self.dialect.escape_name(name);
        self.ident(&self.dialect.fit_identifier(&escaped))
    }

    fn ident(&self, name: &str) -> String {
        self.dialect
            .render_identifier(name, self.options.quote_identifiers)
    }

    fn ident_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|n| self.ident(n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate_table(&self, table: &TableModel) -> Result<()> {
        if table.columns().is_empty() {
            return Err(DdlError::invalid_model(format!(
                "table '{}' has no columns",
                table.name()
            )));
        }
        let constraints = table
            .fkeys()
            .iter()
            .map(|f| ("foreign key", f.name(), f.column_names()))
            .chain(
                table
                    .indexes()
                    .iter()
                    .map(|i| ("index", i.name(), i.column_names())),
            )
            .chain(
                table
                    .uniques()
                    .iter()
                    .map(|u| ("unique constraint", u.name(), u.column_names())),
            );
        for (kind, name, columns) in constraints {
            for column in columns {
                if table.column(column).is_none() {
                    return Err(DdlError::invalid_model(format!(
                        "{kind} '{name}' on table '{}' references unknown column '{column}'",
                        table.name()
                    )));
                }
            }
        }
        self.check_rendered_names(
            table,
            "column",
            table.columns().iter().map(ColumnModel::name),
        )?;
        self.check_rendered_names(
            table,
            "constraint",
            table
                .fkeys()
                .iter()
                .map(FKeyModel::name)
                .chain(table.indexes().iter().map(|i| i.name()))
                .chain(table.uniques().iter().map(|u| u.name())),
        )?;
        if self.dialect.identity == IdentityStrategy::RowidAlias {
            let pkey = table.pkey_columns();
            for col in table.columns().iter().filter(|c| c.is_auto_id()) {
                if pkey.len() != 1 || pkey[0].name() != col.name() {
                    return Err(DdlError::invalid_model(format!(
                        "{} supports auto-increment only on a single-column primary key; \
                         column '{}' of table '{}' is not one",
                        self.dialect.name,
                        col.name(),
                        table.name()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rejects names that are distinct in the model but render the same,
    /// such as `check` and `check_attribute` once reserved words are
    /// suffixed.
    fn check_rendered_names<'a>(
        &self,
        table: &TableModel,
        kind: &str,
        names: impl Iterator<Item = &'a str>,
    ) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for name in names {
            let rendered = self.dialect.escape_name(name).to_ascii_lowercase();
            if let Some(first) = seen.insert(rendered, name) {
                return Err(DdlError::invalid_model(format!(
                    "{kind} names '{first}' and '{name}' of table '{}' both render as '{}' in {}",
                    table.name(),
                    self.dialect.escape_name(name),
                    self.dialect.name
                )));
            }
        }
        Ok(())
    }

    fn emit(&self, statements: Vec<String>) -> Vec<String> {
        if self.options.show_sql {
            for sql in &statements {
                info!(dialect = self.dialect.id, sql = %sql, "DDL");
            }
        }
        statements
    }
}

/// Checks that every referenced column of `fk` exists in `target`.
fn check_ref_columns(target: &TableModel, fk: &FKeyModel) -> Result<()> {
    for column in fk.ref_column_names() {
        if target.column(column).is_none() {
            return Err(DdlError::invalid_model(format!(
                "foreign key '{}' references unknown column '{}.{column}'",
                fk.name(),
                target.name()
            )));
        }
    }
    Ok(())
}

/// Single-quoted SQL string literal.
fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

// ================================================================
// Descriptor shorthands
// ================================================================

impl DialectDescriptor {
    /// Synthesizer for this dialect with default options.
    #[must_use]
    pub const fn synthesizer(&self) -> DdlSynthesizer<'_> {
        DdlSynthesizer::new(self)
    }

    /// Shorthand for [`DdlSynthesizer::create_ddl`].
    ///
    /// # Errors
    ///
    /// See [`DdlSynthesizer::create_ddl`].
    pub fn to_create_ddl(&self, table: &TableModel) -> Result<Vec<String>> {
        self.synthesizer().create_ddl(table)
    }

    /// Shorthand for [`DdlSynthesizer::drop_ddl`].
    #[must_use]
    pub fn to_drop_ddl(&self, table: &TableModel) -> Vec<String> {
        self.synthesizer().drop_ddl(table)
    }

    /// Shorthand for [`DdlSynthesizer::add_column_ddl`].
    ///
    /// # Errors
    ///
    /// See [`DdlSynthesizer::add_column_ddl`].
    pub fn to_add_column_ddl(&self, column: ColumnRef<'_>) -> Result<Vec<String>> {
        self.synthesizer().add_column_ddl(column)
    }

    /// Shorthand for [`DdlSynthesizer::drop_column_ddl`].
    #[must_use]
    pub fn to_drop_column_ddl(&self, column: ColumnRef<'_>) -> Vec<String> {
        self.synthesizer().drop_column_ddl(column)
    }
}
