//! Pagination clause generation.
//!
//! Wraps or extends a base SELECT so that it returns one page of rows.
//! Pages are 1-based. Without an ORDER BY in the base query, the rows of a
//! page are whatever order the engine returns them in.
//!
//! ```
//! use oxide_dialects_core::dialect::H2;
//! use oxide_dialects_core::paging::paginate;
//!
//! let sql = paginate(&H2, 2, 20, "select * from user_t")?;
//! assert_eq!(sql, "select * from user_t LIMIT 20 OFFSET 20");
//! # Ok::<(), oxide_dialects_core::DdlError>(())
//! ```

mod scan;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::dialect::{DialectDescriptor, PagingStrategy};
use crate::error::{DdlError, Result};

/// Row-number column appended by the wrapping strategies.
pub const ROW_NUMBER_COLUMN: &str = "row_num_";

/// Alias of the wrapped base query.
const INNER_ALIAS: &str = "paged_";

/// `qualifier.column` references in an ORDER BY clause.
static QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    let part = r#"(?:[A-Za-z_][A-Za-z0-9_$]*|"[^"]+"|`[^`]+`|\[[^\]]+\])"#;
    Regex::new(&format!(r"{part}\.({part})")).expect("Invalid qualifier regex")
});

/// Rewrites `sql` to return page `page` of `size` rows for `dialect`.
///
/// # Errors
///
/// [`DdlError::InvalidPage`] when `page` or `size` is below 1, or when the
/// row offset does not fit in an `i64`.
pub fn paginate(dialect: &DialectDescriptor, page: i64, size: i64, sql: &str) -> Result<String> {
    let invalid = || DdlError::InvalidPage { page, size };
    if page < 1 || size < 1 {
        return Err(invalid());
    }
    let offset = (page - 1).checked_mul(size).ok_or_else(invalid)?;
    let end = offset.checked_add(size).ok_or_else(invalid)?;
    let window = Window { size, offset, end };

    let scanned = scan::scan(sql);
    debug!(
        dialect = dialect.id,
        page,
        size,
        has_order_by = scanned.order_by.is_some(),
        "Paginating query"
    );

    Ok(match dialect.paging {
        PagingStrategy::LimitOffset => limit_offset(&scanned, window),
        PagingStrategy::OffsetFetch { requires_order_by } => {
            offset_fetch(&scanned, window, requires_order_by)
        }
        PagingStrategy::RowNumberWrap { empty_order } => {
            row_number_wrap(&scanned, window, empty_order)
        }
        PagingStrategy::RownumWrap => rownum_wrap(&scanned, window),
        PagingStrategy::SkipFirst => skip_first(&scanned, window),
    })
}

impl DialectDescriptor {
    /// Shorthand for [`paginate`].
    ///
    /// # Errors
    ///
    /// See [`paginate`].
    pub fn paginate(&self, page: i64, size: i64, sql: &str) -> Result<String> {
        paginate(self, page, size, sql)
    }
}

/// Row range of one page: rows `offset + 1 ..= end`.
#[derive(Debug, Clone, Copy)]
struct Window {
    size: i64,
    offset: i64,
    end: i64,
}

fn limit_offset(q: &scan::Scanned<'_>, w: Window) -> String {
    let mut sql = format!("{} LIMIT {}", q.query, w.size);
    if w.offset > 0 {
        sql.push_str(&format!(" OFFSET {}", w.offset));
    }
    sql
}

fn offset_fetch(q: &scan::Scanned<'_>, w: Window, requires_order_by: bool) -> String {
    let mut sql = q.query.to_string();
    if requires_order_by && q.order_by.is_none() {
        sql.push_str(" ORDER BY (SELECT NULL)");
    }
    sql.push_str(&format!(
        " OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
        w.offset, w.size
    ));
    sql
}

fn row_number_wrap(q: &scan::Scanned<'_>, w: Window, empty_order: &str) -> String {
    let order = q.sort_keys().map_or_else(
        || empty_order.to_string(),
        |keys| {
            let keys = QUALIFIED.replace_all(keys, format!("{INNER_ALIAS}.$1").as_str());
            format!("ORDER BY {keys}")
        },
    );
    format!(
        "SELECT * FROM (SELECT {INNER_ALIAS}.*, ROW_NUMBER() OVER ({order}) AS {ROW_NUMBER_COLUMN} \
         FROM ({body}) {INNER_ALIAS}) numbered_ \
         WHERE {ROW_NUMBER_COLUMN} > {offset} AND {ROW_NUMBER_COLUMN} <= {end} \
         ORDER BY {ROW_NUMBER_COLUMN}",
        body = q.body(),
        offset = w.offset,
        end = w.end,
    )
}

fn rownum_wrap(q: &scan::Scanned<'_>, w: Window) -> String {
    if w.offset == 0 {
        return format!("SELECT * FROM ({}) WHERE ROWNUM <= {}", q.query, w.size);
    }
    format!(
        "SELECT * FROM (SELECT {INNER_ALIAS}.*, ROWNUM {ROW_NUMBER_COLUMN} FROM ({query}) {INNER_ALIAS} \
         WHERE ROWNUM <= {end}) WHERE {ROW_NUMBER_COLUMN} > {offset}",
        query = q.query,
        end = w.end,
        offset = w.offset,
    )
}

fn skip_first(q: &scan::Scanned<'_>, w: Window) -> String {
    let mut clause = String::new();
    if w.offset > 0 {
        clause.push_str(&format!(" SKIP {}", w.offset));
    }
    clause.push_str(&format!(" FIRST {}", w.size));
    match q.select_end {
        Some(at) => format!("{}{clause}{}", &q.query[..at], &q.query[at..]),
        None => format!("SELECT{clause} * FROM ({}) {INNER_ALIAS}", q.query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{
        DB2, DERBY, H2, INFORMIX, ORACLE10G, ORACLE12C, POSTGRESQL, SQLSERVER2005, SQLSERVER2012,
    };

    #[test]
    fn test_limit_offset() {
        assert_eq!(
            paginate(&H2, 2, 20, "select * from user_t").unwrap(),
            "select * from user_t LIMIT 20 OFFSET 20"
        );
        assert_eq!(
            POSTGRESQL.paginate(1, 10, "select * from t order by id;").unwrap(),
            "select * from t order by id LIMIT 10"
        );
    }

    #[test]
    fn test_invalid_page() {
        for (page, size) in [(0, 10), (1, 0), (-1, 5)] {
            let err = paginate(&H2, page, size, "select 1").unwrap_err();
            assert!(matches!(err, DdlError::InvalidPage { .. }));
        }
        assert!(paginate(&H2, i64::MAX, 2, "select 1").is_err());
        assert!(paginate(&H2, 2, i64::MAX, "select 1").is_err());
    }

    #[test]
    fn test_offset_fetch() {
        assert_eq!(
            paginate(&SQLSERVER2012, 3, 10, "select * from t").unwrap(),
            "select * from t ORDER BY (SELECT NULL) OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
        );
        assert_eq!(
            paginate(&SQLSERVER2012, 1, 10, "select * from t order by a").unwrap(),
            "select * from t order by a OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
        );
        assert_eq!(
            paginate(&DERBY, 2, 5, "select * from t").unwrap(),
            "select * from t OFFSET 5 ROWS FETCH NEXT 5 ROWS ONLY"
        );
        assert!(paginate(&ORACLE12C, 1, 5, "select * from t")
            .unwrap()
            .ends_with("FETCH NEXT 5 ROWS ONLY"));
    }

    #[test]
    fn test_row_number_wrap() {
        let sql = paginate(&SQLSERVER2005, 2, 10, "select u.id, u.name from users u order by u.name desc").unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM (SELECT paged_.*, ROW_NUMBER() OVER (ORDER BY paged_.name desc) AS row_num_ \
             FROM (select u.id, u.name from users u) paged_) numbered_ \
             WHERE row_num_ > 10 AND row_num_ <= 20 ORDER BY row_num_"
        );

        let sql = paginate(&SQLSERVER2005, 1, 5, "select * from t").unwrap();
        assert!(sql.contains("ROW_NUMBER() OVER (ORDER BY (SELECT NULL))"));

        let sql = paginate(&DB2, 1, 5, "select * from t").unwrap();
        assert!(sql.contains("ROW_NUMBER() OVER () AS row_num_"));
    }

    #[test]
    fn test_rownum_wrap() {
        assert_eq!(
            paginate(&ORACLE10G, 1, 10, "select * from t order by id").unwrap(),
            "SELECT * FROM (select * from t order by id) WHERE ROWNUM <= 10"
        );
        assert_eq!(
            paginate(&ORACLE10G, 3, 10, "select * from t").unwrap(),
            "SELECT * FROM (SELECT paged_.*, ROWNUM row_num_ FROM (select * from t) paged_ \
             WHERE ROWNUM <= 30) WHERE row_num_ > 20"
        );
    }

    #[test]
    fn test_trailing_comment_never_swallows_clause() {
        let sql = "select * from user_t order by id -- all users";
        assert_eq!(
            paginate(&H2, 2, 20, sql).unwrap(),
            "select * from user_t order by id LIMIT 20 OFFSET 20"
        );
        assert_eq!(
            paginate(&SQLSERVER2012, 1, 10, sql).unwrap(),
            "select * from user_t order by id OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
        );
        assert_eq!(
            paginate(&SQLSERVER2005, 2, 10, sql).unwrap(),
            "SELECT * FROM (SELECT paged_.*, ROW_NUMBER() OVER (ORDER BY id) AS row_num_ \
             FROM (select * from user_t) paged_) numbered_ \
             WHERE row_num_ > 10 AND row_num_ <= 20 ORDER BY row_num_"
        );
        assert_eq!(
            paginate(&ORACLE10G, 1, 10, sql).unwrap(),
            "SELECT * FROM (select * from user_t order by id) WHERE ROWNUM <= 10"
        );
        assert_eq!(
            paginate(&INFORMIX, 1, 10, "select * from user_t /* all */ -- users").unwrap(),
            "select FIRST 10 * from user_t"
        );
    }

    #[test]
    fn test_comment_before_order_by_left_out_of_wrap() {
        let sql = paginate(&DB2, 1, 5, "select * from t -- everyone\norder by id;").unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM (SELECT paged_.*, ROW_NUMBER() OVER (ORDER BY id) AS row_num_ \
             FROM (select * from t) paged_) numbered_ \
             WHERE row_num_ > 0 AND row_num_ <= 5 ORDER BY row_num_"
        );
    }

    #[test]
    fn test_skip_first() {
        assert_eq!(
            paginate(&INFORMIX, 1, 10, "select * from t").unwrap(),
            "select FIRST 10 * from t"
        );
        assert_eq!(
            paginate(&INFORMIX, 2, 10, "SELECT DISTINCT a FROM t").unwrap(),
            "SELECT SKIP 10 FIRST 10 DISTINCT a FROM t"
        );
        assert_eq!(
            paginate(&INFORMIX, 1, 3, "with q as (select 1 a) select a from q").unwrap(),
            "SELECT FIRST 3 * FROM (with q as (select 1 a) select a from q) paged_"
        );
    }
}
