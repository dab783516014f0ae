//! Pagination across the dialect registry.

use oxide_dialects_core::dialect::{self, H2, MYSQL8, SQLSERVER2005};
use oxide_dialects_core::paging::ROW_NUMBER_COLUMN;
use oxide_dialects_core::{paginate, DdlError};

const BASE: &str = "select * from user_t order by last_name";

#[test]
fn h2_second_page() {
    let h2 = dialect::resolve("H2Dialect").unwrap();
    assert_eq!(
        paginate(h2, 2, 20, "select * from user_t").unwrap(),
        "select * from user_t LIMIT 20 OFFSET 20"
    );
}

#[test]
fn limit_offset_pages_partition_rows() {
    // Page n covers rows (n-1)*size+1 ..= n*size.
    for page in 1..=5_i64 {
        let sql = MYSQL8.paginate(page, 7, BASE).unwrap();
        let offset = (page - 1) * 7;
        if offset == 0 {
            assert_eq!(sql, format!("{BASE} LIMIT 7"));
        } else {
            assert_eq!(sql, format!("{BASE} LIMIT 7 OFFSET {offset}"));
        }
    }
}

#[test]
fn row_number_windows_are_adjacent() {
    let first = SQLSERVER2005.paginate(1, 25, BASE).unwrap();
    let second = SQLSERVER2005.paginate(2, 25, BASE).unwrap();
    assert!(first.contains(&format!("{ROW_NUMBER_COLUMN} > 0 AND {ROW_NUMBER_COLUMN} <= 25")));
    assert!(second.contains(&format!("{ROW_NUMBER_COLUMN} > 25 AND {ROW_NUMBER_COLUMN} <= 50")));
    assert!(second.contains("OVER (ORDER BY last_name)"));
}

#[test]
fn every_dialect_paginates() {
    for d in dialect::all() {
        let first = d.paginate(1, 10, BASE).unwrap_or_else(|e| panic!("{d}: {e}"));
        let third = d.paginate(3, 10, BASE).unwrap_or_else(|e| panic!("{d}: {e}"));
        assert_ne!(first, third, "{d}");
        assert!(first.contains("user_t"), "{d}: {first}");
        assert!(third.contains("20"), "{d}: {third}");
        assert!(!third.contains(';'), "{d}: {third}");
    }
}

#[test]
fn trailing_terminator_is_dropped() {
    assert_eq!(
        H2.paginate(1, 5, "select * from user_t ;").unwrap(),
        "select * from user_t LIMIT 5"
    );
}

#[test]
fn invalid_requests() {
    for d in dialect::all() {
        let err = d.paginate(0, 10, BASE).unwrap_err();
        assert!(matches!(err, DdlError::InvalidPage { page: 0, size: 10 }), "{d}");
        assert!(d.paginate(1, -3, BASE).is_err(), "{d}");
    }
    let err = H2.paginate(0, 10, BASE).unwrap_err();
    assert_eq!(err.to_string(), "Invalid page request: page 0, size 10");
}

#[test]
fn trailing_comment_is_dropped_everywhere() {
    let commented = format!("{BASE} -- sorted by surname\n;");
    for d in dialect::all() {
        let sql = d.paginate(2, 10, &commented).unwrap();
        assert_eq!(sql, d.paginate(2, 10, BASE).unwrap(), "{d}");
        assert!(!sql.contains("--"), "{d}: {sql}");
    }
}
