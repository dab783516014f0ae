//! Table ordering for multi-table DDL.

use crate::error::{DdlError, Result};
use crate::model::TableModel;

/// Rejects table sets with two tables of the same name.
pub(super) fn check_unique_names(tables: &[TableModel]) -> Result<()> {
    for (i, table) in tables.iter().enumerate() {
        if tables[..i]
            .iter()
            .any(|t| t.name().eq_ignore_ascii_case(table.name()))
        {
            return Err(DdlError::invalid_model(format!(
                "table '{}' is defined more than once",
                table.name()
            )));
        }
    }
    Ok(())
}

/// Indexes of `tables`, referenced tables before referencing ones.
///
/// Stable: among tables whose references are satisfied, declaration order
/// wins. Self-references and references to tables outside the set are
/// ignored.
///
/// # Errors
///
/// [`DdlError::InvalidModelDefinition`] naming the tables left over when
/// the references form a cycle.
pub(super) fn dependency_order(tables: &[TableModel]) -> Result<Vec<usize>> {
    let deps: Vec<Vec<usize>> = tables
        .iter()
        .enumerate()
        .map(|(i, table)| {
            let mut targets: Vec<usize> = table
                .fkeys()
                .iter()
                .filter_map(|fk| {
                    tables
                        .iter()
                        .position(|t| t.name().eq_ignore_ascii_case(fk.ref_table()))
                })
                .filter(|&target| target != i)
                .collect();
            targets.dedup();
            targets
        })
        .collect();

    let mut placed = vec![false; tables.len()];
    let mut order = Vec::with_capacity(tables.len());
    while order.len() < tables.len() {
        let next = (0..tables.len())
            .find(|&i| !placed[i] && deps[i].iter().all(|&d| placed[d]));
        match next {
            Some(i) => {
                placed[i] = true;
                order.push(i);
            }
            None => {
                let stuck: Vec<&str> = (0..tables.len())
                    .filter(|&i| !placed[i])
                    .map(|i| tables[i].name())
                    .collect();
                return Err(DdlError::invalid_model(format!(
                    "foreign keys form a cycle between tables: {}",
                    stuck.join(", ")
                )));
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{integer, FKeyModel};

    fn table(name: &str, refs: &[&str]) -> TableModel {
        let mut t = TableModel::new(name).unwrap();
        t.add_column(integer("id").pkey()).unwrap();
        for (i, target) in refs.iter().enumerate() {
            let column = format!("ref_{i}");
            t.add_column(integer(&column)).unwrap();
            t.add_fkey(
                FKeyModel::new(format!("fk_{name}_{i}"))
                    .columns([column])
                    .refs(*target, ["id"]),
            )
            .unwrap();
        }
        t
    }

    #[test]
    fn test_referenced_first() {
        let tables = [table("c", &["b"]), table("b", &["a"]), table("a", &[])];
        assert_eq!(dependency_order(&tables).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_stable_without_references() {
        let tables = [table("x", &[]), table("y", &["y"]), table("z", &["outside"])];
        assert_eq!(dependency_order(&tables).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_cycle_detected() {
        let tables = [table("a", &["b"]), table("b", &["a"])];
        let err = dependency_order(&tables).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_duplicate_names() {
        let tables = [table("a", &[]), table("A", &[])];
        assert!(check_unique_names(&tables).is_err());
    }
}
