//! Engine-independent schema model.
//!
//! Tables, columns and constraints are assembled through builders and
//! validated as they are added. The synthesizer and the source emitter
//! only ever read them.

mod column;
mod constraint;
mod table;

pub use column::{
    bigint, binary, bit, blob, boolean, char, clob, date, decimal, double, float, integer, long,
    long_varbinary, long_varchar, nchar, nclob, numeric, nvarchar, real, smallint, time,
    timestamp, tinyint, varbinary, varchar, ColumnBuilder, ColumnModel, DefaultValue,
};
pub use constraint::{FKeyModel, ForeignKeyAction, IndexModel, UniqueModel};
pub use table::{ColumnRef, TableModel};
