/// All database primary keys are SQLite 64-bit integer rowids.
pub type DbId = i64;
