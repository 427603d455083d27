pub mod cursor;
pub mod table;
pub mod ui;
