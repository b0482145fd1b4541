//! Student record screens: the form, the table and the page that owns them.

pub mod form;
pub mod page;
pub mod table;
