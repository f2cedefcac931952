pub mod checkbox;
pub mod event;
pub mod history;
pub mod record;
pub mod sheet;
pub mod student;
