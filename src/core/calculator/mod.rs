pub mod hours;
pub mod tier;
pub mod totals;
