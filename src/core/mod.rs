pub mod calculator;
pub mod controller;
pub mod filter;
pub mod submit;
