#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod model;
pub mod proto;
pub mod error;
pub mod hotel;
pub mod export;
pub mod menu;
