pub mod items;
pub mod parse;
