pub mod history;
pub mod position;
