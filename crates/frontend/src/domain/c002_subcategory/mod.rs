pub mod flow;
pub mod ui;
