pub mod add;
pub mod check;
pub mod history;
pub mod show;
