pub mod check;
pub mod clean;
pub mod context;
pub mod init;
pub mod lines;
