pub mod console;
pub mod dispatch;
pub mod init;
pub mod tree;
