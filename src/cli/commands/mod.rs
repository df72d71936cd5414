pub mod backup;
pub mod export;
pub mod init;
pub mod list;
pub mod session;
