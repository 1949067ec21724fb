pub mod extract;
pub mod generate;
pub mod init;
pub mod skills;
