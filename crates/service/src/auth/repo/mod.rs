pub mod file;

pub use file::FileUserRepository;
