mod archive;

pub use archive::LogArchive;
