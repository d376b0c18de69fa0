pub mod file_io;

pub mod time;
