pub mod db;
pub mod multipart;
pub mod temp_file;
