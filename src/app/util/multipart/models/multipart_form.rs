use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub files: Vec<FileProperties>,
    pub fields: HashMap<String, String>,
}

impl MultipartForm {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self.files.iter().position(|f| f.field_name == field_name)?;
        Some(self.files.swap_remove(index))
    }
}
