mod upload_file;

pub use upload_file::{__path_upload_file_handler, upload_file_handler, UploadFileForm};
