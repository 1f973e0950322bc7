mod upload_file;

pub use upload_file::{
    object_key, UploadFileCommand, UploadFileCommandError, UploadFileError, UploadFileUseCase,
    UploadedFile,
};
