pub mod imagekit_upload_response;
