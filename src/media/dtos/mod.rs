pub mod upload_media_dto;
