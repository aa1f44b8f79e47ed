pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod host;
pub mod imagekit;
pub mod models;
pub mod repository;
pub mod service;
