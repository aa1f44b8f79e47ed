pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
