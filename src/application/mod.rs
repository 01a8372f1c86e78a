pub mod commands;
pub mod dto;
pub mod queries;
