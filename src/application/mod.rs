pub mod commands;
pub mod dates;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod shaping;
pub mod validation;

pub use error::ApplicationResult;
