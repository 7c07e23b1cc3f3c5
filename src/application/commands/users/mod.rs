// src/application/commands/users/mod.rs
mod login;
mod register;
mod service;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
