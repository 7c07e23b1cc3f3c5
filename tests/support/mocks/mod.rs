// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod blog_store;
pub mod security;
pub mod time;

pub use blog_store::{BlogStore, CallCounts};
pub use security::PlainPasswordHasher;
pub use time::{FixedClock, fixed_now};
