// Exercise route handlers, one module per binary

pub mod divide;
pub mod health;
pub mod motd;
