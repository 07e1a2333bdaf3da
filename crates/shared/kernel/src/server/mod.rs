pub mod health;
pub mod router;
