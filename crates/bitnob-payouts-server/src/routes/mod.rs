pub mod health;
pub mod payouts;
