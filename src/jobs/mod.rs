pub mod token_expiry;
