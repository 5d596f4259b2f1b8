pub mod fingerprint;
pub mod message_storage;
pub mod plural;
