//! Client SDK for the 17track v2.1 shipment tracking API.
//!
//! Every operation is a single `POST {host}/v2.1/{endpoint}` carrying a JSON
//! array of at most [`MAX_BATCH_SIZE`] items, authenticated with the
//! `17token` header.

mod client;
mod config;
mod errors;
mod request;
pub mod types;
pub use self::client::Client;
pub use self::config::{Config, Endpoint, API_KEY_HEADER, API_VERSION, DEFAULT_HOST};
pub use self::errors::Error;
pub use self::request::{
    check_batch_size, Carrier, ChangeCarrierItem, ChangeInfoItem, RegisterItem, TrackNumber,
    MAX_BATCH_SIZE,
};
