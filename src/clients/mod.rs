pub mod nba;

pub use nba::{Endpoint, NbaClient, Transport, TransportError};
