mod generation_transport;

pub use generation_transport::{GenerationTransport, TransportResponse};
