//! Inbound adapters that translate HTTP requests into directory service
//! calls while keeping framework details at the edge.

pub mod http;
