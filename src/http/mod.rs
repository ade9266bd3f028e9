//! HTTP executor layer — blocking JSON-RPC and REST round trips.

pub mod client;

pub use client::AlchemyHttp;
