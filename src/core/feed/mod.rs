//! Atom feed decoding
//!
//! HMC resource collections come back as Atom feeds whose `content`
//! elements wrap schema-specific domain elements. The decoder in this module
//! is generic over [`DomainElement`](crate::domain::element::DomainElement),
//! so one routine serves every resource type.

mod decoder;

pub use decoder::decode;
