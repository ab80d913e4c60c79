//! # NDN Wire Primitives
//!
//! Foundational types shared by every other crate in the workspace:
//!
//! - [`Name`] / [`NameComponent`]: hierarchical packet and certificate names
//!   with NDN URI escaping and canonical ordering.
//! - [`TlvEncoder`] / [`TlvDecoder`]: NDN-TLV variable-length number and
//!   type-length-value primitives.
//! - [`WireFormat`]: the pluggable codec extension point, with
//!   [`TlvWireFormat`] as the name-level implementation and the
//!   process-wide [`registry`] holding the current instance.
//!
//! Packet-level encoders (Interest, Data, certificates) live behind the
//! [`WireFormat`] seam and are provided by the host application.

pub mod name;
pub mod registry;
pub mod tlv;
pub mod wire_format;

pub use name::{Name, NameComponent, NameError};
pub use tlv::{TlvDecoder, TlvEncoder, TlvError};
pub use wire_format::{TlvWireFormat, WireFormat};
