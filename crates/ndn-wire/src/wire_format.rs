//! # Wire-Format Extension Point
//!
//! [`WireFormat`] is the seam between packet structures and their binary
//! representation. Call sites obtain the current implementation from the
//! [`crate::registry`] instead of being handed one explicitly, so an
//! application can swap the codec process-wide at startup.
//!
//! [`TlvWireFormat`] covers the name level of the NDN-TLV encoding; full
//! packet codecs (Interest, Data, certificates) are host-application
//! extensions of the same trait.

use crate::name::Name;
use crate::tlv::{TlvDecoder, TlvEncoder, TlvError, TLV_NAME, TLV_NAME_COMPONENT};

/// A pluggable codec for the binary wire representation of packet
/// structures.
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance
/// is shared process-wide through the registry.
pub trait WireFormat: Send + Sync {
    /// Encode a name to its wire representation.
    fn encode_name(&self, name: &Name) -> Result<Vec<u8>, TlvError>;

    /// Decode a name from its wire representation.
    ///
    /// The buffer must contain exactly one name element; trailing bytes are
    /// an error.
    fn decode_name(&self, wire: &[u8]) -> Result<Name, TlvError>;
}

/// NDN-TLV implementation of [`WireFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TlvWireFormat;

impl TlvWireFormat {
    /// Create the TLV wire format.
    pub fn new() -> Self {
        Self
    }
}

impl WireFormat for TlvWireFormat {
    fn encode_name(&self, name: &Name) -> Result<Vec<u8>, TlvError> {
        let mut inner = TlvEncoder::new();
        for component in name.components() {
            inner.write_tlv(TLV_NAME_COMPONENT, component.value());
        }

        let mut outer = TlvEncoder::new();
        outer.write_tlv(TLV_NAME, &inner.into_bytes());
        Ok(outer.into_bytes())
    }

    fn decode_name(&self, wire: &[u8]) -> Result<Name, TlvError> {
        let mut outer = TlvDecoder::new(wire);
        let value = outer.read_tlv(TLV_NAME)?;
        outer.finish()?;

        let mut name = Name::new();
        let mut inner = TlvDecoder::new(value);
        while inner.remaining() > 0 {
            name.push(inner.read_tlv(TLV_NAME_COMPONENT)?);
        }
        Ok(name)
    }
}
