//! Device errors

use anime_protocol::PacketError;

/// Errors from talking to the matrix
///
/// `E` is the transport's own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError<E> {
    /// The transport failed to deliver a report
    Transport(E),
    /// A report could not be built
    Packet(PacketError),
}

impl<E> From<PacketError> for DeviceError<E> {
    fn from(e: PacketError) -> Self {
        DeviceError::Packet(e)
    }
}

impl<E> DeviceError<E> {
    /// Whether the failure happened on the wire
    pub fn is_transport(&self) -> bool {
        matches!(self, DeviceError::Transport(_))
    }
}
