//! Report construction and validation for the Anime Matrix protocol.
//!
//! Report format:
//! - REPORT ID (1 byte): 0x5E, the device-class tag of the matrix
//! - PAYLOAD (0-639 bytes): opcode bytes followed by arguments
//! - PADDING: zeros up to the fixed report length of 640 bytes
//!
//! There is no length field and no checksum. The controller relies on the
//! opcode to know how many payload bytes are meaningful.

/// Report id (device-class tag) of every matrix report
pub const REPORT_ID: u8 = 0x5E;

/// Total report length including the report id
pub const REPORT_LEN: usize = 640;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = REPORT_LEN - 1;

/// Errors that can occur while building or reading reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Payload exceeds the space left in the report
    PayloadTooLarge,
    /// First byte is not the matrix report id
    InvalidReportId,
    /// Report or command arguments are shorter than required
    Truncated,
    /// Opcode not recognised
    UnknownCommand,
    /// Argument outside the range the controller accepts
    InvalidValue,
}

/// A single fixed-size report
///
/// Built fresh for every send and never modified once handed to a
/// transport. Appending consumes the packet and returns a new one, so a
/// half-built report cannot leak out on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    bytes: [u8; REPORT_LEN],
    /// Number of meaningful payload bytes after the report id
    len: usize,
}

impl Packet {
    /// Create a report carrying the given payload
    pub fn new(payload: &[u8]) -> Result<Self, PacketError> {
        let packet = Self {
            bytes: Self::blank(),
            len: 0,
        };
        packet.append(payload)
    }

    /// Create a report from opcode bytes alone
    ///
    /// Opcodes are at most a couple of bytes, so this cannot overflow.
    pub fn with_opcode(opcode: &[u8]) -> Result<Self, PacketError> {
        Self::new(opcode)
    }

    fn blank() -> [u8; REPORT_LEN] {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[0] = REPORT_ID;
        bytes
    }

    /// Append argument bytes to the payload
    pub fn append(mut self, data: &[u8]) -> Result<Self, PacketError> {
        let end = self.len + data.len();
        if end > MAX_PAYLOAD_SIZE {
            return Err(PacketError::PayloadTooLarge);
        }
        self.bytes[1 + self.len..1 + end].copy_from_slice(data);
        self.len = end;
        Ok(self)
    }

    /// Append a single argument byte
    pub fn append_byte(self, byte: u8) -> Result<Self, PacketError> {
        self.append(&[byte])
    }

    /// Append a little-endian u16 argument
    pub fn append_u16_le(self, value: u16) -> Result<Self, PacketError> {
        self.append(&value.to_le_bytes())
    }

    /// Take ownership of a raw report read back from a device or capture
    ///
    /// The payload length cannot be recovered from the wire, so the whole
    /// remainder of the report is treated as payload.
    pub fn from_report(report: &[u8]) -> Result<Self, PacketError> {
        if report.len() < REPORT_LEN {
            return Err(PacketError::Truncated);
        }
        if report.len() > REPORT_LEN {
            return Err(PacketError::PayloadTooLarge);
        }
        if report[0] != REPORT_ID {
            return Err(PacketError::InvalidReportId);
        }

        let mut bytes = [0u8; REPORT_LEN];
        bytes.copy_from_slice(report);
        Ok(Self {
            bytes,
            len: MAX_PAYLOAD_SIZE,
        })
    }

    /// The meaningful payload bytes (opcode first)
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..1 + self.len]
    }

    /// The complete zero-padded report, ready for a transport
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Report id of this packet
    pub fn report_id(&self) -> u8 {
        self.bytes[0]
    }

    /// Space still available for arguments
    pub fn remaining(&self) -> usize {
        MAX_PAYLOAD_SIZE - self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_layout() {
        let packet = Packet::with_opcode(&[0xC0, 0x03]).unwrap();
        let bytes = packet.as_bytes();

        assert_eq!(bytes.len(), REPORT_LEN);
        assert_eq!(bytes[0], REPORT_ID);
        assert_eq!(bytes[1], 0xC0);
        assert_eq!(bytes[2], 0x03);
        assert!(bytes[3..].iter().all(|&b| b == 0));
        assert_eq!(packet.payload(), &[0xC0, 0x03]);
    }

    #[test]
    fn test_append_arguments() {
        let packet = Packet::with_opcode(&[0xC0, 0x02])
            .and_then(|p| p.append_u16_le(491))
            .and_then(|p| p.append_u16_le(2))
            .and_then(|p| p.append(&[0xAB, 0xCD]))
            .unwrap();

        // 491 = 0x01EB little-endian
        assert_eq!(packet.payload(), &[0xC0, 0x02, 0xEB, 0x01, 0x02, 0x00, 0xAB, 0xCD]);
        assert_eq!(packet.remaining(), MAX_PAYLOAD_SIZE - 8);
    }

    #[test]
    fn test_payload_fills_report_exactly() {
        let payload = [0x11u8; MAX_PAYLOAD_SIZE];
        let packet = Packet::new(&payload).unwrap();
        assert_eq!(packet.remaining(), 0);
        assert_eq!(packet.as_bytes()[REPORT_LEN - 1], 0x11);
    }

    #[test]
    fn test_payload_too_large() {
        let payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Packet::new(&payload), Err(PacketError::PayloadTooLarge));

        let full = Packet::new(&[0u8; MAX_PAYLOAD_SIZE]).unwrap();
        assert_eq!(full.append_byte(1), Err(PacketError::PayloadTooLarge));
    }

    #[test]
    fn test_from_report_checks_id_and_length() {
        let packet = Packet::with_opcode(&[0xC0, 0x04]).unwrap();
        let parsed = Packet::from_report(packet.as_bytes()).unwrap();
        assert_eq!(parsed.as_bytes(), packet.as_bytes());
        assert_eq!(parsed.payload().len(), MAX_PAYLOAD_SIZE);

        let mut wrong_id = [0u8; REPORT_LEN];
        wrong_id[0] = 0x5D;
        assert_eq!(
            Packet::from_report(&wrong_id),
            Err(PacketError::InvalidReportId)
        );

        assert_eq!(
            Packet::from_report(&packet.as_bytes()[..100]),
            Err(PacketError::Truncated)
        );
    }
}
