//! Command set of the matrix controller
//!
//! | Command                   | Opcode  | Arguments                                 |
//! |---------------------------|---------|-------------------------------------------|
//! | Write LED range           | `C0 02` | address+1 (u16 LE), length (u16 LE), data |
//! | Commit                    | `C0 03` | -                                         |
//! | Set brightness            | `C0 04` | level (0-3)                               |
//! | Display on/off            | `C3 01` | `00` on / `80` off                        |
//! | Built-in animation on/off | `C4 01` | `00` on / `80` off                        |
//! | Built-in animation select | `C5`    | packed selector byte                      |
//! | Wake handshake            | -       | ASCII vendor string                       |

use crate::packet::{Packet, PacketError, MAX_PAYLOAD_SIZE};
use crate::settings::{Brightness, BuiltInAnimation};

/// Opcode prefixes
pub mod opcode {
    pub const WRITE_RANGE: [u8; 2] = [0xC0, 0x02];
    pub const COMMIT: [u8; 2] = [0xC0, 0x03];
    pub const BRIGHTNESS: [u8; 2] = [0xC0, 0x04];
    pub const DISPLAY_STATE: [u8; 2] = [0xC3, 0x01];
    pub const BUILTIN_ENABLE: [u8; 2] = [0xC4, 0x01];
    pub const BUILTIN_SELECT: [u8; 1] = [0xC5];
}

/// Flag byte for "on"
pub const FLAG_ON: u8 = 0x00;

/// Flag byte for "off"
pub const FLAG_OFF: u8 = 0x80;

/// Identification string that wakes the controller
pub const WAKE_HANDSHAKE: &[u8] = b"ASUS Tech.Inc.";

/// Opcode plus address and length fields of a write-range command
pub const WRITE_HEADER_LEN: usize = 6;

/// Largest LED range a single write-range command can carry
pub const MAX_WRITE_LEN: usize = MAX_PAYLOAD_SIZE - WRITE_HEADER_LEN;

/// Commands sent from the host to the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Stage brightness values starting at a 0-based buffer offset
    ///
    /// On the wire the offset is sent 1-based.
    WriteRange { start: u16, data: &'a [u8] },
    /// Make everything staged so far visible
    Commit,
    /// Set panel brightness
    SetBrightness(Brightness),
    /// Turn the panel on or off
    SetDisplay { enabled: bool },
    /// Enable or disable the firmware animations
    SetBuiltInEnabled { enabled: bool },
    /// Pick the firmware animation presets
    SelectBuiltIn(BuiltInAnimation),
    /// Identification handshake
    WakeUp,
}

fn flag(enabled: bool) -> u8 {
    if enabled {
        FLAG_ON
    } else {
        FLAG_OFF
    }
}

fn parse_flag(byte: u8) -> Result<bool, PacketError> {
    match byte {
        FLAG_ON => Ok(true),
        FLAG_OFF => Ok(false),
        _ => Err(PacketError::InvalidValue),
    }
}

fn arg(args: &[u8], index: usize) -> Result<u8, PacketError> {
    args.get(index).copied().ok_or(PacketError::Truncated)
}

impl<'a> Command<'a> {
    /// Encode this command into a report
    pub fn to_packet(&self) -> Result<Packet, PacketError> {
        match self {
            Command::WriteRange { start, data } => {
                if data.len() > MAX_WRITE_LEN {
                    return Err(PacketError::PayloadTooLarge);
                }
                let address = start.checked_add(1).ok_or(PacketError::InvalidValue)?;

                Packet::with_opcode(&opcode::WRITE_RANGE)?
                    .append_u16_le(address)?
                    .append_u16_le(data.len() as u16)?
                    .append(data)
            }
            Command::Commit => Packet::with_opcode(&opcode::COMMIT),
            Command::SetBrightness(level) => {
                Packet::with_opcode(&opcode::BRIGHTNESS)?.append_byte(level.to_byte())
            }
            Command::SetDisplay { enabled } => {
                Packet::with_opcode(&opcode::DISPLAY_STATE)?.append_byte(flag(*enabled))
            }
            Command::SetBuiltInEnabled { enabled } => {
                Packet::with_opcode(&opcode::BUILTIN_ENABLE)?.append_byte(flag(*enabled))
            }
            Command::SelectBuiltIn(animation) => {
                Packet::with_opcode(&opcode::BUILTIN_SELECT)?.append_byte(animation.to_byte())
            }
            Command::WakeUp => Packet::new(WAKE_HANDSHAKE),
        }
    }

    /// Parse a command from a report
    ///
    /// Used by emulators and capture tools; the controller itself is the
    /// only real consumer of these reports.
    pub fn from_packet(packet: &'a Packet) -> Result<Self, PacketError> {
        let payload = packet.payload();

        if payload.starts_with(WAKE_HANDSHAKE) {
            return Ok(Command::WakeUp);
        }
        if payload.starts_with(&opcode::BUILTIN_SELECT) {
            let selector = arg(payload, 1)?;
            let animation =
                BuiltInAnimation::from_byte(selector).ok_or(PacketError::InvalidValue)?;
            return Ok(Command::SelectBuiltIn(animation));
        }
        if payload.len() < 2 {
            return Err(PacketError::Truncated);
        }

        let (op, args) = payload.split_at(2);
        match [op[0], op[1]] {
            opcode::WRITE_RANGE => {
                if args.len() < 4 {
                    return Err(PacketError::Truncated);
                }
                let address = u16::from_le_bytes([args[0], args[1]]);
                let len = u16::from_le_bytes([args[2], args[3]]) as usize;
                let start = address.checked_sub(1).ok_or(PacketError::InvalidValue)?;
                let data = args.get(4..4 + len).ok_or(PacketError::Truncated)?;
                Ok(Command::WriteRange { start, data })
            }
            opcode::COMMIT => Ok(Command::Commit),
            opcode::BRIGHTNESS => {
                let level = Brightness::from_byte(arg(args, 0)?).ok_or(PacketError::InvalidValue)?;
                Ok(Command::SetBrightness(level))
            }
            opcode::DISPLAY_STATE => Ok(Command::SetDisplay {
                enabled: parse_flag(arg(args, 0)?)?,
            }),
            opcode::BUILTIN_ENABLE => Ok(Command::SetBuiltInEnabled {
                enabled: parse_flag(arg(args, 0)?)?,
            }),
            _ => Err(PacketError::UnknownCommand),
        }
    }
}
