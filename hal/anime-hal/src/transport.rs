//! Report transport abstraction
//!
//! The matrix is driven exclusively with HID feature reports of a fixed
//! size. Implementations send one complete report per call and report I/O
//! failure synchronously; retrying is left to the caller.

/// Report transmitter
///
/// Blocking trait for sending reports to the matrix controller.
pub trait Transport {
    /// Error type for send operations
    type Error;

    /// Send one complete report
    ///
    /// `report` always starts with the report id and is exactly the
    /// device's report length. Blocks until the report has been handed to
    /// the device or an error occurs.
    fn send_report(&mut self, report: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn send_report(&mut self, report: &[u8]) -> Result<(), Self::Error> {
        (**self).send_report(report)
    }
}

/// USB HID identity of a matrix controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidDeviceId {
    /// USB vendor id
    pub vendor_id: u16,
    /// USB product id
    pub product_id: u16,
    /// Report id prefixed to every report
    pub report_id: u8,
    /// Total report length in bytes, report id included
    pub report_length: usize,
}

impl HidDeviceId {
    /// Check whether an enumerated vendor/product pair is this device
    pub const fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }
}

/// The AniMe Matrix controller found in GA401, GA402 and GU604 lids
pub const ANIME_MATRIX_HID: HidDeviceId = HidDeviceId {
    vendor_id: 0x0B05,
    product_id: 0x193B,
    report_id: 0x5E,
    report_length: 640,
};
