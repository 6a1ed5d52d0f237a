/// A fixed-width, addressable storage location inside a device.
///
/// Implemented by each driver's register catalogue. Transactions start by
/// writing [`address`](Register::address) to the device, followed by
/// [`width`](Register::width) data bytes in either direction.
pub trait Register: Copy {
    /// One-byte register pointer sent at the start of every transaction.
    fn address(self) -> u8;

    /// Number of data bytes held by the register. Command registers that
    /// take no payload report 0.
    fn width(self) -> usize;
}
