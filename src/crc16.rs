/// CRC-16/MODBUS (poly 0xA001 reflected, init 0xFFFF, no final XOR),
/// bit-by-bit implementation.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;

    for &byte in data {
        // Only the low 8 bits are affected; `byte` never reaches bit 8.
        crc ^= byte as u16;
        for _ in 0..8 {
            let lsb_set = (crc & 0x0001) != 0;
            crc >>= 1;
            if lsb_set {
                crc ^= 0xA001;
            }
        }
    }

    crc
}

/// Streaming form of [`crc16`]. Feeding the input in arbitrary chunks
/// yields the same result as a single one-shot call.
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    pub fn new() -> Self {
        Crc16 { crc: 0xFFFF }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= byte as u16;
            for _ in 0..8 {
                let lsb_set = (self.crc & 0x0001) != 0;
                self.crc >>= 1;
                if lsb_set {
                    self.crc ^= 0xA001;
                }
            }
        }
    }

    /// Current register value. No final XOR is applied, so this can be
    /// called mid-stream and the digest kept for further updates.
    pub fn finish(&self) -> u16 {
        self.crc
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}
