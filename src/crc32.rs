/// CRC-32 (poly 0xEDB88320 reflected, init 0xFFFFFFFF, final XOR
/// 0xFFFFFFFF), bit-by-bit implementation. Same parameterization as
/// zlib's crc32.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            let lsb_set = (crc & 1) != 0;
            crc >>= 1;
            if lsb_set {
                crc ^= 0xEDB8_8320;
            }
        }
    }

    !crc
}

/// Streaming form of [`crc32`].
pub struct Crc32 {
    crc: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Crc32 { crc: 0xFFFF_FFFF }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= byte as u32;
            for _ in 0..8 {
                let lsb_set = (self.crc & 1) != 0;
                self.crc >>= 1;
                if lsb_set {
                    self.crc ^= 0xEDB8_8320;
                }
            }
        }
    }

    pub fn finish(&self) -> u32 {
        !self.crc
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}
