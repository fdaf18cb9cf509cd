//! Library of bit-by-bit cyclic redundancy checks.
//! Provides reusable modules for the 16-bit (poly 0xA001) and the
//! 32-bit (poly 0xEDB88320) reflected variants, one-shot and streaming.

pub mod crc16;
pub mod crc32;
