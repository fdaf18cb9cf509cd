use clap::Parser;

use crcsum::crc16::crc16;
use crcsum::crc32::crc32;

#[derive(Parser, Debug)]
#[command(name = "crcsum", about = "Print CRC checksums of the given strings")]
struct Args {
    /// Strings to checksum (their raw UTF-8 bytes)
    #[arg(value_name = "STRING", default_values_t = ["hello".to_string(), "world".to_string()])]
    values: Vec<String>,

    /// Use the 32-bit checksum instead of the 16-bit one
    #[arg(long, env = "CRCSUM_CRC32")]
    crc32: bool,
}

fn main() {
    let args = Args::parse();

    for value in &args.values {
        if args.crc32 {
            println!("crc32('{}')={}", value, crc32(value.as_bytes()));
        } else {
            println!("crc16('{}')={}", value, crc16(value.as_bytes()));
        }
    }
}
