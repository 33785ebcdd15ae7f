//! SipHash Basic Example
//!
//! Minimal usage: `let h = siphash::hash64(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("64-bit:  {:016x}", siphash::hash64(data));
    println!("128-bit: {}", hex::encode(siphash::hash128(data)));

    // Same digest, fed in two pieces under a caller-chosen seed
    let mut hasher = siphash::Hasher::with_seeds(0xDEAD_BEEF, 0xCAFE_BABE);
    hasher.update(b"Hello, ");
    hasher.update(b"World!");
    println!("Seeded:  {:016x}", hasher.digest64());
}
