use honggfuzz::fuzz;

use nanoparse::address::{decode, encode};

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(public_key) = decode(data) {
                assert_eq!(encode(&public_key), data);
            }
        });
    }
}
