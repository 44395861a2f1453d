use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: [u8; 32]| {
            let encoded = nanoparse::address::encode(&data);
            let decoded = nanoparse::address::decode(&encoded).unwrap();
            assert_eq!(data, decoded);
        });
    }
}
