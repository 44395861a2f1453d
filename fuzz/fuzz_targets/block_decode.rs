use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(block) = nanoparse::block::decode(data) {
                let request = nanoparse::process::encode(&block, usize::MAX).unwrap();
                let required = request.len();
                assert!(nanoparse::process::encode(&block, required - 1).is_err());
            }
        });
    }
}
