use dsa_key::{DsaKey, signature::SignatureEncoding};
use sha2::{Digest, Sha256};
use std::{fs::File, io::Write};

fn main() {
    let key = DsaKey::generate(2048).unwrap();
    let digest = Sha256::digest(b"hello world");

    let signature = key.sign(&digest).unwrap();
    assert!(key.verify(&digest, &signature).unwrap());

    let mut file = File::create("signature.der").unwrap();
    file.write_all(&signature.to_bytes()).unwrap();
    file.flush().unwrap();
}
