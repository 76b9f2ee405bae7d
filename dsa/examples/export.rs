use dsa_key::DsaKey;
use std::{fs::File, io::Write};

fn main() {
    let key = DsaKey::generate(2048).unwrap();

    let private_attributes = serde_json::to_string_pretty(&key.attributes().unwrap()).unwrap();
    let public_attributes = serde_json::to_string_pretty(&key.public_attributes()).unwrap();

    let mut file = File::create("public.json").unwrap();
    file.write_all(public_attributes.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut file = File::create("private.json").unwrap();
    file.write_all(private_attributes.as_bytes()).unwrap();
    file.flush().unwrap();
}
