use curve::{Curve, CurveConfig};
use keypair::{SecretKey, generate_keypair};

const SECP256K1: &str = r#"{
    "a": "0",
    "b": "7",
    "p": "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    "base": {
        "x": "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "y": "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        "order": "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
    }
}"#;

fn main() {
    let config: CurveConfig = serde_json::from_str(SECP256K1).expect("parse config");
    let curve = Curve::from_config(config).expect("valid curve");

    let (sk, pk) = generate_keypair(&curve).expect("keygen");
    println!("public key: {}", pk.point());

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let curve_bytes = bincode::serialize(&curve).expect("serialize curve");

    let sk2: SecretKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let curve2: Curve = bincode::deserialize(&curve_bytes).expect("deserialize curve");

    let pk2 = sk2.public_key(&curve2).expect("derive public key");
    assert_eq!(pk2.point(), pk.point());
}
