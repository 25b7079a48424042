use field_core::BigInteger256;

#[test]
fn hex_roundtrip() {
    let hex = "2523648240000001ba344d80000000086121000000000013a700000000000013";
    let v = BigInteger256::from_hex(hex);
    assert_eq!(v.to_hex(), hex);
}

#[test]
fn add_nocarry_basic() {
    let mut a = BigInteger256::from(5u64);
    let b = BigInteger256::from(7u64);
    a.add_nocarry(&b);
    assert_eq!(a, BigInteger256::from(12u64));
}

#[test]
fn sub_noborrow_basic() {
    let mut a = BigInteger256::from(10u64);
    let b = BigInteger256::from(3u64);
    a.sub_noborrow(&b);
    assert_eq!(a, BigInteger256::from(7u64));
}

#[test]
fn bit_ops() {
    let v = BigInteger256::from(0b1010u64);
    assert!(v.get_bit(1));
    assert!(!v.get_bit(0));
    assert!(v.get_bit(3));
    assert_eq!(v.num_bits(), 4);
}
