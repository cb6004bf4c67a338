#![no_main]

use libfuzzer_sys::fuzz_target;

use modfib_core::orbit::modulo_fibonacci;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as the base, signed so non-positive inputs are covered
    let base = i64::from(i16::from_le_bytes([data[0], data[1]])) % 512;

    let Ok(mut orbits) = modulo_fibonacci(base) else {
        assert!(base <= 0);
        return;
    };
    let side = usize::try_from(base).unwrap();
    let total: usize = orbits.by_ref().map(|o| o.len()).sum();
    assert_eq!(total, side * side);
    assert!(orbits.visited().is_full());
});
