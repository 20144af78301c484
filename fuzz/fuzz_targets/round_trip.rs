#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    // Keep the modulus within u32 so trial division stays fast under the fuzzer.
    let (head, rest) = data.split_at(4);
    let modulus = BigUint::from(u32::from_be_bytes(head.try_into().unwrap()));
    if modulus < BigUint::from(2u32) {
        return;
    }

    let (value, rest) = rest.split_at(4);
    let plaintext = BigUint::from(u32::from_be_bytes(value.try_into().unwrap())) % &modulus;

    let split = rest.len() / 2;
    let (key, tweak) = rest.split_at(split);

    if let Ok(ciphertext) = fe1::encrypt(&modulus, &plaintext, key, tweak) {
        assert!(ciphertext < modulus);
        let recovered = fe1::decrypt(&modulus, &ciphertext, key, tweak).unwrap();
        assert_eq!(recovered, plaintext);
    }
});
