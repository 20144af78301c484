#![no_main]

use fe1::ErrorKind;
use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // Arbitrary byte splits for every argument: the API must either succeed
    // or fail with one of the two documented error kinds, never panic.
    let quarter = data.len() / 4;
    let (n_bytes, rest) = data.split_at(quarter);
    let (x_bytes, rest) = rest.split_at(quarter);
    let (key, tweak) = rest.split_at(rest.len() / 2);

    let mut modulus = BigUint::from_bytes_be(n_bytes);
    // Cap at 2^24 to bound the factorization search.
    modulus %= BigUint::from(1u32) << 24;
    let value = BigUint::from_bytes_be(x_bytes);

    match fe1::encrypt(&modulus, &value, key, tweak) {
        Ok(ciphertext) => assert!(ciphertext < modulus),
        Err(err) => {
            // Errors must classify cleanly and render without panicking.
            assert!(matches!(err.kind(), ErrorKind::InvalidArgument | ErrorKind::Fpe));
            let _ = err.to_string();
        }
    }
});
