use secrecy::SecretString;

use joblist_credential::{derive_with_salt, Pbkdf2Params, SALT_SIZE};

#[divan::bench(args = [1_000, 10_000, 310_000])]
fn bench_derive_with_salt(bencher: divan::Bencher, iterations: u32) {
    let password = SecretString::from("benchmark-password");
    let salt = [0x42u8; SALT_SIZE];
    let params = Pbkdf2Params { iterations };
    bencher.bench(|| {
        derive_with_salt(
            divan::black_box(&password),
            divan::black_box(&salt),
            &params,
        )
        .unwrap()
    });
}

fn main() {
    divan::main();
}
