//! Demonstrates DES, DEAL and Rijndael running in CTR mode through
//! [`CipherContext`]: in-memory round trips across a range of sizes, then the
//! same check against files under `demos/testdata/`.

use {
    crypota::{
        cipher::{
            context::CipherContext,
            deal::Deal,
            des::Des,
            modes::generate_iv,
            rijndael::Rijndael,
            BlockCipher,
        },
        CipherModeTag, PaddingMode,
    },
    rand::RngCore,
    std::{fs, path::Path},
};

fn main() {
    cleanup_old_files();
    println!("Using CTR (Counter Mode)");
    demonstrate_des();
    demonstrate_deal();
    demonstrate_rijndael();
}

fn cleanup_old_files() {
    let dir = Path::new("demos/testdata");
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("encrypted_") || name.starts_with("decrypted_") {
            let _ = fs::remove_file(entry.path());
        }
    }
}

fn demonstrate_des() {
    println!("=== DES-CTR ===");

    let mut key = vec![0u8; 8];
    rand::thread_rng().fill_bytes(&mut key);

    let cipher = Des::new();
    let block_size = cipher.block_size();

    run_size_checks("DES-CTR", Box::new(Des::new()), &key, block_size);

    println!("\nEncrypting files with DES-CTR:");
    for file in test_files() {
        test_file_encryption(|| Box::new(Des::new()), &key, "DES-CTR", &file);
    }
}

struct KeySize {
    size: usize,
    name: &'static str,
}

fn demonstrate_deal() {
    println!("\n=== DEAL-CTR ===");

    let key_sizes = [
        KeySize { size: 16, name: "DEAL-128-CTR" },
        KeySize { size: 24, name: "DEAL-192-CTR" },
        KeySize { size: 32, name: "DEAL-256-CTR" },
    ];

    for ks in key_sizes {
        println!("\n--- {} ---", ks.name);

        let mut key = vec![0u8; ks.size];
        rand::thread_rng().fill_bytes(&mut key);

        let cipher = Deal::new(ks.size).expect("valid DEAL key size");
        let block_size = cipher.block_size();

        run_size_checks(ks.name, Box::new(cipher), &key, block_size);

        println!("\nEncrypting files with {}:", ks.name);
        let key_size = ks.size;
        for file in test_files() {
            test_file_encryption(
                || Box::new(Deal::new(key_size).expect("valid DEAL key size")),
                &key,
                ks.name,
                &file,
            );
        }
    }
}

fn demonstrate_rijndael() {
    println!("\n=== Rijndael-CTR ===");

    let key = vec![0x5Au8; 32];
    let cipher = Rijndael::new(16, 32, crypota::AES_MOD_POLY).expect("valid Rijndael parameters");
    let block_size = cipher.block_size();

    run_size_checks("Rijndael-192-256-CTR", Box::new(cipher), &key, block_size);

    println!("\nEncrypting files with Rijndael-192-256-CTR:");
    for file in test_files() {
        test_file_encryption(
            || Box::new(Rijndael::new(16, 32, crypota::AES_MOD_POLY).expect("valid Rijndael parameters")),
            &key,
            "Rijndael-192-256-CTR",
            &file,
        );
    }
}

fn run_size_checks(name: &str, cipher: Box<dyn BlockCipher + Send + Sync>, key: &[u8], block_size: usize) {
    let iv = generate_iv(block_size);
    let ctx = CipherContext::new(cipher, key, CipherModeTag::Ctr, PaddingMode::Pkcs7, Some(iv))
        .unwrap_or_else(|e| panic!("failed to build {name} context: {e}"));

    for size in [100usize, 1024, 4096, 16384] {
        let mut plaintext = vec![0u8; size];
        rand::thread_rng().fill_bytes(&mut plaintext);

        let ciphertext = ctx.encrypt(&plaintext).unwrap_or_else(|e| panic!("encrypt failed: {e}"));
        let decrypted = ctx.decrypt(&ciphertext).unwrap_or_else(|e| panic!("decrypt failed: {e}"));

        if verify_data(&plaintext, &decrypted) {
            println!("  [OK] {size} bytes");
        } else {
            println!("  [FAIL] {size} bytes");
        }
    }
}

fn test_files() -> Vec<String> {
    let candidates = ["demos/testdata/test.txt"];
    candidates
        .iter()
        .filter(|f| Path::new(f).exists())
        .map(|f| f.to_string())
        .collect()
}

fn test_file_encryption(
    build_cipher: impl Fn() -> Box<dyn BlockCipher + Send + Sync>,
    key: &[u8],
    name: &str,
    input_file: &str,
) {
    let path = Path::new(input_file);
    let basename = path.file_stem().unwrap().to_string_lossy();
    let ext = path.extension().map(|e| format!(".{}", e.to_string_lossy())).unwrap_or_default();

    let enc_file = format!("demos/testdata/encrypted_{name}_{basename}.enc");
    let dec_file = format!("demos/testdata/decrypted_{name}_{basename}{ext}");

    let cipher = build_cipher();
    let iv = generate_iv(cipher.block_size());
    let ctx = match CipherContext::new(cipher, key, CipherModeTag::Ctr, PaddingMode::Pkcs7, Some(iv)) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("failed to build context for {input_file}: {e}");
            return;
        }
    };

    if let Err(e) = ctx.encrypt_file(Path::new(input_file), Path::new(&enc_file)) {
        eprintln!("failed to encrypt {input_file}: {e}");
        return;
    }
    if let Err(e) = ctx.decrypt_file(Path::new(&enc_file), Path::new(&dec_file)) {
        eprintln!("failed to decrypt {input_file}: {e}");
        return;
    }

    let original = fs::read(input_file).unwrap_or_default();
    let decrypted = fs::read(&dec_file).unwrap_or_default();

    if verify_data(&original, &decrypted) {
        println!("  [OK] {}", path.file_name().unwrap().to_string_lossy());
    } else {
        println!("  [FAIL] {}", path.file_name().unwrap().to_string_lossy());
    }
}

fn verify_data(original: &[u8], decrypted: &[u8]) -> bool {
    original == decrypted
}
