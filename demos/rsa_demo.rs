//! Demonstrates RSA file encryption: a stream of fixed-size plaintext blocks
//! (one byte narrower than the modulus, so every block value stays below
//! `n`), each written as a `{original_len: u32 BE, encrypted_len: u32 BE,
//! encrypted_bytes}` record. Decryption reverses it, left-zero-padding each
//! recovered block back to its original length — `BigInt::to_bytes_be`
//! strips leading zero bytes, so a block that happened to start with `0x00`
//! would otherwise come back short.

use {
    crypota::{RsaError, RsaService, rsa::PrimalityTestKind},
    num_bigint::{BigInt, Sign},
    std::{
        fs::{self, File},
        io::{self, Read, Write},
        path::Path,
    },
};

fn main() {
    println!("--- RSA file demonstration ---");

    let mut service = RsaService::new(PrimalityTestKind::MillerRabin, 2048, 0.999);
    println!("Generating 2048-bit keys for file encryption...");
    service.generate_new_keys();
    println!("[OK] Keys generated.");

    cleanup_rsa_files();

    let files = test_files();
    if files.is_empty() {
        println!("No test files found under demos/testdata/");
        return;
    }
    for file in files {
        test_file_encryption_rsa(&service, &file);
    }
}

fn test_file_encryption_rsa(service: &RsaService, input_file: &str) {
    println!("\nProcessing file: {input_file}");
    let path = Path::new(input_file);
    let basename = path.file_stem().unwrap().to_string_lossy();
    let ext = path.extension().map(|e| format!(".{}", e.to_string_lossy())).unwrap_or_default();

    let enc_file = format!("demos/testdata/encrypted_RSA_{basename}.enc");
    let dec_file = format!("demos/testdata/decrypted_RSA_{basename}{ext}");

    if let Err(e) = encrypt_file_rsa(service, input_file, &enc_file) {
        println!("  [FAIL] encryption error: {e}");
        return;
    }
    println!("  [OK] File encrypted to {enc_file}");

    if let Err(e) = decrypt_file_rsa(service, &enc_file, &dec_file) {
        println!("  [FAIL] decryption error: {e}");
        return;
    }
    println!("  [OK] File decrypted to {dec_file}");

    let original = fs::read(input_file).unwrap_or_default();
    let decrypted = fs::read(&dec_file).unwrap_or_default();
    if original == decrypted {
        println!("  [OK] checksums match.");
    } else {
        println!(
            "  [FAIL] checksums differ! original: {} bytes, decrypted: {} bytes",
            original.len(),
            decrypted.len()
        );
    }
}

#[derive(Debug)]
enum DemoError {
    Io(io::Error),
    Rsa(RsaError),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Rsa(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<RsaError> for DemoError {
    fn from(e: RsaError) -> Self {
        Self::Rsa(e)
    }
}

fn encrypt_file_rsa(service: &RsaService, input_file: &str, output_file: &str) -> Result<(), DemoError> {
    let public = service.public_key()?;
    let key_size = (public.n.bits() as usize).div_ceil(8);
    let block_size = key_size - 1;

    let mut src = File::open(input_file)?;
    let mut dst = File::create(output_file)?;

    let mut buf = vec![0u8; block_size];
    loop {
        let n = read_up_to(&mut src, &mut buf)?;
        if n == 0 {
            break;
        }

        let m = BigInt::from_bytes_be(Sign::Plus, &buf[..n]);
        let c = service.encrypt(&m)?;
        let (_, encrypted_bytes) = c.to_bytes_be();

        dst.write_all(&(n as u32).to_be_bytes())?;
        dst.write_all(&(encrypted_bytes.len() as u32).to_be_bytes())?;
        dst.write_all(&encrypted_bytes)?;
    }
    Ok(())
}

fn decrypt_file_rsa(service: &RsaService, input_file: &str, output_file: &str) -> Result<(), DemoError> {
    let mut src = File::open(input_file)?;
    let mut dst = File::create(output_file)?;

    loop {
        let mut len_buf = [0u8; 4];
        if !read_exact_or_eof(&mut src, &mut len_buf)? {
            break;
        }
        let original_block_size = u32::from_be_bytes(len_buf) as usize;

        src.read_exact(&mut len_buf)?;
        let encrypted_block_size = u32::from_be_bytes(len_buf) as usize;

        let mut buf = vec![0u8; encrypted_block_size];
        src.read_exact(&mut buf)?;

        let c = BigInt::from_bytes_be(Sign::Plus, &buf);
        let m = service.decrypt(&c)?;
        let (_, decrypted_bytes) = m.to_bytes_be();

        let mut padded = vec![0u8; original_block_size];
        let start = original_block_size - decrypted_bytes.len();
        padded[start..].copy_from_slice(&decrypted_bytes);

        dst.write_all(&padded)?;
    }
    Ok(())
}

fn read_up_to(src: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match src.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}

fn read_exact_or_eof(src: &mut File, buf: &mut [u8]) -> io::Result<bool> {
    let n = read_up_to(src, buf)?;
    if n == 0 {
        return Ok(false);
    }
    if n != buf.len() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated record"));
    }
    Ok(true)
}

fn test_files() -> Vec<String> {
    let candidates = ["demos/testdata/test.txt"];
    candidates
        .iter()
        .filter(|f| Path::new(f).exists())
        .map(|f| f.to_string())
        .collect()
}

fn cleanup_rsa_files() {
    let dir = Path::new("demos/testdata");
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("encrypted_RSA_") || name.starts_with("decrypted_RSA_") {
            let _ = fs::remove_file(entry.path());
        }
    }
}
