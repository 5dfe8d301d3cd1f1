//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use aes_core::{Aes, Block, BLOCK_SIZE};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// AES single-block CLI.
#[derive(Parser)]
#[command(
    name = "aesctl",
    version,
    author,
    about = "Encrypt and decrypt single AES blocks, and self-check the cipher"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Encrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Decrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Run the FIPS-197 known answers and random round-trips.
    Check {
        /// Number of random round-trip samples per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Key size to generate.
        #[arg(long, value_enum, default_value_t = KeyBits::Bits128)]
        key_bits: KeyBits,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyBits {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl KeyBits {
    fn bytes(self) -> usize {
        match self {
            Self::Bits128 => 16,
            Self::Bits192 => 24,
            Self::Bits256 => 32,
        }
    }
}

/// FIPS-197 Appendix C: key is `00 01 02 ..`, plaintext is shared.
const FIPS_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";
const FIPS_VECTORS: [(usize, &str); 3] = [
    (16, "69c4e0d86a7b0430d8cdb78070b4c55a"),
    (24, "dda97ca4864cdfe06eaf70a0ec0d7191"),
    (32, "8ea2b7ca516745bfeafc49904b496089"),
];

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed, key_bits } => cmd_demo(seed, key_bits),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = parse_cipher(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(cipher.encrypt_block(&block)));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = parse_cipher(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(cipher.decrypt_block(&block)));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let plaintext = parse_block_hex(FIPS_PLAINTEXT)?;
    for (len, expected_hex) in FIPS_VECTORS {
        let key: Vec<u8> = (0..len as u8).collect();
        let cipher = Aes::new(&key).context("build cipher for known answer")?;
        let expected = parse_block_hex(expected_hex)?;
        if cipher.encrypt_block(&plaintext) != expected {
            bail!("{} known-answer encryption mismatch", cipher.key_size());
        }
        if cipher.decrypt_block(&expected) != plaintext {
            bail!("{} known-answer decryption mismatch", cipher.key_size());
        }
        info!(key_size = %cipher.key_size(), "known answer ok");
    }

    let mut rng = seeded_rng(seed);
    for bits in [KeyBits::Bits128, KeyBits::Bits192, KeyBits::Bits256] {
        let mut key = vec![0u8; bits.bytes()];
        rng.fill_bytes(&mut key);
        let cipher = Aes::new(&key)?;
        for _ in 0..samples {
            let mut block = [0u8; BLOCK_SIZE];
            rng.fill_bytes(&mut block);
            let ct = cipher.encrypt_block(&block);
            if cipher.decrypt_block(&ct) != block {
                bail!("{} round-trip failed", cipher.key_size());
            }
        }
        debug!(key_size = %cipher.key_size(), samples, "round-trips ok");
    }

    println!("all checks passed");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, key_bits: KeyBits) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; key_bits.bytes()];
    rng.fill_bytes(&mut key);
    let cipher = Aes::new(&key)?;

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);
    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);

    println!("demo key ({}): {}", cipher.key_size(), hex::encode(&key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_cipher(key_hex: &str) -> Result<Aes> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    Aes::new(&bytes).context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be {BLOCK_SIZE} bytes (32 hex characters), got {}", bytes.len());
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
