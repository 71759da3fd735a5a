//! Encrypted password storage
//!
//! Passwords and certificate passwords stored in `config.yaml` may be written
//! as `encrypted:<base64>`. The payload is `nonce(12 bytes) + ciphertext`,
//! AES-256-GCM with a key derived from the machine id, so an encrypted
//! configuration file only decrypts on the machine that produced it.
//! Plain values are accepted unchanged by [`get_password`].

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use anyhow::{anyhow, Result};
use base64::Engine;
use sha2::{Digest, Sha256};

/// Prefix marking an encrypted value
const ENCRYPTED_PREFIX: &str = "encrypted:";

const KEY_SALT: &[u8] = b"tbc-config-encryption-v1";
const NONCE_SALT: &[u8] = b"tbc-nonce-v1";
const NONCE_LEN: usize = 12;

/// Reads the machine identifier used as key material
fn get_machine_id() -> Result<String> {
    #[cfg(target_os = "linux")]
    {
        use std::fs;

        for candidate in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
            if let Ok(id) = fs::read_to_string(candidate) {
                let id = id.trim();
                if !id.is_empty() {
                    return Ok(id.to_string());
                }
            }
        }
        Err(anyhow!("Failed to read machine-id"))
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        let output = Command::new("ioreg")
            .args(["-d2", "-c", "IOPlatformExpertDevice"])
            .output()?;
        let output_str = String::from_utf8_lossy(&output.stdout);

        // "IOPlatformUUID" = "XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX"
        output_str
            .lines()
            .find(|line| line.contains("IOPlatformUUID"))
            .and_then(|line| line.split('"').nth(3))
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Failed to extract IOPlatformUUID from ioreg"))
    }

    #[cfg(target_os = "windows")]
    {
        use std::process::Command;

        let output = Command::new("wmic")
            .args(["csproduct", "get", "UUID"])
            .output()?;
        let output_str = String::from_utf8_lossy(&output.stdout);

        output_str
            .lines()
            .nth(1)
            .map(|uuid| uuid.trim().to_string())
            .filter(|uuid| !uuid.is_empty())
            .ok_or_else(|| anyhow!("Failed to extract UUID from wmic"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(anyhow!("Unsupported platform for machine id extraction"))
    }
}

/// Derives the AES-256 key from arbitrary key material
fn derive_key(material: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(material.as_bytes());
    hasher.update(KEY_SALT);

    let mut key = [0u8; 32];
    key.copy_from_slice(&hasher.finalize());
    key
}

fn machine_key() -> Result<[u8; 32]> {
    Ok(derive_key(&get_machine_id()?))
}

fn encrypt_with_key(key: &[u8; 32], password: &str) -> Result<String> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|e| anyhow!("Failed to create cipher: {}", e))?;

    // Nonce derived from the plaintext: the same password always produces the
    // same value, so re-saving the configuration does not rewrite it.
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(NONCE_SALT);
    let nonce_hash = hasher.finalize();
    let nonce_bytes = &nonce_hash[..NONCE_LEN];

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce_bytes), password.as_bytes())
        .map_err(|e| anyhow!("Encryption failed: {}", e))?;

    let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(format!(
        "{}{}",
        ENCRYPTED_PREFIX,
        base64::engine::general_purpose::STANDARD.encode(&combined)
    ))
}

fn decrypt_with_key(key: &[u8; 32], encrypted: &str) -> Result<String> {
    let base64_data = encrypted
        .strip_prefix(ENCRYPTED_PREFIX)
        .ok_or_else(|| anyhow!("Invalid encrypted password format (missing prefix)"))?;

    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|e| anyhow!("Failed to create cipher: {}", e))?;

    let combined = base64::engine::general_purpose::STANDARD
        .decode(base64_data)
        .map_err(|e| anyhow!("Invalid base64: {}", e))?;

    if combined.len() < NONCE_LEN {
        return Err(anyhow!("Invalid ciphertext (too short)"));
    }
    let (nonce, ciphertext) = combined.split_at(NONCE_LEN);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|e| anyhow!("Decryption failed (wrong machine or corrupted data): {}", e))?;

    String::from_utf8(plaintext).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
}

/// Encrypts a password with the machine key, returning `encrypted:BASE64`
pub fn encrypt_password(password: &str) -> Result<String> {
    encrypt_with_key(&machine_key()?, password)
}

/// Decrypts an `encrypted:BASE64` value with the machine key
pub fn decrypt_password(encrypted: &str) -> Result<String> {
    decrypt_with_key(&machine_key()?, encrypted)
}

/// Tells whether a configuration value is encrypted
pub fn is_encrypted(value: &str) -> bool {
    value.starts_with(ENCRYPTED_PREFIX)
}

/// Returns the clear-text password, decrypting it when needed
///
/// ```rust,ignore
/// assert_eq!(get_password("plain")?, "plain");
/// let clear = get_password("encrypted:SGVsbG8...")?;
/// ```
pub fn get_password(value: &str) -> Result<String> {
    if is_encrypted(value) {
        decrypt_password(value)
    } else {
        Ok(value.to_string())
    }
}
