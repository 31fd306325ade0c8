//! Loads registry expectations and secp256k1 point vectors from TOML files.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("cannot read vector file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse vector file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

fn load<T: for<'de> Deserialize<'de>>(file: &str) -> Result<T> {
    let text = fs::read_to_string(vector_dir().join(file))?;
    Ok(toml::from_str(&text)?)
}

/// Expected registry entry for one curve
#[derive(Debug, Clone, Deserialize)]
pub struct CurveVector {
    pub name: String,
    pub raw: u8,
    pub group: u16,
    pub digest: String,
    pub digest_size: usize,
    pub pem_header: String,
    pub pem_footer: String,
    pub secondary: bool,
}

#[derive(Deserialize)]
struct CurveFile {
    curve: Vec<CurveVector>,
}

/// Secret scalar and its compressed public point
#[derive(Debug, Clone, Deserialize)]
pub struct PointVector {
    pub secret: String,
    pub compressed: String,
}

impl PointVector {
    pub fn secret_bytes(&self) -> Result<[u8; 32]> {
        let bytes = hex::decode(&self.secret)?;
        let actual = bytes.len();
        bytes
            .try_into()
            .map_err(|_| VectorError::Length { expected: 32, actual })
    }

    pub fn compressed_bytes(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.compressed)?)
    }
}

#[derive(Deserialize)]
struct PointFile {
    point: Vec<PointVector>,
}

static CURVES: OnceCell<Vec<CurveVector>> = OnceCell::new();
static POINTS: OnceCell<Vec<PointVector>> = OnceCell::new();

/// Registry expectations, parsed once
pub fn curve_vectors() -> Result<&'static [CurveVector]> {
    CURVES
        .get_or_try_init(|| load::<CurveFile>("curves.toml").map(|file| file.curve))
        .map(Vec::as_slice)
}

/// secp256k1 generator multiples, parsed once
pub fn secp256k1_points() -> Result<&'static [PointVector]> {
    POINTS
        .get_or_try_init(|| load::<PointFile>("secp256k1_points.toml").map(|file| file.point))
        .map(Vec::as_slice)
}
