//! Printable results of the CLI commands.

use std::fmt;

use group::{DomainParameters, DsaParameters, ParameterSet};
use num_bigint::BigUint;
use schnorr::{Signature, VerifyingKey};
use serde::Serialize;

/// `(p, q, g)` rendered as decimal strings.
#[derive(Debug, Serialize)]
pub struct ParametersReport {
    pub p: String,
    pub q: String,
    pub g: String,
    pub p_bits: u64,
    pub q_bits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<u64>,
}

impl From<&DomainParameters> for ParametersReport {
    fn from(params: &DomainParameters) -> Self {
        Self {
            p: params.p().to_string(),
            q: params.q().to_string(),
            g: params.g().to_string(),
            p_bits: params.p().bits(),
            q_bits: params.q().bits(),
            seed: None,
            counter: None,
        }
    }
}

impl From<&DsaParameters> for ParametersReport {
    fn from(dsa: &DsaParameters) -> Self {
        Self {
            seed: Some(to_hex(&dsa.certificate.seed)),
            counter: Some(dsa.certificate.counter),
            ..Self::from(&dsa.parameters)
        }
    }
}

impl fmt::Display for ParametersReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p ({} bits): {}", self.p_bits, self.p)?;
        writeln!(f, "q ({} bits): {}", self.q_bits, self.q)?;
        write!(f, "g: {}", self.g)?;
        if let Some(seed) = &self.seed {
            write!(f, "\nseed: {seed}")?;
        }
        if let Some(counter) = self.counter {
            write!(f, "\ncounter: {counter}")?;
        }
        Ok(())
    }
}

/// Outcome of a key generation, signing and verification run.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub preset: String,
    pub message: String,
    pub y: String,
    pub s: String,
    pub h: String,
    pub verified: bool,
}

impl DemoReport {
    pub fn new(
        preset: &str,
        message: &BigUint,
        key: &VerifyingKey,
        sig: &Signature,
        verified: bool,
    ) -> Self {
        Self {
            preset: preset.to_string(),
            message: message.to_string(),
            y: key.element().to_string(),
            s: sig.s.to_string(),
            h: sig.h.to_string(),
            verified,
        }
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "preset: {}", self.preset)?;
        writeln!(f, "message: {}", self.message)?;
        writeln!(f, "y: {}", self.y)?;
        writeln!(f, "s: {}", self.s)?;
        writeln!(f, "h: {}", self.h)?;
        write!(f, "verified: {}", if self.verified { "PASS" } else { "FAIL" })
    }
}

/// One line of `presets`.
#[derive(Debug, Serialize)]
pub struct PresetReport {
    pub name: &'static str,
    pub p_bits: u64,
    pub q_bits: u64,
    pub alpha: u32,
    pub full_rounds: usize,
    pub partial_rounds: usize,
}

impl PresetReport {
    pub fn new(set: &ParameterSet, params: &DomainParameters) -> Self {
        Self {
            name: set.name,
            p_bits: params.p().bits(),
            q_bits: params.q().bits(),
            alpha: set.hash.alpha,
            full_rounds: set.hash.full_rounds,
            partial_rounds: set.hash.partial_rounds,
        }
    }
}

impl fmt::Display for PresetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} p: {:>4} bits  q: {:>4} bits  alpha: {}  rounds: {}/{}",
            self.name, self.p_bits, self.q_bits, self.alpha, self.full_rounds, self.partial_rounds
        )
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
