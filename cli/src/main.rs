//! `schnorr-params` command-line interface.
//!
//! - Direct and DSA-style generation of domain parameters
//! - Certification of externally supplied `(p, q, g)`
//! - A sign/verify demo over the preset parameter sets

mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use group::{
    parse_integer, DomainParameterGenerator, DomainParameters, DsaGenerator, GenerationConfig,
    MillerRabin, ParameterSet, DEFAULT_MAX_ATTEMPTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use schnorr::{poseidon_for, KeyPair};
use serde::Serialize;
use std::fmt::Display;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::{DemoReport, ParametersReport, PresetReport};

/// Schnorr domain parameter tool
#[derive(Debug, Parser)]
#[command(name = "schnorr-params")]
#[command(about = "Generate, certify and exercise Schnorr domain parameters")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `info` or `group=debug`
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the generation commands.
#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Bit length of p
    #[arg(long)]
    len_p: u64,

    /// Bit length of q
    #[arg(long)]
    len_q: u64,

    /// Attempt cap for each search loop
    #[arg(long, env = "SCHNORR_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate (p, q, g) with p = 1 mod 2q
    Generate(GenerateArgs),

    /// Generate (p, q, g) from a SHA-256 seed (FIPS 186-4 style)
    GenerateDsa(GenerateArgs),

    /// Certify externally supplied parameters
    Verify {
        /// Modulus, decimal or 0x-prefixed hex
        #[arg(long)]
        p: String,

        /// Subgroup order
        #[arg(long)]
        q: String,

        /// Subgroup generator
        #[arg(long)]
        g: String,
    },

    /// Sign and verify a message with Poseidon over a preset
    Demo {
        /// Preset name
        #[arg(long, default_value = "p64")]
        preset: String,

        /// Private key in [1, q - 1]; sampled when absent
        #[arg(long)]
        private_key: Option<String>,

        /// Message as an integer
        #[arg(long, default_value = "0xAA")]
        message: String,

        /// Seed for key sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the preset parameter sets
    Presets {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level)
                .with_context(|| format!("invalid log filter {:?}", cli.log_level))?,
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(ref args) => run_generate(args),
        Commands::GenerateDsa(ref args) => run_generate_dsa(args),
        Commands::Verify { ref p, ref q, ref g } => run_verify(p, q, g),
        Commands::Demo {
            ref preset,
            ref private_key,
            ref message,
            seed,
            json,
        } => run_demo(preset, private_key.as_deref(), message, seed, json),
        Commands::Presets { json } => run_presets(json),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn emit<T: Serialize + Display>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    info!(len_p = args.len_p, len_q = args.len_q, "generating domain parameters");
    let config = GenerationConfig {
        max_attempts: args.max_attempts,
    };
    let primes = MillerRabin::new(rng(args.seed));
    let mut generator = DomainParameterGenerator::with_config(primes, config);
    let params = generator.generate(args.len_p, args.len_q)?;
    emit(&ParametersReport::from(&params), args.json)
}

fn run_generate_dsa(args: &GenerateArgs) -> Result<()> {
    info!(len_p = args.len_p, len_q = args.len_q, "generating DSA-style domain parameters");
    let config = GenerationConfig {
        max_attempts: args.max_attempts,
    };
    let primes = MillerRabin::new(rng(args.seed));
    let mut generator = DsaGenerator::with_config(primes, args.len_p, args.len_q, config)?;
    let dsa = generator.generate()?;
    generator.validate_provenance(&dsa.parameters, &dsa.certificate)?;
    emit(&ParametersReport::from(&dsa), args.json)
}

fn parse_parameters(p: &str, q: &str, g: &str) -> Result<DomainParameters> {
    Ok(DomainParameters::new(
        parse_integer(p).context("parsing p")?,
        parse_integer(q).context("parsing q")?,
        parse_integer(g).context("parsing g")?,
    ))
}

fn run_verify(p: &str, q: &str, g: &str) -> Result<()> {
    let params = parse_parameters(p, q, g)?;
    let primes = MillerRabin::new(rng(None));
    params.verify(&primes).context("parameters rejected")?;
    println!("{}", ParametersReport::from(&params));
    println!("certified");
    Ok(())
}

fn run_demo(
    preset: &str,
    private_key: Option<&str>,
    message: &str,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let set = ParameterSet::by_name(preset)?;
    let params = set.parameters()?;
    let mut rng = rng(seed);
    params.verify(&MillerRabin::new(&mut rng))?;
    let hash = poseidon_for(&params, &set.hash)?;

    let keys = match private_key {
        Some(x) => {
            let x = parse_integer(x).context("parsing private key")?;
            KeyPair::from_private(&params, x)?
        }
        None => KeyPair::generate(&params, &mut rng)?,
    };
    let message = parse_integer(message).context("parsing message")?;

    let sig = keys.sign(&params, &message, &hash)?;
    let verified = keys.verifying_key().verify(&params, &message, &sig, &hash);
    if !verified {
        warn!(preset = set.name, "demo signature did not verify");
    }

    emit(
        &DemoReport::new(set.name, &message, keys.verifying_key(), &sig, verified),
        json,
    )?;
    if !verified {
        bail!("signature verification failed");
    }
    Ok(())
}

fn run_presets(json: bool) -> Result<()> {
    let reports = ParameterSet::all()
        .iter()
        .map(|set| Ok(PresetReport::new(set, &set.parameters()?)))
        .collect::<Result<Vec<_>>>()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "schnorr-params",
            "generate",
            "--len-p",
            "64",
            "--len-q",
            "32",
            "--seed",
            "7",
        ])
        .expect("parse");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!((args.len_p, args.len_q), (64, 32));
                assert_eq!(args.seed, Some(7));
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_demo_defaults() {
        let cli = Cli::try_parse_from(["schnorr-params", "demo"]).expect("parse");
        match cli.command {
            Commands::Demo {
                preset,
                private_key,
                message,
                ..
            } => {
                assert_eq!(preset, "p64");
                assert_eq!(private_key, None);
                assert_eq!(message, "0xAA");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_bit_lengths_rejected() {
        assert!(Cli::try_parse_from(["schnorr-params", "generate-dsa", "--len-p", "64"]).is_err());
    }

    #[test]
    fn test_parse_parameters() {
        let params = parse_parameters("199", "0xb", "61").expect("parse");
        assert_eq!(params.q(), &11u32.into());
        assert!(parse_parameters("199", "eleven", "61").is_err());
    }

    #[test]
    fn test_commands_run() {
        assert!(run_verify("199", "11", "61").is_ok());
        assert!(run_verify("199", "11", "3").is_err());
        assert!(run_demo("p8", Some("7"), "170", None, false).is_ok());
        assert!(run_demo("p8", Some("11"), "170", None, false).is_err());
        assert!(run_demo("p7", None, "170", Some(1), false).is_err());
        let args = GenerateArgs {
            len_p: 64,
            len_q: 32,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: Some(3),
            json: true,
        };
        assert!(run_generate(&args).is_ok());
        assert!(run_generate_dsa(&args).is_ok());
        assert!(run_presets(true).is_ok());
    }
}
