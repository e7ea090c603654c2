//! Signing and verifying keys for the Schnorr signature scheme.

use group::{DomainParameters, random_range};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SchnorrError;
use crate::hash::HashFunction;
use crate::signatures::{Signature, challenge, derive_nonce};

/// A secret signing key `x` in `[1, q - 1]`.
///
/// The key is only meaningful together with the [`DomainParameters`] it was
/// created for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    x: BigUint,
}

/// A public verifying key `y = g^x mod p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifyingKey {
    y: BigUint,
}

/// A signing key together with its verifying key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

fn check_parameters(params: &DomainParameters) -> Result<(), SchnorrError> {
    if params.p() < &BigUint::from(2u8) {
        return Err(SchnorrError::InvalidParameters("p < 2"));
    }
    if params.q() < &BigUint::from(2u8) {
        return Err(SchnorrError::InvalidParameters("q < 2"));
    }
    Ok(())
}

#[inline]
fn in_key_range(x: &BigUint, q: &BigUint) -> bool {
    !x.is_zero() && x < q
}

impl SigningKey {
    /// Wraps `x`, which must lie in `[1, q - 1]`.
    pub fn new(params: &DomainParameters, x: BigUint) -> Result<Self, SchnorrError> {
        check_parameters(params)?;
        if !in_key_range(&x, params.q()) {
            return Err(SchnorrError::InvalidPrivateKey);
        }
        Ok(Self { x })
    }

    /// Samples `x` uniformly from `[1, q - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use group::DomainParameters;
    /// use num_bigint::BigUint;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use schnorr::SigningKey;
    ///
    /// let params = DomainParameters::new(199u32.into(), 11u32.into(), 61u32.into());
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let key = SigningKey::random(&params, &mut rng).expect("key");
    /// assert!(key.secret() >= &BigUint::from(1u8));
    /// assert!(key.secret() < params.q());
    /// ```
    pub fn random<R: Rng + ?Sized>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<Self, SchnorrError> {
        check_parameters(params)?;
        Ok(Self {
            x: random_range(rng, &BigUint::one(), params.q()),
        })
    }

    #[inline]
    pub fn secret(&self) -> &BigUint {
        &self.x
    }

    /// Derives `y = g^x mod p`.
    ///
    /// # Example
    ///
    /// ```
    /// use group::DomainParameters;
    /// use num_bigint::BigUint;
    /// use schnorr::SigningKey;
    ///
    /// let params = DomainParameters::new(199u32.into(), 11u32.into(), 61u32.into());
    /// let key = SigningKey::new(&params, BigUint::from(3u8)).expect("key");
    ///
    /// let public = key.verifying_key(&params);
    /// assert_eq!(public.element(), &BigUint::from(61u32).modpow(&3u8.into(), &199u32.into()));
    /// assert!(public.is_valid(&params));
    /// ```
    pub fn verifying_key(&self, params: &DomainParameters) -> VerifyingKey {
        VerifyingKey {
            y: params.pow_g(&self.x),
        }
    }

    /// Signs `msg`, which must be a field element (`msg < p`).
    ///
    /// 1. `k = H([msg, x, 0, 0]) mod (q - 1) + 1`
    /// 2. `r = g^k mod p`
    /// 3. `h = H([msg, r, 0, 0]) mod q`
    /// 4. `s = k - h * x mod q`
    ///
    /// The nonce is a function of `(msg, x)`, so signing the same message
    /// twice yields the same signature.
    ///
    /// # Example
    ///
    /// ```
    /// use group::DomainParameters;
    /// use num_bigint::BigUint;
    /// use schnorr::SigningKey;
    ///
    /// let params = DomainParameters::new(199u32.into(), 11u32.into(), 61u32.into());
    /// let stub = |_: &[BigUint; 4]| BigUint::from(1234u32);
    ///
    /// let key = SigningKey::new(&params, BigUint::from(1u8)).expect("key");
    /// let signature = key.sign(&params, &BigUint::from(0xAAu8), &stub).expect("sign");
    /// assert_eq!(signature.s, BigUint::from(3u8));
    /// assert_eq!(signature.h, BigUint::from(2u8));
    /// ```
    pub fn sign<H: HashFunction + ?Sized>(
        &self,
        params: &DomainParameters,
        msg: &BigUint,
        hash: &H,
    ) -> Result<Signature, SchnorrError> {
        check_parameters(params)?;
        let q = params.q();
        if !in_key_range(&self.x, q) {
            return Err(SchnorrError::InvalidPrivateKey);
        }
        if msg >= params.p() {
            return Err(SchnorrError::InvalidMessage);
        }

        let k = derive_nonce(q, msg, &self.x, hash);
        let r = params.pow_g(&k);
        let h = challenge(q, msg, &r, hash);
        let hx = (&h * &self.x) % q;
        let s = (k + q - hx) % q;

        Ok(Signature { s, h })
    }
}

impl VerifyingKey {
    /// Wraps a public element without validating it.
    ///
    /// Keys received from elsewhere can be checked with
    /// [`VerifyingKey::is_valid`]; [`VerifyingKey::verify`] is safe to call
    /// either way.
    pub fn new(y: BigUint) -> Self {
        Self { y }
    }

    /// The group element `y`.
    #[inline]
    pub fn element(&self) -> &BigUint {
        &self.y
    }

    /// `true` when `1 < y < p` and `y^q = 1 (mod p)`.
    ///
    /// Optional: [`VerifyingKey::verify`] does not require it.
    pub fn is_valid(&self, params: &DomainParameters) -> bool {
        params.is_subgroup_element(&self.y)
    }

    /// Checks `sig` against `msg`.
    ///
    /// Recomputes `r' = g^s * y^h mod p` and accepts iff
    /// `H([msg, r', 0, 0]) mod q == h`. Never fails: degenerate parameters,
    /// non-canonical signatures (`s >= q` or `h >= q`) and messages `>= p`
    /// are rejected.
    pub fn verify<H: HashFunction + ?Sized>(
        &self,
        params: &DomainParameters,
        msg: &BigUint,
        sig: &Signature,
        hash: &H,
    ) -> bool {
        if check_parameters(params).is_err() {
            debug!("rejecting signature under degenerate parameters");
            return false;
        }
        let q = params.q();
        if &sig.s >= q || &sig.h >= q {
            debug!("rejecting non-canonical signature");
            return false;
        }
        if msg >= params.p() {
            debug!("rejecting message outside the field");
            return false;
        }

        let r = params.mul(&params.pow_g(&sig.s), &params.pow(&self.y, &sig.h));
        challenge(q, msg, &r, hash) == sig.h
    }
}

impl KeyPair {
    /// Samples a fresh key pair.
    ///
    /// # Example
    ///
    /// ```
    /// use group::DomainParameters;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use schnorr::KeyPair;
    ///
    /// let params = DomainParameters::new(199u32.into(), 11u32.into(), 61u32.into());
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let pair = KeyPair::generate(&params, &mut rng).expect("key pair");
    /// assert_eq!(pair.verifying_key(), &pair.signing_key().verifying_key(&params));
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<Self, SchnorrError> {
        let signing_key = SigningKey::random(params, rng)?;
        Ok(Self::from_signing_key(params, signing_key))
    }

    /// Builds the key pair for a caller-supplied private scalar.
    ///
    /// Fails with [`SchnorrError::InvalidPrivateKey`] unless `x` lies in
    /// `[1, q - 1]`.
    ///
    /// ```
    /// use group::DomainParameters;
    /// use num_bigint::BigUint;
    /// use schnorr::{KeyPair, SchnorrError};
    ///
    /// let params = DomainParameters::new(199u32.into(), 11u32.into(), 61u32.into());
    /// assert!(KeyPair::from_private(&params, BigUint::from(10u8)).is_ok());
    /// assert_eq!(
    ///     KeyPair::from_private(&params, BigUint::from(11u8)),
    ///     Err(SchnorrError::InvalidPrivateKey)
    /// );
    /// ```
    pub fn from_private(params: &DomainParameters, x: BigUint) -> Result<Self, SchnorrError> {
        let signing_key = SigningKey::new(params, x)?;
        Ok(Self::from_signing_key(params, signing_key))
    }

    fn from_signing_key(params: &DomainParameters, signing_key: SigningKey) -> Self {
        let verifying_key = signing_key.verifying_key(params);
        Self {
            signing_key,
            verifying_key,
        }
    }

    #[inline]
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    #[inline]
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Shorthand for [`SigningKey::sign`].
    pub fn sign<H: HashFunction + ?Sized>(
        &self,
        params: &DomainParameters,
        msg: &BigUint,
        hash: &H,
    ) -> Result<Signature, SchnorrError> {
        self.signing_key.sign(params, msg, hash)
    }
}
