//! Named parameter sets for demos and tests.
//!
//! Each record pairs a certified `(p, q, g)` triple with the Poseidon settings
//! used for its challenge hash. All generators equal `2^((p-1)/q) mod p`, the
//! first base accepted by [`crate::generate_generator`].

use serde::Serialize;

use crate::errors::GroupError;
use crate::params::{parse_integer, DomainParameters};

/// Hash configuration attached to a parameter set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HashSettings {
    pub security_level: u32,
    pub alpha: u32,
    pub full_rounds: usize,
    pub partial_rounds: usize,
}

/// An immutable, named `(p, q, g)` record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    pub name: &'static str,
    pub p: &'static str,
    pub q: &'static str,
    pub g: &'static str,
    pub hash: HashSettings,
}

impl ParameterSet {
    /// Parses the stored literals.
    pub fn parameters(&self) -> Result<DomainParameters, GroupError> {
        Ok(DomainParameters::new(
            parse_integer(self.p)?,
            parse_integer(self.q)?,
            parse_integer(self.g)?,
        ))
    }

    pub fn by_name(name: &str) -> Result<&'static ParameterSet, GroupError> {
        PRESETS
            .iter()
            .find(|set| set.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GroupError::UnknownPreset(name.to_string()))
    }

    /// Looks up the preset whose `p` has `bits` bits.
    pub fn by_p_bits(bits: u64) -> Result<&'static ParameterSet, GroupError> {
        Self::by_name(&format!("p{bits}"))
    }

    pub fn all() -> &'static [ParameterSet] {
        PRESETS
    }
}

const fn hash_settings(
    security_level: u32,
    alpha: u32,
    full_rounds: usize,
    partial_rounds: usize,
) -> HashSettings {
    HashSettings {
        security_level,
        alpha,
        full_rounds,
        partial_rounds,
    }
}

pub const P8: ParameterSet = ParameterSet {
    name: "p8",
    p: "199",
    q: "11",
    g: "61",
    hash: hash_settings(8, 5, 2, 1),
};

pub const P16: ParameterSet = ParameterSet {
    name: "p16",
    p: "52813",
    q: "163",
    g: "46292",
    hash: hash_settings(16, 5, 8, 56),
};

pub const P32: ParameterSet = ParameterSet {
    name: "p32",
    p: "3552575077",
    q: "43607",
    g: "3196401078",
    hash: hash_settings(32, 5, 8, 56),
};

pub const P64: ParameterSet = ParameterSet {
    name: "p64",
    p: "18005185968437325397",
    q: "2791706791",
    g: "16338291796031708793",
    hash: hash_settings(64, 5, 8, 56),
};

pub const P128: ParameterSet = ParameterSet {
    name: "p128",
    p: "295090870502302888741081815488172298301",
    q: "14800766124420507947",
    g: "242321785765686127959664509210735233889",
    hash: hash_settings(128, 3, 8, 56),
};

pub const P512: ParameterSet = ParameterSet {
    name: "p512",
    p: "7045057217230447731457141224677172304938024641107125703085664679679562591330516280806915841051104795334033208720557188019515514918287181789975220693499439",
    q: "65733587161108449460168259508558239845424631360925658890317611045035932762599",
    g: "538656022598842469454643169739039226046068127485250539718667697143229884313993908482467458720523657119851551238136866900410675393842937078133579349397450",
    hash: hash_settings(256, 5, 2, 1),
};

pub const P2048: ParameterSet = ParameterSet {
    name: "p2048",
    p: "0xa36e3e1a05f9410258467ef86d4fd84d3b658195b146db8508696529e408970ec1e675c2744266a2ef8f472ae571cd424a9b2b35c416cd9b330c5f8fca473ae5d33b7f644eef91ebce66b589997b4e46c5fda3f6ab1de060d62c8bbb08cd278afe4df5206da40e33abbc4370a4696ffb758580ea44fe973c453e692c20141790ddf492bb71f5f7ce3df89f1f2fdcb57fcb600ba8b72ffc5b630f6f0ac8ac52e0d5b7042dc4c1e9066ea81342028acb2af24b54c084a94c48977e762bed1e9da27f5f2f200ae26b2e4a00cdb26471af962b7a7f70a8621a789d2b4d7bc8fad6f8b87e2bc6661035731e8b39b3ffd378caa27920350d05b8ed80fb4e59910e33ff",
    q: "0x844a49d3a4096b42d1cf9008691cb0612d2d8fe7e464f4ef896e12a9ecd2e7f7088c98ecee06897e24909ef8e30298c0ce18d10724deb4881d5c203bcc972f43763e98f2745ba086da6da868a4e195d159a6a080ff715336fdcf8f889049cee7249c34f2a1902332ef65ea5a657de2892a85866d07eebadcc468c58e8284e429",
    g: "0x2d135d52611b55e84b9299ae0507880aa4b9cf762cb0ed54274c288984880567dfae95edb5c08dc44af26dad5a5eb964b4b06bae856df04b5dc8c26618a1ad5853be08d14d4368c19189dc35ecbd642287f4a94021f7991ce173329a9e2acb825441bd756ed032dc6b3ca1089d1fb073d57af01c84dcd1db28c97ea399fe9f96e13a7eb0f5dc4edac37a006d29ffbb14c4797d9f4f94502f0c0510d80e452c5de7ac0ced9f323f9a2bf99835c616931dee183e3b7d995f47ce8dcbb40922ea8cd87e72bc0460c29e945a5770e3cea10464fd340c10893ce89ca0ccd9183ef7bd70f9826ab2e489601358a32b83f6381edb246194444e0aafa0960d6c12b4742a",
    hash: hash_settings(2048, 3, 8, 56),
};

const PRESETS: &[ParameterSet] = &[P8, P16, P32, P64, P128, P512, P2048];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_generator, GenerationConfig};
    use crate::prime::MillerRabin;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_presets_certify() {
        let primes = MillerRabin::new(StdRng::seed_from_u64(0));
        for set in ParameterSet::all() {
            let params = set.parameters().expect("literals");
            assert_eq!(params.verify(&primes), Ok(()), "{}", set.name);
        }
    }

    #[test]
    fn test_preset_generators_come_from_base_search() {
        let primes = MillerRabin::new(StdRng::seed_from_u64(0));
        let config = GenerationConfig::default();
        for set in ParameterSet::all() {
            let params = set.parameters().expect("literals");
            let g = generate_generator(&primes, params.p(), params.q(), &config);
            assert_eq!(g.as_ref(), Ok(params.g()), "{}", set.name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(ParameterSet::by_name("P64").map(|s| s.q), Ok("2791706791"));
        assert_eq!(ParameterSet::by_p_bits(8).map(|s| s.g), Ok("61"));
        assert_eq!(
            ParameterSet::by_name("p7"),
            Err(GroupError::UnknownPreset("p7".to_string()))
        );
        for set in ParameterSet::all() {
            let params = set.parameters().expect("literals");
            assert_eq!(format!("p{}", params.p().bits()), set.name);
        }
    }
}
