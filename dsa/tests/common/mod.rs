#![allow(dead_code)]

use dsa_key::{Components, KeyAttributes, RandomInt, SigningKey, VerifyingKey};
use num_bigint::BigUint;
use num_traits::Num;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use std::collections::VecDeque;

// 1024-bit key from RFC 6979 Appendix A.2.1
pub const P: &str = "86F5CA03DCFEB225063FF830A0C769B9DD9D6153AD91D7CE27F787C43278B447\
                     E6533B86B18BED6E8A48B784A14C252C5BE0DBF60B86D6385BD2F12FB763ED88\
                     73ABFD3F5BA2E0A8C0A59082EAC056935E529DAF7C610467899C77ADEDFC846C\
                     881870B7B19B2B58F9BE0521A17002E3BDD6B86685EE90B3D9A1B02B782B1779";
pub const Q: &str = "996F967F6C8E388D9E28D01E205FBA957A5698B1";
pub const G: &str = "07B0F92546150B62514BB771E2A0C0CE387F03BDA6C56B505209FF25FD3C133D\
                     89BBCD97E904E09114D9A7DEFDEADFC9078EA544D2E401AEECC40BB9FBBF78FD\
                     87995A10A1C27CB7789B594BA7EFB5C4326A9FE59A070E136DB77175464ADCA4\
                     17BE5DCE2F40D10A46A3A3943F26AB7FD9C0398FF8C76EE0A56826A8A88F1DBD";
pub const X: &str = "411602CB19A6CCC34494D79D98EF1E7ED5AF25F7";
pub const Y: &str = "5DF5E01DED31D0297E274E1691C192FE5868FEF9E19A84776454B100CF16F653\
                     92195A38B90523E2542EE61871C0440CB87C322FC4B4D2EC5E1E7EC766E1BE8D\
                     4CE935437DC11C3C8FD426338933EBFE739CB3465F4D3668C5E473508253B1E6\
                     82F65CBDC4FAE93C2EA212390E54905A86E2223170B44EAA7DA5DD9FFCFB7F3B";

/// Generated 2048-bit key with a 224-bit q
pub mod dsa_2048_224 {
    pub const P: &str = "F10DB717A3DBC4948F83C688F997107F4F387E4C56E51A1544ADD36CDD3834F4\
                         FD0A92E95F886184B0693B4D4E061921B7B6F876216376DA4F6FA7257749C6ED\
                         7B417E7E2E44FD6BBFB7521666436C99283735F7F2DA842D8C399C90AF18F628\
                         DE0DBB3FAC3932F657BCC2D4F135C8DAED9C173CB2381451B12F6B511A6C05EB\
                         B238C32B41F399ABE3443CB904A91913017408C637204AE1224D9FF6FD6E3F67\
                         BDD2BE84EF40854EB949AA51FC82A1E781C209E493172CC2FB0E6A99E337D13D\
                         34F3B9A7A45B4729C15314EAF1D11F11FF7F0E002DFE4B15B6602DC277AC625A\
                         98057965C37925C90090A58D16ABCC2A3095FF065C0109F7A5CDC617AB3D2AB9";
    pub const Q: &str = "FCC58E26F9D2BD5674BFD895D5D5DA0CCA77F07783D6823E41DF14D5";
    pub const G: &str = "3063A706E06AB460BB264ED33E631209C61A1AFA542CF3F0E8915AF6E357075E\
                         68565C7E48CA395BF96F24A696C5AD2E9F879AFF631CA3EBB6F42437438D9E1B\
                         DF5499DC80486EAC2D17A0DF553E2577234BB581EBED9BE1B24693A3CF3190C4\
                         DCB5094ACE5DC0155CF0EDAEE3B5A1116CF6A711AA3E295DBB43C281A3008513\
                         4500DCE8B0DCBB6F3265F74615BB61257CF8E2E3B1F9072D2F7ABBAF94E9F78D\
                         BD771A281205A06DCA52ADAC381FCD9AB06077C17B2A0A0D533BF796C591FD51\
                         3F63B036057856648405F75229E8EE6BDD8F2D64521592299F7B14B750AA1CC1\
                         04676DAC56D26C0EBF9766AB795BABBC0CED3640D3DB7F30D54ECDAB502B480D";
    pub const X: &str = "EDFF682E282ED22F09EAAC7466AABFBDFDF196929BFAF8200D4265C0";
    pub const Y: &str = "2A9DE77F82AB4132B9C5F6CA6F94FA21932D4BABBDFCF553F6911A788C4085ED\
                         25504EB87267138B9C94BFDF293795C88384474BF1C614D2CE716E95B852C8B3\
                         C1A65B66E0DC51C464A9F17415949C822F60AC18177012E743944294BEE61E0E\
                         65A66FAFB14FCA6B364A632FFF7BF557F9C73997510F3A366569D0FA2E6C2DE5\
                         2AE354D80B5EB789A86313A40AA4DC575CF21A736BE6936E12579581E899ADFE\
                         0C7300D358B787ADF71091763CCBD26E57B76168378ABD1A445026BE2F56B8E4\
                         41E729CD08146128F403DDCEF560EC3E6B9F16AB21F1881ABC46DD6AD79BCAE2\
                         B38607E1D40AD79DFC23B613577E8646ABB11D8A1082E3703945C58DC3AD69DF";
}

/// Generated 2048-bit key with a 256-bit q
pub mod dsa_2048_256 {
    pub const P: &str = "E24E01D8C9298DB220C935719255378BE9D99643D5821DC5B91374D866E7E62C\
                         8ECA10E16AC08E95A62C5FFF097C452E8C6EBAF13175FC4C90B73EEFC70AEA37\
                         637FAF14F5EE0561F155B7C7EEF29E567D251DDDE316BFB3BE32FBBA8582C75F\
                         14E65AC1519D15304E5E4DD8F767450169912805C270ACDB199A877948FAD30E\
                         73E275A407214339E64815018137EFA38674816A5A14DB2B13DDA27565C42EAF\
                         05BBB68079BC34EEEBB39527323BBB51C00FCE3E24776A800EFE8A51C31BE24D\
                         6963370096773CA035DB878436B8CEC72D1DE152861F021DB854EBFC6E5B4DCC\
                         1F0FF7BE5638C0CD74687E43571BBCAFA82845A1BAFC7ECA36AC549713DB8077";
    pub const Q: &str = "EC7BA74BF6568BF124985E4C974DF521DA2736BFDBF89D88588FB66D8BF1EF3F";
    pub const G: &str = "100EF5DFAD46E03D92669ACC0A29BB9B1E08D8C69C4C4597D5686BC1AE0A1B89\
                         717F152D4B21819C6D2E1E51242031BF45AFB3E1B18F107E82B1FC60F7049AB8\
                         0D47C7343E3A6B841250474B12F340DC96011414BE65EC1F7CB0E96CB33DBB5C\
                         7BA7F9FD63957FC139CD2E3FBB1C4D9377A08E4F928B73CF2F169959EFCE6CCA\
                         97D87E74E912D101F67197075CE9B4ACC08769C25E900C6C37F1ACB2F558BFFE\
                         72441A90C27D13C90AC2DCE97D82FD4A28F3B043FB22710D4CDAD55610B48C2D\
                         36972C5C87469DF5736C6D386D51AC9891468ACF7015A93F24077A25FC40658E\
                         21ABD2B677767B0110994E819A2769C3BEF339BA3DA3BCA252357851A71B509F";
    pub const X: &str = "64EDCE86C0A44504924E14AD5CE5A52D8757E7D02394C944F93832B1F6D14B7F";
    pub const Y: &str = "3A7434047C149909AA3116B89D3E656C5E3809FE1BAB9DF1E88FB5D93BF3F913\
                         8BD8214AC364E44F2A7A846B04C3B8042A558EE1AC8C00360476AC3B8C897936\
                         DE230A92E8452E471AFE3C9166E6E4987B254305C78385F0A44FBE365B03CD52\
                         16EC078C69A717B5E425B92D86B72E3181A90EBD72F108966FAC614F3E40EF23\
                         B839837F8A88FEC309FD913675B56BEC7D466C255583980DE75819CB3BAD2B00\
                         EEDC8DBE30C42EA78D7DE3DADCDCB7AF646CFE35D354E1BBF78CF7663437151A\
                         122C75A41BE52C36BF1A8498722577CAF614743E6809B6A434E95FC16C9F3BD2\
                         FDB5435A8E1CF2DEA29FC2B83B0D54374B37D64853160BD77C4CFE401AC9DB2A";
}

pub fn uint(hex: &str) -> BigUint {
    let hex: String = hex.split_whitespace().collect();
    BigUint::from_str_radix(&hex, 16).unwrap()
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn components() -> Components {
    Components::from_components(uint(P), uint(Q), uint(G)).expect("fixture components")
}

pub fn verifying_key() -> VerifyingKey {
    VerifyingKey::from_components(components(), uint(Y)).expect("fixture public key")
}

pub fn signing_key() -> SigningKey {
    SigningKey::from_components(verifying_key(), uint(X)).expect("fixture private key")
}

/// Build a key pair from hex fixture values, checking every component
pub fn signing_key_from_hex(p: &str, q: &str, g: &str, x: &str, y: &str) -> SigningKey {
    let components =
        Components::from_components(uint(p), uint(q), uint(g)).expect("fixture components");
    let verifying_key =
        VerifyingKey::from_components(components, uint(y)).expect("fixture public key");
    SigningKey::from_components(verifying_key, uint(x)).expect("fixture private key")
}

pub fn signing_key_2048_224() -> SigningKey {
    use dsa_2048_224 as k;
    signing_key_from_hex(k::P, k::Q, k::G, k::X, k::Y)
}

pub fn signing_key_2048_256() -> SigningKey {
    use dsa_2048_256 as k;
    signing_key_from_hex(k::P, k::Q, k::G, k::X, k::Y)
}

pub fn attributes() -> KeyAttributes {
    KeyAttributes {
        p: uint(P),
        q: uint(Q),
        g: uint(G),
        y: uint(Y),
        x: Some(uint(X)),
    }
}

/// Encode `value` as a big-endian digest of `len` bytes
pub fn digest_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= len);

    let mut digest = vec![0; len - bytes.len()];
    digest.extend_from_slice(&bytes);
    digest
}

/// Hands out a fixed sequence of integers instead of random ones
#[derive(Default)]
pub struct Scripted {
    values: VecDeque<BigUint>,
}

impl Scripted {
    pub fn new(values: impl IntoIterator<Item = BigUint>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomInt for Scripted {
    fn random_int(&mut self, low: &BigUint, high: &BigUint) -> dsa_key::Result<BigUint> {
        let value = self.values.pop_front().ok_or(dsa_key::Error::Entropy)?;
        assert!(*low <= value && value < *high, "scripted value out of range");
        Ok(value)
    }
}
