use strum_macros::{Display, EnumString};

// See: https://www.rfc-editor.org/rfc/rfc7518
#[derive(Debug, Display, EnumString, Eq, PartialEq)]
pub enum JwtSignatureAlgorithm {
    RS256,
}
