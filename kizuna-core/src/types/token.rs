//! The token union — the unit of pairwise comparison.
//!
//! Geographic and loose-tie tokens are explicit variants rather than
//! string-prefix conventions, so weight lookup and display formatting
//! match exhaustively instead of parsing prefixes.

/// A normalized, classified unit of comparison derived from one raw feature.
///
/// Token equality is set membership: two people share a token iff the
/// variants and their payloads are identical. Plain tokens carry their
/// category annotation; since every person is tokenized against the same
/// dictionaries, the annotation is a function of the name and never splits
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Canonical feature string with its `(category, sub1, sub2)` annotation.
    Plain {
        name: String,
        category: String,
        sub1: String,
        sub2: String,
    },
    /// City level of the geographic hierarchy.
    GeoCity(String),
    /// Prefecture level of the geographic hierarchy.
    GeoPref(String),
    /// Region level of the geographic hierarchy.
    GeoRegion(String),
    /// Loose tie: two people share a subcategory1 classification.
    LinkSub1(String),
    /// Loose tie: two people share a subcategory2 classification.
    LinkSub2(String),
}

impl Token {
    /// Human-readable label for tooltips and edge tables.
    ///
    /// Geo tokens show the bare place name; link tokens keep a short
    /// `sub1:`/`sub2:` marker so loose ties are distinguishable from
    /// exact feature matches.
    pub fn display_label(&self) -> String {
        match self {
            Token::Plain { name, .. } => name.clone(),
            Token::GeoCity(name) | Token::GeoPref(name) | Token::GeoRegion(name) => name.clone(),
            Token::LinkSub1(name) => format!("sub1:{name}"),
            Token::LinkSub2(name) => format!("sub2:{name}"),
        }
    }
}
