//! Glyph Catalog
//!
//! The fixed reference tables shown by the viewer. Every section owns its rows
//! directly, so the tab list and the glyph rows can never drift apart.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// A comma-separated cluster of related characters, shown as one bordered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGroup(&'static str);

impl GlyphGroup {
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    /// The cluster exactly as it is displayed in its cell
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One horizontal strip of cells
pub type Row = &'static [GlyphGroup];

const fn g(raw: &'static str) -> GlyphGroup {
    GlyphGroup::new(raw)
}

const BASIC_ACCENTED: &[Row] = &[
    &[
        g("Á,À,Â,Ã,Ä,Å"),
        g("Ç,Č,Ć"),
        g("Đ"),
        g("É,È,Ê,Ë"),
        g("Í,Ì,Î,Ï"),
        g("Ñ"),
        g("Ó,Ò,Ô,Õ,Ö"),
        g("Ú,Ù,Û,Ü"),
    ],
    &[
        g("á,à,â,ã,ä,å"),
        g("ç,č,ć"),
        g("đ"),
        g("é,è,ê,ë"),
        g("í,ì,î,ï"),
        g("ñ"),
        g("ó,ò,ô,õ,ö"),
        g("ú,ù,û,ü"),
    ],
    &[
        g("$,₱,€,¥,£,¢"),
        g("¡,¿"),
        g("“"),
        g("°"),
        g("•"),
        g("‰"),
        g("©,®"),
        g("‹,›,×, «,»"),
        g("Æ,Œ,æ,œ,ß,§"),
    ],
    &[g("Ø,Ý,Ÿ,Š,Ž"), g("ø,ý,ÿ,š,ž")],
];

// The comma itself is the cluster separator, so it has no cell of its own.
const BASIC_LATIN: &[Row] = &[
    &[
        g("A,B,C,D,E,F"),
        g("G,H,I,J,K,L"),
        g("M,N,O,P,Q,R"),
        g("S,T,U,V,W,X"),
        g("Y,Z"),
    ],
    &[
        g("a,b,c,d,e,f"),
        g("g,h,i,j,k,l"),
        g("m,n,o,p,q,r"),
        g("s,t,u,v,w,x"),
        g("y,z"),
    ],
    &[g("0,1,2,3,4"), g("5,6,7,8,9")],
    &[
        g("!,?,.,:,;"),
        g("\",'"),
        g("(,),[,],{,}"),
        g("+,-,*,/,="),
        g("<,>,|,\\"),
        g("#,$,%,&,@"),
        g("^,_,`,~"),
    ],
];

// U+00A1..=U+00FF, minus the soft hyphen.
const LATIN_1_SUPPLEMENT: &[Row] = &[
    &[
        g("¡,¢,£,¤,¥"),
        g("¦,§,¨,©,ª"),
        g("«,¬,®,¯"),
        g("°,±,²,³,´"),
        g("µ,¶,·,¸,¹"),
        g("º,»,¼,½,¾,¿"),
    ],
    &[
        g("À,Á,Â,Ã,Ä,Å"),
        g("Æ,Ç"),
        g("È,É,Ê,Ë"),
        g("Ì,Í,Î,Ï"),
        g("Ð,Ñ"),
        g("Ò,Ó,Ô,Õ,Ö"),
        g("×,Ø"),
        g("Ù,Ú,Û,Ü"),
        g("Ý,Þ,ß"),
    ],
    &[
        g("à,á,â,ã,ä,å"),
        g("æ,ç"),
        g("è,é,ê,ë"),
        g("ì,í,î,ï"),
        g("ð,ñ"),
        g("ò,ó,ô,õ,ö"),
        g("÷,ø"),
        g("ù,ú,û,ü"),
        g("ý,þ,ÿ"),
    ],
];

/// Sections in tab order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount, IntoStaticStr,
)]
pub enum Section {
    #[default]
    #[strum(to_string = "Basic Accented")]
    BasicAccented,
    #[strum(to_string = "Basic Latin")]
    BasicLatin,
    #[strum(to_string = "Latin-1 Supplement")]
    Latin1Supplement,
}

impl Section {
    pub const ALL: [Section; Section::COUNT] = [
        Section::BasicAccented,
        Section::BasicLatin,
        Section::Latin1Supplement,
    ];

    /// Tab label
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn rows(self) -> &'static [Row] {
        match self {
            Section::BasicAccented => BASIC_ACCENTED,
            Section::BasicLatin => BASIC_LATIN,
            Section::Latin1Supplement => LATIN_1_SUPPLEMENT,
        }
    }

    /// Position of this section in the tab bar
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
