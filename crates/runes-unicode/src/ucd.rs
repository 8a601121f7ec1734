//! Lookup services backed by real Unicode data
//!
//! Names come from `unicode_names2`; general categories, East Asian width and
//! emoji presentation come from the ICU4X data compiled into `icu_properties`.

use std::collections::HashMap;

use icu_properties::{
    props::{EastAsianWidth, EmojiPresentation, GeneralCategory},
    CodePointMapData, CodePointMapDataBorrowed, CodePointSetData, CodePointSetDataBorrowed,
};
use runes_core::traits::{CategoryRegistry, NameRegistry, WidthEstimator};

use GeneralCategory::*;

/// Short category codes and the general categories each one covers.
///
/// One-letter codes are groups. `C` leaves out unassigned code points.
const CATEGORY_TABLE: &[(&str, &[GeneralCategory])] = &[
    ("C", &[Control, Format, PrivateUse, Surrogate]),
    ("Cc", &[Control]),
    ("Cf", &[Format]),
    ("Co", &[PrivateUse]),
    ("Cs", &[Surrogate]),
    (
        "L",
        &[UppercaseLetter, LowercaseLetter, TitlecaseLetter, ModifierLetter, OtherLetter],
    ),
    ("Ll", &[LowercaseLetter]),
    ("Lm", &[ModifierLetter]),
    ("Lo", &[OtherLetter]),
    ("Lt", &[TitlecaseLetter]),
    ("Lu", &[UppercaseLetter]),
    ("M", &[NonspacingMark, SpacingMark, EnclosingMark]),
    ("Mc", &[SpacingMark]),
    ("Me", &[EnclosingMark]),
    ("Mn", &[NonspacingMark]),
    ("N", &[DecimalNumber, LetterNumber, OtherNumber]),
    ("Nd", &[DecimalNumber]),
    ("Nl", &[LetterNumber]),
    ("No", &[OtherNumber]),
    (
        "P",
        &[
            ConnectorPunctuation,
            DashPunctuation,
            OpenPunctuation,
            ClosePunctuation,
            InitialPunctuation,
            FinalPunctuation,
            OtherPunctuation,
        ],
    ),
    ("Pc", &[ConnectorPunctuation]),
    ("Pd", &[DashPunctuation]),
    ("Pe", &[ClosePunctuation]),
    ("Pf", &[FinalPunctuation]),
    ("Pi", &[InitialPunctuation]),
    ("Po", &[OtherPunctuation]),
    ("Ps", &[OpenPunctuation]),
    ("S", &[MathSymbol, CurrencySymbol, ModifierSymbol, OtherSymbol]),
    ("Sc", &[CurrencySymbol]),
    ("Sk", &[ModifierSymbol]),
    ("Sm", &[MathSymbol]),
    ("So", &[OtherSymbol]),
    ("Z", &[SpaceSeparator, LineSeparator, ParagraphSeparator]),
    ("Zl", &[LineSeparator]),
    ("Zp", &[ParagraphSeparator]),
    ("Zs", &[SpaceSeparator]),
];

/// Character names from the Unicode name list.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeNames;

impl NameRegistry for UnicodeNames {
    fn name(&self, ch: char) -> String {
        unicode_names2::name(ch)
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

/// The Unicode general categories, addressed by their short codes.
pub struct GeneralCategories {
    groups: HashMap<&'static str, &'static [GeneralCategory]>,
    codes: Vec<&'static str>,
    map: CodePointMapDataBorrowed<'static, GeneralCategory>,
}

impl GeneralCategories {
    pub fn new() -> Self {
        let groups: HashMap<_, _> = CATEGORY_TABLE.iter().copied().collect();
        let codes = groups.keys().copied().collect();
        Self {
            groups,
            codes,
            map: CodePointMapData::<GeneralCategory>::new(),
        }
    }
}

impl Default for GeneralCategories {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRegistry for GeneralCategories {
    fn codes(&self) -> &[&'static str] {
        &self.codes
    }

    fn contains(&self, code: &str, ch: char) -> bool {
        self.groups
            .get(code)
            .is_some_and(|members| members.contains(&self.map.get(ch)))
    }
}

/// Column widths as a terminal draws them.
pub struct TerminalWidth {
    categories: CodePointMapDataBorrowed<'static, GeneralCategory>,
    east_asian: CodePointMapDataBorrowed<'static, EastAsianWidth>,
    emoji: CodePointSetDataBorrowed<'static>,
}

impl TerminalWidth {
    pub fn new() -> Self {
        Self {
            categories: CodePointMapData::<GeneralCategory>::new(),
            east_asian: CodePointMapData::<EastAsianWidth>::new(),
            emoji: CodePointSetData::new::<EmojiPresentation>(),
        }
    }
}

impl Default for TerminalWidth {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthEstimator for TerminalWidth {
    fn width(&self, rune: u32) -> usize {
        let Some(ch) = char::from_u32(rune) else {
            return 0;
        };
        if matches!(
            self.categories.get(ch),
            Control | Format | NonspacingMark | EnclosingMark
        ) {
            return 0;
        }
        let eaw = self.east_asian.get(ch);
        if eaw == EastAsianWidth::Wide || eaw == EastAsianWidth::Fullwidth || self.emoji.contains(ch)
        {
            return 2;
        }
        1
    }
}
