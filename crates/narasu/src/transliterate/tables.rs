// crates/narasu/src/transliterate/tables.rs

//! Built-in romanization tables.
//!
//! Keys are lowercase; case is restored by `MapTransliterator`.

/// Static mapping table.
#[derive(Debug, Clone, Copy)]
pub struct MapTable {
  /// Default mappings
  pub mappings: &'static [(&'static str, &'static str)],
  /// Mappings used at the start of a word or after a `context` letter
  pub positional: &'static [(&'static str, &'static str)],
  /// Letters after which `positional` mappings apply (word start always does)
  pub context: &'static str,
}

// ─── Russian ───────────────────────────────────────────────────────────────

/// Russian, BGN/PCGN 1947.
pub const RUS_BGN: MapTable = MapTable {
  mappings: &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("е", "e"),
    ("ё", "ë"),
    ("ж", "zh"),
    ("з", "z"),
    ("и", "i"),
    ("й", "y"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ц", "ts"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shch"),
    ("ъ", "\u{201D}"),
    ("ы", "y"),
    ("ь", "\u{2019}"),
    ("э", "e"),
    ("ю", "yu"),
    ("я", "ya"),
  ],
  positional: &[("е", "ye"), ("ё", "yë")],
  context: "аеёиоуыэюяйъь",
};

/// Russian, GOST 7.79-2000 system B.
pub const RUS_GOST: MapTable = MapTable {
  mappings: &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("е", "e"),
    ("ё", "yo"),
    ("ж", "zh"),
    ("з", "z"),
    ("и", "i"),
    ("й", "j"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "x"),
    ("ц", "cz"),
    ("це", "ce"),
    ("ци", "ci"),
    ("цы", "cy'"),
    ("цй", "cj"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shh"),
    ("ъ", "``"),
    ("ы", "y'"),
    ("ь", "`"),
    ("э", "e`"),
    ("ю", "yu"),
    ("я", "ya"),
  ],
  positional: &[],
  context: "",
};

/// Russian, plain ASCII key-term romanization.
pub const RUS_KEY_TERMS: MapTable = MapTable {
  mappings: &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("е", "e"),
    ("ё", "e"),
    ("ж", "zh"),
    ("з", "z"),
    ("и", "i"),
    ("й", "y"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ц", "ts"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shch"),
    ("ъ", ""),
    ("ы", "y"),
    ("ь", ""),
    ("э", "e"),
    ("ю", "yu"),
    ("я", "ya"),
  ],
  positional: &[],
  context: "",
};

// ─── Ukrainian ─────────────────────────────────────────────────────────────

/// Ukrainian, BGN/PCGN 2019 (the 2010 national system).
pub const UKR_BGN: MapTable = MapTable {
  mappings: &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "h"),
    ("ґ", "g"),
    ("д", "d"),
    ("е", "e"),
    ("є", "ie"),
    ("ж", "zh"),
    ("з", "z"),
    ("зг", "zgh"),
    ("и", "y"),
    ("і", "i"),
    ("ї", "i"),
    ("й", "i"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ц", "ts"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shch"),
    ("ь", ""),
    ("ю", "iu"),
    ("я", "ia"),
    ("'", ""),
    ("\u{2019}", ""),
    ("\u{02BC}", ""),
  ],
  positional: &[("є", "ye"), ("ї", "yi"), ("й", "y"), ("ю", "yu"), ("я", "ya")],
  context: "",
};

/// Ukrainian, plain ASCII key-term romanization.
pub const UKR_KEY_TERMS: MapTable = MapTable {
  mappings: &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "h"),
    ("ґ", "g"),
    ("д", "d"),
    ("е", "e"),
    ("є", "ye"),
    ("ж", "zh"),
    ("з", "z"),
    ("и", "y"),
    ("і", "i"),
    ("ї", "yi"),
    ("й", "y"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ц", "ts"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shch"),
    ("ь", ""),
    ("ю", "yu"),
    ("я", "ya"),
    ("'", ""),
    ("\u{2019}", ""),
    ("\u{02BC}", ""),
  ],
  positional: &[],
  context: "",
};

// ─── Arabic ────────────────────────────────────────────────────────────────

/// Arabic, BGN/PCGN 1956.
pub const ARA_BGN: MapTable = MapTable {
  mappings: &[
    ("ء", "\u{2019}"),
    ("آ", "\u{2019}ā"),
    ("أ", "\u{2019}"),
    ("إ", "\u{2019}"),
    ("ؤ", "\u{2019}"),
    ("ئ", "\u{2019}"),
    ("ا", "ā"),
    ("ب", "b"),
    ("ة", "h"),
    ("ت", "t"),
    ("ث", "th"),
    ("ج", "j"),
    ("ح", "ḩ"),
    ("خ", "kh"),
    ("د", "d"),
    ("ذ", "dh"),
    ("ر", "r"),
    ("ز", "z"),
    ("س", "s"),
    ("ش", "sh"),
    ("ص", "ş"),
    ("ض", "ḑ"),
    ("ط", "ţ"),
    ("ظ", "z̧"),
    ("ع", "\u{2018}"),
    ("غ", "gh"),
    ("ف", "f"),
    ("ق", "q"),
    ("ك", "k"),
    ("ل", "l"),
    ("م", "m"),
    ("ن", "n"),
    ("ه", "h"),
    ("و", "w"),
    ("ى", "á"),
    ("ي", "y"),
    ("\u{064E}", "a"),
    ("\u{064F}", "u"),
    ("\u{0650}", "i"),
    ("\u{064B}", "an"),
    ("\u{064C}", "un"),
    ("\u{064D}", "in"),
    ("\u{0651}", ""),
    ("\u{0652}", ""),
    ("\u{0640}", ""),
    ("،", ","),
    ("؛", ";"),
    ("؟", "?"),
    ("٠", "0"),
    ("١", "1"),
    ("٢", "2"),
    ("٣", "3"),
    ("٤", "4"),
    ("٥", "5"),
    ("٦", "6"),
    ("٧", "7"),
    ("٨", "8"),
    ("٩", "9"),
  ],
  positional: &[("ال", "al-"), ("ا", "a"), ("أ", "a"), ("إ", "i"), ("آ", "ā")],
  context: "",
};

/// Arabic, plain ASCII key-term romanization.
pub const ARA_KEY_TERMS: MapTable = MapTable {
  mappings: &[
    ("ء", "'"),
    ("آ", "a"),
    ("أ", "a"),
    ("إ", "i"),
    ("ؤ", "'"),
    ("ئ", "'"),
    ("ا", "a"),
    ("ب", "b"),
    ("ة", "a"),
    ("ت", "t"),
    ("ث", "th"),
    ("ج", "j"),
    ("ح", "h"),
    ("خ", "kh"),
    ("د", "d"),
    ("ذ", "dh"),
    ("ر", "r"),
    ("ز", "z"),
    ("س", "s"),
    ("ش", "sh"),
    ("ص", "s"),
    ("ض", "d"),
    ("ط", "t"),
    ("ظ", "z"),
    ("ع", "'"),
    ("غ", "gh"),
    ("ف", "f"),
    ("ق", "q"),
    ("ك", "k"),
    ("ل", "l"),
    ("م", "m"),
    ("ن", "n"),
    ("ه", "h"),
    ("و", "w"),
    ("ى", "a"),
    ("ي", "y"),
    ("\u{064E}", "a"),
    ("\u{064F}", "u"),
    ("\u{0650}", "i"),
    ("\u{064B}", "an"),
    ("\u{064C}", "un"),
    ("\u{064D}", "in"),
    ("\u{0651}", ""),
    ("\u{0652}", ""),
    ("\u{0640}", ""),
    ("،", ","),
    ("؛", ";"),
    ("؟", "?"),
  ],
  positional: &[("ال", "al-")],
  context: "",
};
