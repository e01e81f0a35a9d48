//! Built-in single-stroke vector font.
//!
//! Glyphs are drawn in the style of the Hershey "simplex" face: every glyph is a
//! set of polylines in font units, stroked with a round pen. The origin is the
//! left edge of the glyph cell on the baseline and `y` grows upward. The cap
//! height is [`CAP_HEIGHT`] units; descenders reach down to `-DESCENT`, and
//! brackets and a few other symbols rise a little above the cap line.
//!
//! All printable ASCII characters and `©` have a glyph. Anything else is drawn
//! as `?`.

/// Height of capital letters and digits, in font units.
pub const CAP_HEIGHT: f32 = 21.0;

/// Depth of the deepest descender, in font units.
pub const DESCENT: f32 = 7.0;

/// One glyph of the stroke font.
#[derive(Debug)]
pub struct Glyph {
    /// Horizontal pen advance in font units.
    pub advance: u8,
    /// Polylines making up the glyph, as `(x, y)` points in font units.
    pub strokes: &'static [&'static [(i8, i8)]],
}

impl Glyph {
    /// Whether any stroke of the glyph goes below the baseline.
    #[must_use]
    pub fn descends(&self) -> bool {
        self.strokes.iter().flat_map(|s| s.iter()).any(|&(_, y)| y < 0)
    }
}

/// Look up the glyph drawn for `c`.
#[must_use]
pub fn glyph(c: char) -> &'static Glyph {
    match c {
        ' ' => &SPACE,
        '!' => &EXCLAMATION,
        '"' => &QUOTE,
        '#' => &HASH,
        '$' => &DOLLAR,
        '%' => &PERCENT,
        '&' => &AMPERSAND,
        '\'' => &APOSTROPHE,
        '(' => &LEFT_PAREN,
        ')' => &RIGHT_PAREN,
        '*' => &ASTERISK,
        '+' => &PLUS,
        ',' => &COMMA,
        '-' => &HYPHEN,
        '.' => &PERIOD,
        '/' => &SLASH,
        '0' => &DIGIT_0,
        '1' => &DIGIT_1,
        '2' => &DIGIT_2,
        '3' => &DIGIT_3,
        '4' => &DIGIT_4,
        '5' => &DIGIT_5,
        '6' => &DIGIT_6,
        '7' => &DIGIT_7,
        '8' => &DIGIT_8,
        '9' => &DIGIT_9,
        ':' => &COLON,
        ';' => &SEMICOLON,
        '<' => &LESS,
        '=' => &EQUALS,
        '>' => &GREATER,
        '@' => &AT,
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        '[' => &LEFT_BRACKET,
        '\\' => &BACKSLASH,
        ']' => &RIGHT_BRACKET,
        '^' => &CARET,
        '_' => &UNDERSCORE,
        '`' => &GRAVE,
        'a' => &SMALL_A,
        'b' => &SMALL_B,
        'c' => &SMALL_C,
        'd' => &SMALL_D,
        'e' => &SMALL_E,
        'f' => &SMALL_F,
        'g' => &SMALL_G,
        'h' => &SMALL_H,
        'i' => &SMALL_I,
        'j' => &SMALL_J,
        'k' => &SMALL_K,
        'l' => &SMALL_L,
        'm' => &SMALL_M,
        'n' => &SMALL_N,
        'o' => &SMALL_O,
        'p' => &SMALL_P,
        'q' => &SMALL_Q,
        'r' => &SMALL_R,
        's' => &SMALL_S,
        't' => &SMALL_T,
        'u' => &SMALL_U,
        'v' => &SMALL_V,
        'w' => &SMALL_W,
        'x' => &SMALL_X,
        'y' => &SMALL_Y,
        'z' => &SMALL_Z,
        '{' => &LEFT_BRACE,
        '|' => &BAR,
        '}' => &RIGHT_BRACE,
        '~' => &TILDE,
        '\u{a9}' => &COPYRIGHT,
        _ => &QUESTION,
    }
}

/// Total pen advance of `text`, in font units.
#[must_use]
pub fn text_advance(text: &str) -> u32 {
    text.chars().map(|c| u32::from(glyph(c).advance)).sum()
}

/// Whether any glyph of `text` goes below the baseline.
#[must_use]
pub fn text_descends(text: &str) -> bool {
    text.chars().any(|c| glyph(c).descends())
}

static SPACE: Glyph = Glyph {
    advance: 16,
    strokes: &[],
};

static A: Glyph = Glyph {
    advance: 18,
    strokes: &[&[(1, 0), (9, 21), (17, 0)], &[(4, 7), (14, 7)]],
};

static B: Glyph = Glyph {
    advance: 21,
    strokes: &[
        &[
            (4, 0),
            (4, 21),
            (13, 21),
            (16, 20),
            (17, 19),
            (18, 17),
            (18, 15),
            (17, 13),
            (16, 12),
            (13, 11),
        ],
        &[
            (4, 11),
            (13, 11),
            (16, 10),
            (17, 9),
            (18, 7),
            (18, 4),
            (17, 2),
            (16, 1),
            (13, 0),
            (4, 0),
        ],
    ],
};

static C: Glyph = Glyph {
    advance: 21,
    strokes: &[&[
        (18, 16),
        (17, 18),
        (15, 20),
        (13, 21),
        (9, 21),
        (7, 20),
        (5, 18),
        (4, 16),
        (3, 13),
        (3, 8),
        (4, 5),
        (5, 3),
        (7, 1),
        (9, 0),
        (13, 0),
        (15, 1),
        (17, 3),
        (18, 5),
    ]],
};

static D: Glyph = Glyph {
    advance: 21,
    strokes: &[&[
        (4, 0),
        (4, 21),
        (11, 21),
        (14, 20),
        (16, 18),
        (17, 16),
        (18, 13),
        (18, 8),
        (17, 5),
        (16, 3),
        (14, 1),
        (11, 0),
        (4, 0),
    ]],
};

static E: Glyph = Glyph {
    advance: 19,
    strokes: &[&[(17, 21), (4, 21), (4, 0), (17, 0)], &[(4, 11), (12, 11)]],
};

static F: Glyph = Glyph {
    advance: 18,
    strokes: &[&[(17, 21), (4, 21), (4, 0)], &[(4, 11), (12, 11)]],
};

static G: Glyph = Glyph {
    advance: 21,
    strokes: &[
        &[
            (18, 16),
            (17, 18),
            (15, 20),
            (13, 21),
            (9, 21),
            (7, 20),
            (5, 18),
            (4, 16),
            (3, 13),
            (3, 8),
            (4, 5),
            (5, 3),
            (7, 1),
            (9, 0),
            (13, 0),
            (15, 1),
            (17, 3),
            (18, 5),
            (18, 8),
        ],
        &[(13, 8), (18, 8)],
    ],
};

static H: Glyph = Glyph {
    advance: 22,
    strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (18, 0)], &[(4, 11), (18, 11)]],
};

static I: Glyph = Glyph {
    advance: 8,
    strokes: &[&[(4, 21), (4, 0)]],
};

static J: Glyph = Glyph {
    advance: 16,
    strokes: &[&[
        (12, 21),
        (12, 5),
        (11, 2),
        (10, 1),
        (8, 0),
        (6, 0),
        (4, 1),
        (3, 2),
        (2, 5),
        (2, 7),
    ]],
};

static K: Glyph = Glyph {
    advance: 21,
    strokes: &[&[(4, 21), (4, 0)], &[(18, 21), (4, 7)], &[(9, 12), (18, 0)]],
};

static L: Glyph = Glyph {
    advance: 17,
    strokes: &[&[(4, 21), (4, 0), (16, 0)]],
};

static M: Glyph = Glyph {
    advance: 24,
    strokes: &[&[(4, 0), (4, 21), (12, 0), (20, 21), (20, 0)]],
};

static N: Glyph = Glyph {
    advance: 22,
    strokes: &[&[(4, 0), (4, 21), (18, 0), (18, 21)]],
};

static O: Glyph = Glyph {
    advance: 22,
    strokes: &[&[
        (9, 21),
        (7, 20),
        (5, 18),
        (4, 16),
        (3, 13),
        (3, 8),
        (4, 5),
        (5, 3),
        (7, 1),
        (9, 0),
        (13, 0),
        (15, 1),
        (17, 3),
        (18, 5),
        (19, 8),
        (19, 13),
        (18, 16),
        (17, 18),
        (15, 20),
        (13, 21),
        (9, 21),
    ]],
};

static P: Glyph = Glyph {
    advance: 21,
    strokes: &[&[
        (4, 0),
        (4, 21),
        (13, 21),
        (16, 20),
        (17, 19),
        (18, 17),
        (18, 14),
        (17, 12),
        (16, 11),
        (13, 10),
        (4, 10),
    ]],
};

static Q: Glyph = Glyph {
    advance: 22,
    strokes: &[
        &[
            (9, 21),
            (7, 20),
            (5, 18),
            (4, 16),
            (3, 13),
            (3, 8),
            (4, 5),
            (5, 3),
            (7, 1),
            (9, 0),
            (13, 0),
            (15, 1),
            (17, 3),
            (18, 5),
            (19, 8),
            (19, 13),
            (18, 16),
            (17, 18),
            (15, 20),
            (13, 21),
            (9, 21),
        ],
        &[(12, 4), (18, -2)],
    ],
};

static R: Glyph = Glyph {
    advance: 21,
    strokes: &[
        &[
            (4, 0),
            (4, 21),
            (13, 21),
            (16, 20),
            (17, 19),
            (18, 17),
            (18, 15),
            (17, 13),
            (16, 12),
            (13, 11),
            (4, 11),
        ],
        &[(11, 11), (18, 0)],
    ],
};

static S: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (17, 18),
        (15, 20),
        (12, 21),
        (8, 21),
        (5, 20),
        (3, 18),
        (3, 16),
        (4, 14),
        (5, 13),
        (7, 12),
        (13, 10),
        (15, 9),
        (16, 8),
        (17, 6),
        (17, 3),
        (15, 1),
        (12, 0),
        (8, 0),
        (5, 1),
        (3, 3),
    ]],
};

static T: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(8, 21), (8, 0)], &[(1, 21), (15, 21)]],
};

static U: Glyph = Glyph {
    advance: 22,
    strokes: &[&[
        (4, 21),
        (4, 6),
        (5, 3),
        (7, 1),
        (10, 0),
        (12, 0),
        (15, 1),
        (17, 3),
        (18, 6),
        (18, 21),
    ]],
};

static V: Glyph = Glyph {
    advance: 18,
    strokes: &[&[(1, 21), (9, 0), (17, 21)]],
};

static W: Glyph = Glyph {
    advance: 24,
    strokes: &[&[(2, 21), (7, 0), (12, 21), (17, 0), (22, 21)]],
};

static X: Glyph = Glyph {
    advance: 20,
    strokes: &[&[(3, 21), (17, 0)], &[(17, 21), (3, 0)]],
};

static Y: Glyph = Glyph {
    advance: 18,
    strokes: &[&[(1, 21), (9, 11), (9, 0)], &[(17, 21), (9, 11)]],
};

static Z: Glyph = Glyph {
    advance: 20,
    strokes: &[&[(3, 21), (17, 21), (3, 0), (17, 0)]],
};

static DIGIT_0: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (9, 21),
        (6, 20),
        (4, 17),
        (3, 12),
        (3, 9),
        (4, 4),
        (6, 1),
        (9, 0),
        (11, 0),
        (14, 1),
        (16, 4),
        (17, 9),
        (17, 12),
        (16, 17),
        (14, 20),
        (11, 21),
        (9, 21),
    ]],
};

static DIGIT_1: Glyph = Glyph {
    advance: 20,
    strokes: &[&[(6, 17), (8, 18), (11, 21), (11, 0)]],
};

static DIGIT_2: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (4, 16),
        (4, 17),
        (5, 19),
        (6, 20),
        (8, 21),
        (12, 21),
        (14, 20),
        (15, 19),
        (16, 17),
        (16, 15),
        (15, 13),
        (13, 10),
        (3, 0),
        (17, 0),
    ]],
};

static DIGIT_3: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (5, 21),
        (16, 21),
        (10, 13),
        (13, 13),
        (15, 12),
        (16, 11),
        (17, 8),
        (17, 6),
        (16, 3),
        (14, 1),
        (11, 0),
        (8, 0),
        (5, 1),
        (4, 2),
        (3, 4),
    ]],
};

static DIGIT_4: Glyph = Glyph {
    advance: 20,
    strokes: &[&[(13, 21), (3, 7), (18, 7)], &[(13, 21), (13, 0)]],
};

static DIGIT_5: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (15, 21),
        (5, 21),
        (4, 12),
        (5, 13),
        (8, 14),
        (11, 14),
        (14, 13),
        (16, 11),
        (17, 8),
        (17, 6),
        (16, 3),
        (14, 1),
        (11, 0),
        (8, 0),
        (5, 1),
        (4, 2),
        (3, 4),
    ]],
};

static DIGIT_6: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (16, 18),
        (15, 20),
        (12, 21),
        (10, 21),
        (7, 20),
        (5, 17),
        (4, 12),
        (4, 7),
        (5, 3),
        (7, 1),
        (10, 0),
        (11, 0),
        (14, 1),
        (16, 3),
        (17, 6),
        (17, 7),
        (16, 10),
        (14, 12),
        (11, 13),
        (10, 13),
        (7, 12),
        (5, 10),
        (4, 7),
    ]],
};

static DIGIT_7: Glyph = Glyph {
    advance: 20,
    strokes: &[&[(3, 21), (17, 21), (7, 0)]],
};

static DIGIT_8: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (8, 21),
        (5, 20),
        (4, 18),
        (4, 16),
        (5, 14),
        (7, 13),
        (11, 12),
        (14, 11),
        (16, 9),
        (17, 7),
        (17, 4),
        (16, 2),
        (15, 1),
        (12, 0),
        (8, 0),
        (5, 1),
        (4, 2),
        (3, 4),
        (3, 7),
        (4, 9),
        (6, 11),
        (9, 12),
        (13, 13),
        (15, 14),
        (16, 16),
        (16, 18),
        (15, 20),
        (12, 21),
        (8, 21),
    ]],
};

static DIGIT_9: Glyph = Glyph {
    advance: 20,
    strokes: &[&[
        (16, 14),
        (15, 11),
        (13, 9),
        (10, 8),
        (9, 8),
        (6, 9),
        (4, 11),
        (3, 14),
        (3, 15),
        (4, 18),
        (6, 20),
        (9, 21),
        (10, 21),
        (13, 20),
        (15, 18),
        (16, 14),
        (16, 9),
        (15, 4),
        (13, 1),
        (10, 0),
        (8, 0),
        (5, 1),
        (4, 3),
    ]],
};

static PERIOD: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(5, 2), (4, 1), (5, 0), (6, 1), (5, 2)]],
};

static COMMA: Glyph = Glyph {
    advance: 10,
    strokes: &[&[
        (6, 1),
        (5, 0),
        (4, 1),
        (5, 2),
        (6, 1),
        (6, -1),
        (5, -3),
        (4, -4),
    ]],
};

static COLON: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[(5, 14), (4, 13), (5, 12), (6, 13), (5, 14)],
        &[(5, 2), (4, 1), (5, 0), (6, 1), (5, 2)],
    ],
};

static EXCLAMATION: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(5, 21), (5, 7)], &[(5, 2), (4, 1), (5, 0), (6, 1), (5, 2)]],
};

static HYPHEN: Glyph = Glyph {
    advance: 26,
    strokes: &[&[(4, 9), (22, 9)]],
};

static PLUS: Glyph = Glyph {
    advance: 26,
    strokes: &[&[(13, 18), (13, 0)], &[(4, 9), (22, 9)]],
};

static UNDERSCORE: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(0, -2), (16, -2)]],
};

static SLASH: Glyph = Glyph {
    advance: 22,
    strokes: &[&[(20, 25), (2, -7)]],
};

static QUESTION: Glyph = Glyph {
    advance: 18,
    strokes: &[
        &[
            (3, 16),
            (3, 17),
            (4, 19),
            (5, 20),
            (7, 21),
            (11, 21),
            (13, 20),
            (14, 19),
            (15, 17),
            (15, 15),
            (14, 13),
            (13, 12),
            (9, 10),
            (9, 7),
        ],
        &[(9, 2), (8, 1), (9, 0), (10, 1), (9, 2)],
    ],
};

static QUOTE: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(4, 21), (4, 14)], &[(12, 21), (12, 14)]],
};

static HASH: Glyph = Glyph {
    advance: 21,
    strokes: &[
        &[(11, 25), (4, -7)],
        &[(17, 25), (10, -7)],
        &[(4, 12), (18, 12)],
        &[(3, 6), (17, 6)],
    ],
};

static DOLLAR: Glyph = Glyph {
    advance: 20,
    strokes: &[
        &[(8, 25), (8, -4)],
        &[(12, 25), (12, -4)],
        &[
            (17, 18),
            (15, 20),
            (12, 21),
            (8, 21),
            (5, 20),
            (3, 18),
            (3, 16),
            (4, 14),
            (5, 13),
            (7, 12),
            (13, 10),
            (15, 9),
            (16, 8),
            (17, 6),
            (17, 3),
            (15, 1),
            (12, 0),
            (8, 0),
            (5, 1),
            (3, 3),
        ],
    ],
};

static PERCENT: Glyph = Glyph {
    advance: 24,
    strokes: &[
        &[(21, 21), (3, 0)],
        &[
            (8, 21),
            (10, 19),
            (10, 17),
            (9, 15),
            (7, 14),
            (5, 14),
            (3, 16),
            (3, 18),
            (4, 20),
            (6, 21),
            (8, 21),
            (10, 20),
            (13, 19),
            (16, 19),
            (19, 20),
            (21, 21),
        ],
        &[
            (17, 7),
            (15, 6),
            (14, 4),
            (14, 2),
            (16, 0),
            (18, 0),
            (20, 1),
            (21, 3),
            (21, 5),
            (19, 7),
            (17, 7),
        ],
    ],
};

static AMPERSAND: Glyph = Glyph {
    advance: 26,
    strokes: &[&[
        (23, 12),
        (23, 13),
        (22, 14),
        (21, 14),
        (20, 13),
        (19, 11),
        (17, 6),
        (15, 3),
        (13, 1),
        (11, 0),
        (7, 0),
        (5, 1),
        (4, 2),
        (3, 4),
        (3, 6),
        (4, 8),
        (5, 9),
        (12, 13),
        (13, 14),
        (14, 16),
        (14, 18),
        (13, 20),
        (11, 21),
        (9, 20),
        (8, 18),
        (8, 16),
        (9, 13),
        (11, 10),
        (16, 3),
        (18, 1),
        (20, 0),
        (22, 0),
        (23, 1),
        (23, 2),
    ]],
};

static APOSTROPHE: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(5, 19), (4, 20), (5, 21), (6, 20), (6, 18), (5, 16), (4, 15)]],
};

static LEFT_PAREN: Glyph = Glyph {
    advance: 14,
    strokes: &[&[
        (11, 25),
        (9, 23),
        (7, 20),
        (5, 16),
        (4, 11),
        (4, 7),
        (5, 2),
        (7, -2),
        (9, -5),
        (11, -7),
    ]],
};

static RIGHT_PAREN: Glyph = Glyph {
    advance: 14,
    strokes: &[&[
        (3, 25),
        (5, 23),
        (7, 20),
        (9, 16),
        (10, 11),
        (10, 7),
        (9, 2),
        (7, -2),
        (5, -5),
        (3, -7),
    ]],
};

static ASTERISK: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(8, 21), (8, 9)], &[(3, 18), (13, 12)], &[(13, 18), (3, 12)]],
};

static SEMICOLON: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[(5, 14), (4, 13), (5, 12), (6, 13), (5, 14)],
        &[(6, 1), (5, 0), (4, 1), (5, 2), (6, 1), (6, -1), (5, -3), (4, -4)],
    ],
};

static LESS: Glyph = Glyph {
    advance: 24,
    strokes: &[&[(20, 18), (4, 9), (20, 0)]],
};

static EQUALS: Glyph = Glyph {
    advance: 26,
    strokes: &[&[(4, 12), (22, 12)], &[(4, 6), (22, 6)]],
};

static GREATER: Glyph = Glyph {
    advance: 24,
    strokes: &[&[(4, 18), (20, 9), (4, 0)]],
};

static AT: Glyph = Glyph {
    advance: 27,
    strokes: &[
        &[
            (18, 13),
            (17, 15),
            (15, 16),
            (12, 16),
            (10, 15),
            (9, 14),
            (8, 11),
            (8, 8),
            (9, 6),
            (11, 5),
            (14, 5),
            (16, 6),
            (17, 8),
        ],
        &[(12, 16), (10, 14), (9, 11), (9, 8), (10, 6), (11, 5)],
        &[
            (18, 16),
            (17, 8),
            (17, 6),
            (19, 5),
            (21, 5),
            (23, 7),
            (24, 10),
            (24, 12),
            (23, 15),
            (22, 17),
            (20, 19),
            (18, 20),
            (15, 21),
            (12, 21),
            (9, 20),
            (7, 19),
            (5, 17),
            (4, 15),
            (3, 12),
            (3, 9),
            (4, 6),
            (5, 4),
            (7, 2),
            (9, 1),
            (12, 0),
            (15, 0),
            (18, 1),
            (20, 2),
            (21, 3),
        ],
        &[(19, 16), (18, 8), (18, 6), (19, 5)],
    ],
};

static LEFT_BRACKET: Glyph = Glyph {
    advance: 14,
    strokes: &[
        &[(4, 25), (4, -7)],
        &[(5, 25), (5, -7)],
        &[(4, 25), (11, 25)],
        &[(4, -7), (11, -7)],
    ],
};

static BACKSLASH: Glyph = Glyph {
    advance: 14,
    strokes: &[&[(0, 21), (14, -3)]],
};

static RIGHT_BRACKET: Glyph = Glyph {
    advance: 14,
    strokes: &[
        &[(9, 25), (9, -7)],
        &[(10, 25), (10, -7)],
        &[(3, 25), (10, 25)],
        &[(3, -7), (10, -7)],
    ],
};

static CARET: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(6, 15), (8, 18), (10, 15)], &[(3, 12), (8, 17), (13, 12)], &[(8, 17), (8, 0)]],
};

static GRAVE: Glyph = Glyph {
    advance: 10,
    strokes: &[&[(6, 21), (5, 20), (4, 18), (4, 16), (5, 15), (6, 16), (5, 17)]],
};

static SMALL_A: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(15, 14), (15, 0)],
        &[
            (15, 11),
            (13, 13),
            (11, 14),
            (8, 14),
            (6, 13),
            (4, 11),
            (3, 8),
            (3, 6),
            (4, 3),
            (6, 1),
            (8, 0),
            (11, 0),
            (13, 1),
            (15, 3),
        ],
    ],
};

static SMALL_B: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(4, 21), (4, 0)],
        &[
            (4, 11),
            (6, 13),
            (8, 14),
            (11, 14),
            (13, 13),
            (15, 11),
            (16, 8),
            (16, 6),
            (15, 3),
            (13, 1),
            (11, 0),
            (8, 0),
            (6, 1),
            (4, 3),
        ],
    ],
};

static SMALL_C: Glyph = Glyph {
    advance: 18,
    strokes: &[&[
        (15, 11),
        (13, 13),
        (11, 14),
        (8, 14),
        (6, 13),
        (4, 11),
        (3, 8),
        (3, 6),
        (4, 3),
        (6, 1),
        (8, 0),
        (11, 0),
        (13, 1),
        (15, 3),
    ]],
};

static SMALL_D: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(15, 21), (15, 0)],
        &[
            (15, 11),
            (13, 13),
            (11, 14),
            (8, 14),
            (6, 13),
            (4, 11),
            (3, 8),
            (3, 6),
            (4, 3),
            (6, 1),
            (8, 0),
            (11, 0),
            (13, 1),
            (15, 3),
        ],
    ],
};

static SMALL_E: Glyph = Glyph {
    advance: 18,
    strokes: &[&[
        (3, 8),
        (15, 8),
        (15, 10),
        (14, 12),
        (13, 13),
        (11, 14),
        (8, 14),
        (6, 13),
        (4, 11),
        (3, 8),
        (3, 6),
        (4, 3),
        (6, 1),
        (8, 0),
        (11, 0),
        (13, 1),
        (15, 3),
    ]],
};

static SMALL_F: Glyph = Glyph {
    advance: 12,
    strokes: &[&[(10, 21), (8, 21), (6, 20), (5, 17), (5, 0)], &[(2, 14), (9, 14)]],
};

static SMALL_G: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(15, 14), (15, -2), (14, -5), (13, -6), (11, -7), (8, -7), (6, -6)],
        &[
            (15, 11),
            (13, 13),
            (11, 14),
            (8, 14),
            (6, 13),
            (4, 11),
            (3, 8),
            (3, 6),
            (4, 3),
            (6, 1),
            (8, 0),
            (11, 0),
            (13, 1),
            (15, 3),
        ],
    ],
};

static SMALL_H: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(4, 21), (4, 0)],
        &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)],
    ],
};

static SMALL_I: Glyph = Glyph {
    advance: 8,
    strokes: &[&[(3, 21), (4, 20), (5, 21), (4, 22), (3, 21)], &[(4, 14), (4, 0)]],
};

static SMALL_J: Glyph = Glyph {
    advance: 10,
    strokes: &[
        &[(5, 21), (6, 20), (7, 21), (6, 22), (5, 21)],
        &[(6, 14), (6, -3), (5, -6), (3, -7), (1, -7)],
    ],
};

static SMALL_K: Glyph = Glyph {
    advance: 17,
    strokes: &[&[(4, 21), (4, 0)], &[(14, 14), (4, 4)], &[(8, 8), (15, 0)]],
};

static SMALL_L: Glyph = Glyph {
    advance: 8,
    strokes: &[&[(4, 21), (4, 0)]],
};

static SMALL_M: Glyph = Glyph {
    advance: 30,
    strokes: &[
        &[(4, 14), (4, 0)],
        &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)],
        &[(15, 10), (18, 13), (20, 14), (23, 14), (25, 13), (26, 10), (26, 0)],
    ],
};

static SMALL_N: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(4, 14), (4, 0)],
        &[(4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)],
    ],
};

static SMALL_O: Glyph = Glyph {
    advance: 19,
    strokes: &[&[
        (8, 14),
        (6, 13),
        (4, 11),
        (3, 8),
        (3, 6),
        (4, 3),
        (6, 1),
        (8, 0),
        (11, 0),
        (13, 1),
        (15, 3),
        (16, 6),
        (16, 8),
        (15, 11),
        (13, 13),
        (11, 14),
        (8, 14),
    ]],
};

static SMALL_P: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(4, 14), (4, -7)],
        &[
            (4, 11),
            (6, 13),
            (8, 14),
            (11, 14),
            (13, 13),
            (15, 11),
            (16, 8),
            (16, 6),
            (15, 3),
            (13, 1),
            (11, 0),
            (8, 0),
            (6, 1),
            (4, 3),
        ],
    ],
};

static SMALL_Q: Glyph = Glyph {
    advance: 19,
    strokes: &[
        &[(15, 14), (15, -7)],
        &[
            (15, 11),
            (13, 13),
            (11, 14),
            (8, 14),
            (6, 13),
            (4, 11),
            (3, 8),
            (3, 6),
            (4, 3),
            (6, 1),
            (8, 0),
            (11, 0),
            (13, 1),
            (15, 3),
        ],
    ],
};

static SMALL_R: Glyph = Glyph {
    advance: 13,
    strokes: &[&[(4, 14), (4, 0)], &[(4, 8), (5, 11), (7, 13), (9, 14), (12, 14)]],
};

static SMALL_S: Glyph = Glyph {
    advance: 17,
    strokes: &[&[
        (14, 11),
        (13, 13),
        (10, 14),
        (7, 14),
        (4, 13),
        (3, 11),
        (4, 9),
        (6, 8),
        (11, 7),
        (13, 6),
        (14, 4),
        (14, 3),
        (13, 1),
        (10, 0),
        (7, 0),
        (4, 1),
        (3, 3),
    ]],
};

static SMALL_T: Glyph = Glyph {
    advance: 12,
    strokes: &[&[(5, 21), (5, 4), (6, 1), (8, 0), (10, 0)], &[(2, 14), (9, 14)]],
};

static SMALL_U: Glyph = Glyph {
    advance: 19,
    strokes: &[&[(4, 14), (4, 4), (5, 1), (7, 0), (10, 0), (12, 1), (15, 4)], &[(15, 14), (15, 0)]],
};

static SMALL_V: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(2, 14), (8, 0)], &[(14, 14), (8, 0)]],
};

static SMALL_W: Glyph = Glyph {
    advance: 22,
    strokes: &[&[(3, 14), (7, 0)], &[(11, 14), (7, 0)], &[(11, 14), (15, 0)], &[(19, 14), (15, 0)]],
};

static SMALL_X: Glyph = Glyph {
    advance: 17,
    strokes: &[&[(3, 14), (14, 0)], &[(14, 14), (3, 0)]],
};

static SMALL_Y: Glyph = Glyph {
    advance: 16,
    strokes: &[&[(2, 14), (8, 0)], &[(14, 14), (8, 0), (6, -4), (4, -6), (2, -7), (1, -7)]],
};

static SMALL_Z: Glyph = Glyph {
    advance: 17,
    strokes: &[&[(14, 14), (3, 0)], &[(3, 14), (14, 14)], &[(3, 0), (14, 0)]],
};

static LEFT_BRACE: Glyph = Glyph {
    advance: 14,
    strokes: &[
        &[(9, 25), (7, 24), (6, 23), (5, 21), (5, 19), (6, 17), (7, 16), (8, 14), (8, 12), (6, 10)],
        &[
            (7, 24),
            (6, 22),
            (6, 20),
            (7, 18),
            (8, 17),
            (9, 15),
            (9, 13),
            (8, 11),
            (4, 9),
            (8, 7),
            (9, 5),
            (9, 3),
            (8, 1),
            (7, 0),
            (6, -2),
            (6, -4),
            (7, -6),
        ],
        &[(6, 8), (8, 6), (8, 4), (7, 2), (6, 1), (5, -1), (5, -3), (6, -5), (7, -6), (9, -7)],
    ],
};

static BAR: Glyph = Glyph {
    advance: 8,
    strokes: &[&[(4, 25), (4, -7)]],
};

static RIGHT_BRACE: Glyph = Glyph {
    advance: 14,
    strokes: &[
        &[(5, 25), (7, 24), (8, 23), (9, 21), (9, 19), (8, 17), (7, 16), (6, 14), (6, 12), (8, 10)],
        &[
            (7, 24),
            (8, 22),
            (8, 20),
            (7, 18),
            (6, 17),
            (5, 15),
            (5, 13),
            (6, 11),
            (10, 9),
            (6, 7),
            (5, 5),
            (5, 3),
            (6, 1),
            (7, 0),
            (8, -2),
            (8, -4),
            (7, -6),
        ],
        &[(8, 8), (6, 6), (6, 4), (7, 2), (8, 1), (9, -1), (9, -3), (8, -5), (7, -6), (5, -7)],
    ],
};

static TILDE: Glyph = Glyph {
    advance: 24,
    strokes: &[
        &[
            (3, 6),
            (3, 8),
            (4, 11),
            (6, 12),
            (8, 12),
            (10, 11),
            (14, 8),
            (16, 7),
            (18, 7),
            (20, 8),
            (21, 10),
        ],
        &[
            (3, 8),
            (4, 10),
            (6, 11),
            (8, 11),
            (10, 10),
            (14, 7),
            (16, 6),
            (18, 6),
            (20, 7),
            (21, 10),
        ],
    ],
};

static COPYRIGHT: Glyph = Glyph {
    advance: 27,
    strokes: &[
        &[
            (13, 21),
            (17, 20),
            (20, 18),
            (23, 14),
            (24, 10),
            (23, 6),
            (20, 2),
            (17, 0),
            (13, -1),
            (9, 0),
            (6, 2),
            (3, 6),
            (2, 10),
            (3, 14),
            (6, 18),
            (9, 20),
            (13, 21),
        ],
        &[
            (17, 13),
            (16, 15),
            (14, 16),
            (12, 16),
            (10, 15),
            (9, 13),
            (9, 8),
            (10, 6),
            (12, 5),
            (14, 5),
            (16, 6),
            (17, 8),
        ],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_has_its_own_glyphs() {
        assert!(!std::ptr::eq(glyph('s'), glyph('S')));
        assert_eq!(glyph('s').advance, 17);
        assert_eq!(glyph('m').advance, 30);
        assert!(glyph('p').descends());
        assert!(!glyph('P').descends());
    }

    #[test]
    fn unknown_characters_fall_back_to_question_mark() {
        assert!(std::ptr::eq(glyph('\u{263a}'), glyph('?')));
        assert!(std::ptr::eq(glyph('\u{e9}'), glyph('?')));
        assert!(std::ptr::eq(glyph('\t'), glyph('?')));
    }

    #[test]
    fn every_printable_ascii_character_has_a_glyph() {
        for c in (' '..='~').filter(|&c| c != '?') {
            assert!(!std::ptr::eq(glyph(c), glyph('?')), "{c:?}");
        }
    }

    #[test]
    fn glyphs_stay_within_cell() {
        for c in (' '..='~').chain(std::iter::once('\u{a9}')) {
            let g = glyph(c);
            for &(x, y) in g.strokes.iter().flat_map(|s| s.iter()) {
                assert!(x >= 0 && i32::from(x) <= i32::from(g.advance), "{c}: x={x}");
                #[allow(clippy::cast_possible_truncation)]
                let descent = DESCENT as i8;
                assert!((-descent..=25).contains(&y), "{c}: y={y}");
            }
        }
    }

    #[test]
    fn sample_advance_and_descenders() {
        assert_eq!(text_advance("SAMPLE"), 20 + 18 + 24 + 21 + 17 + 19);
        assert_eq!(text_advance(""), 0);
        assert!(!text_descends("SAMPLE"));
        assert!(text_descends("QUIZ"));
        assert!(text_descends("a,b"));
        assert_eq!(text_advance("sample"), 17 + 19 + 30 + 19 + 8 + 18);
        assert!(!text_descends("sample!"));
        assert!(text_descends("jpg"));
    }
}
