//! Plausibility score for candidate letter sequences
//!
//! A weighted rule table that rewards sequences that look like Catalan
//! (alternating vowels and consonants, common diphthongs, "ny", "ll", "rr",
//! typical endings) and penalises clusters that do not occur in the
//! language. The magnitudes are tuning constants, not a validity oracle.

/// Every sequence starts from this value before adjustments
pub const BASE_SCORE: i32 = 100;

const DOUBLE_OK: &[u8] = b"rsl";
const DOUBLE_BONUS: i32 = 5;
const DOUBLE_PENALTY: i32 = 30;

/// Vowel pairs that sound wrong, with their penalty
const BAD_VOWEL_PAIRS: &[(&[u8; 2], i32)] = &[
    (b"oa", 30),
    (b"ao", 30),
    (b"oe", 30),
    (b"eo", 30),
    (b"uo", 25),
    (b"ou", 25),
    (b"ae", 25),
    (b"ea", 25),
    (b"oo", 20),
    (b"aa", 20),
    (b"ii", 20),
    (b"uu", 20),
    (b"ee", 20),
    (b"io", 15),
    (b"oi", 15),
];

/// Diphthongs, with their bonus
const DIPHTHONGS: &[(&[u8; 2], i32)] = &[
    (b"ai", 8),
    (b"au", 8),
    (b"ei", 8),
    (b"eu", 8),
    (b"iu", 8),
    (b"ui", 8),
    (b"ia", 5),
    (b"ie", 5),
    (b"ua", 5),
    (b"ue", 5),
];

const BAD_CONSONANT_PAIRS: &[&[u8; 2]] = &[
    b"bp", b"bt", b"bk", b"bg", b"bf", b"bx", b"bz", //
    b"pb", b"pt", b"pk", b"pf", b"px", b"pz", //
    b"tk", b"tg", b"tx", b"tz", b"tf", //
    b"kt", b"kg", b"kf", b"kx", b"kz", //
    b"gf", b"gx", b"gz", b"gb", b"gp", b"gt", b"gk", //
    b"fb", b"fp", b"ft", b"fk", b"fg", b"fx", b"fz", //
    b"xb", b"xp", b"xt", b"xk", b"xg", b"xf", b"xz", //
    b"zb", b"zp", b"zt", b"zk", b"zg", b"zf", b"zx", //
    b"jb", b"jp", b"jt", b"jk", b"jg", b"jf", b"jx", b"jz", //
    b"qb", b"qp", b"qt", b"qk", b"qg", b"qf", b"qx", b"qz",
];
const BAD_CONSONANT_PENALTY: i32 = 50;

/// Clusters that open a word
const START_CLUSTERS: &[&[u8; 2]] = &[
    b"br", b"cr", b"dr", b"fr", b"gr", b"pr", b"tr", //
    b"bl", b"cl", b"fl", b"gl", b"pl", //
    b"sc", b"sp", b"st", b"sq",
];

/// Clusters that close a word
const END_CLUSTERS: &[&[u8; 2]] = &[
    b"nt", b"nd", b"ng", b"nk", b"mp", b"mb", //
    b"lt", b"rt", b"rn", b"rm", b"rp", b"rc", b"rd", b"rf", b"rg", //
    b"st", b"ct", b"pt", b"xt", b"ny",
];
const CLUSTER_BONUS: i32 = 3;
const CLUSTER_MISPLACED: i32 = 25;
const CLUSTER_UNKNOWN: i32 = 15;
const LONG_CLUSTER_PENALTY: i32 = 30;

const BAD_FIRST: &[u8] = b"xzqw";
const BAD_LAST: &[u8] = b"hjqwxzbk";
const SOFT_LAST: &[u8] = b"tnrslm";
const FINAL_D_PENALTY: i32 = 35;

const FOREIGN_LETTERS: &[u8] = b"wk";

#[inline]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn pair_value(table: &[(&[u8; 2], i32)], pair: [u8; 2]) -> Option<i32> {
    table
        .iter()
        .find(|(p, _)| **p == pair)
        .map(|&(_, value)| value)
}

fn in_list(list: &[&[u8; 2]], pair: [u8; 2]) -> bool {
    list.iter().any(|p| **p == pair)
}

fn contains(word: &[u8], needle: &[u8]) -> bool {
    word.windows(needle.len()).any(|w| w == needle)
}

/// Score a candidate sequence; higher looks more like a real word
///
/// Deterministic and never negative.
///
/// # Examples
/// ```
/// use paraulogic_assistant::engine::score;
///
/// assert!(score("terra") > score("trrea"));
/// assert_eq!(score("terra"), score("terra"));
/// assert_eq!(score("qxzkw"), 0);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    let word = word.as_bytes();
    let Some((&first, &last)) = word.first().zip(word.last()) else {
        return 0;
    };

    let total = BASE_SCORE
        + doubled_letters(word)
        + vowel_pairs(word)
        + consonant_clusters(word)
        + edges(word, first, last)
        + alternation(word)
        + vowel_runs(word)
        + patterns(word);

    total.max(0).unsigned_abs()
}

fn doubled_letters(word: &[u8]) -> i32 {
    word.windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| {
            if DOUBLE_OK.contains(&w[0]) {
                DOUBLE_BONUS
            } else {
                -DOUBLE_PENALTY
            }
        })
        .sum()
}

fn vowel_pairs(word: &[u8]) -> i32 {
    word.windows(2)
        .filter(|w| is_vowel(w[0]) && is_vowel(w[1]))
        .map(|w| {
            let pair = [w[0], w[1]];
            pair_value(BAD_VOWEL_PAIRS, pair)
                .map(|penalty| -penalty)
                .or_else(|| pair_value(DIPHTHONGS, pair))
                .unwrap_or(0)
        })
        .sum()
}

fn consonant_clusters(word: &[u8]) -> i32 {
    let mut delta = 0;
    let mut run = 0;

    for (i, &b) in word.iter().enumerate() {
        if is_vowel(b) {
            run = 0;
            continue;
        }
        run += 1;
        if run < 2 {
            continue;
        }

        let pair = [word[i - 1], b];
        if in_list(BAD_CONSONANT_PAIRS, pair) {
            delta -= BAD_CONSONANT_PENALTY;
        } else if run == 2 {
            delta += cluster_position(pair, i == 1, i == word.len() - 1);
        } else {
            delta -= LONG_CLUSTER_PENALTY;
        }
    }

    delta
}

fn cluster_position(pair: [u8; 2], at_start: bool, at_end: bool) -> i32 {
    let starts = in_list(START_CLUSTERS, pair);
    let ends = in_list(END_CLUSTERS, pair);

    if !starts && !ends {
        return -CLUSTER_UNKNOWN;
    }
    // A cluster that is both first and last is judged as opening the word
    let misplaced = if at_start {
        ends && !starts
    } else {
        at_end && starts && !ends
    };
    if misplaced {
        -CLUSTER_MISPLACED
    } else {
        CLUSTER_BONUS
    }
}

fn edges(word: &[u8], first: u8, last: u8) -> i32 {
    let mut delta = 0;

    if BAD_FIRST.contains(&first) {
        delta -= 20;
    }
    if !is_vowel(first) {
        delta += 5;
    }

    if is_vowel(last) {
        delta += 8;
    } else {
        if BAD_LAST.contains(&last) {
            delta -= 15;
        }
        if last == b'd' {
            delta -= FINAL_D_PENALTY;
        }
        if SOFT_LAST.contains(&last) {
            delta += 3;
        }
    }

    if word.ends_with(b"rr") {
        delta -= 30;
    }
    if word.ends_with(b"ss") {
        delta -= 25;
    }
    if word.len() > 2 && word.ends_with(b"ll") {
        delta -= 10;
    }

    delta
}

fn alternation(word: &[u8]) -> i32 {
    let mut bonus = 0;
    let mut clean = true;

    for w in word.windows(2) {
        let (a, b) = (is_vowel(w[0]), is_vowel(w[1]));
        if a != b {
            bonus += 2;
        }
        if a && b && pair_value(BAD_VOWEL_PAIRS, [w[0], w[1]]).is_some() {
            clean = false;
        }
    }

    if clean { bonus } else { bonus / 2 }
}

fn vowel_runs(word: &[u8]) -> i32 {
    let mut delta = 0;
    let mut run = 0;
    for &b in word {
        if is_vowel(b) {
            run += 1;
            if run >= 3 {
                delta -= 20 + (run - 3) * 8;
            }
        } else {
            run = 0;
        }
    }
    delta
}

fn patterns(word: &[u8]) -> i32 {
    let mut delta = 0;

    if contains(word, b"rr") && !word.ends_with(b"rr") {
        delta += 10;
    }
    if contains(word, b"ll") && !word.ends_with(b"ll") {
        delta += 8;
    }
    if contains(word, b"ny") {
        delta += 10;
    }
    // "eix" contains "ix", so one check covers both
    if contains(word, b"ix") || contains(word, b"ig") {
        delta += 8;
    }
    if contains(word, b"qu") {
        delta += 5;
    }

    if word.last().is_some_and(|&b| is_vowel(b)) {
        delta += 5;
    }
    if [b"at", b"et", b"it", b"ot", b"ut"]
        .iter()
        .any(|end| word.ends_with(*end))
    {
        delta += 4;
    }
    if [b"ar", b"er", b"ir"].iter().any(|end| word.ends_with(*end)) {
        delta += 6;
    }

    if word.iter().any(|b| FOREIGN_LETTERS.contains(b)) {
        delta -= 25;
    }

    delta
}
