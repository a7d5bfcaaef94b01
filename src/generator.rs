use crate::config::GeneratorConfig;
use crate::error::MintError;
use rand::Rng;

/// Every character eligible for inclusion in a generated password:
/// uppercase, lowercase, digits, and a fixed symbol set.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789<>/\\!@$%^&*()_+=-{}|";

pub const DEFAULT_MIN_LEN: usize = 8;
pub const DEFAULT_MAX_LEN: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"<>/\\!@$%^&*()_+=-{}|";

// Sample of the EFF diceware list; a full deployment would bundle all
// 7776 words.
const DICEWARE_WORDS: &[&str] = &[
    "ability", "able", "about", "above", "absent", "absorb", "abstract", "absurd",
    "abuse", "access", "accident", "account", "accuse", "achieve", "acid", "acoustic",
    "battery", "beach", "bean", "beauty", "become", "beef", "before", "begin",
];

const PHONETIC_WORDS: &[&str] = &[
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot",
    "Golf", "Hotel", "India", "Juliet", "Kilo", "Lima",
    "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo",
    "Sierra", "Tango", "Uniform", "Victor", "Whiskey",
    "Xray", "Yankee", "Zulu",
];

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvwxyz";
const VOWELS: &[u8] = b"aeiou";

const WORD_SYMBOLS: &[u8] = b"!@#$%^&*";
const SYLLABLE_SYMBOLS: &[u8] = b"!@#$";

/// How a password is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStyle {
    /// Independent uniform draws from the selected character classes.
    Random(CharsetOptions),
    /// Capitalized dictionary words joined with hyphens, plus a number
    /// and a symbol.
    Xkcd,
    /// NATO phonetic words joined with hyphens, plus a number and a symbol.
    Phonetic,
    /// Consonant-vowel-consonant syllables forming a fake but speakable
    /// word, plus a number and a symbol.
    Pronounceable,
}

/// Character classes included in [`PasswordStyle::Random`] output. When
/// everything is toggled off the charset falls back to alphanumeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetOptions {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetOptions {
    fn charset(&self) -> Vec<u8> {
        let mut charset = Vec::new();
        if self.uppercase {
            charset.extend_from_slice(UPPERCASE);
        }
        if self.lowercase {
            charset.extend_from_slice(LOWERCASE);
        }
        if self.digits {
            charset.extend_from_slice(DIGITS);
        }
        if self.symbols {
            charset.extend_from_slice(SYMBOLS);
        }
        if charset.is_empty() {
            charset.extend_from_slice(UPPERCASE);
            charset.extend_from_slice(LOWERCASE);
            charset.extend_from_slice(DIGITS);
        }
        charset
    }
}

/// A generated password together with its strength metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub password: String,
    pub style: PasswordStyle,
    pub entropy_bits: f64,
    pub strength: Strength,
    pub crack_time: String,
    pub memorizable: bool,
}

/// Produces random password strings with a length drawn uniformly from a
/// closed range and each character drawn uniformly from [`ALPHABET`]
/// (sampling with replacement).
///
/// Bounds are validated at construction, so [`generate`](Self::generate)
/// itself cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct PasswordGenerator {
    min_len: usize,
    max_len: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl PasswordGenerator {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, MintError> {
        if min_len == 0 || max_len == 0 || min_len > max_len {
            return Err(MintError::InvalidLengthRange {
                min: min_len,
                max: max_len,
            });
        }
        Ok(Self { min_len, max_len })
    }

    pub fn from_config(cfg: &GeneratorConfig) -> Result<Self, MintError> {
        Self::new(cfg.min_len, cfg.max_len)
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        let length = rng.random_range(self.min_len..=self.max_len);
        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }

    /// Generate in the given style, returning the password together with
    /// its entropy estimate, strength band, and crack-time estimate. The
    /// length range only applies to [`PasswordStyle::Random`]; the
    /// word-based styles have a fixed shape.
    pub fn generate_styled(&self, style: PasswordStyle) -> GenerationResult {
        let mut rng = rand::rng();
        let (password, entropy) = match style {
            PasswordStyle::Random(opts) => {
                let charset = opts.charset();
                let length = rng.random_range(self.min_len..=self.max_len);
                let password: String = (0..length)
                    .map(|_| charset[rng.random_range(0..charset.len())] as char)
                    .collect();
                let bits =
                    password.len() as f64 * (estimate_charset_size(&password) as f64).log2();
                (password, bits)
            }
            PasswordStyle::Xkcd => (xkcd(&mut rng), xkcd_entropy()),
            PasswordStyle::Phonetic => (phonetic(&mut rng), phonetic_entropy()),
            PasswordStyle::Pronounceable => (pronounceable(&mut rng), pronounceable_entropy()),
        };
        GenerationResult {
            password,
            style,
            entropy_bits: entropy,
            strength: Strength::from_entropy(entropy),
            crack_time: crack_time(entropy),
            memorizable: !matches!(style, PasswordStyle::Random(_)),
        }
    }
}

// Four capitalized words, a four-digit number, a symbol.
fn xkcd(rng: &mut impl Rng) -> String {
    let words: Vec<String> = (0..4)
        .map(|_| capitalize(DICEWARE_WORDS[rng.random_range(0..DICEWARE_WORDS.len())]))
        .collect();
    let number = rng.random_range(1000..=9999);
    let symbol = WORD_SYMBOLS[rng.random_range(0..WORD_SYMBOLS.len())] as char;
    format!("{}-{}{}", words.join("-"), number, symbol)
}

fn xkcd_entropy() -> f64 {
    4.0 * (DICEWARE_WORDS.len() as f64).log2()
        + 9000f64.log2()
        + (WORD_SYMBOLS.len() as f64).log2()
}

// Five NATO phonetic words, a three-digit number, a symbol.
fn phonetic(rng: &mut impl Rng) -> String {
    let words: Vec<&str> = (0..5)
        .map(|_| PHONETIC_WORDS[rng.random_range(0..PHONETIC_WORDS.len())])
        .collect();
    let number = rng.random_range(100..=999);
    let symbol = WORD_SYMBOLS[rng.random_range(0..WORD_SYMBOLS.len())] as char;
    format!("{}-{}{}", words.join("-"), number, symbol)
}

fn phonetic_entropy() -> f64 {
    5.0 * (PHONETIC_WORDS.len() as f64).log2()
        + 900f64.log2()
        + (WORD_SYMBOLS.len() as f64).log2()
}

// Three consonant-vowel-consonant syllables, a two-digit number, a symbol.
fn pronounceable(rng: &mut impl Rng) -> String {
    let mut word = String::with_capacity(9);
    for _ in 0..3 {
        word.push(CONSONANTS[rng.random_range(0..CONSONANTS.len())] as char);
        word.push(VOWELS[rng.random_range(0..VOWELS.len())] as char);
        word.push(CONSONANTS[rng.random_range(0..CONSONANTS.len())] as char);
    }
    let number = rng.random_range(10..=99);
    let symbol = SYLLABLE_SYMBOLS[rng.random_range(0..SYLLABLE_SYMBOLS.len())] as char;
    format!("{}-{}{}", capitalize(&word), number, symbol)
}

fn pronounceable_entropy() -> f64 {
    let per_syllable = (CONSONANTS.len() * VOWELS.len() * CONSONANTS.len()) as f64;
    3.0 * per_syllable.log2() + 90f64.log2() + (SYLLABLE_SYMBOLS.len() as f64).log2()
}

fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars);
    }
    out
}

/// Charset size implied by the character classes actually present, for
/// entropy estimates over passwords of unknown provenance.
fn estimate_charset_size(password: &str) -> usize {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        size += 32;
    }
    size
}

/// Shannon entropy of a uniformly drawn password of `len` characters.
pub fn entropy_bits(len: usize) -> f64 {
    len as f64 * (ALPHABET.len() as f64).log2()
}

/// Human-readable brute-force estimate, assuming a modern GPU rig at
/// roughly 100 billion guesses per second.
pub fn crack_time(bits: f64) -> String {
    let seconds = bits.exp2() / 100_000_000_000.0;
    if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < 60.0 {
        format!("{seconds:.0} seconds")
    } else if seconds < 3_600.0 {
        format!("{:.0} minutes", seconds / 60.0)
    } else if seconds < 86_400.0 {
        format!("{:.0} hours", seconds / 3_600.0)
    } else if seconds < 31_536_000.0 {
        format!("{:.0} days", seconds / 86_400.0)
    } else if seconds < 3_153_600_000.0 {
        format!("{:.0} years", seconds / 31_536_000.0)
    } else {
        format!("{:.0} centuries", seconds / 31_536_000_000.0)
    }
}

/// Strength band for an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_entropy(bits: f64) -> Self {
        match bits {
            b if b < 28.0 => Strength::VeryWeak,
            b if b < 36.0 => Strength::Weak,
            b if b < 60.0 => Strength::Fair,
            b if b < 128.0 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_hold_over_many_trials() {
        let generator = PasswordGenerator::default();
        for _ in 0..10_000 {
            let pwd = generator.generate();
            assert!(pwd.len() >= DEFAULT_MIN_LEN && pwd.len() <= DEFAULT_MAX_LEN);
        }
    }

    #[test]
    fn every_char_is_from_the_alphabet() {
        let generator = PasswordGenerator::default();
        for _ in 0..100 {
            let pwd = generator.generate();
            for c in pwd.chars() {
                assert!(
                    ALPHABET.contains(&(c as u8)),
                    "unexpected character: {c:?}"
                );
            }
        }
    }

    #[test]
    fn custom_bounds_are_respected() {
        let generator = PasswordGenerator::new(8, 21).unwrap();
        for _ in 0..1_000 {
            let len = generator.generate().len();
            assert!((8..=21).contains(&len));
        }
    }

    #[test]
    fn fixed_length_range_produces_exact_length() {
        let generator = PasswordGenerator::new(12, 12).unwrap();
        assert_eq!(generator.generate().len(), 12);
    }

    #[test]
    fn consecutive_passwords_differ() {
        let generator = PasswordGenerator::default();
        // Not a strict invariant, but a collision over this alphabet is
        // astronomically unlikely.
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(
            PasswordGenerator::new(0, 16),
            Err(MintError::InvalidLengthRange { .. })
        ));
        assert!(matches!(
            PasswordGenerator::new(8, 0),
            Err(MintError::InvalidLengthRange { .. })
        ));
        assert!(matches!(
            PasswordGenerator::new(16, 8),
            Err(MintError::InvalidLengthRange { .. })
        ));
    }

    #[test]
    fn from_config_validates_bounds() {
        let cfg = GeneratorConfig {
            min_len: 8,
            max_len: 20,
        };
        let generator = PasswordGenerator::from_config(&cfg).unwrap();
        assert_eq!(generator.min_len(), 8);
        assert_eq!(generator.max_len(), 20);

        let bad = GeneratorConfig {
            min_len: 9,
            max_len: 3,
        };
        assert!(PasswordGenerator::from_config(&bad).is_err());
    }

    #[test]
    fn random_style_honors_charset_toggles() {
        let generator = PasswordGenerator::default();
        let digits_only = CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        for _ in 0..100 {
            let result = generator.generate_styled(PasswordStyle::Random(digits_only));
            assert!(result.password.chars().all(|c| c.is_ascii_digit()));
            assert!(!result.memorizable);
        }

        let symbols_only = CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: true,
        };
        for _ in 0..100 {
            let result = generator.generate_styled(PasswordStyle::Random(symbols_only));
            assert!(result.password.bytes().all(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn all_toggles_off_falls_back_to_alphanumeric() {
        let generator = PasswordGenerator::default();
        let none = CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };
        for _ in 0..100 {
            let result = generator.generate_styled(PasswordStyle::Random(none));
            assert!(!result.password.is_empty());
            assert!(result.password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn xkcd_style_has_the_expected_shape() {
        let generator = PasswordGenerator::default();
        let result = generator.generate_styled(PasswordStyle::Xkcd);

        let parts: Vec<&str> = result.password.split('-').collect();
        assert_eq!(parts.len(), 5);
        for word in &parts[..4] {
            assert!(word.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
            assert!(
                DICEWARE_WORDS.contains(&word.to_ascii_lowercase().as_str()),
                "unexpected word: {word}"
            );
        }
        let tail = parts[4];
        let (digits, symbol) = tail.split_at(tail.len() - 1);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert!(WORD_SYMBOLS.contains(&symbol.as_bytes()[0]));
        assert!(result.memorizable);
    }

    #[test]
    fn phonetic_words_come_from_the_nato_list() {
        let generator = PasswordGenerator::default();
        let result = generator.generate_styled(PasswordStyle::Phonetic);

        let parts: Vec<&str> = result.password.split('-').collect();
        assert_eq!(parts.len(), 6);
        for word in &parts[..5] {
            assert!(PHONETIC_WORDS.contains(word), "unexpected word: {word}");
        }
    }

    #[test]
    fn pronounceable_style_has_the_expected_shape() {
        let generator = PasswordGenerator::default();
        let result = generator.generate_styled(PasswordStyle::Pronounceable);

        let (word, tail) = result.password.split_once('-').expect("missing hyphen");
        assert_eq!(word.len(), 9);
        assert!(word.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        assert!(word.chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(tail.len(), 3);
        assert!(SYLLABLE_SYMBOLS.contains(&tail.as_bytes()[2]));
    }

    #[test]
    fn styled_results_carry_consistent_metadata() {
        let generator = PasswordGenerator::default();
        for style in [
            PasswordStyle::Random(CharsetOptions::default()),
            PasswordStyle::Xkcd,
            PasswordStyle::Phonetic,
            PasswordStyle::Pronounceable,
        ] {
            let result = generator.generate_styled(style);
            assert_eq!(result.style, style);
            assert!(result.entropy_bits > 0.0);
            assert_eq!(result.strength, Strength::from_entropy(result.entropy_bits));
            assert!(!result.crack_time.is_empty());
        }
    }

    #[test]
    fn crack_time_bands_are_stable() {
        assert_eq!(crack_time(10.0), "Instant");
        // 2^40 guesses at 1e11/s is about 11 seconds.
        assert_eq!(crack_time(40.0), "11 seconds");
        assert!(crack_time(200.0).ends_with("centuries"));
    }

    #[test]
    fn strength_bands_match_entropy_thresholds() {
        assert_eq!(Strength::from_entropy(10.0), Strength::VeryWeak);
        assert_eq!(Strength::from_entropy(30.0), Strength::Weak);
        assert_eq!(Strength::from_entropy(50.0), Strength::Fair);
        assert_eq!(Strength::from_entropy(100.0), Strength::Strong);
        assert_eq!(Strength::from_entropy(200.0), Strength::VeryStrong);

        // An 8-char password over this alphabet already clears the Fair bar.
        assert_eq!(
            Strength::from_entropy(entropy_bits(DEFAULT_MIN_LEN)),
            Strength::Fair
        );
    }
}
