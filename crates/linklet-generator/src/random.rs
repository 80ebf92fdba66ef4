use crate::error::Error;
use crate::Generator;
use linklet_core::shortcode::MAX_LENGTH;
use linklet_core::ShortCode;
use rand::Rng;
use typed_builder::TypedBuilder;

/// Upper- and lower-case letters, digits, `_` and `-`: 64 URL-safe symbols.
pub const URL_SAFE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Upper- and lower-case letters and digits only.
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_LENGTH: usize = 7;

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Number of symbols in every generated code.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
    /// Symbols codes are drawn from. Must be ASCII, URL-safe and free of
    /// duplicates so every symbol is equally likely.
    #[builder(default = URL_SAFE_ALPHABET)]
    pub alphabet: &'static [u8],
}

impl Default for RandomGeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Draws fixed-length codes uniformly from an alphabet.
///
/// Randomness comes from [`rand::rng`], a thread-local CSPRNG seeded from
/// the operating system, so the generator itself holds no mutable state
/// and can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
    alphabet: &'static [u8],
}

impl RandomGenerator {
    /// Creates a generator after validating `settings`.
    pub fn new(settings: RandomGeneratorSettings) -> Result<Self, Error> {
        if settings.length == 0 {
            return Err(Error::ZeroLength);
        }

        // Longer codes could never be resolved back from a request path.
        if settings.length > MAX_LENGTH {
            return Err(Error::TooLong {
                length: settings.length,
                max: MAX_LENGTH,
            });
        }

        if settings.alphabet.len() < 2 {
            return Err(Error::AlphabetTooSmall(settings.alphabet.len()));
        }

        let mut seen = [false; 128];
        for &symbol in settings.alphabet {
            if !(symbol.is_ascii_alphanumeric() || symbol == b'_' || symbol == b'-') {
                return Err(Error::UnsafeSymbol(symbol as char));
            }
            if std::mem::replace(&mut seen[symbol as usize], true) {
                return Err(Error::DuplicateSymbol(symbol as char));
            }
        }

        Ok(Self {
            length: settings.length,
            alphabet: settings.alphabet,
        })
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: URL_SAFE_ALPHABET,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
