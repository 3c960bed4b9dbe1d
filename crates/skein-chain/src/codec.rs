use crate::alphabet;
use crate::error::{ConfigError, DecodeError};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use typed_builder::TypedBuilder;

/// Minimum chain length used when the settings builder is not told otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Mixing constant for the padding filler stream (2^64 / golden ratio).
const FILLER_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configures a [`ChainCodec`] instance.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ChainCodecSettings {
    /// Ordered sequence of distinct characters used as digit symbols.
    #[builder(setter(into))]
    pub alphabet: String,
    /// Optional seed for the deterministic alphabet shuffle. Same seed and
    /// same alphabet always reproduce the same character order.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
    /// Chains are padded to at least this many characters; decode rejects
    /// shorter input.
    #[builder(default = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
}

/// Reversible codec between non-negative integers and short pseudo-random
/// looking character chains.
///
/// An instance is constructed once per process and holds no mutable state:
/// `encode` and `decode` are pure functions of their input and the fixed
/// configuration, so a single instance may be shared across threads without
/// coordination.
///
/// The exact encoding scheme is a frozen contract; the alphabet order, the
/// seed and the minimum length must be byte-identical across restarts or
/// previously issued chains stop decoding. Decoding a chain with a codec
/// configured differently from the one that produced it either fails or, in
/// the worst case, silently yields a different valid-looking integer — the
/// codec cannot detect this, and callers must treat decode failures as
/// "not found" rather than attempt recovery by value inspection.
#[derive(Debug, Clone)]
pub struct ChainCodec {
    chars: Vec<char>,
    rendered: String,
    min_length: usize,
}

impl ChainCodec {
    /// Validates the settings, prepares the alphabet (shuffling it when a
    /// seed is present) and builds the codec.
    pub fn new(settings: ChainCodecSettings) -> Result<Self, ConfigError> {
        let raw: Vec<char> = settings.alphabet.chars().collect();
        alphabet::validate(&raw)?;

        let rendered = alphabet::prepare(&settings.alphabet, settings.seed);
        let chars: Vec<char> = rendered.chars().collect();

        Ok(Self {
            chars,
            rendered,
            min_length: settings.min_length,
        })
    }

    /// The prepared (post-shuffle) alphabet this codec encodes over.
    pub fn alphabet(&self) -> &str {
        &self.rendered
    }

    /// The minimum chain length this codec produces and accepts.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Encodes `n` into a chain of at least [`min_length`](Self::min_length)
    /// characters.
    ///
    /// The mapping is total, deterministic and injective for a fixed codec.
    /// Consecutive integers produce structurally distant chains: the prefix,
    /// the rolling substitution order and the padding filler all shift with
    /// the value.
    pub fn encode(&self, n: u64) -> String {
        let b = self.chars.len();
        let digits = self.digits(n);
        let offset = self.offset(&digits);
        let base = self.working_base(offset);

        let mut out = String::with_capacity(self.min_length.max(digits.len() + 1));
        out.push(self.chars[offset]);

        // A padding block sits between the prefix and the digit characters:
        // an opening marker, value-derived filler, a closing marker. The
        // working order does not advance inside the block.
        let base_len = 1 + digits.len();
        if base_len < self.min_length {
            let block = (self.min_length - base_len).max(2);
            out.push(base[0]);
            let mut filler = Pcg64Mcg::seed_from_u64((n ^ FILLER_SALT).wrapping_add(b as u64));
            for _ in 0..block - 2 {
                let k = 1 + (filler.next_u64() % (b as u64 - 1)) as usize;
                out.push(base[k]);
            }
            out.push(base[0]);
        }

        let mut rot = 0usize;
        for &d in &digits {
            out.push(base[(rot + 1 + d as usize) % b]);
            rot += d as usize + 1;
        }

        out
    }

    /// Decodes a chain back into the integer it was generated from.
    ///
    /// Only canonical images of [`encode`](Self::encode) decode successfully:
    /// after parsing, the candidate value is re-encoded and compared against
    /// the input, so a well-formed-looking chain that was never issued fails
    /// with [`DecodeError::MalformedChain`] instead of resolving to a nearby
    /// value.
    pub fn decode(&self, chain: &str) -> Result<u64, DecodeError> {
        let chars: Vec<char> = chain.chars().collect();
        if chars.len() < self.min_length {
            return Err(DecodeError::TooShort {
                got: chars.len(),
                min: self.min_length,
            });
        }
        if let Some(&foreign) = chars.iter().find(|&&c| !self.chars.contains(&c)) {
            return Err(DecodeError::InvalidCharacter(foreign));
        }

        let b = self.chars.len();
        let (&prefix, mut rest) = chars.split_first().ok_or(DecodeError::MalformedChain)?;
        let offset = self
            .chars
            .iter()
            .position(|&c| c == prefix)
            .expect("prefix membership was checked above");
        let base = self.working_base(offset);
        let index_in_base = |c: char| -> usize {
            base.iter()
                .position(|&x| x == c)
                .expect("chain characters were validated against the alphabet")
        };

        // Strip the padding block, if any. Filler characters never sit at
        // working index 0, so the first such character closes the block.
        if let Some((&first, tail)) = rest.split_first() {
            if index_in_base(first) == 0 {
                let close = tail
                    .iter()
                    .position(|&c| index_in_base(c) == 0)
                    .ok_or(DecodeError::MalformedChain)?;
                rest = &tail[close + 1..];
            }
        }
        if rest.is_empty() {
            return Err(DecodeError::MalformedChain);
        }

        let r = (b - 1) as u64;
        let mut rot = 0usize;
        let mut value: u64 = 0;
        for &c in rest {
            let k = (index_in_base(c) + b - rot % b) % b;
            if k == 0 {
                return Err(DecodeError::MalformedChain);
            }
            value = value
                .checked_mul(r)
                .and_then(|v| v.checked_add((k - 1) as u64))
                .ok_or(DecodeError::MalformedChain)?;
            rot += k;
        }

        if self.encode(value) != chain {
            return Err(DecodeError::MalformedChain);
        }
        Ok(value)
    }

    /// Base `b - 1` digits of `n`, most significant first. Zero is the
    /// single digit `[0]`, never an empty sequence.
    fn digits(&self, n: u64) -> Vec<u64> {
        let r = (self.chars.len() - 1) as u64;
        if n == 0 {
            return vec![0];
        }
        let mut digits = Vec::new();
        let mut rest = n;
        while rest > 0 {
            digits.push(rest % r);
            rest /= r;
        }
        digits.reverse();
        digits
    }

    /// Value-dependent rotation of the alphabet. Recovered on decode from
    /// the prefix character, and doubling as a digit checksum through the
    /// canonical re-encode comparison.
    fn offset(&self, digits: &[u64]) -> usize {
        let mut acc = digits.len();
        for (i, &d) in digits.iter().enumerate() {
            acc += d as usize + i + 1;
        }
        acc % self.chars.len()
    }

    /// The substitution order for a given offset: the alphabet rotated left
    /// by `offset`, then reversed. Later rotations are tracked as an index
    /// into this fixed order rather than by moving characters.
    fn working_base(&self, offset: usize) -> Vec<char> {
        let mut base: Vec<char> = Vec::with_capacity(self.chars.len());
        base.extend(&self.chars[offset..]);
        base.extend(&self.chars[..offset]);
        base.reverse();
        base
    }
}
