//! Digit masks for numeric form fields
//!
//! A mask is a pattern where `#` stands for one digit and every other character
//! is a literal separator, e.g. `###.###.###-##`. Formatting keeps only the
//! digits of the input, truncates them to the number of `#` slots and writes
//! the literals back in front of the digits they precede.

/// Placeholder character for a digit slot
const DIGIT_SLOT: char = '#';

/// A fixed digit pattern with literal separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitMask {
    pattern: &'static str,
}

/// Brazilian national ID (CPF)
pub const NATIONAL_ID: DigitMask = DigitMask::new("###.###.###-##");

/// Brazilian postal code (CEP)
pub const POSTAL_CODE: DigitMask = DigitMask::new("#####-###");

/// Mobile phone number with area code
pub const PHONE: DigitMask = DigitMask::new("(##) #####-####");

impl DigitMask {
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digit slots in the pattern
    pub fn capacity(&self) -> usize {
        self.pattern.chars().filter(|c| *c == DIGIT_SLOT).count()
    }

    /// Format arbitrary input against the mask.
    ///
    /// Literals are only emitted when a digit follows them, so partial input
    /// grows naturally while typing (`"1234"` becomes `"123.4"`). The result is
    /// a fixed point: formatting it again yields the same string.
    pub fn format(&self, input: &str) -> String {
        let mut digits = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.capacity())
            .peekable();

        let mut out = String::with_capacity(self.pattern.len());
        let mut pending = String::new();

        for slot in self.pattern.chars() {
            if digits.peek().is_none() {
                break;
            }
            if slot == DIGIT_SLOT {
                out.push_str(&pending);
                pending.clear();
                if let Some(d) = digits.next() {
                    out.push(d);
                }
            } else {
                pending.push(slot);
            }
        }

        out
    }

    /// Digits contained in the input, in order
    pub fn digits(input: &str) -> String {
        input.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether the value is either the fully formatted pattern or exactly the
    /// raw digits with no separators.
    pub fn accepts(&self, value: &str) -> bool {
        let digits = Self::digits(value);
        if digits.len() != self.capacity() {
            return false;
        }
        value == digits || value == self.format(&digits)
    }
}
