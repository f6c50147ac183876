//! Password generation.

use super::charset::{self, CharacterClass, ClassSet};
use super::{GenerateError, InvalidReason, Password};
use crate::entropy::RandomSource;

/// Shortest password accepted.
pub const MIN_LENGTH: usize = 8;
/// Longest password accepted.
pub const MAX_LENGTH: usize = 64;

/// Input to [`generate`]. Built fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub enabled_classes: ClassSet,
    pub enforce_coverage: bool,
}

impl GenerationRequest {
    /// Request with coverage enforced.
    pub fn new(length: usize, enabled_classes: ClassSet) -> Self {
        Self {
            length,
            enabled_classes,
            enforce_coverage: true,
        }
    }

    #[must_use]
    pub fn enforce_coverage(mut self, enforce: bool) -> Self {
        self.enforce_coverage = enforce;
        self
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        self.validate_within(MIN_LENGTH, MAX_LENGTH)
    }

    pub(crate) fn validate_within(&self, min: usize, max: usize) -> Result<(), GenerateError> {
        if self.length < min || self.length > max {
            return Err(InvalidReason::LengthOutOfRange {
                length: self.length,
                min,
                max,
            }
            .into());
        }
        if self.enabled_classes.is_empty() {
            return Err(InvalidReason::NoClassesSelected.into());
        }
        let classes = self.enabled_classes.len();
        if self.enforce_coverage && self.length < classes {
            return Err(InvalidReason::LengthBelowRequiredClassCount {
                length: self.length,
                classes,
            }
            .into());
        }
        Ok(())
    }
}

/// Generate one password for `request`, drawing every choice from `rng`.
///
/// With coverage enforced, one character is drawn from each enabled class's
/// own alphabet, the rest from the union alphabet, and the whole sequence is
/// shuffled. Without it, every character is drawn from the union alphabet in
/// final order.
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<Password, GenerateError>
where
    R: RandomSource + ?Sized,
{
    request.validate()?;
    Ok(fill(request, rng))
}

fn fill<R>(request: &GenerationRequest, rng: &mut R) -> Password
where
    R: RandomSource + ?Sized,
{
    let chars = charset::build(&request.enabled_classes);
    let mut buf = Vec::with_capacity(request.length);

    if request.enforce_coverage {
        buf.extend(request.enabled_classes.iter().map(|class| required_byte(class, rng)));
        let remaining = request.length - buf.len();
        buf.extend((0..remaining).map(|_| random_byte(&chars, rng)));
        shuffle(&mut buf, rng);
    } else {
        buf.extend((0..request.length).map(|_| random_byte(&chars, rng)));
    }

    Password::from_ascii(buf)
}

#[inline]
fn required_byte<R: RandomSource + ?Sized>(class: CharacterClass, rng: &mut R) -> u8 {
    random_byte(class.alphabet(), rng)
}

#[inline]
fn random_byte<R: RandomSource + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.below(chars.len())]
}

/// Fisher-Yates.
#[inline]
fn shuffle<R: RandomSource + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.below(i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy;

    fn classes(list: &[CharacterClass]) -> ClassSet {
        list.iter().copied().collect()
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let mut rng = entropy::seeded(7);
        let all = ClassSet::all();
        for length in [MIN_LENGTH, MAX_LENGTH] {
            let pass = generate(&GenerationRequest::new(length, all), &mut rng).unwrap();
            assert_eq!(pass.len(), length);
        }
    }

    #[test]
    fn rejects_short_and_long() {
        let mut rng = entropy::seeded(7);
        for length in [0, 7, 65, 1000] {
            let err = generate(&GenerationRequest::new(length, ClassSet::all()), &mut rng)
                .unwrap_err();
            assert_eq!(
                err.reason(),
                InvalidReason::LengthOutOfRange {
                    length,
                    min: MIN_LENGTH,
                    max: MAX_LENGTH
                }
            );
        }
    }

    #[test]
    fn rejects_empty_class_set() {
        let mut rng = entropy::seeded(7);
        let err = generate(&GenerationRequest::new(12, ClassSet::empty()), &mut rng).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::NoClassesSelected);
    }

    #[test]
    fn length_is_checked_before_classes() {
        let err = GenerationRequest::new(3, ClassSet::empty())
            .validate()
            .unwrap_err();
        assert!(matches!(
            err.reason(),
            InvalidReason::LengthOutOfRange { length: 3, .. }
        ));
    }

    #[test]
    fn rejects_length_below_class_count_with_coverage() {
        let request = GenerationRequest::new(3, ClassSet::all());
        let err = request.validate_within(1, 64).unwrap_err();
        assert_eq!(
            err.reason(),
            InvalidReason::LengthBelowRequiredClassCount {
                length: 3,
                classes: 4
            }
        );
        // Without coverage the same length is fine.
        assert!(request.enforce_coverage(false).validate_within(1, 64).is_ok());
    }

    #[test]
    fn coverage_holds_at_exact_class_count() {
        let request = GenerationRequest::new(4, ClassSet::all());
        request.validate_within(1, 64).unwrap();
        let mut rng = entropy::seeded(99);
        for _ in 0..200 {
            let pass = fill(&request, &mut rng);
            for class in CharacterClass::ALL {
                assert!(pass.as_str().chars().any(|c| class.contains(c)));
            }
        }
    }

    #[test]
    fn lowercase_and_digits_seed_one() {
        let request = GenerationRequest::new(
            12,
            classes(&[CharacterClass::Lowercase, CharacterClass::Digit]),
        );
        let pass = generate(&request, &mut entropy::seeded(1)).unwrap();
        let text = pass.as_str();
        assert_eq!(text.len(), 12);
        assert!(text.chars().any(|c| c.is_ascii_lowercase()));
        assert!(text.chars().any(|c| c.is_ascii_digit()));
        assert!(
            text.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn same_seed_same_output() {
        let request = GenerationRequest::new(32, ClassSet::all());
        let a = generate(&request, &mut entropy::seeded(42)).unwrap();
        let b = generate(&request, &mut entropy::seeded(42)).unwrap();
        assert_eq!(a, b);

        let uncovered = request.enforce_coverage(false);
        let a = generate(&uncovered, &mut entropy::seeded(42)).unwrap();
        let b = generate(&uncovered, &mut entropy::seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let request = GenerationRequest::new(64, ClassSet::all());
        let a = generate(&request, &mut entropy::seeded(1)).unwrap();
        let b = generate(&request, &mut entropy::seeded(2)).unwrap();
        assert_ne!(a, b);
    }

    /// Always picks index zero, which makes the draw order observable.
    struct Zeros;

    impl RandomSource for Zeros {
        fn below(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[test]
    fn required_chars_are_drawn_per_class_then_shuffled() {
        let request = GenerationRequest::new(8, ClassSet::all());
        let pass = generate(&request, &mut Zeros).unwrap();
        // required "aA0!" + fill "aaaa", then swaps (i, 0) for i = 7..=1
        assert_eq!(pass.as_str(), "A0!aaaaa");
    }

    #[test]
    fn uncovered_draws_from_union_in_order() {
        let request = GenerationRequest::new(8, ClassSet::all()).enforce_coverage(false);
        let pass = generate(&request, &mut Zeros).unwrap();
        assert_eq!(pass.as_str(), "aaaaaaaa");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = entropy::seeded(5);
        let mut buf: Vec<u8> = (0..50).collect();
        shuffle(&mut buf, &mut rng);
        let mut sorted = buf.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u8>>());
    }

    #[test]
    fn single_class_output() {
        let request = GenerationRequest::new(20, classes(&[CharacterClass::Symbol]));
        let pass = generate(&request, &mut entropy::seeded(3)).unwrap();
        assert!(
            pass.as_str()
                .chars()
                .all(|c| CharacterClass::Symbol.contains(c))
        );
    }
}
