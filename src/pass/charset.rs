//! Character classes and alphabet building for password generation.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet for this class. All alphabets are ASCII and disjoint.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase letters (a-z)",
            CharacterClass::Uppercase => "Uppercase letters (A-Z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$%^&*)",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        CharacterClass::ALL.into_iter().find(|class| class.contains(c))
    }

    const fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

/// Set of enabled character classes. Iterates in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub const fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Build the union alphabet of every enabled class.
pub fn build(classes: &ClassSet) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the union alphabet (for entropy calculation).
pub fn size(classes: &ClassSet) -> usize {
    classes.iter().map(|class| class.alphabet().len()).sum()
}

/// Estimated password entropy in bits for uniform draws over the union alphabet.
pub fn entropy_bits(length: usize, classes: &ClassSet) -> f64 {
    let charset_size = size(classes);
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for c in build(&ClassSet::all()) {
            let owners = CharacterClass::ALL
                .iter()
                .filter(|class| class.contains(c as char))
                .count();
            assert_eq!(owners, 1, "{} belongs to {owners} classes", c as char);
        }
    }

    #[test]
    fn class_set_iterates_in_canonical_order() {
        let set: ClassSet = [CharacterClass::Symbol, CharacterClass::Lowercase]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Lowercase, CharacterClass::Symbol]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn class_set_insert_remove() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(CharacterClass::Digit);
        set.insert(CharacterClass::Digit);
        assert_eq!(set.len(), 1);
        set.set(CharacterClass::Digit, false);
        assert!(set.is_empty());
    }

    #[test]
    fn union_alphabet_concatenates_enabled_classes() {
        let set: ClassSet = [CharacterClass::Lowercase, CharacterClass::Digit]
            .into_iter()
            .collect();
        let union = build(&set);
        assert_eq!(union.len(), 36);
        assert_eq!(size(&set), 36);
        assert!(union.starts_with(b"abc"));
        assert!(union.ends_with(b"789"));
    }

    #[test]
    fn class_lookup() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('?'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn entropy_of_empty_set_is_zero() {
        assert_eq!(entropy_bits(12, &ClassSet::empty()), 0.0);
        let digits: ClassSet = [CharacterClass::Digit].into_iter().collect();
        let bits = entropy_bits(10, &digits);
        assert!((bits - 10.0 * 10f64.log2()).abs() < 1e-9);
    }
}
