use crate::flag::Flag;

/// The ordered flags of one parse, in order of appearance on the Cli.
///
/// Repeated keys are all kept.
/// Single-key lookups ([`Flags::get`] and the typed helpers) are last-wins; use [`Flags::get_all`] to see every occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    flags: Vec<Flag>,
    remaining: Vec<String>,
}

impl Flags {
    pub(crate) fn push(&mut self, flag: Flag) {
        self.flags.push(flag);
    }

    pub(crate) fn with_remaining(mut self, remaining: Vec<String>) -> Self {
        self.remaining = remaining;
        self
    }

    /// The number of flags (including repeats).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags were parsed.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over the flags in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    /// The flags as a slice.
    pub fn as_slice(&self) -> &[Flag] {
        &self.flags
    }

    /// The last flag with `key`.
    pub fn get(&self, key: &str) -> Option<&Flag> {
        self.flags.iter().rev().find(|flag| flag.key() == key)
    }

    /// Every flag with `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Flag> + 'a {
        self.flags.iter().filter(move |flag| flag.key() == key)
    }

    /// Whether any flag has `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The last value for `key`, if it is an integer.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|flag| flag.value().as_integer())
    }

    /// The last value for `key`, if it is a boolean.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|flag| flag.value().as_boolean())
    }

    /// The last value for `key`, if it is a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|flag| flag.value().as_str())
    }

    /// The tokens following the `--` terminator (only populated when the terminator is enabled).
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }
}

impl IntoIterator for Flags {
    type Item = Flag;
    type IntoIter = std::vec::IntoIter<Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.into_iter()
    }
}

impl<'a> IntoIterator for &'a Flags {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
            remaining: Vec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Flags {
        Flags::from_iter([
            Flag::integer("w", "1").unwrap(),
            Flag::boolean("all", "true").unwrap(),
            Flag::string("w", "abc").unwrap(),
        ])
    }

    #[test]
    fn empty() {
        let flags = Flags::default();
        assert!(flags.is_empty());
        assert_eq!(flags.len(), 0);
        assert_eq!(flags.get("w"), None);
        assert!(flags.remaining().is_empty());
    }

    #[test]
    fn order() {
        let flags = sample();
        let keys: Vec<&str> = flags.iter().map(|flag| flag.key()).collect();
        assert_eq!(keys, vec!["w", "all", "w"]);
        assert_eq!(flags.len(), 3);
        assert_eq!(flags.as_slice()[1], Flag::boolean("all", "true").unwrap());
    }

    #[test]
    fn get_last_wins() {
        let flags = sample();
        assert_eq!(flags.get("w"), Some(&Flag::string("w", "abc").unwrap()));
        assert_eq!(flags.string("w"), Some("abc"));
        assert_eq!(flags.integer("w"), None);
        assert!(flags.contains("all"));
        assert!(!flags.contains("missing"));
    }

    #[test]
    fn get_all() {
        let flags = sample();
        let values: Vec<String> = flags.get_all("w").map(|flag| flag.value().to_string()).collect();
        assert_eq!(values, vec!["1", "abc"]);
        assert_eq!(flags.get_all("missing").count(), 0);
    }

    #[test]
    fn typed() {
        let flags = sample();
        assert_eq!(flags.boolean("all"), Some(true));
        assert_eq!(flags.integer("all"), None);
        assert_eq!(flags.string("all"), None);
    }

    #[test]
    fn push() {
        let mut flags = Flags::default();
        flags.push(Flag::integer("n", "5").unwrap());
        assert_eq!(flags.integer("n"), Some(5));
    }

    #[test]
    fn into_iter() {
        let flags = sample().with_remaining(vec!["x".to_string()]);
        assert_eq!(flags.remaining(), &["x".to_string()]);
        let owned: Vec<Flag> = flags.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }
}
