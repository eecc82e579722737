use std::collections::BTreeSet;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Labels must be ordered since argument sets are used as keys in relation indices and must have a canonical form.
/// Simple types like [usize], [String] and `&str` implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// Handles a single argument.
///
/// The identity of an argument is its label: two arguments with the same label are the same argument.
/// Arguments are immutable.
///
/// # Example
///
/// ```
/// # use crustabip::bipolar::Argument;
/// let a = Argument::new("a");
/// assert_eq!(&"a", a.label());
/// assert_eq!(Argument::new("a"), a);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argument<T: LabelType> {
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Builds a new argument given its label.
    pub fn new(label: T) -> Self {
        Argument { label }
    }

    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use crustabip::bipolar::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument {}", a.label());
    /// }
    /// # describe_argument(&Argument::new("a"));
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl<T> From<T> for Argument<T>
where
    T: LabelType,
{
    fn from(label: T) -> Self {
        Argument::new(label)
    }
}

/// A set of arguments, handled as a value.
///
/// Argument sets are used both as candidate extensions and as the source of set-based relations.
/// In the latter case they act as keys in relation indices; this is why this type exposes no in-place mutation:
/// the operations building new sets ([`with`](Self::with), [`without`](Self::without), [`union`](Self::union), ...) return new values.
///
/// Equality and hashing only depend on the content of the set.
/// Iteration follows the order of the argument labels.
///
/// # Example
///
/// ```
/// # use crustabip::bipolar::{Argument, ArgumentSet};
/// let s1 = ArgumentSet::from_labels(&["a", "b"]);
/// let s2 = ArgumentSet::from_labels(&["b", "a", "a"]);
/// assert_eq!(s1, s2);
/// assert_eq!(2, s1.len());
/// assert!(s1.contains(&Argument::new("a")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgumentSet<T: LabelType> {
    arguments: BTreeSet<Argument<T>>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        ArgumentSet {
            arguments: BTreeSet::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds an empty argument set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set containing a single argument.
    pub fn singleton(argument: Argument<T>) -> Self {
        std::iter::once(argument).collect()
    }

    /// Builds an argument set given the labels of the arguments.
    ///
    /// If a label appears multiple times, it is considered once.
    pub fn from_labels(labels: &[T]) -> Self {
        labels.iter().cloned().map(Argument::new).collect()
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns `true` iff the argument belongs to this set.
    pub fn contains(&self, argument: &Argument<T>) -> bool {
        self.arguments.contains(argument)
    }

    /// Returns `true` iff each argument of this set belongs to the other one.
    pub fn is_subset(&self, other: &ArgumentSet<T>) -> bool {
        self.arguments.is_subset(&other.arguments)
    }

    /// Returns `true` iff this set is a subset of the other one and differs from it.
    pub fn is_proper_subset(&self, other: &ArgumentSet<T>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` iff this set and the other one share at least one argument.
    pub fn intersects(&self, other: &ArgumentSet<T>) -> bool {
        !self.arguments.is_disjoint(&other.arguments)
    }

    /// Returns a new set made of the arguments of both sets.
    pub fn union(&self, other: &ArgumentSet<T>) -> Self {
        self.arguments.union(&other.arguments).cloned().collect()
    }

    /// Returns a new set made of the arguments of this set that do not belong to the other one.
    pub fn difference(&self, other: &ArgumentSet<T>) -> Self {
        self.arguments.difference(&other.arguments).cloned().collect()
    }

    /// Returns a new set made of the arguments that belong to both sets.
    pub fn intersection(&self, other: &ArgumentSet<T>) -> Self {
        self.arguments
            .intersection(&other.arguments)
            .cloned()
            .collect()
    }

    /// Returns a copy of this set to which the argument was added.
    pub fn with(&self, argument: Argument<T>) -> Self {
        let mut arguments = self.arguments.clone();
        arguments.insert(argument);
        ArgumentSet { arguments }
    }

    /// Returns a copy of this set from which the argument was removed.
    pub fn without(&self, argument: &Argument<T>) -> Self {
        let mut arguments = self.arguments.clone();
        arguments.remove(argument);
        ArgumentSet { arguments }
    }

    /// Returns an iterator to the arguments, in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }

    /// Returns the arguments of this set as a vector, in label order.
    pub fn to_vec(&self) -> Vec<Argument<T>> {
        self.arguments.iter().cloned().collect()
    }
}

impl<T> FromIterator<Argument<T>> for ArgumentSet<T>
where
    T: LabelType,
{
    fn from_iter<I: IntoIterator<Item = Argument<T>>>(iter: I) -> Self {
        ArgumentSet {
            arguments: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArgumentSet<T>
where
    T: LabelType,
{
    type Item = &'a Argument<T>;
    type IntoIter = std::collections::btree_set::Iter<'a, Argument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

impl<T> IntoIterator for ArgumentSet<T>
where
    T: LabelType,
{
    type Item = Argument<T>;
    type IntoIter = std::collections::btree_set::IntoIter<Argument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.into_iter()
    }
}

impl<T> Display for ArgumentSet<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, a) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", a)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels() {
        let args = ArgumentSet::from_labels(&["a", "b", "c"]);
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        assert_eq!(
            vec!["a", "b", "c"],
            args.iter().map(|a| *a.label()).collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_from_empty_labels() {
        let args = ArgumentSet::from_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_repeated_labels() {
        let args = ArgumentSet::from_labels(&["a", "b", "a"]);
        assert_eq!(2, args.len());
    }

    #[test]
    fn test_value_semantics() {
        let args = ArgumentSet::from_labels(&["a", "b"]);
        let with_c = args.with(Argument::new("c"));
        let without_a = args.without(&Argument::new("a"));
        assert_eq!(2, args.len());
        assert_eq!(ArgumentSet::from_labels(&["a", "b", "c"]), with_c);
        assert_eq!(ArgumentSet::from_labels(&["b"]), without_a);
    }

    #[test]
    fn test_set_operations() {
        let s1 = ArgumentSet::from_labels(&["a", "b"]);
        let s2 = ArgumentSet::from_labels(&["b", "c"]);
        assert_eq!(ArgumentSet::from_labels(&["a", "b", "c"]), s1.union(&s2));
        assert_eq!(ArgumentSet::from_labels(&["a"]), s1.difference(&s2));
        assert_eq!(ArgumentSet::from_labels(&["b"]), s1.intersection(&s2));
        assert!(s1.intersects(&s2));
        assert!(!s1.intersects(&ArgumentSet::from_labels(&["c"])));
    }

    #[test]
    fn test_subsets() {
        let s1 = ArgumentSet::from_labels(&["a"]);
        let s2 = ArgumentSet::from_labels(&["a", "b"]);
        assert!(s1.is_subset(&s2));
        assert!(s1.is_proper_subset(&s2));
        assert!(s2.is_subset(&s2));
        assert!(!s2.is_proper_subset(&s2));
        assert!(ArgumentSet::empty().is_proper_subset(&s1));
    }

    #[test]
    fn test_display() {
        assert_eq!("{a,b}", ArgumentSet::from_labels(&["b", "a"]).to_string());
        assert_eq!("{}", ArgumentSet::<String>::empty().to_string());
        assert_eq!("a", Argument::new("a").to_string());
    }
}
