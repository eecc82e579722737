use super::{Argument, ArgumentSet, BipolarError, LabelType};
use anyhow::Result;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A source of a relation, given without knowing the kind of framework it will be added to.
///
/// Binary frameworks only accept [`BipolarEntity::Argument`] sources,
/// while set-based frameworks accept both (a single argument being promoted to a singleton set).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BipolarEntity<T>
where
    T: LabelType,
{
    /// A single argument.
    Argument(Argument<T>),
    /// A set of arguments.
    Set(ArgumentSet<T>),
}

impl<T> BipolarEntity<T>
where
    T: LabelType,
{
    /// Builds an entity from a list of labels.
    ///
    /// A single label gives an [`BipolarEntity::Argument`]; any other number of labels gives a [`BipolarEntity::Set`].
    pub fn from_labels(labels: &[T]) -> Self {
        match labels {
            [label] => BipolarEntity::Argument(Argument::new(label.clone())),
            _ => BipolarEntity::Set(ArgumentSet::from_labels(labels)),
        }
    }
}

impl<T> From<Argument<T>> for BipolarEntity<T>
where
    T: LabelType,
{
    fn from(argument: Argument<T>) -> Self {
        BipolarEntity::Argument(argument)
    }
}

impl<T> From<ArgumentSet<T>> for BipolarEntity<T>
where
    T: LabelType,
{
    fn from(set: ArgumentSet<T>) -> Self {
        BipolarEntity::Set(set)
    }
}

impl<T> Display for BipolarEntity<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BipolarEntity::Argument(a) => write!(f, "{}", a),
            BipolarEntity::Set(s) => write!(f, "{}", s),
        }
    }
}

/// The trait for the sources of supports and attacks.
///
/// Frameworks select the kind of their relation sources through this trait:
/// binary relations use [`Argument`] sources, while set-based relations use [`ArgumentSet`] sources.
/// The target of a relation is always a single [`Argument`].
pub trait Endpoint<T>: Clone + Debug + Display + Eq + Hash + Ord
where
    T: LabelType,
{
    /// Converts an entity into an endpoint, failing with [`BipolarError::InvalidRelationType`] if its arity does not fit.
    fn try_from_entity(entity: BipolarEntity<T>) -> Result<Self>;

    /// Builds an endpoint made of a single argument.
    fn from_argument(argument: Argument<T>) -> Self;

    /// Returns `true` iff the argument is part of this endpoint.
    fn contains(&self, argument: &Argument<T>) -> bool;

    /// Returns `true` iff each argument of this endpoint belongs to the set.
    fn is_included_in(&self, set: &ArgumentSet<T>) -> bool;

    /// Returns `true` iff this endpoint involves no argument.
    fn is_empty(&self) -> bool;

    /// Returns the arguments involved in this endpoint.
    fn to_argument_set(&self) -> ArgumentSet<T>;
}

impl<T> Endpoint<T> for Argument<T>
where
    T: LabelType,
{
    fn try_from_entity(entity: BipolarEntity<T>) -> Result<Self> {
        match entity {
            BipolarEntity::Argument(a) => Ok(a),
            BipolarEntity::Set(s) => Err(BipolarError::InvalidRelationType(format!(
                "expected a single argument as source, got the set {}",
                s
            ))
            .into()),
        }
    }

    fn from_argument(argument: Argument<T>) -> Self {
        argument
    }

    fn contains(&self, argument: &Argument<T>) -> bool {
        self == argument
    }

    fn is_included_in(&self, set: &ArgumentSet<T>) -> bool {
        set.contains(self)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn to_argument_set(&self) -> ArgumentSet<T> {
        ArgumentSet::singleton(self.clone())
    }
}

impl<T> Endpoint<T> for ArgumentSet<T>
where
    T: LabelType,
{
    fn try_from_entity(entity: BipolarEntity<T>) -> Result<Self> {
        match entity {
            BipolarEntity::Argument(a) => Ok(ArgumentSet::singleton(a)),
            BipolarEntity::Set(s) => Ok(s),
        }
    }

    fn from_argument(argument: Argument<T>) -> Self {
        ArgumentSet::singleton(argument)
    }

    fn contains(&self, argument: &Argument<T>) -> bool {
        ArgumentSet::contains(self, argument)
    }

    fn is_included_in(&self, set: &ArgumentSet<T>) -> bool {
        self.is_subset(set)
    }

    fn is_empty(&self) -> bool {
        ArgumentSet::is_empty(self)
    }

    fn to_argument_set(&self) -> ArgumentSet<T> {
        self.clone()
    }
}

/// A support, represented as a couple made of a supporter and a supported argument.
///
/// The kind of the supporter depends on the framework (see [`Endpoint`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Support<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    supporter: E,
    supported: Argument<T>,
}

impl<T, E> Support<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    /// Builds a new support.
    pub fn new(supporter: E, supported: Argument<T>) -> Self {
        Support {
            supporter,
            supported,
        }
    }

    /// Returns the supporter.
    ///
    /// Example
    ///
    /// ```
    /// # use crustabip::{Endpoint, LabelType, Support};
    /// fn describe_support<T: LabelType, E: Endpoint<T>>(support: &Support<T, E>) {
    ///     println!("{} supports {}", support.supporter(), support.supported());
    /// }
    /// ```
    pub fn supporter(&self) -> &E {
        &self.supporter
    }

    /// Returns the supported argument.
    pub fn supported(&self) -> &Argument<T> {
        &self.supported
    }
}

impl<T, E> Display for Support<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.supporter, self.supported)
    }
}

/// An attack, represented as a couple made of an attacker and an attacked argument.
///
/// The kind of the attacker depends on the framework (see [`Endpoint`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attack<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    attacker: E,
    attacked: Argument<T>,
}

impl<T, E> Attack<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    /// Builds a new attack.
    pub fn new(attacker: E, attacked: Argument<T>) -> Self {
        Attack { attacker, attacked }
    }

    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use crustabip::{Attack, Endpoint, LabelType};
    /// fn describe_attack<T: LabelType, E: Endpoint<T>>(attack: &Attack<T, E>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &E {
        &self.attacker
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &Argument<T> {
        &self.attacked
    }
}

impl<T, E> Display for Attack<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.attacker, self.attacked)
    }
}

/// A support between two single arguments.
pub type BinarySupport<T> = Support<T, Argument<T>>;

/// A support from a set of arguments to a single argument.
pub type SetSupport<T> = Support<T, ArgumentSet<T>>;

/// An attack between two single arguments.
pub type BinaryAttack<T> = Attack<T, Argument<T>>;

/// An attack from a set of arguments to a single argument.
pub type SetAttack<T> = Attack<T, ArgumentSet<T>>;

/// A relation whose source is given as a [`BipolarEntity`].
///
/// Such relations can be given to any kind of framework; the framework checks the source fits its endpoint arity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation<T>
where
    T: LabelType,
{
    /// A support relation.
    Support(BipolarEntity<T>, Argument<T>),
    /// An attack relation.
    Attack(BipolarEntity<T>, Argument<T>),
}

impl<T, E> From<Support<T, E>> for Relation<T>
where
    T: LabelType,
    E: Endpoint<T> + Into<BipolarEntity<T>>,
{
    fn from(support: Support<T, E>) -> Self {
        Relation::Support(support.supporter.into(), support.supported)
    }
}

impl<T, E> From<Attack<T, E>> for Relation<T>
where
    T: LabelType,
    E: Endpoint<T> + Into<BipolarEntity<T>>,
{
    fn from(attack: Attack<T, E>) -> Self {
        Relation::Attack(attack.attacker.into(), attack.attacked)
    }
}
