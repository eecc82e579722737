use super::relation_index::RelationIndex;
use super::{
    Argument, ArgumentSet, Attack, BipolarEntity, BipolarError, Endpoint, LabelType, Relation,
    Support,
};
use crate::utils::{CancellationToken, SearchGuard, SearchLimits};
use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeSet;

/// The trait for the semantics of bipolar frameworks.
///
/// A semantics selects the kind of the sources of supports and attacks (see [`Endpoint`]),
/// the constraints checked when relations are added, and the rules used to decide closure and acceptability.
/// A [`BipolarFramework`] holds a value of its semantics, so semantics needing some data (like a sentinel argument) may store it.
pub trait BipolarSemantics<T>: Clone
where
    T: LabelType,
{
    /// The kind of the supporters.
    type Supporter: Endpoint<T>;

    /// The kind of the attackers.
    type Attacker: Endpoint<T>;

    /// Returns a short name for this semantics, used in messages.
    fn name(&self) -> &'static str;

    /// Returns the argument standing for the environment, if this semantics uses one.
    ///
    /// Such an argument is always part of the frameworks using this semantics, and cannot be removed.
    fn sentinel(&self) -> Option<&Argument<T>> {
        None
    }

    /// Checks a support may be added to a framework.
    fn check_support(&self, _supporter: &Self::Supporter, _supported: &Argument<T>) -> Result<()> {
        Ok(())
    }

    /// Checks an attack may be added to a framework.
    fn check_attack(&self, _attacker: &Self::Attacker, _attacked: &Argument<T>) -> Result<()> {
        Ok(())
    }

    /// Returns `true` iff the set of arguments is closed under the support relation.
    fn is_closed(&self, framework: &BipolarFramework<T, Self>, ext: &ArgumentSet<T>) -> bool;

    /// Decides whether an argument is acceptable with respect to a set of arguments.
    ///
    /// The guard must be checked regularly by long computations.
    fn is_acceptable(
        &self,
        framework: &BipolarFramework<T, Self>,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool>;
}

/// A bipolar argumentation framework, made of arguments, supports and attacks.
///
/// The behavior of the framework depends on its semantics `S` (see [`BipolarSemantics`]).
/// Type aliases are given for the available semantics:
/// [`DeductiveFramework`](crate::DeductiveFramework), [`EvidentialSystem`](crate::EvidentialSystem),
/// [`EvidentialFramework`](crate::EvidentialFramework) and [`NecessityFramework`](crate::NecessityFramework).
///
/// Arguments are identified by their labels.
/// Adding a relation implicitly adds the arguments it involves.
/// Queries returning collections return independent copies: modifying them has no effect on the framework.
///
/// Frameworks are not meant to be modified while being read from another thread;
/// searches may however be interrupted from another thread through the [`CancellationToken`] returned by [`cancellation_token`](Self::cancellation_token).
///
/// # Example
///
/// ```
/// # use crustabip::{Argument, ArgumentSet, DeductiveFramework};
/// let mut framework = DeductiveFramework::new();
/// framework.add_support(Argument::new("a"), Argument::new("b")).unwrap();
/// framework.add_attack(Argument::new("c"), Argument::new("a")).unwrap();
/// assert_eq!(3, framework.n_arguments());
/// assert!(framework.is_closed(&ArgumentSet::from_labels(&["a", "b"])));
/// assert!(!framework.is_closed(&ArgumentSet::from_labels(&["a"])));
/// ```
#[derive(Clone, Debug)]
pub struct BipolarFramework<T, S>
where
    T: LabelType,
    S: BipolarSemantics<T>,
{
    arguments: BTreeSet<Argument<T>>,
    pub(crate) supports: RelationIndex<T, S::Supporter>,
    pub(crate) attacks: RelationIndex<T, S::Attacker>,
    semantics: S,
    limits: SearchLimits,
    cancellation: CancellationToken,
}

/// A relation whose source fits the endpoints of the semantics and which passed its checks.
enum CheckedRelation<T, S>
where
    T: LabelType,
    S: BipolarSemantics<T>,
{
    Support(S::Supporter, Argument<T>),
    Attack(S::Attacker, Argument<T>),
}

impl<T, S> BipolarFramework<T, S>
where
    T: LabelType,
    S: BipolarSemantics<T>,
{
    /// Builds an empty framework using the given semantics.
    ///
    /// If the semantics uses a sentinel argument, it is added to the framework.
    pub fn new_with_semantics(semantics: S) -> Self {
        let mut arguments = BTreeSet::new();
        if let Some(s) = semantics.sentinel() {
            arguments.insert(s.clone());
        }
        BipolarFramework {
            arguments,
            supports: RelationIndex::new(),
            attacks: RelationIndex::new(),
            semantics,
            limits: SearchLimits::default(),
            cancellation: CancellationToken::default(),
        }
    }

    /// Returns the semantics of this framework.
    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    /// Returns the limits applied to the searches made by this framework.
    pub fn search_limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Sets the limits applied to the searches made by this framework.
    pub fn set_search_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Returns a token that may be used to interrupt the searches made by this framework.
    ///
    /// The token is shared between all the calls to this function.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub(crate) fn search_guard(&self) -> SearchGuard<'_> {
        SearchGuard::new(&self.limits, &self.cancellation)
    }

    /// Adds an argument to this framework.
    ///
    /// Returns `true` iff the argument was not already present.
    pub fn add_argument(&mut self, argument: Argument<T>) -> bool {
        self.arguments.insert(argument)
    }

    /// Adds an argument given its label.
    ///
    /// Returns `true` iff the argument was not already present.
    pub fn new_argument(&mut self, label: T) -> bool {
        self.add_argument(Argument::new(label))
    }

    /// Removes an argument from this framework, along with all the relations it is involved in.
    ///
    /// Returns `false` if the argument was not in the framework.
    /// Removing the sentinel argument of a semantics is an error ([`BipolarError::ForbiddenSentinelUse`]).
    pub fn remove_argument(&mut self, argument: &Argument<T>) -> Result<bool> {
        if self.semantics.sentinel() == Some(argument) {
            return Err(BipolarError::ForbiddenSentinelUse(format!(
                "the sentinel argument {} cannot be removed",
                argument
            ))
            .into());
        }
        if !self.arguments.contains(argument) {
            return Ok(false);
        }
        self.supports.remove_argument(argument);
        self.attacks.remove_argument(argument);
        self.arguments.remove(argument);
        debug!("removed argument {} and its relations", argument);
        Ok(true)
    }

    /// Returns `true` iff the argument belongs to this framework.
    pub fn contains_argument(&self, argument: &Argument<T>) -> bool {
        self.arguments.contains(argument)
    }

    /// Returns the number of arguments of this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns an iterator to the arguments of this framework, in label order.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }

    /// Returns the set of the arguments of this framework.
    pub fn arguments(&self) -> ArgumentSet<T> {
        self.arguments.iter().cloned().collect()
    }

    fn register_endpoint<E>(&mut self, source: &E, target: &Argument<T>)
    where
        E: Endpoint<T>,
    {
        for a in source.to_argument_set() {
            self.arguments.insert(a);
        }
        self.arguments.insert(target.clone());
    }

    /// Adds a support to this framework.
    ///
    /// The arguments involved in the support are added to the framework if needed.
    /// Returns `true` iff the support was not already present.
    ///
    /// The support must satisfy the constraints of the semantics;
    /// if it does not, an error is returned and the framework is left unchanged.
    pub fn add_support(&mut self, supporter: S::Supporter, supported: Argument<T>) -> Result<bool> {
        self.semantics
            .check_support(&supporter, &supported)
            .with_context(|| format!("while adding support ({},{})", supporter, supported))?;
        self.register_endpoint(&supporter, &supported);
        Ok(self.supports.insert(supporter, supported))
    }

    /// Adds an attack to this framework.
    ///
    /// The arguments involved in the attack are added to the framework if needed.
    /// Returns `true` iff the attack was not already present.
    ///
    /// The attack must satisfy the constraints of the semantics;
    /// if it does not, an error is returned and the framework is left unchanged.
    pub fn add_attack(&mut self, attacker: S::Attacker, attacked: Argument<T>) -> Result<bool> {
        self.semantics
            .check_attack(&attacker, &attacked)
            .with_context(|| format!("while adding attack ({},{})", attacker, attacked))?;
        self.register_endpoint(&attacker, &attacked);
        Ok(self.attacks.insert(attacker, attacked))
    }

    /// Adds a support given the labels of the supporter(s) and of the supported argument.
    ///
    /// If a single label is given for the supporter, it is considered as a single argument;
    /// in set-based frameworks, it is then promoted to a singleton.
    /// Giving several supporter labels to a framework with binary supports is an error ([`BipolarError::InvalidRelationType`]).
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, NecessityFramework};
    /// let mut framework = NecessityFramework::new();
    /// framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
    /// framework.add_support_by_labels(&["d"], &"c").unwrap();
    /// assert_eq!(2, framework.direct_supporters(&Argument::new("c")).len());
    /// ```
    pub fn add_support_by_labels(&mut self, supporter: &[T], supported: &T) -> Result<bool> {
        self.add_relation(Relation::Support(
            BipolarEntity::from_labels(supporter),
            Argument::new(supported.clone()),
        ))
    }

    /// Adds an attack given the labels of the attacker(s) and of the attacked argument.
    ///
    /// Labels are handled the same way as in [`add_support_by_labels`](Self::add_support_by_labels).
    pub fn add_attack_by_labels(&mut self, attacker: &[T], attacked: &T) -> Result<bool> {
        self.add_relation(Relation::Attack(
            BipolarEntity::from_labels(attacker),
            Argument::new(attacked.clone()),
        ))
    }

    /// Adds a relation whose source is given as a [`BipolarEntity`].
    ///
    /// The source must fit the kind of endpoint of the semantics (see [`Endpoint::try_from_entity`]).
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, BipolarEntity, BipolarError, DeductiveFramework, Relation};
    /// let mut framework = DeductiveFramework::new();
    /// let relation = Relation::Attack(
    ///     BipolarEntity::Set(ArgumentSet::from_labels(&["a", "b"])),
    ///     Argument::new("c"),
    /// );
    /// let err = framework.add_relation(relation).unwrap_err();
    /// assert!(matches!(
    ///     err.downcast_ref::<BipolarError>(),
    ///     Some(BipolarError::InvalidRelationType(_))
    /// ));
    /// assert_eq!(0, framework.n_arguments());
    /// ```
    pub fn add_relation(&mut self, relation: Relation<T>) -> Result<bool> {
        let checked = self.check_relation(relation)?;
        Ok(self.insert_checked(checked))
    }

    fn check_relation(&self, relation: Relation<T>) -> Result<CheckedRelation<T, S>> {
        match relation {
            Relation::Support(supporter, supported) => {
                let context = || format!("while adding support ({},{})", supporter, supported);
                let endpoint =
                    S::Supporter::try_from_entity(supporter.clone()).with_context(context)?;
                self.semantics
                    .check_support(&endpoint, &supported)
                    .with_context(context)?;
                Ok(CheckedRelation::Support(endpoint, supported))
            }
            Relation::Attack(attacker, attacked) => {
                let context = || format!("while adding attack ({},{})", attacker, attacked);
                let endpoint =
                    S::Attacker::try_from_entity(attacker.clone()).with_context(context)?;
                self.semantics
                    .check_attack(&endpoint, &attacked)
                    .with_context(context)?;
                Ok(CheckedRelation::Attack(endpoint, attacked))
            }
        }
    }

    fn insert_checked(&mut self, checked: CheckedRelation<T, S>) -> bool {
        match checked {
            CheckedRelation::Support(supporter, supported) => {
                self.register_endpoint(&supporter, &supported);
                self.supports.insert(supporter, supported)
            }
            CheckedRelation::Attack(attacker, attacked) => {
                self.register_endpoint(&attacker, &attacked);
                self.attacks.insert(attacker, attacked)
            }
        }
    }

    /// Adds a sequence of relations.
    ///
    /// Returns `true` iff at least one relation was not already present.
    /// All the relations are checked before any of them is added:
    /// if one of them is rejected, an error is returned and the framework is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, BipolarEntity, DeductiveFramework, Relation};
    /// let mut framework = DeductiveFramework::new();
    /// let relations = vec![
    ///     Relation::Support(BipolarEntity::Argument(Argument::new("a")), Argument::new("b")),
    ///     Relation::Attack(BipolarEntity::Set(ArgumentSet::from_labels(&["a", "c"])), Argument::new("b")),
    /// ];
    /// assert!(framework.add_relations(relations).is_err());
    /// assert_eq!(0, framework.n_arguments());
    /// assert_eq!(0, framework.n_supports());
    /// ```
    pub fn add_relations<I>(&mut self, relations: I) -> Result<bool>
    where
        I: IntoIterator<Item = Relation<T>>,
    {
        let checked = relations
            .into_iter()
            .map(|r| self.check_relation(r))
            .collect::<Result<Vec<CheckedRelation<T, S>>>>()?;
        let mut changed = false;
        for c in checked {
            changed |= self.insert_checked(c);
        }
        Ok(changed)
    }

    /// Adds all the arguments and relations of another framework with the same semantics.
    ///
    /// Returns `true` iff this framework was modified.
    ///
    /// Both frameworks must use the same sentinel argument (if any);
    /// if they do not, a [`BipolarError::ForbiddenSentinelUse`] error is returned.
    /// As for [`add_relations`](Self::add_relations), all the relations are checked before the merge,
    /// so the framework is left unchanged on error.
    pub fn add_framework(&mut self, other: &Self) -> Result<bool> {
        let own_sentinel = self.semantics.sentinel();
        let other_sentinel = other.semantics.sentinel();
        if own_sentinel != other_sentinel {
            let describe = |s: Option<&Argument<T>>| match s {
                Some(a) => format!("the sentinel {}", a),
                None => "no sentinel".to_string(),
            };
            return Err(BipolarError::ForbiddenSentinelUse(format!(
                "cannot merge a framework using {} into a framework using {}",
                describe(other_sentinel),
                describe(own_sentinel)
            ))
            .into());
        }
        let mut checked = Vec::with_capacity(other.n_supports() + other.n_attacks());
        for (supporter, supported) in other.supports.iter() {
            self.semantics
                .check_support(supporter, supported)
                .with_context(|| format!("while merging support ({},{})", supporter, supported))?;
            checked.push(CheckedRelation::Support(supporter.clone(), supported.clone()));
        }
        for (attacker, attacked) in other.attacks.iter() {
            self.semantics
                .check_attack(attacker, attacked)
                .with_context(|| format!("while merging attack ({},{})", attacker, attacked))?;
            checked.push(CheckedRelation::Attack(attacker.clone(), attacked.clone()));
        }
        let mut changed = false;
        for a in other.iter_arguments() {
            changed |= self.add_argument(a.clone());
        }
        for c in checked {
            changed |= self.insert_checked(c);
        }
        Ok(changed)
    }

    /// Removes a support, returning `true` iff it was present.
    pub fn remove_support(&mut self, supporter: &S::Supporter, supported: &Argument<T>) -> bool {
        self.supports.remove(supporter, supported)
    }

    /// Removes an attack, returning `true` iff it was present.
    pub fn remove_attack(&mut self, attacker: &S::Attacker, attacked: &Argument<T>) -> bool {
        self.attacks.remove(attacker, attacked)
    }

    /// Returns `true` iff the support belongs to this framework.
    pub fn contains_support(&self, supporter: &S::Supporter, supported: &Argument<T>) -> bool {
        self.supports.contains(supporter, supported)
    }

    /// Returns `true` iff the attack belongs to this framework.
    pub fn contains_attack(&self, attacker: &S::Attacker, attacked: &Argument<T>) -> bool {
        self.attacks.contains(attacker, attacked)
    }

    /// Returns the number of supports of this framework.
    pub fn n_supports(&self) -> usize {
        self.supports.len()
    }

    /// Returns the number of attacks of this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Returns the supports of this framework.
    pub fn supports(&self) -> BTreeSet<Support<T, S::Supporter>> {
        self.supports
            .iter()
            .map(|(s, t)| Support::new(s.clone(), t.clone()))
            .collect()
    }

    /// Returns the attacks of this framework.
    pub fn attacks(&self) -> BTreeSet<Attack<T, S::Attacker>> {
        self.attacks
            .iter()
            .map(|(s, t)| Attack::new(s.clone(), t.clone()))
            .collect()
    }

    /// Returns the direct supporters of an argument.
    pub fn direct_supporters(&self, argument: &Argument<T>) -> BTreeSet<S::Supporter> {
        self.supports.sources_of(argument)
    }

    /// Returns the arguments directly supported by a supporter.
    pub fn direct_supported(&self, supporter: &S::Supporter) -> ArgumentSet<T> {
        self.supports.targets_of(supporter)
    }

    /// Returns the direct attackers of an argument.
    pub fn direct_attackers(&self, argument: &Argument<T>) -> BTreeSet<S::Attacker> {
        self.attacks.sources_of(argument)
    }

    /// Returns the arguments directly attacked by an attacker.
    pub fn direct_attacked(&self, attacker: &S::Attacker) -> ArgumentSet<T> {
        self.attacks.targets_of(attacker)
    }

    /// Returns `true` iff the argument is directly supported by the supporter.
    pub fn is_direct_supported_by(&self, argument: &Argument<T>, supporter: &S::Supporter) -> bool {
        self.supports.contains(supporter, argument)
    }

    /// Returns `true` iff the argument is directly attacked by the attacker.
    pub fn is_attacked_by(&self, argument: &Argument<T>, attacker: &S::Attacker) -> bool {
        self.attacks.contains(attacker, argument)
    }

    /// Returns `true` iff the argument is directly attacked by an attacker made of arguments of the set.
    pub fn is_attacked_by_set(&self, argument: &Argument<T>, set: &ArgumentSet<T>) -> bool {
        self.attacks
            .iter_sources_of(argument)
            .any(|attacker| attacker.is_included_in(set))
    }

    /// Returns `true` iff the argument is directly supported by a supporter made of arguments of the set.
    pub fn is_supported(&self, argument: &Argument<T>, set: &ArgumentSet<T>) -> bool {
        self.supports
            .iter_sources_of(argument)
            .any(|supporter| supporter.is_included_in(set))
    }

    /// Returns the arguments supported by the set, directly or not.
    ///
    /// This is the least fixed point of the function adding the arguments directly supported by a supporter
    /// included in the union of the set and the arguments already computed.
    /// An argument of the set is in the result only if it is supported.
    pub fn supported_by_set(&self, set: &ArgumentSet<T>) -> ArgumentSet<T> {
        let mut supported = BTreeSet::new();
        let mut current = set.clone();
        loop {
            let new_arguments = self
                .supports
                .iter_by_source()
                .filter(|(supporter, _)| supporter.is_included_in(&current))
                .flat_map(|(_, targets)| targets.iter())
                .filter(|t| !supported.contains(*t))
                .cloned()
                .collect::<BTreeSet<Argument<T>>>();
            if new_arguments.is_empty() {
                break;
            }
            current = current.union(&new_arguments.iter().cloned().collect());
            supported.extend(new_arguments);
        }
        supported.into_iter().collect()
    }

    /// Returns `true` iff each argument directly supported by a supporter included in the set is also in the set.
    pub(crate) fn is_closed_under_direct_support(&self, ext: &ArgumentSet<T>) -> bool {
        self.supports
            .iter_by_source()
            .filter(|(supporter, _)| supporter.is_included_in(ext))
            .all(|(_, targets)| targets.iter().all(|t| ext.contains(t)))
    }

    /// Returns `true` iff the set is closed under the support relation, as defined by the semantics.
    pub fn is_closed(&self, ext: &ArgumentSet<T>) -> bool {
        self.semantics.is_closed(self, ext)
    }

    /// Decides whether an argument is acceptable with respect to a set of arguments, as defined by the semantics.
    ///
    /// Depending on the semantics, this may involve exhaustive searches bounded by the [`SearchLimits`] of the framework.
    pub fn is_acceptable(&self, argument: &Argument<T>, ext: &ArgumentSet<T>) -> Result<bool> {
        let guard = self.search_guard();
        self.semantics.is_acceptable(self, argument, ext, &guard)
    }

    /// Computes the characteristic function of the framework for a set of arguments,
    /// that is the set of the arguments of the framework acceptable with respect to this set.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
    /// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
    /// framework.add_prima_facie(Argument::new("a")).unwrap();
    /// framework.add_attack_by_labels(&["a"], &"b").unwrap();
    /// let acceptable = framework.fes(&ArgumentSet::from_labels(&["a"])).unwrap();
    /// assert!(acceptable.contains(&Argument::new("a")));
    /// assert!(!acceptable.contains(&Argument::new("b")));
    /// ```
    pub fn fes(&self, ext: &ArgumentSet<T>) -> Result<ArgumentSet<T>> {
        let guard = self.search_guard();
        debug!(
            "computing the {} characteristic function for a set of {} arguments",
            self.semantics.name(),
            ext.len()
        );
        let mut acceptable = BTreeSet::new();
        for a in self.arguments.iter() {
            guard.check()?;
            if self.semantics.is_acceptable(self, a, ext, &guard)? {
                acceptable.insert(a.clone());
            }
        }
        Ok(acceptable.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeductiveFramework, EvidentialFramework, NecessityFramework};

    #[test]
    fn test_relations_register_arguments() {
        let mut framework = NecessityFramework::new();
        assert!(framework
            .add_support_by_labels(&["a", "b"], &"c")
            .unwrap());
        assert_eq!(3, framework.n_arguments());
        assert_eq!(
            ArgumentSet::from_labels(&["a", "b", "c"]),
            framework.arguments()
        );
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut framework = DeductiveFramework::new();
        assert!(framework
            .add_support(Argument::new("a"), Argument::new("b"))
            .unwrap());
        assert!(!framework
            .add_support(Argument::new("a"), Argument::new("b"))
            .unwrap());
        assert!(framework
            .add_attack(Argument::new("a"), Argument::new("b"))
            .unwrap());
        assert_eq!(1, framework.n_supports());
        assert_eq!(1, framework.n_attacks());
    }

    #[test]
    fn test_set_source_into_binary_framework() {
        let mut framework = DeductiveFramework::new();
        let err = framework
            .add_support_by_labels(&["a", "b"], &"c")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::InvalidRelationType(_))
        ));
        assert_eq!(0, framework.n_arguments());
        assert_eq!(0, framework.n_supports());
    }

    #[test]
    fn test_single_source_is_promoted() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a"], &"b").unwrap();
        assert!(framework.contains_support(&ArgumentSet::from_labels(&["a"]), &Argument::new("b")));
    }

    #[test]
    fn test_remove_argument_cascades() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
        framework.add_support_by_labels(&["c"], &"a").unwrap();
        framework.add_attack_by_labels(&["a"], &"d").unwrap();
        framework.add_attack_by_labels(&["d"], &"b").unwrap();
        assert!(framework.remove_argument(&Argument::new("a")).unwrap());
        assert!(!framework.contains_argument(&Argument::new("a")));
        assert_eq!(0, framework.n_supports());
        assert_eq!(1, framework.n_attacks());
        assert!(framework.direct_supported(&ArgumentSet::from_labels(&["c"])).is_empty());
        assert!(!framework.remove_argument(&Argument::new("a")).unwrap());
    }

    #[test]
    fn test_remove_sentinel() {
        let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        let err = framework
            .remove_argument(&Argument::new("eta"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::ForbiddenSentinelUse(_))
        ));
        assert!(framework.contains_argument(&Argument::new("eta")));
    }

    #[test]
    fn test_queries_return_copies() {
        let mut framework = DeductiveFramework::new();
        framework
            .add_support(Argument::new("a"), Argument::new("b"))
            .unwrap();
        let mut supporters = framework.direct_supporters(&Argument::new("b"));
        supporters.insert(Argument::new("z"));
        assert_eq!(1, framework.direct_supporters(&Argument::new("b")).len());
        let mut supports = framework.supports();
        supports.clear();
        assert_eq!(1, framework.supports().len());
    }

    #[test]
    fn test_remove_relations() {
        let mut framework = DeductiveFramework::new();
        framework
            .add_support(Argument::new("a"), Argument::new("b"))
            .unwrap();
        framework
            .add_attack(Argument::new("b"), Argument::new("a"))
            .unwrap();
        assert!(!framework.remove_support(&Argument::new("b"), &Argument::new("a")));
        assert!(framework.remove_support(&Argument::new("a"), &Argument::new("b")));
        assert!(framework.remove_attack(&Argument::new("b"), &Argument::new("a")));
        assert_eq!(0, framework.n_supports());
        assert_eq!(0, framework.n_attacks());
        assert_eq!(2, framework.n_arguments());
    }

    #[test]
    fn test_add_framework() {
        let mut f1 = NecessityFramework::new();
        f1.add_support_by_labels(&["a", "b"], &"c").unwrap();
        let mut f2 = NecessityFramework::new();
        f2.add_attack_by_labels(&["d"], &"c").unwrap();
        f2.new_argument("e");
        assert!(f1.add_framework(&f2).unwrap());
        assert!(!f1.add_framework(&f2).unwrap());
        assert_eq!(5, f1.n_arguments());
        assert_eq!(1, f1.n_supports());
        assert_eq!(1, f1.n_attacks());
    }

    #[test]
    fn test_rejected_batch_leaves_framework_unchanged() {
        let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        let relations = vec![
            Relation::Support(ArgumentSet::from_labels(&["a"]).into(), Argument::new("b")),
            Relation::Attack(ArgumentSet::from_labels(&["a"]).into(), Argument::new("eta")),
        ];
        let err = framework.add_relations(relations).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::ForbiddenSentinelUse(_))
        ));
        assert_eq!(1, framework.n_arguments());
        assert_eq!(0, framework.n_supports());
        assert_eq!(0, framework.n_attacks());
    }

    #[test]
    fn test_rejected_merge_leaves_framework_unchanged() {
        let mut target = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        let mut other = EvidentialFramework::new_with_sentinel(Argument::new("eps"));
        other.add_support_by_labels(&["a"], &"b").unwrap();
        other.add_attack_by_labels(&["a"], &"eta").unwrap();
        assert!(target.add_framework(&other).is_err());
        assert_eq!(1, target.n_arguments());
        assert_eq!(0, target.n_supports());
        assert_eq!(0, target.n_attacks());
    }

    #[test]
    fn test_merge_requires_same_sentinel() {
        let mut target = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        let mut other = EvidentialFramework::new_with_sentinel(Argument::new("eps"));
        other.add_prima_facie(Argument::new("p")).unwrap();
        let err = target.add_framework(&other).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::ForbiddenSentinelUse(_))
        ));
        assert!(!target.contains_argument(&Argument::new("eps")));
        assert!(!target.contains_argument(&Argument::new("p")));

        let mut same = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        same.add_prima_facie(Argument::new("p")).unwrap();
        assert!(target.add_framework(&same).unwrap());
        assert!(target.is_prima_facie(&Argument::new("p")));
        assert_eq!(2, target.n_arguments());
    }

    #[test]
    fn test_supported_by_set_with_set_supporters() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
        framework.add_support_by_labels(&["c"], &"d").unwrap();
        framework.add_support_by_labels(&["d", "e"], &"f").unwrap();
        assert_eq!(
            ArgumentSet::from_labels(&["c", "d"]),
            framework.supported_by_set(&ArgumentSet::from_labels(&["a", "b"]))
        );
        assert!(framework
            .supported_by_set(&ArgumentSet::from_labels(&["a"]))
            .is_empty());
    }

    #[test]
    fn test_is_attacked_by_set() {
        let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
        framework.add_attack_by_labels(&["a", "b"], &"c").unwrap();
        assert!(framework.is_attacked_by_set(
            &Argument::new("c"),
            &ArgumentSet::from_labels(&["a", "b", "d"])
        ));
        assert!(!framework
            .is_attacked_by_set(&Argument::new("c"), &ArgumentSet::from_labels(&["a"])));
    }
}
