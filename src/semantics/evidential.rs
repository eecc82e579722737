use crate::utils::{iter_proper_subsets, iter_subsets, SearchGuard};
use crate::{
    Argument, ArgumentSet, BipolarError, BipolarFramework, BipolarSemantics, Endpoint, LabelType,
};
use anyhow::Result;
use log::{debug, trace};
use std::collections::BTreeSet;

/// The label of the sentinel argument used by [`EvidentialFramework::new`].
pub const DEFAULT_FRAMEWORK_SENTINEL: &str = "eta";

/// The label of the sentinel argument used by [`EvidentialSystem::new`].
pub const DEFAULT_SYSTEM_SENTINEL: &str = "epsilon";

/// The trait shared by the evidential semantics.
///
/// In evidential semantics, an argument can only be accepted if it is supported by a chain of supports
/// starting from a special argument standing for the environment: the sentinel.
/// The arguments directly supported by the sentinel alone are called prima facie arguments.
pub trait EvidentialSemantics<T>: BipolarSemantics<T>
where
    T: LabelType,
{
    /// Returns the sentinel argument.
    fn sentinel_argument(&self) -> &Argument<T>;
}

fn check_evidential_support<T, E>(
    sentinel: &Argument<T>,
    supporter: &E,
    supported: &Argument<T>,
) -> Result<()>
where
    T: LabelType,
    E: Endpoint<T>,
{
    if supporter.is_empty() {
        return Err(BipolarError::InvalidRelationType(
            "the set of supporters cannot be empty".to_string(),
        )
        .into());
    }
    if supported == sentinel {
        return Err(BipolarError::ForbiddenSentinelUse(format!(
            "the sentinel argument {} cannot be supported",
            sentinel
        ))
        .into());
    }
    Ok(())
}

fn check_evidential_attack<T, E>(
    sentinel: &Argument<T>,
    attacker: &E,
    attacked: &Argument<T>,
) -> Result<()>
where
    T: LabelType,
    E: Endpoint<T>,
{
    if attacker.is_empty() {
        return Err(BipolarError::InvalidRelationType(
            "the set of attackers cannot be empty".to_string(),
        )
        .into());
    }
    if attacked == sentinel {
        return Err(BipolarError::ForbiddenSentinelUse(format!(
            "the sentinel argument {} cannot be attacked",
            sentinel
        ))
        .into());
    }
    if attacker.contains(sentinel) {
        return Err(BipolarError::ForbiddenSentinelUse(format!(
            "the sentinel argument {} cannot attack",
            sentinel
        ))
        .into());
    }
    Ok(())
}

/// The set-based evidential semantics, in which supporters and attackers are sets of arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetEvidential<T>
where
    T: LabelType,
{
    sentinel: Argument<T>,
}

impl<T> SetEvidential<T>
where
    T: LabelType,
{
    /// Builds the semantics given its sentinel argument.
    pub fn new(sentinel: Argument<T>) -> Self {
        Self { sentinel }
    }
}

impl<T> BipolarSemantics<T> for SetEvidential<T>
where
    T: LabelType,
{
    type Supporter = ArgumentSet<T>;

    type Attacker = ArgumentSet<T>;

    fn name(&self) -> &'static str {
        "set-based evidential"
    }

    fn sentinel(&self) -> Option<&Argument<T>> {
        Some(&self.sentinel)
    }

    fn check_support(&self, supporter: &ArgumentSet<T>, supported: &Argument<T>) -> Result<()> {
        check_evidential_support(&self.sentinel, supporter, supported)
    }

    fn check_attack(&self, attacker: &ArgumentSet<T>, attacked: &Argument<T>) -> Result<()> {
        check_evidential_attack(&self.sentinel, attacker, attacked)
    }

    fn is_closed(&self, framework: &BipolarFramework<T, Self>, ext: &ArgumentSet<T>) -> bool {
        framework.is_closed_under_direct_support(ext)
    }

    fn is_acceptable(
        &self,
        framework: &BipolarFramework<T, Self>,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        framework.is_evidentially_acceptable(argument, ext, guard)
    }
}

impl<T> EvidentialSemantics<T> for SetEvidential<T>
where
    T: LabelType,
{
    fn sentinel_argument(&self) -> &Argument<T> {
        &self.sentinel
    }
}

/// The evidential semantics in which supporters and attackers are single arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryEvidential<T>
where
    T: LabelType,
{
    sentinel: Argument<T>,
}

impl<T> BinaryEvidential<T>
where
    T: LabelType,
{
    /// Builds the semantics given its sentinel argument.
    pub fn new(sentinel: Argument<T>) -> Self {
        Self { sentinel }
    }
}

impl<T> BipolarSemantics<T> for BinaryEvidential<T>
where
    T: LabelType,
{
    type Supporter = Argument<T>;

    type Attacker = Argument<T>;

    fn name(&self) -> &'static str {
        "binary evidential"
    }

    fn sentinel(&self) -> Option<&Argument<T>> {
        Some(&self.sentinel)
    }

    fn check_support(&self, supporter: &Argument<T>, supported: &Argument<T>) -> Result<()> {
        check_evidential_support(&self.sentinel, supporter, supported)
    }

    fn check_attack(&self, attacker: &Argument<T>, attacked: &Argument<T>) -> Result<()> {
        check_evidential_attack(&self.sentinel, attacker, attacked)
    }

    fn is_closed(&self, framework: &BipolarFramework<T, Self>, ext: &ArgumentSet<T>) -> bool {
        framework.is_closed_under_support(ext)
    }

    fn is_acceptable(
        &self,
        framework: &BipolarFramework<T, Self>,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        framework.is_evidentially_acceptable(argument, ext, guard)
    }
}

impl<T> EvidentialSemantics<T> for BinaryEvidential<T>
where
    T: LabelType,
{
    fn sentinel_argument(&self) -> &Argument<T> {
        &self.sentinel
    }
}

/// A bipolar framework under the set-based evidential semantics.
pub type EvidentialFramework<T> = BipolarFramework<T, SetEvidential<T>>;

/// A bipolar framework under the evidential semantics with single-argument supporters and attackers.
pub type EvidentialSystem<T> = BipolarFramework<T, BinaryEvidential<T>>;

impl<T> BipolarFramework<T, SetEvidential<T>>
where
    T: LabelType,
{
    /// Builds an empty set-based evidential framework, given its sentinel argument.
    pub fn new_with_sentinel(sentinel: Argument<T>) -> Self {
        Self::new_with_semantics(SetEvidential::new(sentinel))
    }
}

impl<T> BipolarFramework<T, SetEvidential<T>>
where
    T: LabelType + From<&'static str>,
{
    /// Builds an empty set-based evidential framework, with a sentinel labeled [`DEFAULT_FRAMEWORK_SENTINEL`].
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, EvidentialFramework};
    /// let framework = EvidentialFramework::<String>::new();
    /// assert_eq!(&Argument::new("eta".to_string()), framework.sentinel());
    /// assert_eq!(1, framework.n_arguments());
    /// ```
    pub fn new() -> Self {
        Self::new_with_sentinel(Argument::new(T::from(DEFAULT_FRAMEWORK_SENTINEL)))
    }
}

impl<T> BipolarFramework<T, BinaryEvidential<T>>
where
    T: LabelType,
{
    /// Builds an empty evidential system, given its sentinel argument.
    pub fn new_with_sentinel(sentinel: Argument<T>) -> Self {
        Self::new_with_semantics(BinaryEvidential::new(sentinel))
    }
}

impl<T> BipolarFramework<T, BinaryEvidential<T>>
where
    T: LabelType + From<&'static str>,
{
    /// Builds an empty evidential system, with a sentinel labeled [`DEFAULT_SYSTEM_SENTINEL`].
    pub fn new() -> Self {
        Self::new_with_sentinel(Argument::new(T::from(DEFAULT_SYSTEM_SENTINEL)))
    }
}

/// Evidential reasoning, shared by the evidential semantics.
///
/// The sentinel argument is considered as an implicit member of every set of arguments given to these functions:
/// the environment is always available as evidence.
/// Consequently, the sentinel is not taken into account when the minimality of a set is checked.
///
/// Functions looking for minimal sets enumerate subsets, which is exponential;
/// they are bounded by the [`SearchLimits`](crate::utils::SearchLimits) of the framework.
impl<T, S> BipolarFramework<T, S>
where
    T: LabelType,
    S: EvidentialSemantics<T>,
{
    /// Returns the sentinel argument.
    pub fn sentinel(&self) -> &Argument<T> {
        self.semantics().sentinel_argument()
    }

    fn with_sentinel(&self, ext: &ArgumentSet<T>) -> ArgumentSet<T> {
        ext.with(self.sentinel().clone())
    }

    fn without_sentinel(&self, ext: &ArgumentSet<T>) -> Vec<Argument<T>> {
        ext.iter()
            .filter(|a| *a != self.sentinel())
            .cloned()
            .collect()
    }

    /// Makes an argument prima facie, that is directly supported by the sentinel argument.
    ///
    /// Returns `true` iff the argument was not already prima facie.
    pub fn add_prima_facie(&mut self, argument: Argument<T>) -> Result<bool> {
        let supporter = S::Supporter::from_argument(self.sentinel().clone());
        self.add_support(supporter, argument)
    }

    /// Removes the support from the sentinel argument to an argument.
    ///
    /// Returns `true` iff the argument was prima facie.
    pub fn remove_prima_facie(&mut self, argument: &Argument<T>) -> bool {
        let supporter = S::Supporter::from_argument(self.sentinel().clone());
        self.remove_support(&supporter, argument)
    }

    /// Returns `true` iff the argument is directly supported by the sentinel argument.
    pub fn is_prima_facie(&self, argument: &Argument<T>) -> bool {
        let supporter = S::Supporter::from_argument(self.sentinel().clone());
        self.supports.contains(&supporter, argument)
    }

    /// Returns the arguments supported by a chain of supports starting from the sentinel.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
    /// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
    /// framework.add_prima_facie(Argument::new("a")).unwrap();
    /// framework.add_support_by_labels(&["a"], &"b").unwrap();
    /// framework.add_support_by_labels(&["b", "c"], &"d").unwrap();
    /// assert_eq!(
    ///     ArgumentSet::from_labels(&["a", "b"]),
    ///     framework.evidence_supported_arguments()
    /// );
    /// ```
    pub fn evidence_supported_arguments(&self) -> ArgumentSet<T> {
        self.supported_by_set(&ArgumentSet::singleton(self.sentinel().clone()))
    }

    /// Returns `true` iff the argument has evidential support from the set.
    ///
    /// The sentinel has evidential support from any set.
    /// Another argument has evidential support from a set if some of its supporters are included in the set,
    /// and each of them has evidential support from the set deprived of the argument.
    pub fn has_evidential_support(
        &self,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
    ) -> Result<bool> {
        let guard = self.search_guard();
        self.has_evidential_support_with(argument, &self.with_sentinel(ext), &guard)
    }

    fn has_evidential_support_with(
        &self,
        argument: &Argument<T>,
        evidence: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        guard.check()?;
        if argument == self.sentinel() {
            return Ok(true);
        }
        let remaining = evidence.without(argument);
        for supporter in self.supports.iter_sources_of(argument) {
            if supporter.is_empty() || !supporter.is_included_in(evidence) {
                continue;
            }
            let mut all_supported = true;
            for member in supporter.to_argument_set().iter() {
                if !self.has_evidential_support_with(member, &remaining, guard)? {
                    all_supported = false;
                    break;
                }
            }
            if all_supported {
                trace!("{} has evidential support from {}", argument, supporter);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` iff the argument has evidential support from the set, and from none of its proper subsets.
    pub fn has_minimal_evidential_support(
        &self,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
    ) -> Result<bool> {
        let guard = self.search_guard();
        self.has_minimal_evidential_support_with(argument, ext, &guard)
    }

    fn has_minimal_evidential_support_with(
        &self,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        if !self.has_evidential_support_with(argument, &self.with_sentinel(ext), guard)? {
            return Ok(false);
        }
        let core = self.without_sentinel(ext);
        guard.check_size("the evidence set", core.len())?;
        for subset in iter_proper_subsets(&core) {
            if self.has_evidential_support_with(argument, &self.with_sentinel(&subset), guard)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the minimal sets of arguments giving evidential support to the argument.
    ///
    /// Each returned set contains the sentinel argument.
    /// The subsets of the arguments of the framework are enumerated,
    /// so this function is only suitable for small frameworks.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
    /// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
    /// framework.add_prima_facie(Argument::new("a")).unwrap();
    /// framework.add_prima_facie(Argument::new("b")).unwrap();
    /// framework.add_support_by_labels(&["a"], &"c").unwrap();
    /// framework.add_support_by_labels(&["b"], &"c").unwrap();
    /// let supporters = framework.minimal_evidential_supporters(&Argument::new("c")).unwrap();
    /// assert_eq!(2, supporters.len());
    /// assert!(supporters.contains(&ArgumentSet::from_labels(&["eta", "a"])));
    /// assert!(supporters.contains(&ArgumentSet::from_labels(&["eta", "b"])));
    /// ```
    pub fn minimal_evidential_supporters(
        &self,
        argument: &Argument<T>,
    ) -> Result<BTreeSet<ArgumentSet<T>>> {
        let guard = self.search_guard();
        let supporters = self
            .supports
            .iter_sources_of(argument)
            .map(|s| s.to_argument_set())
            .collect::<Vec<ArgumentSet<T>>>();
        let mut result = BTreeSet::new();
        if supporters.is_empty() {
            return Ok(result);
        }
        let candidates = self.without_sentinel(&self.arguments());
        guard.check_size("the set of the arguments of the framework", candidates.len())?;
        debug!(
            "looking for the minimal evidential supporters of {} among {} arguments",
            argument,
            candidates.len()
        );
        for subset in iter_subsets(&candidates) {
            guard.check()?;
            let subset = self.with_sentinel(&subset);
            if !supporters.iter().any(|s| s.is_subset(&subset)) {
                continue;
            }
            if self.has_minimal_evidential_support_with(argument, &subset, &guard)? {
                trace!("{} is a minimal evidential supporter of {}", subset, argument);
                result.insert(subset);
            }
        }
        Ok(result)
    }

    /// Returns `true` iff the set carries out an evidence-supported attack on the argument.
    ///
    /// This is the case if some attacker of the argument is included in the set
    /// and each of its members has evidential support from the set.
    pub fn is_evidence_supported_attack(
        &self,
        ext: &ArgumentSet<T>,
        argument: &Argument<T>,
    ) -> Result<bool> {
        let guard = self.search_guard();
        self.is_evidence_supported_attack_with(ext, argument, &guard)
    }

    fn is_evidence_supported_attack_with(
        &self,
        ext: &ArgumentSet<T>,
        argument: &Argument<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        let evidence = self.with_sentinel(ext);
        for attacker in self.attacks.iter_sources_of(argument) {
            if !attacker.is_included_in(&evidence) {
                continue;
            }
            let mut all_supported = true;
            for member in attacker.to_argument_set().iter() {
                if !self.has_evidential_support_with(member, &evidence, guard)? {
                    all_supported = false;
                    break;
                }
            }
            if all_supported {
                trace!("{} carries out an evidence-supported attack on {}", ext, argument);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` iff the set carries out an evidence-supported attack on the argument, and none of its proper subsets does.
    pub fn is_minimal_evidence_supported_attack(
        &self,
        ext: &ArgumentSet<T>,
        argument: &Argument<T>,
    ) -> Result<bool> {
        let guard = self.search_guard();
        self.is_minimal_evidence_supported_attack_with(ext, argument, &guard)
    }

    fn is_minimal_evidence_supported_attack_with(
        &self,
        ext: &ArgumentSet<T>,
        argument: &Argument<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        if !self.is_evidence_supported_attack_with(ext, argument, guard)? {
            return Ok(false);
        }
        let core = self.without_sentinel(ext);
        guard.check_size("the attacking set", core.len())?;
        for subset in iter_proper_subsets(&core) {
            if self.is_evidence_supported_attack_with(&subset, argument, guard)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the minimal sets of arguments carrying out an evidence-supported attack on the argument.
    ///
    /// Each returned set contains the sentinel argument.
    /// The subsets of the arguments of the framework are enumerated,
    /// so this function is only suitable for small frameworks.
    pub fn minimal_evidence_supported_attackers(
        &self,
        argument: &Argument<T>,
    ) -> Result<BTreeSet<ArgumentSet<T>>> {
        let guard = self.search_guard();
        self.minimal_evidence_supported_attackers_with(argument, &guard)
    }

    fn minimal_evidence_supported_attackers_with(
        &self,
        argument: &Argument<T>,
        guard: &SearchGuard,
    ) -> Result<BTreeSet<ArgumentSet<T>>> {
        let attackers = self
            .attacks
            .iter_sources_of(argument)
            .map(|s| s.to_argument_set())
            .collect::<Vec<ArgumentSet<T>>>();
        let mut result = BTreeSet::new();
        if attackers.is_empty() {
            return Ok(result);
        }
        let candidates = self.without_sentinel(&self.arguments());
        guard.check_size("the set of the arguments of the framework", candidates.len())?;
        debug!(
            "looking for the minimal evidence-supported attackers of {} among {} arguments",
            argument,
            candidates.len()
        );
        for subset in iter_subsets(&candidates) {
            guard.check()?;
            if !attackers.iter().any(|s| s.is_subset(&subset)) {
                continue;
            }
            let subset = self.with_sentinel(&subset);
            if self.is_minimal_evidence_supported_attack_with(&subset, argument, guard)? {
                trace!("{} is a minimal evidence-supported attacker of {}", subset, argument);
                result.insert(subset);
            }
        }
        Ok(result)
    }

    /// Decides whether an argument is acceptable with respect to a set under an evidential semantics.
    ///
    /// The argument must have evidential support from the set,
    /// and for each minimal set carrying out an evidence-supported attack on the argument,
    /// the set must carry out an evidence-supported attack on a member of it.
    pub(crate) fn is_evidentially_acceptable(
        &self,
        argument: &Argument<T>,
        ext: &ArgumentSet<T>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        if !self.has_evidential_support_with(argument, &self.with_sentinel(ext), guard)? {
            return Ok(false);
        }
        for attacking_set in self.minimal_evidence_supported_attackers_with(argument, guard)? {
            let mut defended = false;
            for attacker in attacking_set.iter() {
                if self.is_evidence_supported_attack_with(ext, attacker, guard)? {
                    defended = true;
                    break;
                }
            }
            if !defended {
                trace!("{} is not defended by {} against {}", argument, ext, attacking_set);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns a framework with the same arguments, keeping only the minimal supports and attacks.
    ///
    /// A support (resp. attack) is minimal if no other support (resp. attack) targeting the same argument
    /// has a source strictly included in its own source.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
    /// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
    /// framework.add_support_by_labels(&["a"], &"c").unwrap();
    /// framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
    /// let minimal = framework.minimal_form().unwrap();
    /// assert_eq!(1, minimal.n_supports());
    /// assert_eq!(framework.n_arguments(), minimal.n_arguments());
    /// ```
    pub fn minimal_form(&self) -> Result<Self> {
        let mut result = Self::new_with_semantics(self.semantics().clone());
        result.set_search_limits(self.search_limits().clone());
        for a in self.iter_arguments() {
            result.add_argument(a.clone());
        }
        for (supporter, supported) in self.supports.iter() {
            let source = supporter.to_argument_set();
            let is_minimal = !self
                .supports
                .iter_sources_of(supported)
                .any(|other| other.to_argument_set().is_proper_subset(&source));
            if is_minimal {
                result.add_support(supporter.clone(), supported.clone())?;
            }
        }
        for (attacker, attacked) in self.attacks.iter() {
            let source = attacker.to_argument_set();
            let is_minimal = !self
                .attacks
                .iter_sources_of(attacked)
                .any(|other| other.to_argument_set().is_proper_subset(&source));
            if is_minimal {
                result.add_attack(attacker.clone(), attacked.clone())?;
            }
        }
        Ok(result)
    }
}
