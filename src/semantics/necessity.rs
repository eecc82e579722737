use crate::utils::SearchGuard;
use crate::{Argument, ArgumentSet, BipolarError, BipolarFramework, BipolarSemantics, LabelType};
use anyhow::Result;
use log::trace;
use std::collections::HashSet;

/// The necessity semantics of bipolar frameworks.
///
/// In this semantics, a support from a set of arguments `E` to an argument `a` means that `a`
/// cannot be accepted unless at least one argument of `E` is accepted.
/// Supporters are sets of arguments, while attacks are binary.
///
/// The acceptability of an argument with respect to a set is not defined for this semantics:
/// [`BipolarFramework::is_acceptable`] and [`BipolarFramework::fes`] return [`BipolarError::UnsupportedOperation`] errors.
/// The coherence checks are available instead (see [`NecessityFramework::is_coherent`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Necessity;

impl<T> BipolarSemantics<T> for Necessity
where
    T: LabelType,
{
    type Supporter = ArgumentSet<T>;

    type Attacker = Argument<T>;

    fn name(&self) -> &'static str {
        "necessity"
    }

    fn check_support(&self, supporter: &ArgumentSet<T>, _supported: &Argument<T>) -> Result<()> {
        if supporter.is_empty() {
            return Err(BipolarError::InvalidRelationType(
                "the set of supporters cannot be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }

    fn is_closed(&self, framework: &BipolarFramework<T, Self>, ext: &ArgumentSet<T>) -> bool {
        framework.are_necessities_met(ext)
    }

    fn is_acceptable(
        &self,
        _framework: &BipolarFramework<T, Self>,
        argument: &Argument<T>,
        _ext: &ArgumentSet<T>,
        _guard: &SearchGuard,
    ) -> Result<bool> {
        Err(BipolarError::UnsupportedOperation(format!(
            "acceptability of {} is not defined under the necessity semantics",
            argument
        ))
        .into())
    }
}

/// A bipolar framework under the necessity semantics.
pub type NecessityFramework<T> = BipolarFramework<T, Necessity>;

impl<T> Default for BipolarFramework<T, Necessity>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_semantics(Necessity)
    }
}

impl<T> BipolarFramework<T, Necessity>
where
    T: LabelType,
{
    /// Builds an empty necessity framework.
    pub fn new() -> Self {
        Self::default()
    }

    fn are_necessities_met(&self, ext: &ArgumentSet<T>) -> bool {
        ext.iter().all(|a| {
            self.supports
                .iter_sources_of(a)
                .all(|supporter| supporter.intersects(ext))
        })
    }

    /// Returns `true` iff the argument is N-cycle-free in the set.
    ///
    /// An argument is N-cycle-free in a set if, for each of its supporting sets meeting the set,
    /// one of the arguments in the intersection is itself N-cycle-free in the set,
    /// without going back to an argument whose N-cycle-freeness is being established.
    ///
    /// The argument must belong to the set; if it does not, a [`BipolarError::PreconditionViolation`] error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, NecessityFramework};
    /// let mut framework = NecessityFramework::new();
    /// framework.add_support_by_labels(&["a"], &"b").unwrap();
    /// framework.add_support_by_labels(&["b"], &"a").unwrap();
    /// let set = ArgumentSet::from_labels(&["a", "b"]);
    /// assert!(!framework.is_n_cycle_free_in(&Argument::new("a"), &set).unwrap());
    /// ```
    pub fn is_n_cycle_free_in(&self, argument: &Argument<T>, set: &ArgumentSet<T>) -> Result<bool> {
        if !set.contains(argument) {
            return Err(BipolarError::PreconditionViolation(format!(
                "argument {} does not belong to the set {}",
                argument, set
            ))
            .into());
        }
        let guard = self.search_guard();
        let mut path = HashSet::new();
        self.is_n_cycle_free_in_with(argument, set, &mut path, &guard)
    }

    fn is_n_cycle_free_in_with(
        &self,
        argument: &Argument<T>,
        set: &ArgumentSet<T>,
        path: &mut HashSet<Argument<T>>,
        guard: &SearchGuard,
    ) -> Result<bool> {
        guard.check()?;
        path.insert(argument.clone());
        let mut cycle_free = true;
        for supporter in self.supports.iter_sources_of(argument) {
            let intersection = supporter.intersection(set);
            if intersection.is_empty() {
                continue;
            }
            let mut founded = false;
            for b in intersection.iter() {
                if path.contains(b) {
                    continue;
                }
                if self.is_n_cycle_free_in_with(b, set, path, guard)? {
                    founded = true;
                    break;
                }
            }
            if !founded {
                trace!("{} has no founded supporter in {} among {}", argument, set, supporter);
                cycle_free = false;
                break;
            }
        }
        path.remove(argument);
        Ok(cycle_free)
    }

    /// Returns `true` iff each argument of the set is N-cycle-free in it.
    pub fn is_n_cycle_free(&self, set: &ArgumentSet<T>) -> Result<bool> {
        let guard = self.search_guard();
        let mut path = HashSet::new();
        for a in set.iter() {
            if !self.is_n_cycle_free_in_with(a, set, &mut path, &guard)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` iff the set is coherent, that is closed and N-cycle-free.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{ArgumentSet, NecessityFramework};
    /// let mut framework = NecessityFramework::new();
    /// framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
    /// assert!(framework.is_coherent(&ArgumentSet::from_labels(&["a", "c"])).unwrap());
    /// assert!(!framework.is_coherent(&ArgumentSet::from_labels(&["c"])).unwrap());
    /// ```
    pub fn is_coherent(&self, set: &ArgumentSet<T>) -> Result<bool> {
        Ok(self.is_closed(set) && self.is_n_cycle_free(set)?)
    }

    /// Returns `true` iff the set is coherent and conflict-free.
    pub fn is_strongly_coherent(&self, set: &ArgumentSet<T>) -> Result<bool> {
        Ok(self.is_conflict_free(set) && self.is_coherent(set)?)
    }

    /// Returns `true` iff no argument of the set attacks an argument of the set.
    pub fn is_conflict_free(&self, set: &ArgumentSet<T>) -> bool {
        !set.iter().any(|a| self.is_attacked_by_set(a, set))
    }

    /// Returns the arguments deactivated by the set.
    ///
    /// An argument is deactivated by a set if it is attacked by an argument of the set,
    /// or if one of its supporting sets is disjoint from the set.
    pub fn deactivated_arguments(&self, set: &ArgumentSet<T>) -> ArgumentSet<T> {
        self.iter_arguments()
            .filter(|a| {
                self.is_attacked_by_set(a, set)
                    || self
                        .supports
                        .iter_sources_of(a)
                        .any(|supporter| !supporter.intersects(set))
            })
            .cloned()
            .collect()
    }
}
