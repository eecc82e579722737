use crate::utils::{cartesian_product, iter_subsets};
use crate::{
    Argument, ArgumentSet, BipolarError, DeductiveFramework, EvidentialFramework, LabelType,
    NecessityFramework,
};
use anyhow::{Context, Result};
use log::info;

impl<T> NecessityFramework<T>
where
    T: LabelType,
{
    /// Translates this framework into a set-based evidential framework using the given sentinel.
    ///
    /// Arguments without supporters become prima facie arguments.
    /// The other ones are supported by each set obtained by picking one argument in each of their necessity supporting sets.
    /// Attacks are kept as singleton attacks.
    ///
    /// The sentinel must not be involved in an attack of this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, NecessityFramework};
    /// let mut framework = NecessityFramework::new();
    /// framework.add_support_by_labels(&["a", "b"], &"d").unwrap();
    /// framework.add_support_by_labels(&["c"], &"d").unwrap();
    /// let evidential = framework.to_evidential(Argument::new("eta")).unwrap();
    /// assert!(evidential.is_prima_facie(&Argument::new("a")));
    /// assert!(evidential.contains_support(&ArgumentSet::from_labels(&["a", "c"]), &Argument::new("d")));
    /// assert!(evidential.contains_support(&ArgumentSet::from_labels(&["b", "c"]), &Argument::new("d")));
    /// ```
    pub fn to_evidential(&self, sentinel: Argument<T>) -> Result<EvidentialFramework<T>> {
        info!(
            "translating a necessity framework with {} arguments into an evidential framework",
            self.n_arguments()
        );
        let guard = self.search_guard();
        let mut result = EvidentialFramework::new_with_sentinel(sentinel.clone());
        result.set_search_limits(self.search_limits().clone());
        for a in self.iter_arguments() {
            if *a == sentinel {
                continue;
            }
            result.add_argument(a.clone());
            let domains = self
                .direct_supporters(a)
                .into_iter()
                .map(|s| s.to_vec())
                .collect::<Vec<Vec<Argument<T>>>>();
            if domains.is_empty() {
                result.add_prima_facie(a.clone())?;
                continue;
            }
            guard.check_size(
                &format!("the supporting sets of {}", a),
                domains.iter().map(|d| d.len()).sum(),
            )?;
            for supporter in cartesian_product(&domains) {
                result.add_support(supporter, a.clone())?;
            }
        }
        for (attacker, attacked) in self.attacks.iter() {
            result
                .add_attack(ArgumentSet::singleton(attacker.clone()), attacked.clone())
                .context("while translating a necessity framework into an evidential one")?;
        }
        Ok(result)
    }

    /// Translates this framework into a deductive framework.
    ///
    /// Each supporting set must be a singleton; if it is not, an [`BipolarError::InvalidRelationType`] error is returned.
    /// A necessity support from `a` to `b` becomes a deductive support from `b` to `a`.
    /// Attacks are kept.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, NecessityFramework};
    /// let mut framework = NecessityFramework::new();
    /// framework.add_support_by_labels(&["a"], &"b").unwrap();
    /// let deductive = framework.to_deductive().unwrap();
    /// assert!(deductive.contains_support(&Argument::new("b"), &Argument::new("a")));
    /// ```
    pub fn to_deductive(&self) -> Result<DeductiveFramework<T>> {
        info!(
            "translating a necessity framework with {} arguments into a deductive framework",
            self.n_arguments()
        );
        let mut result = DeductiveFramework::new();
        result.set_search_limits(self.search_limits().clone());
        for a in self.iter_arguments() {
            result.add_argument(a.clone());
        }
        for (supporter, supported) in self.supports.iter() {
            let necessary = match supporter.iter().collect::<Vec<&Argument<T>>>().as_slice() {
                [single] => (*single).clone(),
                _ => {
                    return Err(BipolarError::InvalidRelationType(format!(
                        "the supporting set {} of {} is not a singleton",
                        supporter, supported
                    ))
                    .into())
                }
            };
            result.add_support(supported.clone(), necessary)?;
        }
        for (attacker, attacked) in self.attacks.iter() {
            result.add_attack(attacker.clone(), attacked.clone())?;
        }
        Ok(result)
    }
}

impl<T> EvidentialFramework<T>
where
    T: LabelType,
{
    /// Translates this framework into a necessity framework.
    ///
    /// Each attack must come from a single argument; if it does not, an [`BipolarError::InvalidRelationType`] error is returned.
    /// Arguments without supporters support themselves in the result.
    /// The other ones are supported by each set of arguments that meets all their evidential supporting sets,
    /// which requires to enumerate the subsets of the union of these sets.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, EvidentialFramework};
    /// let mut framework = EvidentialFramework::new_with_sentinel(Argument::new("eta"));
    /// framework.add_support_by_labels(&["a"], &"c").unwrap();
    /// framework.add_support_by_labels(&["b"], &"c").unwrap();
    /// let necessity = framework.to_necessity().unwrap();
    /// assert!(necessity.contains_support(&ArgumentSet::from_labels(&["a", "b"]), &Argument::new("c")));
    /// assert!(necessity.contains_support(&ArgumentSet::from_labels(&["a"]), &Argument::new("a")));
    /// ```
    pub fn to_necessity(&self) -> Result<NecessityFramework<T>> {
        info!(
            "translating an evidential framework with {} arguments into a necessity framework",
            self.n_arguments()
        );
        let guard = self.search_guard();
        let mut result = NecessityFramework::new();
        result.set_search_limits(self.search_limits().clone());
        for a in self.iter_arguments() {
            result.add_argument(a.clone());
        }
        for (attacker, attacked) in self.attacks.iter() {
            let single = match attacker.iter().collect::<Vec<&Argument<T>>>().as_slice() {
                [single] => (*single).clone(),
                _ => {
                    return Err(BipolarError::InvalidRelationType(format!(
                        "the attacking set {} of {} is not a singleton",
                        attacker, attacked
                    ))
                    .into())
                }
            };
            result.add_attack(single, attacked.clone())?;
        }
        for a in self.iter_arguments() {
            if a == self.sentinel() {
                continue;
            }
            let supporters = self.direct_supporters(a);
            if supporters.is_empty() {
                result.add_support(ArgumentSet::singleton(a.clone()), a.clone())?;
                continue;
            }
            let union = supporters
                .iter()
                .fold(ArgumentSet::empty(), |acc, s| acc.union(s));
            guard
                .check_size(&format!("the union of the supporting sets of {}", a), union.len())
                .with_context(|| format!("while translating the supports of {}", a))?;
            let union = union.to_vec();
            for subset in iter_subsets(&union) {
                guard.check()?;
                if !subset.is_empty() && supporters.iter().all(|s| s.intersects(&subset)) {
                    result.add_support(subset, a.clone())?;
                }
            }
        }
        Ok(result)
    }
}

impl<T> DeductiveFramework<T>
where
    T: LabelType,
{
    /// Translates this framework into a necessity framework.
    ///
    /// A deductive support from `a` to `b` becomes a necessity support from `{b}` to `a`:
    /// accepting `a` requires accepting `b`.
    /// Attacks are kept.
    pub fn to_necessity(&self) -> Result<NecessityFramework<T>> {
        info!(
            "translating a deductive framework with {} arguments into a necessity framework",
            self.n_arguments()
        );
        let mut result = NecessityFramework::new();
        result.set_search_limits(self.search_limits().clone());
        for a in self.iter_arguments() {
            result.add_argument(a.clone());
        }
        for (supporter, supported) in self.supports.iter() {
            result.add_support(ArgumentSet::singleton(supported.clone()), supporter.clone())?;
        }
        for (attacker, attacked) in self.attacks.iter() {
            result.add_attack(attacker.clone(), attacked.clone())?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::SearchLimits;
    use crate::{Argument, ArgumentSet, BipolarError, EvidentialFramework, NecessityFramework};

    fn arg(label: &'static str) -> Argument<&'static str> {
        Argument::new(label)
    }

    fn set(labels: &[&'static str]) -> ArgumentSet<&'static str> {
        ArgumentSet::from_labels(labels)
    }

    #[test]
    fn test_necessity_to_evidential() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a", "b"], &"d").unwrap();
        framework.add_support_by_labels(&["b", "c"], &"d").unwrap();
        framework.add_attack(arg("a"), arg("c")).unwrap();
        let evidential = framework.to_evidential(arg("eta")).unwrap();
        assert_eq!(5, evidential.n_arguments());
        for pf in ["a", "b", "c"] {
            assert!(evidential.is_prima_facie(&arg(pf)));
        }
        let supporters = evidential.direct_supporters(&arg("d"));
        assert_eq!(
            vec![set(&["a", "b"]), set(&["a", "c"]), set(&["b"]), set(&["b", "c"])],
            supporters.into_iter().collect::<Vec<_>>()
        );
        assert!(evidential.contains_attack(&set(&["a"]), &arg("c")));
    }

    #[test]
    fn test_evidential_to_necessity() {
        let mut framework = EvidentialFramework::new_with_sentinel(arg("eta"));
        framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
        framework.add_support_by_labels(&["b", "d"], &"c").unwrap();
        framework.add_attack_by_labels(&["d"], &"a").unwrap();
        let necessity = framework.to_necessity().unwrap();
        assert!(necessity.contains_argument(&arg("eta")));
        assert!(necessity.contains_support(&set(&["a"]), &arg("a")));
        assert!(necessity.contains_attack(&arg("d"), &arg("a")));
        let supporters = necessity.direct_supporters(&arg("c"));
        assert!(supporters.contains(&set(&["b"])));
        assert!(supporters.contains(&set(&["a", "d"])));
        assert!(supporters.contains(&set(&["a", "b", "d"])));
        assert!(!supporters.contains(&set(&["a"])));
        assert_eq!(5, supporters.len());
    }

    #[test]
    fn test_evidential_to_necessity_rejects_set_attacks() {
        let mut framework = EvidentialFramework::new_with_sentinel(arg("eta"));
        framework.add_attack_by_labels(&["a", "b"], &"c").unwrap();
        let err = framework.to_necessity().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::InvalidRelationType(_))
        ));
    }

    #[test]
    fn test_evidential_to_necessity_limit() {
        let mut framework = EvidentialFramework::new_with_sentinel(arg("eta"));
        framework.set_search_limits(SearchLimits::default().with_max_search_size(2));
        framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
        framework.add_support_by_labels(&["d"], &"c").unwrap();
        let err = framework.to_necessity().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::SearchLimitExceeded(_))
        ));
    }

    #[test]
    fn test_necessity_deductive_round_trip() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a"], &"b").unwrap();
        framework.add_support_by_labels(&["c"], &"b").unwrap();
        framework.add_attack(arg("c"), arg("a")).unwrap();
        let deductive = framework.to_deductive().unwrap();
        assert_eq!(2, deductive.n_supports());
        assert!(deductive.contains_support(&arg("b"), &arg("a")));
        assert!(deductive.contains_support(&arg("b"), &arg("c")));
        assert!(deductive.contains_attack(&arg("c"), &arg("a")));
        let back = deductive.to_necessity().unwrap();
        assert_eq!(framework.supports(), back.supports());
        assert_eq!(framework.attacks(), back.attacks());
        assert_eq!(framework.arguments(), back.arguments());
    }

    #[test]
    fn test_necessity_to_deductive_rejects_sets() {
        let mut framework = NecessityFramework::new();
        framework.add_support_by_labels(&["a", "b"], &"c").unwrap();
        let err = framework.to_deductive().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BipolarError>(),
            Some(BipolarError::InvalidRelationType(_))
        ));
    }
}
