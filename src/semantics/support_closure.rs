use crate::{Argument, ArgumentSet, BipolarFramework, BipolarSemantics, LabelType};
use std::collections::{BTreeSet, HashSet};

/// Closure computations for frameworks with binary supports.
impl<T, S> BipolarFramework<T, S>
where
    T: LabelType,
    S: BipolarSemantics<T, Supporter = Argument<T>>,
{
    /// Returns the arguments supported by an argument through a sequence of one or more supports.
    ///
    /// The argument itself belongs to the result iff it is involved in a cycle of supports.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, ArgumentSet, DeductiveFramework};
    /// let mut framework = DeductiveFramework::new();
    /// framework.add_support(Argument::new("a"), Argument::new("b")).unwrap();
    /// framework.add_support(Argument::new("b"), Argument::new("c")).unwrap();
    /// assert_eq!(
    ///     ArgumentSet::from_labels(&["b", "c"]),
    ///     framework.get_supported(&Argument::new("a"))
    /// );
    /// ```
    pub fn get_supported(&self, argument: &Argument<T>) -> ArgumentSet<T> {
        let mut closure = BTreeSet::new();
        depth_first_closure(
            argument,
            &|a: &Argument<T>| self.supports.targets_of(a),
            &mut HashSet::new(),
            &mut closure,
        );
        closure.into_iter().collect()
    }

    /// Returns the arguments supporting an argument through a sequence of one or more supports.
    ///
    /// The argument itself belongs to the result iff it is involved in a cycle of supports.
    pub fn get_supporters(&self, argument: &Argument<T>) -> ArgumentSet<T> {
        let mut closure = BTreeSet::new();
        depth_first_closure(
            argument,
            &|a: &Argument<T>| self.supports.iter_sources_of(a).cloned().collect(),
            &mut HashSet::new(),
            &mut closure,
        );
        closure.into_iter().collect()
    }

    /// Returns `true` iff the second argument supports the first one through a sequence of one or more supports.
    pub fn is_supported_by(&self, argument: &Argument<T>, supporter: &Argument<T>) -> bool {
        self.get_supporters(argument).contains(supporter)
    }

    /// Returns `true` iff some argument of the set supports the argument through a sequence of one or more supports.
    pub fn is_supported_by_any(&self, argument: &Argument<T>, set: &ArgumentSet<T>) -> bool {
        self.get_supporters(argument).intersects(set)
    }

    /// Returns `true` iff all the arguments directly supported by the arguments of the set are in the set.
    ///
    /// Checking direct supports is enough: by induction, the set then contains every argument its members support.
    pub fn is_closed_under_support(&self, ext: &ArgumentSet<T>) -> bool {
        ext.iter().all(|a| {
            self.supports
                .iter_targets_of(a)
                .all(|supported| ext.contains(supported))
        })
    }
}

/// Collects the arguments reachable from `argument` through the `neighbors` function.
///
/// An argument is marked as visited right before being expanded, so each argument is expanded at most once
/// and the traversal ends on cyclic graphs.
fn depth_first_closure<T, F>(
    argument: &Argument<T>,
    neighbors: &F,
    visited: &mut HashSet<Argument<T>>,
    closure: &mut BTreeSet<Argument<T>>,
) where
    T: LabelType,
    F: Fn(&Argument<T>) -> ArgumentSet<T>,
{
    for next in neighbors(argument) {
        closure.insert(next.clone());
        if visited.insert(next.clone()) {
            depth_first_closure(&next, neighbors, visited, closure);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Argument, ArgumentSet, DeductiveFramework, EvidentialSystem};

    fn arg(label: &'static str) -> Argument<&'static str> {
        Argument::new(label)
    }

    fn framework_with_supports(
        supports: &[(&'static str, &'static str)],
    ) -> DeductiveFramework<&'static str> {
        let mut framework = DeductiveFramework::new();
        for (a, b) in supports {
            framework.add_support(arg(*a), arg(*b)).unwrap();
        }
        framework
    }

    #[test]
    fn test_single_support() {
        let framework = framework_with_supports(&[("a", "b")]);
        assert_eq!(ArgumentSet::from_labels(&["b"]), framework.get_supported(&arg("a")));
        assert_eq!(ArgumentSet::from_labels(&["a"]), framework.get_supporters(&arg("b")));
        assert!(framework.get_supported(&arg("b")).is_empty());
        assert!(framework.get_supporters(&arg("a")).is_empty());
    }

    #[test]
    fn test_support_cycle() {
        let framework = framework_with_supports(&[("a", "b"), ("b", "a")]);
        assert_eq!(
            ArgumentSet::from_labels(&["a", "b"]),
            framework.get_supported(&arg("a"))
        );
        assert_eq!(
            ArgumentSet::from_labels(&["a", "b"]),
            framework.get_supporters(&arg("a"))
        );
    }

    #[test]
    fn test_self_support() {
        let framework = framework_with_supports(&[("a", "a"), ("a", "b")]);
        assert_eq!(
            ArgumentSet::from_labels(&["a", "b"]),
            framework.get_supported(&arg("a"))
        );
    }

    #[test]
    fn test_diamond() {
        let framework =
            framework_with_supports(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e")]);
        assert_eq!(
            ArgumentSet::from_labels(&["b", "c", "d", "e"]),
            framework.get_supported(&arg("a"))
        );
        assert_eq!(
            ArgumentSet::from_labels(&["a", "b", "c", "d"]),
            framework.get_supporters(&arg("e"))
        );
    }

    #[test]
    fn test_closure_symmetry() {
        let framework = framework_with_supports(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("e", "d"),
        ]);
        let arguments = framework.arguments();
        for a in arguments.iter() {
            for b in arguments.iter() {
                assert_eq!(
                    framework.get_supported(a).contains(b),
                    framework.get_supporters(b).contains(a),
                    "{} {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_closure_fixed_point() {
        let framework = framework_with_supports(&[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")]);
        for a in framework.arguments().iter() {
            let supported = framework.get_supported(a);
            let extended = supported
                .iter()
                .fold(supported.clone(), |acc, b| acc.union(&framework.get_supported(b)));
            assert_eq!(supported, extended);
        }
    }

    #[test]
    fn test_is_closed() {
        let framework = framework_with_supports(&[("a", "b"), ("b", "c")]);
        assert!(framework.is_closed_under_support(&ArgumentSet::from_labels(&["a", "b", "c"])));
        assert!(framework.is_closed_under_support(&ArgumentSet::from_labels(&["c"])));
        assert!(!framework.is_closed_under_support(&ArgumentSet::from_labels(&["a", "b"])));
        assert!(framework.is_closed_under_support(&ArgumentSet::empty()));
    }

    #[test]
    fn test_closure_law() {
        let framework = framework_with_supports(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
        let arguments = framework.arguments().to_vec();
        for ext in crate::utils::iter_subsets(&arguments) {
            let expected = ext
                .iter()
                .all(|a| framework.direct_supported(a).is_subset(&ext));
            assert_eq!(expected, framework.is_closed(&ext), "{}", ext);
        }
    }

    #[test]
    fn test_supported_predicates() {
        let framework = framework_with_supports(&[("a", "b"), ("b", "c")]);
        assert!(framework.is_supported_by(&arg("c"), &arg("a")));
        assert!(!framework.is_supported_by(&arg("a"), &arg("c")));
        assert!(framework.is_supported_by_any(&arg("c"), &ArgumentSet::from_labels(&["a", "d"])));
        assert!(framework.is_supported(&arg("c"), &ArgumentSet::from_labels(&["b"])));
        assert!(!framework.is_supported(&arg("c"), &ArgumentSet::from_labels(&["a"])));
        assert_eq!(
            ArgumentSet::from_labels(&["b", "c"]),
            framework.supported_by_set(&ArgumentSet::from_labels(&["a"]))
        );
    }

    #[test]
    fn test_binary_evidential_closure() {
        let mut framework = EvidentialSystem::new_with_sentinel(arg("eps"));
        framework.add_support(arg("a"), arg("b")).unwrap();
        framework.add_support(arg("b"), arg("c")).unwrap();
        assert_eq!(ArgumentSet::from_labels(&["b", "c"]), framework.get_supported(&arg("a")));
        assert!(framework.is_closed(&ArgumentSet::from_labels(&["b", "c"])));
    }
}
