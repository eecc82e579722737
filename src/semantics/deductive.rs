use crate::utils::SearchGuard;
use crate::{Argument, ArgumentSet, BinaryAttack, BipolarFramework, BipolarSemantics, LabelType};
use anyhow::Result;
use log::debug;
use std::collections::BTreeSet;

/// The deductive semantics of bipolar frameworks.
///
/// In this semantics, if `a` supports `b` then the acceptance of `a` implies the acceptance of `b`.
/// Supports and attacks are binary.
/// Direct attacks are combined with supports to derive new attacks (see [`DeductiveFramework::complex_attacks`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deductive;

impl<T> BipolarSemantics<T> for Deductive
where
    T: LabelType,
{
    type Supporter = Argument<T>;

    type Attacker = Argument<T>;

    fn name(&self) -> &'static str {
        "deductive"
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
        guard.check()?;
        let d_attacks = framework.deductive_complex_attacks();
        Ok(is_defended(&d_attacks, argument, ext))
    }
}

/// A bipolar framework under the deductive semantics.
pub type DeductiveFramework<T> = BipolarFramework<T, Deductive>;

impl<T> Default for BipolarFramework<T, Deductive>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_semantics(Deductive)
    }
}

impl<T> BipolarFramework<T, Deductive>
where
    T: LabelType,
{
    /// Builds an empty deductive framework.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the complex attacks of this framework: direct attacks, supported attacks and mediated attacks.
    ///
    /// There is a supported attack from `a` to `b` if `a` supports (directly or not) an argument directly attacking `b`.
    /// There is a mediated attack from `a` to `b` if `a` directly attacks an argument supported (directly or not) by `b`.
    ///
    /// The computation requires a support closure for each argument,
    /// making it unsuitable for very large frameworks if called repeatedly.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustabip::{Argument, BinaryAttack, DeductiveFramework};
    /// let mut framework = DeductiveFramework::new();
    /// framework.add_attack(Argument::new("a"), Argument::new("b")).unwrap();
    /// framework.add_support(Argument::new("c"), Argument::new("a")).unwrap();
    /// framework.add_support(Argument::new("d"), Argument::new("b")).unwrap();
    /// let attacks = framework.complex_attacks();
    /// assert!(attacks.contains(&BinaryAttack::new(Argument::new("c"), Argument::new("b"))));
    /// assert!(attacks.contains(&BinaryAttack::new(Argument::new("a"), Argument::new("d"))));
    /// ```
    pub fn complex_attacks(&self) -> BTreeSet<BinaryAttack<T>> {
        let mut attacks = self.attacks();
        for a in self.iter_arguments() {
            attacks.extend(self.supported_attacks(a));
            attacks.extend(self.mediated_attacks(a));
        }
        attacks
    }

    /// Computes the deductive complex attacks of this framework.
    ///
    /// These are the complex attacks (see [`complex_attacks`](Self::complex_attacks)),
    /// extended so that the arguments supporting an attacker also attack its target,
    /// and the target's supporters are attacked by the attacker (super-mediated attacks).
    pub fn deductive_complex_attacks(&self) -> BTreeSet<BinaryAttack<T>> {
        let complex_attacks = self.complex_attacks();
        let mut d_attacks = complex_attacks.clone();
        for attack in complex_attacks.iter() {
            for origin in self.get_supporters(attack.attacker()).iter() {
                d_attacks.insert(BinaryAttack::new(origin.clone(), attack.attacked().clone()));
            }
            for target in self.get_supporters(attack.attacked()).iter() {
                d_attacks.insert(BinaryAttack::new(attack.attacker().clone(), target.clone()));
            }
        }
        debug!(
            "computed {} deductive complex attacks from {} direct attacks",
            d_attacks.len(),
            self.n_attacks()
        );
        d_attacks
    }

    /// Returns the supported attacks starting from an argument.
    pub fn supported_attacks(&self, argument: &Argument<T>) -> BTreeSet<BinaryAttack<T>> {
        self.get_supported(argument)
            .iter()
            .flat_map(|x| self.attacks.iter_targets_of(x))
            .map(|y| BinaryAttack::new(argument.clone(), y.clone()))
            .collect()
    }

    /// Returns the mediated attacks targeting an argument.
    pub fn mediated_attacks(&self, argument: &Argument<T>) -> BTreeSet<BinaryAttack<T>> {
        self.get_supported(argument)
            .iter()
            .flat_map(|x| self.attacks.iter_sources_of(x))
            .map(|z| BinaryAttack::new(z.clone(), argument.clone()))
            .collect()
    }

    /// Returns `true` iff the first argument supports (directly or not) an argument directly attacking the second one.
    pub fn is_supported_attack(&self, attacker: &Argument<T>, attacked: &Argument<T>) -> bool {
        let supported = self.get_supported(attacker);
        self.is_attacked_by_set(attacked, &supported)
    }

    /// Returns `true` iff the first argument directly attacks an argument supported (directly or not) by the second one.
    pub fn is_mediated_attack(&self, attacker: &Argument<T>, attacked: &Argument<T>) -> bool {
        self.get_supported(attacked)
            .iter()
            .any(|x| self.attacks.contains(attacker, x))
    }

    /// Returns `true` iff there is a super-mediated attack from the first argument to the second one.
    ///
    /// This is the case when some argument supported (directly or not) by the second argument
    /// is directly attacked by the first argument, or by an argument the first one supports (directly or not).
    pub fn is_super_mediated_attack(&self, attacker: &Argument<T>, attacked: &Argument<T>) -> bool {
        let attacking = self.get_supported(attacker).with(attacker.clone());
        self.get_supported(attacked)
            .iter()
            .any(|x| self.is_attacked_by_set(x, &attacking))
    }
}

/// Checks each deductive complex attacker of the argument is itself attacked by an argument of the set.
fn is_defended<T>(
    d_attacks: &BTreeSet<BinaryAttack<T>>,
    argument: &Argument<T>,
    ext: &ArgumentSet<T>,
) -> bool
where
    T: LabelType,
{
    d_attacks
        .iter()
        .filter(|att| att.attacked() == argument)
        .all(|att| {
            ext.iter().any(|defender| {
                d_attacks.contains(&BinaryAttack::new(defender.clone(), att.attacker().clone()))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::init_logger;

    fn arg(label: &'static str) -> Argument<&'static str> {
        Argument::new(label)
    }

    fn att(a: &'static str, b: &'static str) -> BinaryAttack<&'static str> {
        BinaryAttack::new(arg(a), arg(b))
    }

    #[test]
    fn test_supported_attack() {
        init_logger();
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.add_support(arg("c"), arg("a")).unwrap();
        assert!(framework.is_supported_attack(&arg("c"), &arg("b")));
        assert!(!framework.is_supported_attack(&arg("a"), &arg("c")));
        assert_eq!(
            vec![att("c", "b")],
            framework.supported_attacks(&arg("c")).into_iter().collect::<Vec<_>>()
        );
        assert!(framework.deductive_complex_attacks().contains(&att("c", "b")));
    }

    #[test]
    fn test_mediated_attack() {
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.add_support(arg("c"), arg("b")).unwrap();
        assert!(framework.is_mediated_attack(&arg("a"), &arg("c")));
        assert!(!framework.is_mediated_attack(&arg("c"), &arg("a")));
        assert_eq!(
            vec![att("a", "c")],
            framework.mediated_attacks(&arg("c")).into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_complex_attacks() {
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.add_support(arg("c"), arg("a")).unwrap();
        framework.add_support(arg("d"), arg("b")).unwrap();
        assert_eq!(
            vec![att("a", "b"), att("a", "d"), att("c", "b")],
            framework.complex_attacks().into_iter().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![att("a", "b"), att("a", "d"), att("c", "b"), att("c", "d")],
            framework
                .deductive_complex_attacks()
                .into_iter()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_super_mediated_attack() {
        let mut framework = DeductiveFramework::new();
        framework.add_support(arg("a"), arg("x")).unwrap();
        framework.add_attack(arg("x"), arg("y")).unwrap();
        framework.add_support(arg("b"), arg("y")).unwrap();
        assert!(framework.is_super_mediated_attack(&arg("a"), &arg("b")));
        assert!(framework.is_super_mediated_attack(&arg("x"), &arg("b")));
        assert!(!framework.is_super_mediated_attack(&arg("b"), &arg("a")));
        assert!(framework.deductive_complex_attacks().contains(&att("a", "b")));
    }

    #[test]
    fn test_complex_attacks_with_support_cycle() {
        let mut framework = DeductiveFramework::new();
        framework.add_support(arg("a"), arg("b")).unwrap();
        framework.add_support(arg("b"), arg("a")).unwrap();
        framework.add_attack(arg("c"), arg("a")).unwrap();
        let attacks = framework.deductive_complex_attacks();
        assert!(attacks.contains(&att("c", "a")));
        assert!(attacks.contains(&att("c", "b")));
    }

    #[test]
    fn test_acceptability() {
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.add_attack(arg("c"), arg("a")).unwrap();
        framework.add_support(arg("d"), arg("c")).unwrap();
        let ext = ArgumentSet::from_labels(&["d"]);
        assert!(framework.is_acceptable(&arg("b"), &ext).unwrap());
        assert!(!framework.is_acceptable(&arg("a"), &ext).unwrap());
        assert!(framework.is_acceptable(&arg("d"), &ArgumentSet::empty()).unwrap());
        assert!(!framework
            .is_acceptable(&arg("b"), &ArgumentSet::empty())
            .unwrap());
    }

    #[test]
    fn test_fes() {
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.add_attack(arg("b"), arg("c")).unwrap();
        assert_eq!(
            ArgumentSet::from_labels(&["a"]),
            framework.fes(&ArgumentSet::empty()).unwrap()
        );
        assert_eq!(
            ArgumentSet::from_labels(&["a", "c"]),
            framework.fes(&ArgumentSet::from_labels(&["a"])).unwrap()
        );
    }

    #[test]
    fn test_fes_cancelled() {
        let mut framework = DeductiveFramework::new();
        framework.add_attack(arg("a"), arg("b")).unwrap();
        framework.cancellation_token().cancel();
        let err = framework.fes(&ArgumentSet::empty()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::BipolarError>(),
            Some(crate::BipolarError::Interrupted(_))
        ));
    }
}
