use crate::bipolar::{Argument, ArgumentSet, LabelType};
use permutator::{CartesianProduct, Combination};

/// Returns an iterator to the subsets of the arguments, by increasing size.
///
/// The empty set is the first subset returned.
/// The enumeration is exponential in the number of arguments; callers must bound it.
///
/// # Example
///
/// ```
/// # use crustabip::{Argument, ArgumentSet};
/// # use crustabip::utils::iter_subsets;
/// let args = vec![Argument::new("a"), Argument::new("b")];
/// let subsets = iter_subsets(&args).collect::<Vec<ArgumentSet<&str>>>();
/// assert_eq!(4, subsets.len());
/// assert!(subsets[0].is_empty());
/// ```
pub fn iter_subsets<T>(arguments: &[Argument<T>]) -> impl Iterator<Item = ArgumentSet<T>> + '_
where
    T: LabelType,
{
    iter_subsets_up_to(arguments, true, arguments.len())
}

/// Returns an iterator to the subsets of the arguments that differ from the whole set, by increasing size.
pub fn iter_proper_subsets<T>(
    arguments: &[Argument<T>],
) -> impl Iterator<Item = ArgumentSet<T>> + '_
where
    T: LabelType,
{
    iter_subsets_up_to(
        arguments,
        !arguments.is_empty(),
        arguments.len().saturating_sub(1),
    )
}

fn iter_subsets_up_to<T>(
    arguments: &[Argument<T>],
    with_empty_set: bool,
    max_size: usize,
) -> impl Iterator<Item = ArgumentSet<T>> + '_
where
    T: LabelType,
{
    let empty = with_empty_set.then(ArgumentSet::empty);
    let non_empty = (1..=max_size.min(arguments.len())).flat_map(move |k| {
        arguments
            .combination(k)
            .map(|c| c.into_iter().cloned().collect::<ArgumentSet<T>>())
    });
    empty.into_iter().chain(non_empty)
}

/// Computes the sets made by picking one argument in each of the given domains.
///
/// Since an argument may belong to several domains, the resulting sets may be smaller than the number of domains,
/// and some of them may be equal; duplicates are removed.
/// An empty list of domains gives no set.
pub fn cartesian_product<T>(domains: &[Vec<Argument<T>>]) -> Vec<ArgumentSet<T>>
where
    T: LabelType,
{
    if domains.is_empty() || domains.iter().any(|d| d.is_empty()) {
        return vec![];
    }
    if domains.len() == 1 {
        let mut singletons = domains[0]
            .iter()
            .cloned()
            .map(ArgumentSet::singleton)
            .collect::<Vec<ArgumentSet<T>>>();
        singletons.sort_unstable();
        singletons.dedup();
        return singletons;
    }
    let domain_refs = domains
        .iter()
        .map(|v| v.as_slice())
        .collect::<Vec<&[Argument<T>]>>();
    let mut products = domain_refs
        .as_slice()
        .cart_prod()
        .map(|p| p.into_iter().cloned().collect::<ArgumentSet<T>>())
        .collect::<Vec<ArgumentSet<T>>>();
    products.sort_unstable();
    products.dedup();
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(labels: &[&'static str]) -> Vec<Argument<&'static str>> {
        labels.iter().map(|l| Argument::new(*l)).collect()
    }

    #[test]
    fn test_subsets() {
        let arguments = args(&["a", "b", "c"]);
        let subsets = iter_subsets(&arguments).collect::<Vec<_>>();
        assert_eq!(8, subsets.len());
        assert!(subsets[0].is_empty());
        assert_eq!(ArgumentSet::from_labels(&["a", "b", "c"]), subsets[7]);
        for w in subsets.windows(2) {
            assert!(w[0].len() <= w[1].len());
        }
    }

    #[test]
    fn test_subsets_of_empty_set() {
        let arguments = args(&[]);
        assert_eq!(
            vec![ArgumentSet::empty()],
            iter_subsets(&arguments).collect::<Vec<_>>()
        );
        assert_eq!(0, iter_proper_subsets(&arguments).count());
    }

    #[test]
    fn test_proper_subsets() {
        let arguments = args(&["a", "b"]);
        let subsets = iter_proper_subsets(&arguments).collect::<Vec<_>>();
        assert_eq!(3, subsets.len());
        assert!(!subsets.contains(&ArgumentSet::from_labels(&["a", "b"])));
    }

    #[test]
    fn test_proper_subsets_of_singleton() {
        let arguments = args(&["a"]);
        assert_eq!(
            vec![ArgumentSet::empty()],
            iter_proper_subsets(&arguments).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_cartesian_product() {
        let domains = vec![args(&["a", "b"]), args(&["b", "c"])];
        let products = cartesian_product(&domains);
        assert_eq!(
            vec![
                ArgumentSet::from_labels(&["a", "b"]),
                ArgumentSet::from_labels(&["a", "c"]),
                ArgumentSet::from_labels(&["b"]),
                ArgumentSet::from_labels(&["b", "c"]),
            ],
            products
        );
    }

    #[test]
    fn test_cartesian_product_of_nothing() {
        assert!(cartesian_product::<&str>(&[]).is_empty());
        assert!(cartesian_product(&[args(&["a"]), args(&[])]).is_empty());
    }
}
