use super::{Argument, ArgumentSet, Endpoint, LabelType};
use std::collections::{BTreeSet, HashMap, HashSet};

/// A bidirectional adjacency index for one kind of relation.
///
/// Sources are endpoints (single arguments or argument sets) while targets are always single arguments.
/// The index maintains both directions: `parents` maps a target to its sources and `children` maps a source to its targets.
/// A source is registered as a parent of a target iff the target is registered as a child of the source;
/// empty adjacency entries are never kept.
#[derive(Clone, Debug)]
pub(crate) struct RelationIndex<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    parents: HashMap<Argument<T>, HashSet<E>>,
    children: HashMap<E, HashSet<Argument<T>>>,
    n_relations: usize,
}

impl<T, E> Default for RelationIndex<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
            children: HashMap::new(),
            n_relations: 0,
        }
    }
}

impl<T, E> RelationIndex<T, E>
where
    T: LabelType,
    E: Endpoint<T>,
{
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a relation, returning `true` iff it was not already present.
    pub(crate) fn insert(&mut self, source: E, target: Argument<T>) -> bool {
        let inserted = self
            .parents
            .entry(target.clone())
            .or_default()
            .insert(source.clone());
        self.children.entry(source).or_default().insert(target);
        if inserted {
            self.n_relations += 1;
        }
        inserted
    }

    /// Removes a relation, returning `true` iff it was present.
    pub(crate) fn remove(&mut self, source: &E, target: &Argument<T>) -> bool {
        let removed = match self.parents.get_mut(target) {
            Some(sources) => sources.remove(source),
            None => false,
        };
        if !removed {
            return false;
        }
        if self.parents.get(target).map(|s| s.is_empty()).unwrap_or(false) {
            self.parents.remove(target);
        }
        if let Some(targets) = self.children.get_mut(source) {
            targets.remove(target);
            if targets.is_empty() {
                self.children.remove(source);
            }
        }
        self.n_relations -= 1;
        true
    }

    /// Removes all the relations involving the argument, as a target or as a member of a source.
    ///
    /// Returns `true` iff at least one relation was removed.
    pub(crate) fn remove_argument(&mut self, argument: &Argument<T>) -> bool {
        let mut changed = false;
        if let Some(sources) = self.parents.remove(argument) {
            for source in sources {
                if let Some(targets) = self.children.get_mut(&source) {
                    targets.remove(argument);
                    if targets.is_empty() {
                        self.children.remove(&source);
                    }
                }
                self.n_relations -= 1;
                changed = true;
            }
        }
        let sources_with_argument = self
            .children
            .keys()
            .filter(|s| s.contains(argument))
            .cloned()
            .collect::<Vec<E>>();
        for source in sources_with_argument {
            if let Some(targets) = self.children.remove(&source) {
                for target in targets {
                    if let Some(sources) = self.parents.get_mut(&target) {
                        sources.remove(&source);
                        if sources.is_empty() {
                            self.parents.remove(&target);
                        }
                    }
                    self.n_relations -= 1;
                    changed = true;
                }
            }
        }
        changed
    }

    pub(crate) fn contains(&self, source: &E, target: &Argument<T>) -> bool {
        self.parents
            .get(target)
            .map(|s| s.contains(source))
            .unwrap_or(false)
    }

    pub(crate) fn len(&self) -> usize {
        self.n_relations
    }

    /// Returns an iterator to the sources of the relations targeting the argument.
    pub(crate) fn iter_sources_of<'a>(
        &'a self,
        target: &Argument<T>,
    ) -> impl Iterator<Item = &'a E> + 'a {
        self.parents.get(target).into_iter().flat_map(|s| s.iter())
    }

    /// Returns an iterator to the targets of the relations coming from the source.
    pub(crate) fn iter_targets_of<'a>(
        &'a self,
        source: &E,
    ) -> impl Iterator<Item = &'a Argument<T>> + 'a {
        self.children.get(source).into_iter().flat_map(|s| s.iter())
    }

    /// Returns an iterator to the sources along with their targets.
    pub(crate) fn iter_by_source(
        &self,
    ) -> impl Iterator<Item = (&E, &HashSet<Argument<T>>)> + '_ {
        self.children.iter()
    }

    /// Returns an iterator to all the relations, as (source, target) couples.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&E, &Argument<T>)> + '_ {
        self.children
            .iter()
            .flat_map(|(s, targets)| targets.iter().map(move |t| (s, t)))
    }

    /// Returns an independent copy of the sources of the relations targeting the argument.
    pub(crate) fn sources_of(&self, target: &Argument<T>) -> BTreeSet<E> {
        self.iter_sources_of(target).cloned().collect()
    }

    /// Returns an independent copy of the targets of the relations coming from the source.
    pub(crate) fn targets_of(&self, source: &E) -> ArgumentSet<T> {
        self.iter_targets_of(source).cloned().collect()
    }

    pub(crate) fn has_sources(&self, target: &Argument<T>) -> bool {
        self.parents.contains_key(target)
    }
}
