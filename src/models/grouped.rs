// file: src/models/grouped.rs
// description: per-dictionary grouping and rank ordering of sourced definitions
// reference: insertion-ordered grouping with indexmap

use crate::models::{Definition, SourcedDefinition};
use indexmap::IndexMap;

/// Definitions keyed by dictionary name, each list ordered by rank.
/// Dictionaries keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedDefinitions {
    groups: IndexMap<String, Vec<Definition>>,
}

impl GroupedDefinitions {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, dictionary: &str) -> Option<&[Definition]> {
        self.groups.get(dictionary).map(Vec::as_slice)
    }

    pub fn dictionaries(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Definition])> {
        self.groups
            .iter()
            .map(|(dict, defs)| (dict.as_str(), defs.as_slice()))
    }

    /// Turns the groups back into sourced definitions, ranking each by its
    /// position within its group.
    pub fn flatten(&self) -> Vec<SourcedDefinition> {
        self.groups
            .iter()
            .flat_map(|(dict, defs)| {
                defs.iter()
                    .enumerate()
                    .map(move |(rank, def)| SourcedDefinition::new(dict.clone(), rank, def.clone()))
            })
            .collect()
    }
}

pub fn group_by_dictionary(items: impl IntoIterator<Item = SourcedDefinition>) -> GroupedDefinitions {
    let mut partitions: IndexMap<String, Vec<(usize, Definition)>> = IndexMap::new();
    for item in items {
        partitions
            .entry(item.dictionary)
            .or_default()
            .push((item.rank, item.definition));
    }

    let groups: IndexMap<String, Vec<Definition>> = partitions
        .into_iter()
        .map(|(dict, mut ranked)| {
            // sort_by_key is stable, equal ranks keep input order
            ranked.sort_by_key(|(rank, _)| *rank);
            (dict, ranked.into_iter().map(|(_, def)| def).collect::<Vec<_>>())
        })
        .collect();

    GroupedDefinitions { groups }
}
