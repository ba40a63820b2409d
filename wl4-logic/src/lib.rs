pub mod helpers;

use hashbrown::HashMap;
use log::trace;
use serde::{Deserialize, Serialize};
use wl4_game::{Catalog, ItemIdx};

/// Read access to a player's accumulated items.
pub trait InventoryQuery {
    fn count(&self, item: ItemIdx) -> usize;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub counts: Vec<usize>, // Corresponds to Catalog.items (one count per distinct item name)
}

impl Inventory {
    pub fn new(num_items: usize) -> Self {
        Inventory {
            counts: vec![0; num_items],
        }
    }

    pub fn collect(&mut self, item: ItemIdx) {
        self.collect_n(item, 1);
    }

    pub fn collect_n(&mut self, item: ItemIdx, n: usize) {
        if item >= self.counts.len() {
            self.counts.resize(item + 1, 0);
        }
        self.counts[item] += n;
    }

    pub fn print_debug(&self, catalog: &Catalog) {
        for (i, item) in catalog.items.iter().enumerate() {
            if self.count(i) > 0 {
                trace!("{}: {}", item.name, self.count(i));
            }
        }
    }
}

impl InventoryQuery for Inventory {
    fn count(&self, item: ItemIdx) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }
}

impl InventoryQuery for HashMap<ItemIdx, usize> {
    fn count(&self, item: ItemIdx) -> usize {
        self.get(&item).copied().unwrap_or(0)
    }
}

impl<T: InventoryQuery + ?Sized> InventoryQuery for &T {
    fn count(&self, item: ItemIdx) -> usize {
        (**self).count(item)
    }
}

/// Access rule attached to an entrance. Conjunction is the only combinator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    Free,
    Item { item: ItemIdx, count: usize },
    AllOf(Vec<ItemIdx>),
    // Satisfied when the counts summed over the whole set reach `count`.
    AtLeastNOfSet { items: Vec<ItemIdx>, count: usize },
    Event(ItemIdx),
    And(Vec<Requirement>),
}

impl Requirement {
    pub fn has(item: ItemIdx) -> Requirement {
        Requirement::Item { item, count: 1 }
    }

    pub fn has_at_least(item: ItemIdx, count: usize) -> Requirement {
        Requirement::Item { item, count }
    }

    pub fn all_of(items: Vec<ItemIdx>) -> Requirement {
        Requirement::AllOf(items)
    }

    pub fn at_least_n_of_set(items: Vec<ItemIdx>, count: usize) -> Requirement {
        Requirement::AtLeastNOfSet { items, count }
    }

    pub fn event(item: ItemIdx) -> Requirement {
        Requirement::Event(item)
    }

    pub fn make_and(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            if let Requirement::Free = req {
                continue;
            } else if let Requirement::And(and_reqs) = req {
                out_reqs.extend(and_reqs);
            } else {
                out_reqs.push(req);
            }
        }
        match out_reqs.len() {
            0 => Requirement::Free,
            1 => out_reqs.remove(0),
            _ => Requirement::And(out_reqs),
        }
    }

    pub fn is_satisfied<I: InventoryQuery + ?Sized>(&self, inventory: &I) -> bool {
        match self {
            Requirement::Free => true,
            &Requirement::Item { item, count } => inventory.count(item) >= count,
            Requirement::AllOf(items) => items.iter().all(|&item| inventory.count(item) >= 1),
            Requirement::AtLeastNOfSet { items, count } => {
                let total: usize = items.iter().map(|&item| inventory.count(item)).sum();
                total >= *count
            }
            &Requirement::Event(item) => inventory.count(item) >= 1,
            Requirement::And(reqs) => reqs.iter().all(|req| req.is_satisfied(inventory)),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Requirement::Free)
    }

    /// Every item the requirement inspects, in first-seen order.
    pub fn item_dependencies(&self) -> Vec<ItemIdx> {
        let mut out: Vec<ItemIdx> = vec![];
        self.collect_dependencies(&mut out);
        out
    }

    fn collect_dependencies(&self, out: &mut Vec<ItemIdx>) {
        let push = |item: ItemIdx, out: &mut Vec<ItemIdx>| {
            if !out.contains(&item) {
                out.push(item);
            }
        };
        match self {
            Requirement::Free => {}
            &Requirement::Item { item, .. } | &Requirement::Event(item) => push(item, out),
            Requirement::AllOf(items) | Requirement::AtLeastNOfSet { items, .. } => {
                for &item in items {
                    push(item, out);
                }
            }
            Requirement::And(reqs) => {
                for req in reqs {
                    req.collect_dependencies(out);
                }
            }
        }
    }

    pub fn describe(&self, catalog: &Catalog) -> String {
        let name = |item: &ItemIdx| {
            catalog
                .items
                .get(*item)
                .map(|i| i.name.clone())
                .unwrap_or_else(|| format!("#{item}"))
        };
        let names = |items: &[ItemIdx]| items.iter().map(name).collect::<Vec<_>>().join(", ");
        match self {
            Requirement::Free => "Free".to_string(),
            Requirement::Item { item, count } => format!("{} x{}", name(item), count),
            Requirement::AllOf(items) => format!("All of [{}]", names(items)),
            Requirement::AtLeastNOfSet { items, count } => {
                format!("{} total of [{}]", count, names(items))
            }
            Requirement::Event(item) => format!("Event {}", name(item)),
            Requirement::And(reqs) => reqs
                .iter()
                .map(|r| format!("({})", r.describe(catalog)))
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ItemIdx = 0;
    const B: ItemIdx = 1;
    const C: ItemIdx = 2;
    const D: ItemIdx = 3;

    fn inventory(items: &[(ItemIdx, usize)]) -> Inventory {
        let mut inv = Inventory::new(4);
        for &(item, n) in items {
            inv.collect_n(item, n);
        }
        inv
    }

    #[test]
    fn test_sum_semantics() {
        let req = Requirement::at_least_n_of_set(vec![A, B, C, D], 3);
        assert!(req.is_satisfied(&inventory(&[(A, 3)])));
        assert!(req.is_satisfied(&inventory(&[(A, 1), (B, 1), (C, 1)])));
        assert!(!req.is_satisfied(&inventory(&[(A, 1), (D, 1)])));
        assert!(!req.is_satisfied(&inventory(&[(B, 2)])));
        assert!(!req.is_satisfied(&inventory(&[])));
    }

    #[test]
    fn test_all_of_semantics() {
        let req = Requirement::all_of(vec![A, B, C, D]);
        assert!(req.is_satisfied(&inventory(&[(A, 1), (B, 1), (C, 1), (D, 1)])));
        assert!(req.is_satisfied(&inventory(&[(A, 5), (B, 1), (C, 2), (D, 1)])));
        assert!(!req.is_satisfied(&inventory(&[(A, 4), (B, 4), (C, 4)])));
    }

    #[test]
    fn test_absent_items_count_as_zero() {
        let inv = Inventory::default();
        assert_eq!(inv.count(1000), 0);
        assert!(!Requirement::has(1000).is_satisfied(&inv));
        assert!(Requirement::has_at_least(1000, 0).is_satisfied(&inv));
        assert!(Requirement::Free.is_satisfied(&inv));

        let mut counts: HashMap<ItemIdx, usize> = HashMap::new();
        counts.insert(B, 2);
        assert!(Requirement::has_at_least(B, 2).is_satisfied(&counts));
        assert!(!Requirement::event(A).is_satisfied(&counts));
    }

    #[test]
    fn test_make_and() {
        assert_eq!(Requirement::make_and(vec![]), Requirement::Free);
        assert_eq!(
            Requirement::make_and(vec![Requirement::Free, Requirement::has(A)]),
            Requirement::has(A)
        );
        let nested = Requirement::make_and(vec![
            Requirement::make_and(vec![Requirement::has(A), Requirement::event(B)]),
            Requirement::has_at_least(C, 2),
        ]);
        assert_eq!(
            nested,
            Requirement::And(vec![
                Requirement::has(A),
                Requirement::event(B),
                Requirement::has_at_least(C, 2),
            ])
        );
        assert!(!nested.is_satisfied(&inventory(&[(A, 1), (B, 1), (C, 1)])));
        assert!(nested.is_satisfied(&inventory(&[(A, 1), (B, 1), (C, 2)])));
    }

    #[test]
    fn test_item_dependencies() {
        let req = Requirement::make_and(vec![
            Requirement::all_of(vec![A, B]),
            Requirement::at_least_n_of_set(vec![B, C], 2),
        ]);
        assert_eq!(req.item_dependencies(), vec![A, B, C]);
    }

    #[test]
    fn test_serde_round_trip_preserves_equality() {
        let req = Requirement::make_and(vec![
            Requirement::at_least_n_of_set(vec![A, B, C, D], 3),
            Requirement::event(B),
        ]);
        let json = serde_json::to_string(&req).unwrap();
        let parsed: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }
}
