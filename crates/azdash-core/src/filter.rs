use serde::{Deserialize, Serialize};

use crate::card::ResourceCard;

/// Search, type and location criteria, combined with AND. An empty criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub search_term: String,
    pub resource_type: String,
    pub location: String,
}

impl FilterPredicate {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.resource_type.is_empty() && self.location.is_empty()
    }
}

pub fn is_visible(card: &ResourceCard, predicate: &FilterPredicate) -> bool {
    if !predicate.search_term.is_empty()
        && !card.text().contains(&predicate.search_term.to_lowercase())
    {
        return false;
    }
    if !predicate.resource_type.is_empty() && predicate.resource_type != card.kind.tag() {
        return false;
    }
    if !predicate.location.is_empty() && predicate.location != card.location {
        return false;
    }
    true
}

/// Returns `(visible, total)`.
pub fn visible_count(cards: &[ResourceCard], predicate: &FilterPredicate) -> (usize, usize) {
    let visible = cards.iter().filter(|c| is_visible(c, predicate)).count();
    (visible, cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_cards;
    use crate::model::{InventorySnapshot, PowerState, StorageAccount, VirtualMachine};

    fn sample() -> Vec<ResourceCard> {
        let snapshot = InventorySnapshot {
            virtual_machines: vec![
                VirtualMachine {
                    name: "vm1-web".into(),
                    location: "eastus".into(),
                    power_state: PowerState::Running,
                    ..Default::default()
                },
                VirtualMachine {
                    name: "db-host".into(),
                    location: "westeurope".into(),
                    power_state: PowerState::Stopped,
                    ..Default::default()
                },
            ],
            storage_accounts: vec![StorageAccount {
                name: "logs".into(),
                location: "eastus".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        render_cards(&snapshot)
    }

    #[test]
    fn empty_predicate_shows_everything() {
        let cards = sample();
        let predicate = FilterPredicate::default();
        assert!(cards.iter().all(|c| is_visible(c, &predicate)));
        assert_eq!(visible_count(&cards, &predicate), (3, 3));
    }

    #[test]
    fn search_is_case_insensitive() {
        let cards = sample();
        let predicate = FilterPredicate {
            search_term: "VM1".into(),
            ..Default::default()
        };
        assert!(is_visible(&cards[0], &predicate));
        assert!(!is_visible(&cards[1], &predicate));
    }

    #[test]
    fn mismatched_type_hides_regardless_of_other_criteria() {
        let cards = sample();
        let predicate = FilterPredicate {
            search_term: String::new(),
            resource_type: "webapp".into(),
            location: "eastus".into(),
        };
        assert!(cards.iter().all(|c| !is_visible(c, &predicate)));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let cards = sample();
        let predicate = FilterPredicate {
            search_term: String::new(),
            resource_type: "vm".into(),
            location: "eastus".into(),
        };
        assert_eq!(visible_count(&cards, &predicate), (1, 3));
    }

    #[test]
    fn unknown_values_are_matched_literally() {
        let cards = sample();
        let predicate = FilterPredicate {
            location: "EastUS".into(),
            ..Default::default()
        };
        let (visible, total) = visible_count(&cards, &predicate);
        assert_eq!(visible, 0);
        assert!(visible <= total);
    }

    #[test]
    fn single_vm_filtered_to_storage_counts_zero_of_one() {
        let snapshot = InventorySnapshot {
            virtual_machines: vec![VirtualMachine {
                name: "vm-a".into(),
                power_state: PowerState::Running,
                ..Default::default()
            }],
            ..Default::default()
        };
        let predicate = FilterPredicate {
            resource_type: "storage".into(),
            ..Default::default()
        };
        assert_eq!(visible_count(&render_cards(&snapshot), &predicate), (0, 1));
    }
}
