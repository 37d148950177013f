use crate::model::InventorySnapshot;

const VM_MONTHLY_USD: u64 = 50;
const STORAGE_MONTHLY_USD: u64 = 20;
const WEB_APP_MONTHLY_USD: u64 = 30;

/// Headline counts plus a flat-rate cost estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub resource_groups: usize,
    pub virtual_machines: usize,
    pub storage_accounts: usize,
    pub web_apps: usize,
    pub estimated_monthly_cost: u64,
}

impl InventoryStats {
    pub fn from_snapshot(snapshot: &InventorySnapshot) -> Self {
        let virtual_machines = snapshot.virtual_machines.len();
        let storage_accounts = snapshot.storage_accounts.len();
        let web_apps = snapshot.web_apps.len();
        Self {
            resource_groups: snapshot.resource_groups.len(),
            virtual_machines,
            storage_accounts,
            web_apps,
            estimated_monthly_cost: virtual_machines as u64 * VM_MONTHLY_USD
                + storage_accounts as u64 * STORAGE_MONTHLY_USD
                + web_apps as u64 * WEB_APP_MONTHLY_USD,
        }
    }

    /// e.g. `$5,000/month`
    pub fn cost_display(&self) -> String {
        format!("${}/month", group_thousands(self.estimated_monthly_cost))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StorageAccount, VirtualMachine, WebApp};

    #[test]
    fn estimate_uses_flat_rates() {
        let snapshot = InventorySnapshot {
            virtual_machines: vec![VirtualMachine::default(), VirtualMachine::default()],
            storage_accounts: vec![StorageAccount::default()],
            web_apps: vec![WebApp::default()],
            ..Default::default()
        };
        let stats = InventoryStats::from_snapshot(&snapshot);
        assert_eq!(stats.virtual_machines, 2);
        assert_eq!(stats.resource_groups, 0);
        assert_eq!(stats.cost_display(), "$150/month");
    }

    #[test]
    fn large_estimates_are_grouped() {
        let snapshot = InventorySnapshot {
            virtual_machines: vec![VirtualMachine::default(); 100],
            ..Default::default()
        };
        assert_eq!(InventoryStats::from_snapshot(&snapshot).cost_display(), "$5,000/month");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
