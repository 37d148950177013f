use crate::model::{InventorySnapshot, ResourceKind, ResourceRecord};

/// A record as it is displayed in the resource list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCard {
    pub kind: ResourceKind,
    pub name: String,
    pub location: String,
    pub resource_group: String,
    /// Label/value lines shown under the title.
    pub lines: Vec<(&'static str, String)>,
    /// Lowercased title plus every displayed line, used for search.
    text: String,
}

impl ResourceCard {
    pub fn from_record(record: ResourceRecord<'_>) -> Self {
        let lines = match record {
            ResourceRecord::ResourceGroup(rg) => vec![
                ("Location", rg.location.clone()),
                ("State", rg.properties.provisioning_state.clone()),
                ("Tags", format!("{} tags", rg.tags.len())),
            ],
            ResourceRecord::VirtualMachine(vm) => vec![
                ("Resource Group", vm.resource_group.clone()),
                ("Size", vm.vm_size.clone()),
                ("OS", vm.os_type.clone()),
                ("Status", vm.power_state.to_string()),
            ],
            ResourceRecord::StorageAccount(sa) => vec![
                ("Resource Group", sa.resource_group.clone()),
                ("SKU", sa.sku.clone()),
                ("Kind", sa.kind.clone()),
                ("Status", sa.status.clone()),
            ],
            ResourceRecord::WebApp(app) => vec![
                ("Resource Group", app.resource_group.clone()),
                ("State", app.state.clone()),
                (
                    "Host Name",
                    app.default_host_name
                        .clone()
                        .unwrap_or_else(|| "N/A".to_string()),
                ),
            ],
        };

        let mut text = record.name().to_string();
        for (label, value) in &lines {
            text.push('\n');
            text.push_str(label);
            text.push_str(": ");
            text.push_str(value);
        }

        Self {
            kind: record.kind(),
            name: record.name().to_string(),
            location: record.location().to_string(),
            resource_group: record.resource_group().to_string(),
            lines,
            text: text.to_lowercase(),
        }
    }

    /// Full displayable text, lowercased.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of the status-like line, if the card has one.
    pub fn status(&self) -> Option<&str> {
        self.lines
            .iter()
            .find(|(label, _)| matches!(*label, "Status" | "State"))
            .map(|(_, value)| value.as_str())
    }
}

/// Render every record of the snapshot, in snapshot order.
pub fn render_cards(snapshot: &InventorySnapshot) -> Vec<ResourceCard> {
    snapshot.records().map(ResourceCard::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PowerState, VirtualMachine, WebApp};

    #[test]
    fn vm_card_shows_size_os_and_power_state() {
        let vm = VirtualMachine {
            name: "vm-a".into(),
            resource_group: "rg1".into(),
            location: "eastus".into(),
            vm_size: "Standard_B1s".into(),
            os_type: "Linux".into(),
            power_state: PowerState::Running,
            ..Default::default()
        };
        let card = ResourceCard::from_record(ResourceRecord::VirtualMachine(&vm));

        assert_eq!(card.kind, ResourceKind::VirtualMachine);
        assert_eq!(card.resource_group, "rg1");
        assert_eq!(card.status(), Some("running"));
        assert!(card.text().contains("size: standard_b1s"));
        assert!(card.text().starts_with("vm-a"));
    }

    #[test]
    fn web_app_without_host_name_shows_placeholder() {
        let app = WebApp {
            name: "site".into(),
            state: "Running".into(),
            ..Default::default()
        };
        let card = ResourceCard::from_record(ResourceRecord::WebApp(&app));
        assert!(card.lines.contains(&("Host Name", "N/A".to_string())));
    }
}
