use crate::model::{ResourceKind, ResourceRecord};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub fields: Vec<(String, String)>,
}

/// Everything shown in the details panel for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDetails {
    pub kind: ResourceKind,
    pub title: String,
    pub resource_group: String,
    pub sections: Vec<DetailSection>,
    /// Lifecycle availability. Always false for non-VM records.
    pub can_start: bool,
    pub can_stop: bool,
}

impl ResourceDetails {
    pub fn from_record(record: ResourceRecord<'_>) -> Self {
        let (sections, can_start, can_stop) = match record {
            ResourceRecord::VirtualMachine(vm) => (
                vec![
                    section(
                        "Basic Information",
                        [
                            ("Name", vm.name.clone()),
                            ("Resource Group", vm.resource_group.clone()),
                            ("Location", vm.location.clone()),
                            ("Status", vm.power_state.to_string()),
                        ],
                    ),
                    section(
                        "Configuration",
                        [
                            ("VM Size", vm.vm_size.clone()),
                            ("Operating System", vm.os_type.clone()),
                            ("Provisioning State", or_na(vm.provisioning_state.as_deref())),
                        ],
                    ),
                ],
                vm.can_start(),
                vm.can_stop(),
            ),
            ResourceRecord::StorageAccount(sa) => (
                vec![
                    section(
                        "Basic Information",
                        [
                            ("Name", sa.name.clone()),
                            ("Resource Group", sa.resource_group.clone()),
                            ("Location", sa.location.clone()),
                            ("Status", sa.status.clone()),
                        ],
                    ),
                    section(
                        "Configuration",
                        [
                            ("SKU", sa.sku.clone()),
                            ("Kind", sa.kind.clone()),
                            ("Access Tier", or_na(sa.access_tier.as_deref())),
                        ],
                    ),
                ],
                false,
                false,
            ),
            ResourceRecord::WebApp(app) => {
                let host = app.default_host_name.as_deref().filter(|h| !h.is_empty());
                (
                    vec![
                        section(
                            "Basic Information",
                            [
                                ("Name", app.name.clone()),
                                ("Resource Group", app.resource_group.clone()),
                                ("Location", app.location.clone()),
                                ("State", app.state.clone()),
                            ],
                        ),
                        section(
                            "Access Information",
                            [
                                ("Host Name", or_na(host)),
                                (
                                    "URL",
                                    host.map(|h| format!("https://{h}"))
                                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                                ),
                            ],
                        ),
                    ],
                    false,
                    false,
                )
            }
            ResourceRecord::ResourceGroup(rg) => {
                let tags = if rg.tags.is_empty() {
                    vec![("No tags assigned".to_string(), String::new())]
                } else {
                    rg.tags
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect()
                };
                (
                    vec![
                        section(
                            "Basic Information",
                            [
                                ("Name", rg.name.clone()),
                                ("Location", rg.location.clone()),
                                ("Provisioning State", rg.properties.provisioning_state.clone()),
                            ],
                        ),
                        DetailSection {
                            heading: "Tags",
                            fields: tags,
                        },
                    ],
                    false,
                    false,
                )
            }
        };

        Self {
            kind: record.kind(),
            title: record.name().to_string(),
            resource_group: record.resource_group().to_string(),
            sections,
            can_start,
            can_stop,
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

fn section<const N: usize>(heading: &'static str, fields: [(&str, String); N]) -> DetailSection {
    DetailSection {
        heading,
        fields: fields
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .collect(),
    }
}

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}
