use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One fetch of the dashboard endpoint. Replaced wholesale on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub subscription: Option<SubscriptionInfo>,
    #[serde(default)]
    pub resource_groups: Vec<ResourceGroup>,
    #[serde(default)]
    pub virtual_machines: Vec<VirtualMachine>,
    #[serde(default)]
    pub storage_accounts: Vec<StorageAccount>,
    #[serde(default)]
    pub web_apps: Vec<WebApp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroup {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    pub tags: BTreeMap<String, String>,
    pub properties: ResourceGroupProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroupProperties {
    #[serde(deserialize_with = "nullable")]
    pub provisioning_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachine {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub resource_group: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub vm_size: String,
    #[serde(deserialize_with = "nullable")]
    pub os_type: String,
    #[serde(deserialize_with = "nullable")]
    pub power_state: PowerState,
    pub provisioning_state: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl VirtualMachine {
    /// Start is offered for anything that is not already running.
    pub fn can_start(&self) -> bool {
        self.power_state != PowerState::Running
    }

    /// Stop is offered for anything that is not already stopped.
    pub fn can_stop(&self) -> bool {
        self.power_state != PowerState::Stopped
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageAccount {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub resource_group: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub sku: String,
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    pub access_tier: Option<String>,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebApp {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub resource_group: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    pub default_host_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub host_names: Vec<String>,
    pub tags: BTreeMap<String, String>,
}

/// Azure reports unset strings as `null`; treat them like absent fields.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// VM power state as reported by the `PowerState/<code>` instance-view status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PowerState {
    Running,
    Stopped,
    Deallocated,
    Starting,
    Stopping,
    Deallocating,
    #[default]
    Unknown,
    Other(String),
}

impl PowerState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Deallocated => "deallocated",
            Self::Starting => "starting",
            Self::Stopping => "stopping",
            Self::Deallocating => "deallocating",
            Self::Unknown => "Unknown",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PowerState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "running" => Self::Running,
            "stopped" => Self::Stopped,
            "deallocated" => Self::Deallocated,
            "starting" => Self::Starting,
            "stopping" => Self::Stopping,
            "deallocating" => Self::Deallocating,
            "Unknown" | "unknown" | "" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<PowerState> for String {
    fn from(state: PowerState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    ResourceGroup,
    VirtualMachine,
    StorageAccount,
    WebApp,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        Self::ResourceGroup,
        Self::VirtualMachine,
        Self::StorageAccount,
        Self::WebApp,
    ];

    /// Tag used by the resource-type filter.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ResourceGroup => "resourcegroup",
            Self::VirtualMachine => "vm",
            Self::StorageAccount => "storage",
            Self::WebApp => "webapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ResourceGroup => "Resource Groups",
            Self::VirtualMachine => "Virtual Machines",
            Self::StorageAccount => "Storage Accounts",
            Self::WebApp => "Web Apps",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "resourcegroup" | "rg" => Some(Self::ResourceGroup),
            "vm" => Some(Self::VirtualMachine),
            "storage" => Some(Self::StorageAccount),
            "webapp" => Some(Self::WebApp),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Borrowed view of a single record, whichever sequence it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceRecord<'a> {
    ResourceGroup(&'a ResourceGroup),
    VirtualMachine(&'a VirtualMachine),
    StorageAccount(&'a StorageAccount),
    WebApp(&'a WebApp),
}

impl<'a> ResourceRecord<'a> {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::ResourceGroup(_) => ResourceKind::ResourceGroup,
            Self::VirtualMachine(_) => ResourceKind::VirtualMachine,
            Self::StorageAccount(_) => ResourceKind::StorageAccount,
            Self::WebApp(_) => ResourceKind::WebApp,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::ResourceGroup(rg) => &rg.name,
            Self::VirtualMachine(vm) => &vm.name,
            Self::StorageAccount(sa) => &sa.name,
            Self::WebApp(app) => &app.name,
        }
    }

    pub fn location(&self) -> &'a str {
        match self {
            Self::ResourceGroup(rg) => &rg.location,
            Self::VirtualMachine(vm) => &vm.location,
            Self::StorageAccount(sa) => &sa.location,
            Self::WebApp(app) => &app.location,
        }
    }

    /// Owning resource group. A resource group is its own scope.
    pub fn resource_group(&self) -> &'a str {
        match self {
            Self::ResourceGroup(rg) => &rg.name,
            Self::VirtualMachine(vm) => &vm.resource_group,
            Self::StorageAccount(sa) => &sa.resource_group,
            Self::WebApp(app) => &app.resource_group,
        }
    }
}

impl InventorySnapshot {
    /// Every record: groups, then VMs, storage accounts and web apps, each in API order.
    pub fn records(&self) -> impl Iterator<Item = ResourceRecord<'_>> {
        self.resource_groups
            .iter()
            .map(ResourceRecord::ResourceGroup)
            .chain(self.virtual_machines.iter().map(ResourceRecord::VirtualMachine))
            .chain(self.storage_accounts.iter().map(ResourceRecord::StorageAccount))
            .chain(self.web_apps.iter().map(ResourceRecord::WebApp))
    }

    /// First record of `kind` named `name`. Duplicate names resolve to the earliest entry.
    pub fn find(&self, kind: ResourceKind, name: &str) -> Option<ResourceRecord<'_>> {
        match kind {
            ResourceKind::ResourceGroup => self
                .resource_groups
                .iter()
                .find(|r| r.name == name)
                .map(ResourceRecord::ResourceGroup),
            ResourceKind::VirtualMachine => self
                .virtual_machines
                .iter()
                .find(|r| r.name == name)
                .map(ResourceRecord::VirtualMachine),
            ResourceKind::StorageAccount => self
                .storage_accounts
                .iter()
                .find(|r| r.name == name)
                .map(ResourceRecord::StorageAccount),
            ResourceKind::WebApp => self
                .web_apps
                .iter()
                .find(|r| r.name == name)
                .map(ResourceRecord::WebApp),
        }
    }

    pub fn find_vm(&self, name: &str) -> Option<&VirtualMachine> {
        self.virtual_machines.iter().find(|vm| vm.name == name)
    }

    pub fn len(&self) -> usize {
        self.resource_groups.len()
            + self.virtual_machines.len()
            + self.storage_accounts.len()
            + self.web_apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lifecycle command for a virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VmAction {
    Start,
    Stop,
    Restart,
}

impl VmAction {
    /// Trailing path segment of the action endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Restart => "restarted",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Start => "Failed to start VM",
            Self::Stop => "Failed to stop VM",
            Self::Restart => "Failed to restart VM",
        }
    }
}

impl fmt::Display for VmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arrays_deserialize_as_empty() {
        let snapshot: InventorySnapshot =
            serde_json::from_str(r#"{"virtual_machines":[{"name":"x"}]}"#).unwrap();
        assert_eq!(snapshot.virtual_machines.len(), 1);
        assert!(snapshot.storage_accounts.is_empty());
        assert!(snapshot.web_apps.is_empty());
        assert!(snapshot.resource_groups.is_empty());
        assert_eq!(snapshot.virtual_machines[0].power_state, PowerState::Unknown);
    }

    #[test]
    fn null_strings_read_as_empty() {
        let snapshot: InventorySnapshot = serde_json::from_str(
            r#"{"storage_accounts":[{"name":"sa1","status":null,"access_tier":null}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.storage_accounts[0].status, "");
        assert_eq!(snapshot.storage_accounts[0].access_tier, None);
    }

    #[test]
    fn power_state_keeps_unrecognised_codes() {
        let state = PowerState::from("hibernated".to_string());
        assert_eq!(state, PowerState::Other("hibernated".into()));
        assert_eq!(state.to_string(), "hibernated");
        assert_eq!(PowerState::from("running".to_string()), PowerState::Running);
    }

    #[test]
    fn find_returns_first_match_for_duplicate_names() {
        let snapshot = InventorySnapshot {
            virtual_machines: vec![
                VirtualMachine {
                    name: "dup".into(),
                    resource_group: "rg-first".into(),
                    ..Default::default()
                },
                VirtualMachine {
                    name: "dup".into(),
                    resource_group: "rg-second".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let found = snapshot.find(ResourceKind::VirtualMachine, "dup").unwrap();
        assert_eq!(found.resource_group(), "rg-first");
        assert!(snapshot.find(ResourceKind::WebApp, "dup").is_none());
    }

    #[test]
    fn start_and_stop_availability_follows_power_state() {
        let mut vm = VirtualMachine {
            power_state: PowerState::Running,
            ..Default::default()
        };
        assert!(!vm.can_start());
        assert!(vm.can_stop());

        vm.power_state = PowerState::Stopped;
        assert!(vm.can_start());
        assert!(!vm.can_stop());

        vm.power_state = PowerState::Deallocated;
        assert!(vm.can_start());
        assert!(vm.can_stop());
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ResourceKind::from_tag("database"), None);
    }
}
