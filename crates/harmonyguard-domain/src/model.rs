use harmonyguard_types::{AssemblyVersion, GamePath, ids};

/// One loaded assembly as reported by the host runtime.
///
/// Read-only snapshot: the analysis never mutates it. `version` is `None`
/// when the host could not read version metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedComponent {
    pub name: String,
    pub path: GamePath,
    pub version: Option<AssemblyVersion>,
}

/// Logical role of a recognized assembly identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentRole {
    InstallChecker,
    HarmonyV1,
    HarmonyV2,
}

impl ComponentRole {
    /// Both Harmony release lines land in the same bucket: they are mutually
    /// exclusive releases of one logical dependency.
    pub fn is_harmony(self) -> bool {
        matches!(self, ComponentRole::HarmonyV1 | ComponentRole::HarmonyV2)
    }
}

/// The complete set of recognized identities and their roles.
pub const IDENTITY_ROLES: &[(&str, ComponentRole)] = &[
    (ids::CHECKER_ASSEMBLY, ComponentRole::InstallChecker),
    (ids::HARMONY_V1_ASSEMBLY, ComponentRole::HarmonyV1),
    (ids::HARMONY_V2_ASSEMBLY, ComponentRole::HarmonyV2),
];

/// Exact, case-sensitive identity lookup. Unknown names get no role.
pub fn role_for_name(name: &str) -> Option<ComponentRole> {
    IDENTITY_ROLES
        .iter()
        .find(|(identity, _)| *identity == name)
        .map(|(_, role)| *role)
}

/// Classifier output: every recognized component in exactly one bucket,
/// input order preserved.
#[derive(Clone, Debug, Default)]
pub struct ComponentInventory {
    pub checker: Vec<LoadedComponent>,
    pub harmony: Vec<LoadedComponent>,
}

/// Partition the snapshot into identity buckets.
///
/// Pure function of the input list; components matching no known identity
/// are ignored.
pub fn classify(components: &[LoadedComponent]) -> ComponentInventory {
    let mut inventory = ComponentInventory::default();
    for component in components {
        match role_for_name(&component.name) {
            Some(ComponentRole::InstallChecker) => inventory.checker.push(component.clone()),
            Some(role) if role.is_harmony() => inventory.harmony.push(component.clone()),
            _ => {}
        }
    }
    inventory
}
