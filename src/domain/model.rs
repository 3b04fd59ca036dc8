use serde::Serialize;

pub const DEVICE_PROP: &str = "ro.product.product.device";
pub const PROJECT_PROP: &str = "ro.boot.prjname";
pub const SKU_PROP: &str = "ro.boot.product.hardware.sku";

/// Identity signals captured once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySignals {
    pub device_codename: String,
    pub project_code: i32,
    pub hardware_sku: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Project,
    Sku,
}

/// Partition prefixes carrying a copy of the model property, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyNamespace {
    Bootimage,
    Odm,
    Product,
    System,
    SystemExt,
    Vendor,
    VendorDlkm,
    Default,
}

impl PropertyNamespace {
    pub const ALL: [PropertyNamespace; 8] = [
        PropertyNamespace::Bootimage,
        PropertyNamespace::Odm,
        PropertyNamespace::Product,
        PropertyNamespace::System,
        PropertyNamespace::SystemExt,
        PropertyNamespace::Vendor,
        PropertyNamespace::VendorDlkm,
        PropertyNamespace::Default,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            PropertyNamespace::Bootimage => "bootimage.",
            PropertyNamespace::Odm => "odm.",
            PropertyNamespace::Product => "product.",
            PropertyNamespace::System => "system.",
            PropertyNamespace::SystemExt => "system_ext.",
            PropertyNamespace::Vendor => "vendor.",
            PropertyNamespace::VendorDlkm => "vendor_dlkm.",
            PropertyNamespace::Default => "",
        }
    }

    /// `ro.product.<namespace>model`
    pub fn model_key(self) -> String {
        format!("ro.product.{}model", self.prefix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnexpectedProject { project_code: i32 },
    UnexpectedSku { hardware_sku: i32 },
    UnrecognizedDevice { hardware_sku: i32, device_codename: String },
}

impl Diagnostic {
    pub fn axis(&self) -> Axis {
        match self {
            Diagnostic::UnexpectedProject { .. } => Axis::Project,
            Diagnostic::UnexpectedSku { .. } | Diagnostic::UnrecognizedDevice { .. } => Axis::Sku,
        }
    }
}

/// Resolver output. Either axis may be empty; both may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub by_project: Option<&'static str>,
    pub by_sku: Option<&'static str>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Models to write, project axis first.
    pub fn writes(&self) -> impl Iterator<Item = (Axis, &'static str)> {
        [
            self.by_project.map(|m| (Axis::Project, m)),
            self.by_sku.map(|m| (Axis::Sku, m)),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.by_project.is_none() && self.by_sku.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteKind {
    Updated,
    Created,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedWrite {
    pub key: String,
    pub value: String,
    pub axis: Axis,
    pub kind: WriteKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideReport {
    pub signals: IdentitySignals,
    pub resolution: Resolution,
    pub writes: Vec<AppliedWrite>,
}

impl OverrideReport {
    /// Value left on every namespace: the SKU result wins over the project result.
    pub fn final_model(&self) -> Option<&'static str> {
        self.resolution.by_sku.or(self.resolution.by_project)
    }

    pub fn failed_writes(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| w.kind == WriteKind::Failed)
            .count()
    }
}
