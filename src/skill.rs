//! Catalog of distributable skill bundles
//!
//! Every bundle shares the same installer; only its metadata and asset
//! directory differ.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// A skill bundle that can be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkillKind {
    /// Taiwan e-invoice (ECPay, SmilePay, Amego)
    Invoice,
    /// Taiwan payment gateways (ECPay, NewebPay, PAYUNi)
    Payment,
    /// Taiwan logistics (ECPay, NewebPay, PAYUNi)
    Logistics,
}

/// Static metadata for a skill bundle
#[derive(Debug)]
pub struct SkillSpec {
    /// Folder name for assets and installed skill (e.g. "taiwan-invoice")
    pub name: &'static str,
    pub display_name: &'static str,
    /// Package name on the registry
    pub package: &'static str,
    pub providers: &'static [&'static str],
    pub features: &'static [&'static str],
    pub repository: &'static str,
    /// Prompts suggested to the user after installation
    pub sample_prompts: &'static [&'static str],
}

const INVOICE: SkillSpec = SkillSpec {
    name: "taiwan-invoice",
    display_name: "Taiwan Invoice Skill",
    package: "taiwan-invoice-skill",
    providers: &["ECPay", "SmilePay", "Amego"],
    features: &["Issue", "Void", "Allowance", "Query", "Print"],
    repository: "https://github.com/Moksa1123/taiwan-invoice",
    sample_prompts: &[
        "Help me integrate the ECPay e-invoice API",
        "Implement invoice voiding",
        "Query winning invoice numbers",
    ],
};

const PAYMENT: SkillSpec = SkillSpec {
    name: "taiwan-payment",
    display_name: "Taiwan Payment Skill",
    package: "taiwan-payment-skill",
    providers: &["ECPay", "NewebPay", "PAYUNi"],
    features: &[
        "Credit Card",
        "ATM Virtual Account",
        "CVS Code / Barcode",
        "Apple Pay / TWQR / BNPL",
    ],
    repository: "https://github.com/Moksa1123/taiwan-invoice",
    sample_prompts: &[
        "Help me integrate ECPay credit card checkout",
        "Add NewebPay ATM virtual account payments",
        "Verify the PAYUNi payment callback signature",
    ],
};

const LOGISTICS: SkillSpec = SkillSpec {
    name: "taiwan-logistics",
    display_name: "Taiwan Logistics Skill",
    package: "taiwan-logistics-skill",
    providers: &["ECPay", "NewebPay", "PAYUNi"],
    features: &["CVS Pickup", "Home Delivery", "Store Map", "Shipment Status"],
    repository: "https://github.com/Moksa1123/taiwan-invoice",
    sample_prompts: &[
        "Help me integrate ECPay convenience store pickup",
        "Create a NewebPay home delivery order",
        "Query shipment status from PAYUNi",
    ],
};

impl SkillKind {
    /// Metadata for this skill
    pub fn spec(self) -> &'static SkillSpec {
        match self {
            SkillKind::Invoice => &INVOICE,
            SkillKind::Payment => &PAYMENT,
            SkillKind::Logistics => &LOGISTICS,
        }
    }

    /// Directory holding this skill's templates and bundle under the assets root
    pub fn assets_dir(self, assets_root: &Path) -> PathBuf {
        assets_root.join(self.spec().name)
    }
}
