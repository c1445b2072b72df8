mod auction;
mod creator_circle;
mod eligibility;
mod license;
mod pco;
mod permissions;

pub use auction::{AuctionConfig, honorarium_preview};
pub use creator_circle::{AllocationEntry, CreatorCircleConfig};
pub use eligibility::EligibilityConfig;
pub use license::{MintType, StewardLicenseConfig};
pub use pco::PcoSettingsConfig;
pub use permissions::PermissionsConfig;
