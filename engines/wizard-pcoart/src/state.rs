use serde::{Deserialize, Serialize};

use crate::cascade::apply_cascade;
use crate::domains::{
    AuctionConfig, CreatorCircleConfig, EligibilityConfig, PcoSettingsConfig, PermissionsConfig,
    StewardLicenseConfig,
};
use crate::errors::WizardError;
use crate::events;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    ArtLicense,
    PcoSettings,
    CreatorCircle,
    Auction,
    Eligibility,
    Permissions,
    Review,
}

impl WizardStep {
    pub(crate) fn next(self) -> WizardStep {
        match self {
            Self::ArtLicense => Self::PcoSettings,
            Self::PcoSettings => Self::CreatorCircle,
            Self::CreatorCircle => Self::Auction,
            Self::Auction => Self::Eligibility,
            Self::Eligibility => Self::Permissions,
            Self::Permissions | Self::Review => Self::Review,
        }
    }

    pub(crate) fn prev(self) -> WizardStep {
        match self {
            Self::ArtLicense | Self::PcoSettings => Self::ArtLicense,
            Self::CreatorCircle => Self::PcoSettings,
            Self::Auction => Self::CreatorCircle,
            Self::Eligibility => Self::Auction,
            Self::Permissions => Self::Eligibility,
            Self::Review => Self::Permissions,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::ArtLicense => "art-license",
            Self::PcoSettings => "pco-settings",
            Self::CreatorCircle => "creator-circle",
            Self::Auction => "auction",
            Self::Eligibility => "eligibility",
            Self::Permissions => "permissions",
            Self::Review => "review",
        };
        f.write_str(label)
    }
}

/// One submitted step's worth of configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepInput {
    ArtLicense(StewardLicenseConfig),
    PcoSettings(PcoSettingsConfig),
    CreatorCircle(CreatorCircleConfig),
    Auction(AuctionConfig),
    Eligibility(EligibilityConfig),
    Permissions(PermissionsConfig),
}

impl StepInput {
    pub fn step(&self) -> WizardStep {
        match self {
            Self::ArtLicense(_) => WizardStep::ArtLicense,
            Self::PcoSettings(_) => WizardStep::PcoSettings,
            Self::CreatorCircle(_) => WizardStep::CreatorCircle,
            Self::Auction(_) => WizardStep::Auction,
            Self::Eligibility(_) => WizardStep::Eligibility,
            Self::Permissions(_) => WizardStep::Permissions,
        }
    }
}

/// Accumulated configuration across the six domains. Sub-objects stay `None`
/// until their step has been submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardState {
    pub steward_license: Option<StewardLicenseConfig>,
    pub pco_settings: Option<PcoSettingsConfig>,
    pub creator_circle: Option<CreatorCircleConfig>,
    pub auction: Option<AuctionConfig>,
    pub eligibility: Option<EligibilityConfig>,
    pub permissions: Option<PermissionsConfig>,
}

/// The wizard value: accumulated state plus the step pointer. All transitions
/// return a new value; a failed transition leaves the original untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wizard {
    state: WizardState,
    step: WizardStep,
    editing_from_review: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Validate `input` against the current step's constraints, merge it, and
    /// move forward one step. After a review-initiated edit the wizard
    /// returns to review instead.
    pub fn advance(&self, input: StepInput) -> Result<Wizard, WizardError> {
        if input.step() != self.step {
            return Err(WizardError::wrong_step(self.step, &input));
        }

        let mut next = self.clone();
        match input {
            StepInput::ArtLicense(config) => {
                config.validate()?;
                next.state.steward_license = Some(config);
            }
            StepInput::PcoSettings(config) => {
                config.validate()?;
                next.state.pco_settings = Some(config);
            }
            StepInput::CreatorCircle(config) => {
                config.validate()?;
                next.state.creator_circle = Some(config);
            }
            StepInput::Auction(config) => {
                config.validate()?;
                next.state.auction = Some(config);
            }
            StepInput::Eligibility(config) => {
                config.validate()?;
                next.state.eligibility = Some(config);
            }
            StepInput::Permissions(config) => {
                config.validate()?;
                next.state = apply_cascade(next.state, &config);
                next.state.permissions = Some(config);
            }
        }

        next.step = if next.editing_from_review {
            next.editing_from_review = false;
            WizardStep::Review
        } else {
            self.step.next()
        };
        events::emit_step_advanced(self.step, next.step);
        Ok(next)
    }

    /// Skip an optional step without recording configuration. Only the
    /// creator-circle and permissions steps are skippable; the other four
    /// domains are mandatory at finalize.
    pub fn skip(&self) -> Result<Wizard, WizardError> {
        match self.step {
            WizardStep::CreatorCircle | WizardStep::Permissions => {
                let mut next = self.clone();
                next.step = if next.editing_from_review {
                    next.editing_from_review = false;
                    WizardStep::Review
                } else {
                    self.step.next()
                };
                events::emit_step_advanced(self.step, next.step);
                Ok(next)
            }
            step => Err(WizardError::InvalidTransition(format!(
                "the {step} step cannot be skipped"
            ))),
        }
    }

    /// Move the step pointer back one without touching accumulated state.
    /// No-op on the first step.
    pub fn retreat(&self) -> Wizard {
        let mut prev = self.clone();
        prev.step = self.step.prev();
        if prev.step != self.step {
            events::emit_step_retreated(self.step, prev.step);
        }
        prev
    }

    /// Jump directly to an earlier step for editing. Only available from
    /// review; the edited step's next successful submit returns to review.
    pub fn jump_to(&self, step: WizardStep) -> Result<Wizard, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::InvalidTransition(
                "direct step editing is only available from review".into(),
            ));
        }
        if step == WizardStep::Review {
            return Ok(self.clone());
        }
        let mut edited = self.clone();
        edited.step = step;
        edited.editing_from_review = true;
        events::emit_review_edit(step);
        Ok(edited)
    }
}
