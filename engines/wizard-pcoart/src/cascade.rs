use crate::domains::PermissionsConfig;
use crate::events;
use crate::state::WizardState;

/// Owner rewrites applied when the permissions step is submitted.
///
/// The token admin always becomes the license minter. The role admin becomes
/// the owner of every already-configured component whose owner the user left
/// unset; an explicit owner choice is never overwritten. Runs only on the
/// permissions submit, never retroactively from an earlier step.
pub(crate) fn apply_cascade(
    mut state: WizardState,
    permissions: &PermissionsConfig,
) -> WizardState {
    if let Some(license) = state.steward_license.as_mut() {
        license.minter = Some(permissions.token_admin);
    }

    let mut owners_filled = 0;
    let default_owner = permissions.role_admin;
    let unset_owners = [
        state.pco_settings.as_mut().map(|c| &mut c.owner),
        state.creator_circle.as_mut().map(|c| &mut c.owner),
        state.auction.as_mut().map(|c| &mut c.owner),
        state.eligibility.as_mut().map(|c| &mut c.owner),
    ];
    for owner in unset_owners.into_iter().flatten() {
        if owner.is_none() {
            *owner = Some(default_owner);
            owners_filled += 1;
        }
    }

    events::emit_cascade_applied(owners_filled);
    state
}
