use crate::ops::Operation;
use crate::snapshot::{CAPABILITY_ORDER, PermissionSnapshot, RoleAssignments, RoleTable};

/// Minimal ordered operation list taking `current` to `desired`.
///
/// Emission order is fixed: ownership transfer first, then the admin role
/// handover, then one revoke/grant pair per capability in
/// [`CAPABILITY_ORDER`]. The admin handover grants before the caller
/// renounces, so the contract never passes through a zero-admin state.
/// Capability roles revoke before granting, so a dropped connection leaves a
/// hole rather than two holders.
pub fn diff_permissions(
    table: &RoleTable,
    current: &PermissionSnapshot,
    desired: &RoleAssignments,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    if desired.owner != current.effective_owner() {
        ops.push(Operation::TransferOwnership { new_owner: desired.owner });
    }

    if desired.role_admin != current.assignments.role_admin {
        ops.push(Operation::GrantRole { role: table.admin, account: desired.role_admin });
        ops.push(Operation::RenounceRole { role: table.admin });
    }

    for capability in CAPABILITY_ORDER {
        let from = current.assignments.holder(capability);
        let to = desired.holder(capability);
        if from != to {
            let role = table.role(capability);
            ops.push(Operation::RevokeRole { role, account: from });
            ops.push(Operation::GrantRole { role, account: to });
        }
    }

    ops
}
