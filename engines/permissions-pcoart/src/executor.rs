use pcoart_types::Address;

use crate::diff::diff_permissions;
use crate::errors::ReconcileError;
use crate::events;
use crate::ledger::PermissionLedger;
use crate::ops::Operation;
use crate::snapshot::{PermissionSnapshot, RoleAssignments, RoleTable};

/// Sequential executor for one token's reconcile runs.
///
/// Operations are submitted one at a time; each must confirm before the next
/// is issued. The confirmed prefix is dropped from `pending` as it lands, so
/// after a failure the struct holds exactly the unexecuted suffix and
/// [`Reconciler::retry`] never resubmits confirmed work. There is no
/// mid-sequence cancellation; a run ends in completion or failure.
pub struct Reconciler<L: PermissionLedger> {
    ledger: L,
    token: Address,
    pending: Vec<Operation>,
    completed: usize,
    total: usize,
}

impl<L: PermissionLedger> Reconciler<L> {
    pub fn new(ledger: L, token: Address) -> Self {
        Self { ledger, token, pending: Vec::new(), completed: 0, total: 0 }
    }

    pub fn token(&self) -> Address {
        self.token
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Unexecuted operations retained from a failed run.
    pub fn pending(&self) -> &[Operation] {
        &self.pending
    }

    /// Confirmed operations of the current run, for "N of M" display.
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn in_progress(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Diff `desired` against `base` and execute the resulting operations.
    ///
    /// Errors with `InvalidState` while a failed run's suffix is still
    /// pending, and with `StaleSnapshot` when the chain's effective owner
    /// moved between the `base` read and now; neither submits anything. On
    /// full success the snapshot is re-read and returned.
    pub async fn reconcile(
        &mut self,
        table: &RoleTable,
        base: &PermissionSnapshot,
        desired: &RoleAssignments,
    ) -> Result<PermissionSnapshot, ReconcileError> {
        if self.in_progress() {
            return Err(ReconcileError::InvalidState(
                "a previous reconcile run is still pending; retry or finish it first".into(),
            ));
        }

        let ops = diff_permissions(table, base, desired);
        events::emit_plan_computed(&self.token, ops.len());
        if ops.is_empty() {
            return self.read_snapshot().await;
        }

        let fresh = self.read_snapshot().await?;
        if fresh.effective_owner() != base.effective_owner() {
            return Err(ReconcileError::StaleSnapshot {
                expected: base.effective_owner(),
                found: fresh.effective_owner(),
            });
        }

        self.total = ops.len();
        self.completed = 0;
        self.pending = ops;
        self.run().await
    }

    /// Resubmit only the unexecuted suffix of a failed run.
    pub async fn retry(&mut self) -> Result<PermissionSnapshot, ReconcileError> {
        if !self.in_progress() {
            return Err(ReconcileError::InvalidState("nothing to retry".into()));
        }
        self.run().await
    }

    async fn run(&mut self) -> Result<PermissionSnapshot, ReconcileError> {
        while let Some(op) = self.pending.first().copied() {
            match self.ledger.submit_operation(self.token, &op).await {
                Ok(()) => {
                    self.pending.remove(0);
                    self.completed += 1;
                    events::emit_operation_confirmed(&self.token, &op, self.completed, self.total);
                }
                Err(e) => {
                    let reason = e.to_string();
                    events::emit_reconcile_failed(
                        &self.token,
                        self.completed,
                        self.pending.len(),
                        &reason,
                    );
                    return Err(if self.completed == 0 {
                        ReconcileError::OperationRejected { op, reason }
                    } else {
                        ReconcileError::PartialCompletion {
                            confirmed: self.completed,
                            remaining: self.pending.len(),
                            reason,
                        }
                    });
                }
            }
        }

        self.completed = 0;
        self.total = 0;
        events::emit_reconcile_complete(&self.token);
        self.read_snapshot().await
    }

    /// Accept a pending ownership transfer. Only the nominee may accept;
    /// independent of any reconcile run and carries its own error surface.
    pub async fn accept_ownership(
        &self,
        actor: Address,
        snapshot: &PermissionSnapshot,
    ) -> Result<(), ReconcileError> {
        if !snapshot.transfer_pending() {
            return Err(ReconcileError::InvalidState(
                "no ownership transfer is pending".into(),
            ));
        }
        if snapshot.nominee_owner != actor {
            return Err(ReconcileError::InvalidState(format!(
                "only the nominee {} may accept ownership",
                snapshot.nominee_owner
            )));
        }
        self.ledger
            .submit_operation(self.token, &Operation::AcceptOwnership)
            .await
            .map_err(|e| ReconcileError::OperationRejected {
                op: Operation::AcceptOwnership,
                reason: e.to_string(),
            })?;
        events::emit_ownership_accepted(&self.token, &actor);
        Ok(())
    }

    async fn read_snapshot(&self) -> Result<PermissionSnapshot, ReconcileError> {
        self.ledger
            .read_snapshot(self.token)
            .await
            .map_err(|e| ReconcileError::Ledger(e.to_string()))
    }
}
