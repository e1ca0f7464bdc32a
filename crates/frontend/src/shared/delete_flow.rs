//! Delete-confirmation workflow as an explicit state machine.
//!
//! The UI layer owns signals and side effects; this module owns the
//! transitions. Events go in, a phase change plus a list of effects comes
//! out, and nothing here touches the network or the DOM. The same flow
//! backs event-type deletion and schedule deletion.

use contracts::domain::membership::{can_delete, MembershipRole};

use crate::shared::http::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    /// No dialog, no request.
    Idle,
    /// Confirmation dialog open, nothing sent yet.
    ConfirmPending,
    /// Delete request in flight; the confirm control is disabled.
    Deleting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteEvent {
    TriggerPressed { id: i64 },
    DialogDismissed,
    Confirmed,
    MutationSucceeded,
    MutationFailed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteEffect {
    StartMutation { id: i64 },
    InvalidateList,
    ShowSuccess,
    ShowError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFlow {
    phase: DeletePhase,
    permitted: bool,
    target: Option<i64>,
}

impl DeleteFlow {
    pub fn new(role: Option<MembershipRole>) -> Self {
        Self {
            phase: DeletePhase::Idle,
            permitted: can_delete(role),
            target: None,
        }
    }

    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    /// Whether the acting user may delete at all; the trigger control is
    /// rendered disabled when this is false.
    pub fn permitted(&self) -> bool {
        self.permitted
    }

    pub fn dialog_open(&self) -> bool {
        matches!(
            self.phase,
            DeletePhase::ConfirmPending | DeletePhase::Deleting
        )
    }

    pub fn deleting(&self) -> bool {
        matches!(self.phase, DeletePhase::Deleting)
    }

    /// Apply one event; returns the side effects the caller must run.
    pub fn handle(&mut self, event: DeleteEvent) -> Vec<DeleteEffect> {
        match (self.phase, event) {
            (
                DeletePhase::Idle | DeletePhase::ConfirmPending,
                DeleteEvent::TriggerPressed { id },
            ) => {
                if !self.permitted {
                    return Vec::new();
                }
                self.phase = DeletePhase::ConfirmPending;
                self.target = Some(id);
                Vec::new()
            }
            (DeletePhase::ConfirmPending, DeleteEvent::Confirmed) => match self.target {
                Some(id) => {
                    self.phase = DeletePhase::Deleting;
                    vec![DeleteEffect::StartMutation { id }]
                }
                None => Vec::new(),
            },
            (DeletePhase::ConfirmPending, DeleteEvent::DialogDismissed) => {
                self.phase = DeletePhase::Idle;
                self.target = None;
                Vec::new()
            }
            (DeletePhase::Deleting, DeleteEvent::MutationSucceeded) => {
                self.phase = DeletePhase::Idle;
                self.target = None;
                vec![DeleteEffect::InvalidateList, DeleteEffect::ShowSuccess]
            }
            (DeletePhase::Deleting, DeleteEvent::MutationFailed(err)) => match err {
                // The server rejected the request outright: the dialog
                // closes together with the error toast.
                ApiError::Http { .. } => {
                    self.phase = DeletePhase::Idle;
                    self.target = None;
                    vec![DeleteEffect::ShowError(err.to_string())]
                }
                // The request may never have reached the server: the
                // dialog stays open for a manual retry.
                ApiError::Client { message } => {
                    self.phase = DeletePhase::ConfirmPending;
                    vec![DeleteEffect::ShowError(message)]
                }
            },
            // Everything else (dismiss while deleting, double confirm,
            // stray completions after a reset) is ignored.
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_flow(id: i64) -> DeleteFlow {
        let mut flow = DeleteFlow::new(None);
        let effects = flow.handle(DeleteEvent::TriggerPressed { id });
        assert!(effects.is_empty());
        assert_eq!(flow.phase(), DeletePhase::ConfirmPending);
        flow
    }

    #[test]
    fn member_role_keeps_the_trigger_inert() {
        let mut flow = DeleteFlow::new(Some(MembershipRole::Member));
        assert!(!flow.permitted());

        let effects = flow.handle(DeleteEvent::TriggerPressed { id: 7 });
        assert!(effects.is_empty());
        assert_eq!(flow.phase(), DeletePhase::Idle);
        assert!(!flow.dialog_open());
    }

    #[test]
    fn admin_and_sole_owner_may_open_the_dialog() {
        for role in [Some(MembershipRole::Admin), Some(MembershipRole::Owner), None] {
            let mut flow = DeleteFlow::new(role);
            flow.handle(DeleteEvent::TriggerPressed { id: 7 });
            assert!(flow.dialog_open(), "role {role:?} should open the dialog");
        }
    }

    #[test]
    fn confirm_starts_exactly_one_mutation() {
        let mut flow = pending_flow(42);

        let effects = flow.handle(DeleteEvent::Confirmed);
        assert_eq!(effects, vec![DeleteEffect::StartMutation { id: 42 }]);
        assert!(flow.deleting());

        // Double submission while in flight is swallowed.
        assert!(flow.handle(DeleteEvent::Confirmed).is_empty());
        assert!(flow.deleting());
    }

    #[test]
    fn success_invalidates_once_notifies_once_and_closes() {
        let mut flow = pending_flow(42);
        flow.handle(DeleteEvent::Confirmed);

        let effects = flow.handle(DeleteEvent::MutationSucceeded);
        assert_eq!(
            effects,
            vec![DeleteEffect::InvalidateList, DeleteEffect::ShowSuccess]
        );
        assert_eq!(flow.phase(), DeletePhase::Idle);
        assert!(!flow.dialog_open());
    }

    #[test]
    fn http_rejection_closes_the_dialog_with_status_and_message() {
        let mut flow = pending_flow(42);
        flow.handle(DeleteEvent::Confirmed);

        let effects = flow.handle(DeleteEvent::MutationFailed(ApiError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        }));
        assert_eq!(
            effects,
            vec![DeleteEffect::ShowError("403: Forbidden".to_string())]
        );
        assert_eq!(flow.phase(), DeletePhase::Idle);
        assert!(!flow.dialog_open());
    }

    #[test]
    fn client_failure_keeps_the_dialog_open_for_retry() {
        let mut flow = pending_flow(42);
        flow.handle(DeleteEvent::Confirmed);

        let effects = flow.handle(DeleteEvent::MutationFailed(ApiError::Client {
            message: "Network down".to_string(),
        }));
        assert_eq!(
            effects,
            vec![DeleteEffect::ShowError("Network down".to_string())]
        );
        assert_eq!(flow.phase(), DeletePhase::ConfirmPending);
        assert!(flow.dialog_open());

        // The retry reuses the original target.
        let effects = flow.handle(DeleteEvent::Confirmed);
        assert_eq!(effects, vec![DeleteEffect::StartMutation { id: 42 }]);
    }

    #[test]
    fn dismiss_closes_without_issuing_a_request() {
        let mut flow = pending_flow(42);

        assert!(flow.handle(DeleteEvent::DialogDismissed).is_empty());
        assert_eq!(flow.phase(), DeletePhase::Idle);

        // A confirm after dismissal has no target and does nothing.
        assert!(flow.handle(DeleteEvent::Confirmed).is_empty());
    }

    #[test]
    fn dismiss_is_ignored_while_the_request_is_in_flight() {
        let mut flow = pending_flow(42);
        flow.handle(DeleteEvent::Confirmed);

        assert!(flow.handle(DeleteEvent::DialogDismissed).is_empty());
        assert!(flow.deleting());
        assert!(flow.dialog_open());
    }
}
