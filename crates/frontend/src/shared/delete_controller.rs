//! Leptos-side owner of the delete-confirmation workflow.
//!
//! Wires the pure [`DeleteFlow`] to signals, the mutation transport, the
//! query cache and the toast surface. One controller per deletable list;
//! all collaborators are constructor-injected.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::domain::membership::MembershipRole;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::delete_flow::{DeleteEffect, DeleteEvent, DeleteFlow};
use crate::shared::http::ApiError;
use crate::shared::query::{QueryClient, QueryKey};
use crate::shared::toast::ToastService;

pub type DeleteMutation =
    Arc<dyn Fn(i64) -> Pin<Box<dyn Future<Output = Result<(), ApiError>>>> + Send + Sync>;

#[derive(Clone)]
pub struct DeleteController {
    flow: RwSignal<DeleteFlow>,
    cache: QueryClient,
    toasts: ToastService,
    list_query: QueryKey,
    success_message: &'static str,
    mutation: DeleteMutation,
}

impl DeleteController {
    /// `mutation` is the delete call keyed by entity id, usually an
    /// `async fn(i64) -> Result<(), ApiError>` from a domain `api` module.
    pub fn new<Fut>(
        role: Option<MembershipRole>,
        cache: QueryClient,
        toasts: ToastService,
        list_query: QueryKey,
        success_message: &'static str,
        mutation: impl Fn(i64) -> Fut + Send + Sync + 'static,
    ) -> Self
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let mutation: DeleteMutation = Arc::new(move |id| {
            let request: Pin<Box<dyn Future<Output = Result<(), ApiError>>>> =
                Box::pin(mutation(id));
            request
        });
        Self {
            flow: RwSignal::new(DeleteFlow::new(role)),
            cache,
            toasts,
            list_query,
            success_message,
            mutation,
        }
    }

    pub fn dialog_open(&self) -> Signal<bool> {
        let flow = self.flow;
        Signal::derive(move || flow.with(|f| f.dialog_open()))
    }

    pub fn deleting(&self) -> Signal<bool> {
        let flow = self.flow;
        Signal::derive(move || flow.with(|f| f.deleting()))
    }

    /// Static permission check; drives the disabled state of the trigger.
    pub fn permitted(&self) -> bool {
        self.flow.with_untracked(|f| f.permitted())
    }

    pub fn request_delete(&self, id: i64) {
        self.dispatch(DeleteEvent::TriggerPressed { id });
    }

    pub fn dismiss(&self) {
        self.dispatch(DeleteEvent::DialogDismissed);
    }

    pub fn confirm(&self) {
        self.dispatch(DeleteEvent::Confirmed);
    }

    fn dispatch(&self, event: DeleteEvent) {
        let mut effects = Vec::new();
        self.flow.update(|flow| effects = flow.handle(event));
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: DeleteEffect) {
        match effect {
            DeleteEffect::StartMutation { id } => {
                let controller = self.clone();
                let request = (self.mutation)(id);
                spawn_local(async move {
                    match request.await {
                        Ok(()) => controller.dispatch(DeleteEvent::MutationSucceeded),
                        Err(err) => {
                            log::warn!("delete of {id} failed: {err}");
                            controller.dispatch(DeleteEvent::MutationFailed(err));
                        }
                    }
                });
            }
            DeleteEffect::InvalidateList => self.cache.invalidate(self.list_query),
            DeleteEffect::ShowSuccess => self.toasts.success(self.success_message),
            DeleteEffect::ShowError(message) => self.toasts.error(message),
        }
    }
}
