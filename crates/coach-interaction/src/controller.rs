//! Drives one conversation: submission, the pending window, and delivery of
//! the reply.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use coach_core::conversation::{ConversationState, Message, RejectReason, validate_input};
use coach_core::credit::CreditLedger;
use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;

use crate::agent::{AgentReply, AgentRequest, CoachAgent};
use crate::event::InteractionEvent;
use coach_core::error::Result as CoachResult;

/// Conversation state shared between a controller and its in-flight reply.
pub type SharedConversation = Arc<Mutex<ConversationState>>;

/// Orchestrates chat turns for a single conversation.
///
/// Every mutation of the conversation goes through this type. At most one
/// reply is outstanding; it runs as a spawned task raced against a
/// [`CancellationToken`] so that dropping the controller suppresses it.
///
/// Several controllers may share one [`CreditLedger`].
///
/// `submit` spawns onto the current Tokio runtime and must be called from
/// within one; outside a runtime it panics before touching the conversation.
pub struct InteractionController {
    conversation: SharedConversation,
    ledger: Arc<CreditLedger>,
    agent: Arc<dyn CoachAgent>,
    cancel: CancellationToken,
    pending: Arc<watch::Sender<bool>>,
    events: Option<mpsc::UnboundedSender<InteractionEvent>>,
}

impl InteractionController {
    pub fn new(
        conversation: ConversationState,
        ledger: Arc<CreditLedger>,
        agent: Arc<dyn CoachAgent>,
    ) -> Self {
        let (pending, _) = watch::channel(conversation.is_pending());
        Self {
            conversation: Arc::new(Mutex::new(conversation)),
            ledger,
            agent,
            cancel: CancellationToken::new(),
            pending: Arc::new(pending),
            events: None,
        }
    }

    /// Publishes [`InteractionEvent`]s to `sender`.
    pub fn with_event_sender(mut self, sender: mpsc::UnboundedSender<InteractionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Submits a user message.
    ///
    /// On success the user message is already in the log and the reply is
    /// on its way; watch events or call [`wait_idle`](Self::wait_idle) to
    /// see it land. A rejection changes nothing.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. The conversation is left
    /// exactly as it was.
    pub fn submit(&self, text: &str) -> Result<(), RejectReason> {
        validate_input(text)?;

        // Spawned before any state change; the task idles until it is handed
        // a request and exits if `start` is dropped by a rejection.
        let (start, started) = oneshot::channel::<AgentRequest>();
        let delivery = Delivery {
            conversation: Arc::clone(&self.conversation),
            ledger: Arc::clone(&self.ledger),
            pending: Arc::clone(&self.pending),
            events: self.events.clone(),
        };
        let agent = Arc::clone(&self.agent);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let Ok(request) = started.await else {
                return;
            };
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(agent = agent.name(), "reply cancelled by teardown");
                    return;
                }
                outcome = agent.respond(request) => outcome,
            };
            delivery.deliver(outcome);
        });

        let request = {
            let mut state = lock(&self.conversation);
            if state.is_pending() {
                return Err(RejectReason::AlreadyPending);
            }
            if self.ledger.is_exhausted() {
                return Err(RejectReason::NoCreditsRemaining);
            }

            let message = state.open_request(text)?.clone();
            tracing::info!(
                conversation_id = state.conversation_id(),
                message_id = message.id,
                "accepted chat message"
            );
            emit(&self.events, InteractionEvent::MessageAppended(message));

            AgentRequest {
                conversation_id: state.conversation_id().to_string(),
                message: text.to_string(),
            }
        };

        self.pending.send_replace(true);
        emit(&self.events, InteractionEvent::PendingChanged(true));

        // The receiver only goes away with the runtime itself.
        let _ = start.send(request);

        Ok(())
    }

    /// Resolves once no reply is outstanding.
    pub async fn wait_idle(&self) {
        let mut receiver = self.pending.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = receiver.wait_for(|pending| !*pending).await;
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.conversation).is_pending()
    }

    /// A copy of the message log.
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.conversation).messages().to_vec()
    }

    pub fn conversation_id(&self) -> String {
        lock(&self.conversation).conversation_id().to_string()
    }

    /// True while no user message has been sent.
    pub fn shows_suggestions(&self) -> bool {
        !lock(&self.conversation).has_user_message()
    }

    /// Handle to the underlying state, for readers that outlive the
    /// controller.
    pub fn conversation(&self) -> SharedConversation {
        Arc::clone(&self.conversation)
    }

    pub fn ledger(&self) -> &Arc<CreditLedger> {
        &self.ledger
    }

    /// Ends the conversation. Any outstanding reply is cancelled and, if it
    /// has already finished, discarded without touching state or credits.
    pub fn teardown(self) {
        drop(self);
    }

    fn shutdown(&self) {
        self.cancel.cancel();
        let mut state = lock(&self.conversation);
        if !state.is_closed() {
            state.close();
            tracing::debug!(conversation_id = state.conversation_id(), "conversation closed");
        }
        drop(state);
        self.pending.send_replace(false);
    }
}

impl Drop for InteractionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// What a finished reply needs to apply itself.
struct Delivery {
    conversation: SharedConversation,
    ledger: Arc<CreditLedger>,
    pending: Arc<watch::Sender<bool>>,
    events: Option<mpsc::UnboundedSender<InteractionEvent>>,
}

impl Delivery {
    fn deliver(self, outcome: CoachResult<AgentReply>) {
        let mut state = lock(&self.conversation);
        if state.is_closed() {
            tracing::debug!("reply arrived after teardown, dropping it");
            return;
        }

        match outcome {
            Ok(reply) => {
                // Another conversation on the same ledger may have spent the
                // last credit while this reply was in flight.
                if !self.ledger.try_decrement() {
                    state.abandon_request();
                    tracing::warn!(
                        conversation_id = state.conversation_id(),
                        "credits ran out before the reply landed"
                    );
                    emit(
                        &self.events,
                        InteractionEvent::Failed {
                            message: RejectReason::NoCreditsRemaining.to_string(),
                        },
                    );
                } else {
                    if let Some(id) = reply.conversation_id {
                        state.set_conversation_id(id);
                    }
                    if let Some(message) = state.complete_request(reply.content, reply.intent) {
                        let message = message.clone();
                        let remaining = self.ledger.remaining();
                        tracing::info!(
                            conversation_id = state.conversation_id(),
                            message_id = message.id,
                            intent = %reply.intent,
                            remaining,
                            "delivered reply"
                        );
                        emit(&self.events, InteractionEvent::MessageAppended(message));
                        emit(&self.events, InteractionEvent::CreditsChanged { remaining });
                    }
                }
            }
            Err(err) => {
                state.abandon_request();
                tracing::warn!(
                    conversation_id = state.conversation_id(),
                    error = %err,
                    "reply failed"
                );
                emit(
                    &self.events,
                    InteractionEvent::Failed {
                        message: err.user_message(),
                    },
                );
            }
        }
        drop(state);

        self.pending.send_replace(false);
        emit(&self.events, InteractionEvent::PendingChanged(false));
    }
}

fn lock(conversation: &Mutex<ConversationState>) -> MutexGuard<'_, ConversationState> {
    conversation.lock().unwrap_or_else(PoisonError::into_inner)
}

fn emit(events: &Option<mpsc::UnboundedSender<InteractionEvent>>, event: InteractionEvent) {
    if let Some(sender) = events {
        // Non-blocking send - if the receiver is dropped we just skip
        let _ = sender.send(event);
    }
}
