//! Dialogue engine
//!
//! One inbound message in, exactly one reply out. The priority order and the
//! state transitions live in [`TRANSITION_TABLE`]; a single dispatch loop walks
//! it and the first rule whose guard holds wins. Nothing matching falls through
//! to [`FALLBACK_RULE`].

use std::sync::Arc;

use serde::Serialize;

use responder_config::DomainConfig;
use responder_core::{
    ConversationId, DialogueState, IntentCategory, Language, MessageGateway, ReplyChooser,
    SessionState, SessionStore,
};

use crate::catalog::{ReplyKey, ResponseCatalog};
use crate::chooser::RandomChooser;
use crate::intent::IntentMatcher;
use crate::session::{ConversationLocks, InMemorySessionStore};
use crate::AgentError;

/// What a continuation rule expects from the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Any trigger of the category
    Intent(IntentCategory),
    /// The language's affirmative token
    Affirmative,
}

/// Condition under which a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The message matches the category, whatever the pending flow
    Intent(IntentCategory),
    /// A flow is pending and the message continues it
    Continuation {
        pending: DialogueState,
        expect: Expect,
    },
}

/// Effect of a rule on the pending flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextState {
    /// Leave whatever is pending in place
    Keep,
    Set(DialogueState),
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub guard: Guard,
    pub reply: ReplyKey,
    pub next: NextState,
}

/// Rules in priority order
///
/// Greeting and identity keep a pending flow open. A continuation that does not
/// match falls through to the later rules and the flow stays pending.
pub const TRANSITION_TABLE: &[Rule] = &[
    Rule {
        name: "greeting",
        guard: Guard::Intent(IntentCategory::Greeting),
        reply: ReplyKey::Greeting,
        next: NextState::Keep,
    },
    Rule {
        name: "identity",
        guard: Guard::Intent(IntentCategory::Identity),
        reply: ReplyKey::Identity,
        next: NextState::Keep,
    },
    Rule {
        name: "wellbeing",
        guard: Guard::Intent(IntentCategory::Wellbeing),
        reply: ReplyKey::WellbeingAck,
        next: NextState::Set(DialogueState::AwaitingWellbeingFollowup),
    },
    Rule {
        name: "wellbeing_followup",
        guard: Guard::Continuation {
            pending: DialogueState::AwaitingWellbeingFollowup,
            expect: Expect::Intent(IntentCategory::WellbeingAffirmative),
        },
        reply: ReplyKey::ServiceOffer,
        next: NextState::Set(DialogueState::AwaitingServiceConfirmation),
    },
    Rule {
        name: "service_confirmation",
        guard: Guard::Continuation {
            pending: DialogueState::AwaitingServiceConfirmation,
            expect: Expect::Affirmative,
        },
        reply: ReplyKey::ServiceDetails,
        next: NextState::Set(DialogueState::Idle),
    },
    Rule {
        name: "price",
        guard: Guard::Intent(IntentCategory::PriceInquiry),
        reply: ReplyKey::Price,
        next: NextState::Keep,
    },
    Rule {
        name: "services",
        guard: Guard::Intent(IntentCategory::ServicesInquiry),
        reply: ReplyKey::Services,
        next: NextState::Keep,
    },
    Rule {
        name: "website",
        guard: Guard::Intent(IntentCategory::WebsiteInquiry),
        reply: ReplyKey::Website,
        next: NextState::Keep,
    },
    Rule {
        name: "contact",
        guard: Guard::Intent(IntentCategory::ContactInquiry),
        reply: ReplyKey::Contact,
        next: NextState::Keep,
    },
];

/// Fires when no rule of [`TRANSITION_TABLE`] does
pub const FALLBACK_RULE: Rule = Rule {
    name: "fallback",
    // never evaluated
    guard: Guard::Intent(IntentCategory::Greeting),
    reply: ReplyKey::Fallback,
    next: NextState::Keep,
};

impl NextState {
    fn apply(self, current: DialogueState) -> DialogueState {
        match self {
            NextState::Keep => current,
            NextState::Set(state) => state,
        }
    }
}

/// Outcome of processing one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub conversation_id: ConversationId,
    pub text: String,
    pub language: Language,
    /// Name of the rule that fired
    pub rule: &'static str,
    /// Pending flow after this message
    pub state: DialogueState,
}

/// Dialogue engine
pub struct DialogueEngine {
    matcher: IntentMatcher,
    catalog: ResponseCatalog,
    store: Arc<dyn SessionStore>,
    chooser: Arc<dyn ReplyChooser>,
    locks: ConversationLocks,
}

impl DialogueEngine {
    /// Engine over a validated rule set, in-memory store and random chooser
    pub fn new(config: &DomainConfig) -> Result<Self, AgentError> {
        config
            .validate()
            .map_err(|errors| AgentError::InvalidDomain(errors.join("; ")))?;

        Ok(Self {
            matcher: IntentMatcher::new(config),
            catalog: ResponseCatalog::new(config),
            store: Arc::new(InMemorySessionStore::new()),
            chooser: Arc::new(RandomChooser),
            locks: ConversationLocks::new(),
        })
    }

    /// Engine over a rule set loaded from a YAML or JSON file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, AgentError> {
        let config = DomainConfig::load(path)?;
        Self::new(&config)
    }

    /// Engine over the built-in rule set
    pub fn builtin() -> Self {
        let config = DomainConfig::builtin();
        Self {
            matcher: IntentMatcher::new(&config),
            catalog: ResponseCatalog::new(&config),
            store: Arc::new(InMemorySessionStore::new()),
            chooser: Arc::new(RandomChooser),
            locks: ConversationLocks::new(),
        }
    }

    /// Replace the session store
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the reply chooser
    pub fn with_chooser(mut self, chooser: Arc<dyn ReplyChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Current state of a conversation (created on first access)
    pub fn session(&self, id: &ConversationId) -> SessionState {
        let lock = self.locks.lock_for(id);
        let _guard = lock.lock();
        self.store.get(id)
    }

    /// First rule whose guard holds for `text` in `pending`
    pub fn evaluate(&self, text: &str, language: Language, pending: DialogueState) -> &'static Rule {
        TRANSITION_TABLE
            .iter()
            .find(|rule| self.guard_holds(rule.guard, text, language, pending))
            .unwrap_or(&FALLBACK_RULE)
    }

    fn guard_holds(&self, guard: Guard, text: &str, language: Language, pending: DialogueState) -> bool {
        match guard {
            Guard::Intent(category) => self.matcher.matches(text, language, category),
            Guard::Continuation {
                pending: required,
                expect,
            } => {
                pending == required
                    && match expect {
                        Expect::Intent(category) => self.matcher.matches(text, language, category),
                        Expect::Affirmative => self.matcher.is_affirmative(text, language),
                    }
            }
        }
    }

    /// Process one inbound message
    ///
    /// Total: every input yields exactly one reply. The state record is written
    /// back even when unchanged. Messages for the same conversation are
    /// serialized; different conversations proceed in parallel.
    pub fn process(&self, conversation_id: &ConversationId, raw_text: &str) -> Reply {
        let text = raw_text.to_lowercase();
        let language = Language::detect(&text);

        let lock = self.locks.lock_for(conversation_id);
        let _guard = lock.lock();

        let previous = self.store.get(conversation_id).pending_question;
        let rule = self.evaluate(&text, language, previous);
        let state = rule.next.apply(previous);
        self.store.set(conversation_id, SessionState::new(state));

        let reply = self
            .catalog
            .select(language, rule.reply, self.chooser.as_ref());

        tracing::debug!(
            conversation_id = %conversation_id,
            language = %language,
            rule = rule.name,
            matched = ?self.matcher.matched_categories(&text, language),
            from = %previous,
            to = %state,
            "Processed message"
        );

        Reply {
            conversation_id: conversation_id.clone(),
            text: reply,
            language,
            rule: rule.name,
            state,
        }
    }

    /// Process a message and hand the reply to the gateway
    ///
    /// A delivery failure is logged and otherwise ignored; the state transition
    /// has already happened.
    pub async fn on_message(
        &self,
        conversation_id: &ConversationId,
        raw_text: &str,
        gateway: &dyn MessageGateway,
    ) -> Reply {
        let reply = self.process(conversation_id, raw_text);

        if let Err(e) = gateway.send_reply(conversation_id, &reply.text).await {
            tracing::warn!(
                conversation_id = %conversation_id,
                gateway = gateway.name(),
                error = %e,
                "Reply delivery failed"
            );
        }

        reply
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::FixedChooser;

    fn engine() -> DialogueEngine {
        DialogueEngine::builtin().with_chooser(Arc::new(FixedChooser(0)))
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = TRANSITION_TABLE.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "greeting",
                "identity",
                "wellbeing",
                "wellbeing_followup",
                "service_confirmation",
                "price",
                "services",
                "website",
                "contact",
            ]
        );
    }

    #[test]
    fn test_only_flow_rules_change_state() {
        for rule in TRANSITION_TABLE {
            let changes = !matches!(rule.next, NextState::Keep);
            let flow = matches!(rule.name, "wellbeing" | "wellbeing_followup" | "service_confirmation");
            assert_eq!(changes, flow, "{}", rule.name);
        }
        assert_eq!(FALLBACK_RULE.next, NextState::Keep);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let engine = engine();
        let rule = engine.evaluate("fine", Language::English, DialogueState::AwaitingWellbeingFollowup);
        assert_eq!(rule.name, "wellbeing_followup");
        let rule = engine.evaluate("fine", Language::English, DialogueState::Idle);
        assert_eq!(rule.name, "fallback");
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_empty_text_falls_back_in_english() {
        let engine = engine();
        let reply = engine.process(&"x".into(), "");
        assert_eq!(reply.rule, "fallback");
        assert_eq!(reply.language, Language::English);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_state_persisted_when_unchanged() {
        let engine = engine();
        let id = ConversationId::from("new-sender");
        engine.process(&id, "hello");
        assert_eq!(engine.store().len(), 1);
        assert_eq!(engine.session(&id).pending_question, DialogueState::Idle);
    }

    #[test]
    fn test_new_rejects_invalid_domain() {
        let mut config = DomainConfig::builtin();
        config.english.keywords.greeting.clear();
        match DialogueEngine::new(&config) {
            Err(AgentError::InvalidDomain(message)) => {
                assert!(message.contains("en.keywords.greeting"))
            }
            Err(e) => panic!("expected InvalidDomain, got {e}"),
            Ok(_) => panic!("expected InvalidDomain"),
        }
    }
}
