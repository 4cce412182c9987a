//! End-to-end conversations through the dialogue engine

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use responder_agent::{DialogueEngine, FixedChooser, RandomChooser, Reply};
use responder_config::DomainConfig;
use responder_core::{
    ConversationId, DialogueState, Error, Language, MessageGateway, SessionState, SessionStore,
};

fn engine() -> DialogueEngine {
    DialogueEngine::builtin().with_chooser(Arc::new(FixedChooser(0)))
}

fn send(engine: &DialogueEngine, id: &str, text: &str) -> Reply {
    engine.process(&ConversationId::from(id), text)
}

#[test]
fn wellbeing_round_trip() {
    let engine = engine();
    let config = DomainConfig::builtin();

    let reply = send(&engine, "alice", "How are you?");
    assert_eq!(reply.rule, "wellbeing");
    assert_eq!(reply.text, "I’m fine. How about you?");
    assert_eq!(reply.state, DialogueState::AwaitingWellbeingFollowup);

    let reply = send(&engine, "alice", "fine");
    assert_eq!(reply.rule, "wellbeing_followup");
    assert_eq!(reply.text, config.english.responses.service_offer);
    assert_eq!(reply.state, DialogueState::AwaitingServiceConfirmation);

    let reply = send(&engine, "alice", "Yes");
    assert_eq!(reply.rule, "service_confirmation");
    assert_eq!(reply.text, config.english.responses.service_details);
    assert!(reply.text.contains("https://wa.me/94765329117"));
    assert_eq!(reply.state, DialogueState::Idle);
    assert_eq!(
        engine.session(&"alice".into()).pending_question,
        DialogueState::Idle
    );
}

#[test]
fn sinhala_round_trip() {
    let engine = engine();
    let config = DomainConfig::builtin();

    let reply = send(&engine, "nimal", "ඔබට කොහොමද?");
    assert_eq!(reply.language, Language::Sinhala);
    assert_eq!(reply.rule, "wellbeing");
    assert_eq!(reply.text, config.sinhala.responses.wellbeing_ack);

    let reply = send(&engine, "nimal", "මම හොඳින් සිටිනවා");
    assert_eq!(reply.rule, "wellbeing_followup");
    assert_eq!(reply.text, config.sinhala.responses.service_offer);

    let reply = send(&engine, "nimal", "ඔව්");
    assert_eq!(reply.rule, "service_confirmation");
    assert_eq!(reply.text, config.sinhala.responses.service_details);
    assert_eq!(reply.state, DialogueState::Idle);
}

#[test]
fn stale_flow_is_left_dangling() {
    let engine = engine();

    send(&engine, "bob", "how are you");
    send(&engine, "bob", "im good");

    let reply = send(&engine, "bob", "price please");
    assert_eq!(reply.rule, "price");
    assert_eq!(reply.state, DialogueState::AwaitingServiceConfirmation);

    // the flow can still be completed later
    let reply = send(&engine, "bob", "yes");
    assert_eq!(reply.rule, "service_confirmation");
}

#[test]
fn affirmative_only_continues_the_matching_flow() {
    let engine = engine();

    // "yes" while waiting for a wellbeing answer is not a continuation
    send(&engine, "carol", "how are you");
    let reply = send(&engine, "carol", "yes");
    assert_eq!(reply.rule, "fallback");
    assert_eq!(reply.state, DialogueState::AwaitingWellbeingFollowup);

    // "fine" with nothing pending is not a continuation either
    let reply = send(&engine, "dave", "fine");
    assert_eq!(reply.rule, "fallback");
    assert_eq!(reply.state, DialogueState::Idle);
}

#[test]
fn greeting_does_not_clear_pending_flow() {
    let engine = engine();

    send(&engine, "erin", "how are you");
    let reply = send(&engine, "erin", "hello");
    assert_eq!(reply.rule, "greeting");
    assert_eq!(reply.state, DialogueState::AwaitingWellbeingFollowup);

    let reply = send(&engine, "erin", "i am good");
    assert_eq!(reply.rule, "wellbeing_followup");
}

#[test]
fn greeting_shadows_later_rules() {
    let engine = engine();

    let reply = send(&engine, "f", "hello, what is the price?");
    assert_eq!(reply.rule, "greeting");

    // order inside the text does not matter
    let reply = send(&engine, "f", "price? hello");
    assert_eq!(reply.rule, "greeting");

    // wellbeing outranks a pending continuation
    send(&engine, "g", "how are you");
    let reply = send(&engine, "g", "how are you doing, fine?");
    assert_eq!(reply.rule, "wellbeing");
}

#[test]
fn substring_matching_boundaries() {
    let engine = engine();

    // "hi" inside "this"
    assert_eq!(send(&engine, "h", "who is this").rule, "greeting");
    // "sup" inside "support"
    assert_eq!(send(&engine, "h", "support").rule, "greeting");
    assert_eq!(send(&engine, "h", "what is your name").rule, "identity");
    assert_eq!(send(&engine, "h", "what services do you offer").rule, "services");
    assert_eq!(send(&engine, "h", "any website examples").rule, "website");
    assert_eq!(send(&engine, "h", "can i call you").rule, "contact");
    assert_eq!(send(&engine, "h", "package cost").rule, "price");
}

#[test]
fn single_template_replies_are_verbatim() {
    let engine = engine();
    let en = DomainConfig::builtin().english.responses;

    assert_eq!(send(&engine, "i", "services").text, en.services);
    assert_eq!(send(&engine, "i", "website").text, en.website);
    assert_eq!(send(&engine, "i", "phone").text, en.contact);
}

#[test]
fn sinhala_script_selects_sinhala_tables() {
    let engine = engine();
    let si = DomainConfig::builtin().sinhala.responses;

    let reply = send(&engine, "j", "hello ආයුබෝවන්");
    assert_eq!(reply.language, Language::Sinhala);
    assert_eq!(reply.text, si.greetings[0]);

    // English triggers do not apply once the text is classified as Sinhala
    let reply = send(&engine, "j", "price මචං");
    assert_eq!(reply.rule, "fallback");
    assert_eq!(reply.text, si.fallbacks[0]);
}

const ENGLISH_SERVICE_DETAILS: &str = "Instead of an old 2D website, get a 3D Animated Website for your business! \
Yes, you can get an international-level website starting from Rs. 40,000.

Features you get from Venas International:

1. Free domain for the first year
2. Choose your custom animations
3. Lifetime free hosting
4. 12 free adverts (10 images + 2 videos)
5. Lifetime free website security
6. Free AI chatbot (can chat with many customers at once)

You can create your website using one of these three options:

1. Static Websites (e.g., rc7salon.com)
2. JavaScript Frameworks (e.g., ucolcampus.com)
3. Full-Stack Frameworks

Contact us today on WhatsApp: https://wa.me/94765329117";

const SINHALA_SERVICE_DETAILS: &str = "පරණ තාලේ 2D වෙබ්සයිට් එකක් වෙනුවට 3D Animated වෙබ්සයිට් එකක් ඔයාගේ බිස්නස් එකට? \
ඔව්, මේ ජාත්යන්තර මට්ටමේ Website එක Rs. 40,000 සිට හදාගන්න දැන් ඔයාටත් අවස්ථාව තියෙනවා.

අපෙන් ලැබෙන විශේෂාංග:

1. Domain එක පලමු වසර නොමිලේ
2. Custom animations ඔබට තෝරාගන්න පුළුවන්
3. Website එකට lifetime free hosting
4. නොමිලේ වෙලද දැන්වීම් 12ක් (10 adverts and 2 videos)
5. Website security lifetime free
6. Free AI chatbot (පාරිභෝගිකයන් සමග එකවර කතා කළ හැක)

ඔබට අවශ්\u{200d}යම වන්නේ පහත ක්\u{200d}රම තුනෙන් එකක්:

1. Static Websites (ตัวอย่าง: rc7salon.com)
2. JavaScript Frameworks (ตัวอย่าง: ucolcampus.com)
3. Full-Stack Frameworks

අදම WhatsApp කරන්න: https://wa.me/94765329117";

#[test]
fn service_details_match_published_text() {
    let engine = engine();

    send(&engine, "dilan", "how are you");
    send(&engine, "dilan", "fine");
    let reply = send(&engine, "dilan", "yes");
    assert_eq!(reply.rule, "service_confirmation");
    assert_eq!(reply.text, ENGLISH_SERVICE_DETAILS);

    send(&engine, "sunil", "ඔබට කොහොමද");
    send(&engine, "sunil", "හොඳින්");
    let reply = send(&engine, "sunil", "ඔව්");
    assert_eq!(reply.rule, "service_confirmation");
    assert_eq!(reply.text, SINHALA_SERVICE_DETAILS);
    assert!(reply.text.contains("(ตัวอย่าง: rc7salon.com)"));
}

#[test]
fn straight_apostrophe_phrases_fall_back() {
    let engine = engine();

    let reply = send(&engine, "erin", "how's it going");
    assert_eq!(reply.rule, "fallback");
    assert_eq!(reply.state, DialogueState::Idle);

    send(&engine, "erin", "how are you");
    let reply = send(&engine, "erin", "i'm good");
    assert_eq!(reply.rule, "fallback");
    assert_eq!(reply.state, DialogueState::AwaitingWellbeingFollowup);

    let reply = send(&engine, "erin", "i’m good");
    assert_eq!(reply.rule, "wellbeing_followup");
}

#[test]
fn conversations_do_not_share_state() {
    let engine = Arc::new(engine());

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let id = format!("user-{n}");
                for _ in 0..50 {
                    send(&engine, &id, "how are you");
                    if n % 2 == 0 {
                        send(&engine, &id, "fine");
                    }
                }
                id
            })
        })
        .collect();

    for handle in handles {
        let id = handle.join().unwrap();
        let n: usize = id.trim_start_matches("user-").parse().unwrap();
        let expected = if n % 2 == 0 {
            DialogueState::AwaitingServiceConfirmation
        } else {
            DialogueState::AwaitingWellbeingFollowup
        };
        assert_eq!(engine.session(&id.as_str().into()).pending_question, expected);
    }
    assert_eq!(engine.store().len(), 16);
}

#[test]
fn same_conversation_is_serialized() {
    let engine = Arc::new(engine());
    send(&engine, "k", "how are you");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || send(&engine, "k", "fine").rule)
        })
        .collect();

    let rules: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(rules.iter().filter(|r| **r == "wellbeing_followup").count(), 1);
    assert_eq!(rules.iter().filter(|r| **r == "fallback").count(), 7);
}

#[test]
fn fallback_selection_is_uniform() {
    let engine = DialogueEngine::builtin().with_chooser(Arc::new(RandomChooser));
    let fallbacks = DomainConfig::builtin().english.responses.fallbacks;

    let trials = 3000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..trials {
        let reply = send(&engine, "stats", "qwerty");
        assert_eq!(reply.rule, "fallback");
        *counts.entry(reply.text).or_default() += 1;
    }

    assert_eq!(counts.len(), fallbacks.len());
    let expected = trials / fallbacks.len();
    for candidate in &fallbacks {
        let count = counts.get(candidate).copied().unwrap_or(0);
        assert!(
            count > expected * 8 / 10 && count < expected * 12 / 10,
            "{count} of {trials} for {candidate}"
        );
    }
}

/// Store that records every write
#[derive(Default)]
struct RecordingStore {
    states: Mutex<HashMap<ConversationId, SessionState>>,
    writes: Mutex<usize>,
}

impl SessionStore for RecordingStore {
    fn get(&self, id: &ConversationId) -> SessionState {
        *self.states.lock().entry(id.clone()).or_default()
    }

    fn set(&self, id: &ConversationId, state: SessionState) {
        *self.writes.lock() += 1;
        self.states.lock().insert(id.clone(), state);
    }

    fn len(&self) -> usize {
        self.states.lock().len()
    }
}

#[test]
fn injected_store_is_written_every_message() {
    let store = Arc::new(RecordingStore::default());
    let engine = engine().with_store(store.clone());

    send(&engine, "l", "hello");
    send(&engine, "l", "qwerty");
    send(&engine, "l", "how are you");

    assert_eq!(*store.writes.lock(), 3);
    assert_eq!(
        store.get(&"l".into()).pending_question,
        DialogueState::AwaitingWellbeingFollowup
    );
}

/// Gateway that records deliveries, or fails every one
#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<(ConversationId, String)>>,
    fail: bool,
}

#[async_trait]
impl MessageGateway for RecordingGateway {
    async fn send_reply(&self, conversation_id: &ConversationId, text: &str) -> responder_core::Result<()> {
        if self.fail {
            return Err(Error::Gateway("connection refused".to_string()));
        }
        self.sent
            .lock()
            .push((conversation_id.clone(), text.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn on_message_delivers_reply() {
    let engine = engine();
    let gateway = RecordingGateway::default();
    let id = ConversationId::from("m");

    let reply = engine.on_message(&id, "who are you", &gateway).await;
    assert_eq!(reply.rule, "identity");

    let sent = gateway.sent.lock();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, id);
    assert_eq!(sent[0].1, reply.text);
}

#[tokio::test]
async fn delivery_failure_keeps_transition() {
    let engine = engine();
    let gateway = RecordingGateway {
        fail: true,
        ..Default::default()
    };
    let id = ConversationId::from("n");

    let reply = engine.on_message(&id, "how are you", &gateway).await;
    assert_eq!(reply.rule, "wellbeing");
    assert_eq!(
        engine.session(&id).pending_question,
        DialogueState::AwaitingWellbeingFollowup
    );
}
