//! Scripted intake chat: a linear step machine that collects a service
//! request (what, which installation, where) and checks the postcode
//! against the Rotterdam service area.
//!
//! This module is framework-free. User actions mutate the flow and hand
//! back [`ScheduledReply`] values; the presentation layer arms one timer
//! per entry and feeds the reply back through [`ChatFlow::deliver`].

use serde::Serialize;

/// Delay before a bot reply appears, in milliseconds.
pub const REPLY_DELAY_MS: u32 = 500;

/// Two-digit postcode prefixes we drive out to.
pub const SERVICE_AREA_PREFIXES: [&str; 8] = ["30", "31", "32", "28", "29", "26", "27", "33"];

const GREETING: &str = "Welkom bij UberAirco! 👋 Ik help u snel op weg.";
const ASK_REQUEST_TYPE: &str = "Wat kunnen wij voor u doen?";
const ASK_EQUIPMENT: &str = "Om welk type installatie gaat het?";
const ASK_POSTCODE: &str =
    "Top! Wat is uw postcode? Dan controleer ik of u binnen ons werkgebied valt.";
const IN_AREA: &str = "✅ Uitstekend, u valt binnen ons werkgebied!";
const CONFIRMATION: &str =
    "Bedankt voor uw vertrouwen in UberAirco. Wij nemen binnen 24 uur telefonisch contact met u op.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// One transcript entry. Appended only; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// The chat's position in its fixed sequence.
///
/// Progresses linearly: Greeting → RequestType → Equipment → Postcode →
/// Done. Each position allows at most one kind of input: option buttons
/// at `RequestType` and `Equipment`, free text at `Postcode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStep {
    Greeting,
    RequestType,
    Equipment,
    Postcode,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Install,
    Repair,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Airco,
    Pump,
}

/// Answers collected so far. Fields fill in as the chat advances and are
/// only cleared by starting a fresh [`ChatFlow`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceRequest {
    pub request_type: Option<RequestType>,
    pub equipment: Option<EquipmentKind>,
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Service(RequestType),
    Equipment(EquipmentKind),
}

/// A selectable answer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOption {
    pub choice: Choice,
    pub label: &'static str,
}

pub const REQUEST_OPTIONS: [ChatOption; 3] = [
    ChatOption {
        choice: Choice::Service(RequestType::Install),
        label: "🆕 Nieuwe installatie",
    },
    ChatOption {
        choice: Choice::Service(RequestType::Repair),
        label: "🔧 Reparatie of storing",
    },
    ChatOption {
        choice: Choice::Service(RequestType::Maintenance),
        label: "📋 Onderhoud",
    },
];

pub const EQUIPMENT_OPTIONS: [ChatOption; 2] = [
    ChatOption {
        choice: Choice::Equipment(EquipmentKind::Airco),
        label: "❄️ Airconditioning / Warmtepomp",
    },
    ChatOption {
        choice: Choice::Equipment(EquipmentKind::Pump),
        label: "💧 Waterpomp",
    },
];

/// A bot reply that is due after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    AskRequestType,
    AskEquipment,
    AskPostcode,
    PostcodeVerdict(String),
    Confirmation,
}

/// Request to arm a single-shot timer. Once returned it is expected to
/// fire; the flow never cancels a scheduled reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReply {
    pub delay_ms: u32,
    pub reply: BotReply,
}

impl ScheduledReply {
    fn after_delay(reply: BotReply) -> Self {
        Self {
            delay_ms: REPLY_DELAY_MS,
            reply,
        }
    }
}

/// Whether a postcode falls inside the service area. Membership is a
/// prefix check only; the shape of the rest of the code is not validated.
pub fn in_service_area(postcode: &str) -> bool {
    postcode
        .get(..2)
        .map_or(false, |prefix| SERVICE_AREA_PREFIXES.contains(&prefix))
}

/// State of one chat session: transcript, step cursor and collected
/// answers. Lives as long as the hosting page; closing the modal hides
/// it without resetting anything.
#[derive(Debug, Default)]
pub struct ChatFlow {
    messages: Vec<ChatMessage>,
    step: ChatStep,
    request: ServiceRequest,
}

impl Default for ChatStep {
    fn default() -> Self {
        Self::Greeting
    }
}

impl ChatFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn request(&self) -> &ServiceRequest {
        &self.request
    }

    /// Options for the current step. Empty while greeting, while waiting
    /// for the postcode and after conclusion.
    pub fn current_options(&self) -> &'static [ChatOption] {
        match self.step {
            ChatStep::RequestType => &REQUEST_OPTIONS,
            ChatStep::Equipment => &EQUIPMENT_OPTIONS,
            _ => &[],
        }
    }

    /// True only while the postcode field should accept text.
    pub fn is_input_active(&self) -> bool {
        self.step == ChatStep::Postcode
    }

    /// First activation seeds the greeting and schedules the opening
    /// question. Any later call is a no-op: the session resumes where it
    /// left off.
    pub fn open(&mut self) -> Vec<ScheduledReply> {
        if !self.messages.is_empty() {
            return Vec::new();
        }
        self.push_bot(GREETING);
        vec![ScheduledReply::after_delay(BotReply::AskRequestType)]
    }

    /// Answer the current question with one of its buttons.
    ///
    /// `step` is the step the button was rendered for; a click that
    /// arrives for any other step than the current one is ignored, as is
    /// an option whose kind does not belong to that step.
    pub fn select_option(&mut self, step: ChatStep, option: &ChatOption) -> Vec<ScheduledReply> {
        if step != self.step {
            return Vec::new();
        }
        match (step, option.choice) {
            (ChatStep::RequestType, Choice::Service(kind)) => {
                self.push_user(option.label);
                self.request.request_type = Some(kind);
                vec![ScheduledReply::after_delay(BotReply::AskEquipment)]
            }
            (ChatStep::Equipment, Choice::Equipment(kind)) => {
                self.push_user(option.label);
                self.request.equipment = Some(kind);
                vec![ScheduledReply::after_delay(BotReply::AskPostcode)]
            }
            _ => Vec::new(),
        }
    }

    /// Submit the postcode text. Blank input is ignored without a trace.
    /// Accepted input is uppercased as-is (no trimming), echoed into the
    /// transcript, recorded, and its verdict scheduled. The verdict
    /// captures this submission's code, so a quick resubmission gets its
    /// own independent evaluation.
    pub fn submit_postcode(&mut self, raw: &str) -> Vec<ScheduledReply> {
        if self.step != ChatStep::Postcode {
            return Vec::new();
        }
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let postcode = raw.to_uppercase();
        self.push_user(&postcode);
        self.request.postcode = Some(postcode.clone());
        vec![ScheduledReply::after_delay(BotReply::PostcodeVerdict(
            postcode,
        ))]
    }

    /// Apply a reply whose timer fired. May hand back follow-up replies
    /// to schedule.
    pub fn deliver(&mut self, reply: BotReply) -> Vec<ScheduledReply> {
        match reply {
            BotReply::AskRequestType => {
                self.push_bot(ASK_REQUEST_TYPE);
                self.step = ChatStep::RequestType;
                Vec::new()
            }
            BotReply::AskEquipment => {
                self.push_bot(ASK_EQUIPMENT);
                self.step = ChatStep::Equipment;
                Vec::new()
            }
            BotReply::AskPostcode => {
                self.push_bot(ASK_POSTCODE);
                self.step = ChatStep::Postcode;
                Vec::new()
            }
            BotReply::PostcodeVerdict(postcode) => {
                if in_service_area(&postcode) {
                    self.push_bot(IN_AREA);
                    vec![ScheduledReply::after_delay(BotReply::Confirmation)]
                } else {
                    self.push_bot(&format!(
                        "Helaas valt postcode {postcode} buiten ons werkgebied (regio Rotterdam)."
                    ));
                    // Step stays at Postcode; the visitor may try again.
                    Vec::new()
                }
            }
            BotReply::Confirmation => {
                self.push_bot(CONFIRMATION);
                self.step = ChatStep::Done;
                Vec::new()
            }
        }
    }

    fn push_bot(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.to_string(),
        });
    }

    fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deliver every scheduled reply immediately, depth-first, until the
    /// flow goes quiet. The delay is presentation-only, so collapsing it
    /// to zero keeps every ordering guarantee.
    fn drain(flow: &mut ChatFlow, mut pending: Vec<ScheduledReply>) {
        while !pending.is_empty() {
            let mut next = Vec::new();
            for scheduled in pending {
                next.extend(flow.deliver(scheduled.reply));
            }
            pending = next;
        }
    }

    fn texts(flow: &ChatFlow) -> Vec<&str> {
        flow.messages().iter().map(|m| m.text.as_str()).collect()
    }

    /// Flow advanced through both button questions, waiting for a postcode.
    fn answered_up_to_postcode() -> ChatFlow {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);
        let pending = flow.select_option(ChatStep::RequestType, &REQUEST_OPTIONS[0]);
        drain(&mut flow, pending);
        let pending = flow.select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[0]);
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Postcode);
        flow
    }

    #[test]
    fn first_open_seeds_greeting_then_question() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();

        assert_eq!(flow.messages().len(), 1);
        assert_eq!(flow.step(), ChatStep::Greeting);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].delay_ms, REPLY_DELAY_MS);

        drain(&mut flow, pending);
        assert_eq!(flow.messages().len(), 2);
        assert!(flow.messages().iter().all(|m| m.sender == Sender::Bot));
        assert_eq!(flow.step(), ChatStep::RequestType);
    }

    #[test]
    fn reopen_is_a_no_op() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);

        let before = flow.messages().len();
        assert!(flow.open().is_empty());
        assert_eq!(flow.messages().len(), before);
        assert_eq!(flow.step(), ChatStep::RequestType);
    }

    #[test]
    fn reopen_before_first_reply_fires_changes_nothing() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();

        // Close/reopen while the greeting follow-up is still pending.
        assert!(flow.open().is_empty());
        assert_eq!(flow.messages().len(), 1);

        // The pending reply still fires afterwards.
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::RequestType);
    }

    #[test]
    fn each_answer_advances_one_step_with_one_prompt() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);

        let pending = flow.select_option(ChatStep::RequestType, &REQUEST_OPTIONS[1]);
        assert_eq!(flow.step(), ChatStep::RequestType, "advances only on delivery");
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Equipment);
        assert_eq!(flow.request().request_type, Some(RequestType::Repair));

        let before = flow.messages().len();
        let pending = flow.select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[1]);
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Postcode);
        assert_eq!(flow.request().equipment, Some(EquipmentKind::Pump));
        // One user echo plus one bot prompt.
        assert_eq!(flow.messages().len(), before + 2);
        assert!(flow.is_input_active());
    }

    #[test]
    fn valid_postcode_gets_success_then_confirmation() {
        let mut flow = answered_up_to_postcode();

        let pending = flow.submit_postcode("3011AB");
        drain(&mut flow, pending);

        let texts = texts(&flow);
        let success = texts
            .iter()
            .position(|t| t.contains("Uitstekend"))
            .expect("success entry");
        assert!(texts[success + 1].contains("binnen 24 uur"));
        assert_eq!(flow.step(), ChatStep::Done);
        assert!(!flow.is_input_active());
    }

    #[test]
    fn out_of_area_postcode_keeps_the_step_and_allows_retry() {
        let mut flow = answered_up_to_postcode();

        let pending = flow.submit_postcode("9999ZZ");
        drain(&mut flow, pending);

        assert_eq!(flow.step(), ChatStep::Postcode);
        let last = flow.messages().last().expect("rejection entry");
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("9999ZZ"));

        // A corrected code still goes through.
        let pending = flow.submit_postcode("3011AB");
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Done);
    }

    #[test]
    fn blank_postcode_is_silently_ignored() {
        let mut flow = answered_up_to_postcode();
        let before = flow.messages().len();

        assert!(flow.submit_postcode("").is_empty());
        assert!(flow.submit_postcode("   ").is_empty());
        assert_eq!(flow.messages().len(), before);
        assert_eq!(flow.step(), ChatStep::Postcode);
        assert_eq!(flow.request().postcode, None);
    }

    #[test]
    fn postcode_is_uppercased_but_not_trimmed() {
        let mut flow = answered_up_to_postcode();

        let pending = flow.submit_postcode("3011ab");
        assert_eq!(flow.messages().last().unwrap().text, "3011AB");
        assert_eq!(flow.request().postcode.as_deref(), Some("3011AB"));
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Done);

        // Leading whitespace is kept, which makes the prefix check fail.
        let mut flow = answered_up_to_postcode();
        let pending = flow.submit_postcode(" 3011AB");
        assert_eq!(flow.request().postcode.as_deref(), Some(" 3011AB"));
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::Postcode);
    }

    #[test]
    fn stale_step_click_has_no_effect() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);
        assert_eq!(flow.step(), ChatStep::RequestType);

        let before = flow.messages().len();
        // A button rendered for the equipment question, clicked too early.
        assert!(flow
            .select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[0])
            .is_empty());
        assert_eq!(flow.messages().len(), before);
        assert_eq!(flow.request(), &ServiceRequest::default());
        assert_eq!(flow.step(), ChatStep::RequestType);
    }

    #[test]
    fn option_kind_must_match_the_step() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);

        // Right step argument, wrong kind of option.
        assert!(flow
            .select_option(ChatStep::RequestType, &EQUIPMENT_OPTIONS[0])
            .is_empty());
        assert_eq!(flow.request().equipment, None);
    }

    #[test]
    fn selection_before_the_first_question_is_ignored() {
        let mut flow = ChatFlow::new();
        flow.open();
        // Still greeting: the follow-up question has not fired yet.
        assert!(flow
            .select_option(ChatStep::Greeting, &REQUEST_OPTIONS[0])
            .is_empty());
        assert!(flow
            .select_option(ChatStep::RequestType, &REQUEST_OPTIONS[0])
            .is_empty());
        assert_eq!(flow.messages().len(), 1);
    }

    #[test]
    fn transcript_only_ever_grows() {
        let mut flow = ChatFlow::new();
        let mut snapshot: Vec<ChatMessage> = Vec::new();

        let check = |flow: &ChatFlow, snapshot: &mut Vec<ChatMessage>| {
            assert!(flow.messages().len() >= snapshot.len());
            assert_eq!(&flow.messages()[..snapshot.len()], snapshot.as_slice());
            *snapshot = flow.messages().to_vec();
        };

        let pending = flow.open();
        check(&flow, &mut snapshot);
        drain(&mut flow, pending);
        check(&flow, &mut snapshot);

        let pending = flow.select_option(ChatStep::RequestType, &REQUEST_OPTIONS[0]);
        check(&flow, &mut snapshot);
        drain(&mut flow, pending);
        check(&flow, &mut snapshot);

        let pending = flow.select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[0]);
        drain(&mut flow, pending);
        check(&flow, &mut snapshot);

        let pending = flow.submit_postcode("9999ZZ");
        drain(&mut flow, pending);
        check(&flow, &mut snapshot);

        let pending = flow.submit_postcode("3012CD");
        drain(&mut flow, pending);
        check(&flow, &mut snapshot);
    }

    #[test]
    fn quick_double_submission_evaluates_both_in_order() {
        let mut flow = answered_up_to_postcode();

        // Second submission lands before the first verdict fires.
        let first = flow.submit_postcode("9999ZZ");
        let second = flow.submit_postcode("3011AB");
        assert_eq!(flow.messages().iter().filter(|m| m.sender == Sender::User).count(), 4);

        let mut pending = first;
        pending.extend(second);
        drain(&mut flow, pending);

        let texts = texts(&flow);
        let rejection = texts
            .iter()
            .position(|t| t.contains("9999ZZ") && t.contains("Helaas"))
            .expect("rejection for the first code");
        let success = texts
            .iter()
            .position(|t| t.contains("Uitstekend"))
            .expect("success for the second code");
        assert!(rejection < success, "verdicts keep submission order");
        assert_eq!(flow.step(), ChatStep::Done);
        // The record holds the last submitted code.
        assert_eq!(flow.request().postcode.as_deref(), Some("3011AB"));
    }

    #[test]
    fn service_area_membership() {
        for prefix in SERVICE_AREA_PREFIXES {
            assert!(in_service_area(&format!("{prefix}11AB")), "{prefix} is in area");
        }
        assert!(!in_service_area("3411AB"));
        assert!(!in_service_area("9999ZZ"));
        assert!(!in_service_area("3"));
        assert!(!in_service_area(""));
    }

    #[test]
    fn affordances_per_step() {
        let mut flow = ChatFlow::new();
        assert!(flow.current_options().is_empty());
        assert!(!flow.is_input_active());

        let pending = flow.open();
        drain(&mut flow, pending);
        assert_eq!(flow.current_options().len(), 3);
        assert!(!flow.is_input_active());

        let pending = flow.select_option(ChatStep::RequestType, &REQUEST_OPTIONS[0]);
        drain(&mut flow, pending);
        assert_eq!(flow.current_options().len(), 2);

        let pending = flow.select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[0]);
        drain(&mut flow, pending);
        assert!(flow.current_options().is_empty());
        assert!(flow.is_input_active());
    }

    #[test]
    fn full_flow_fills_the_request() {
        let mut flow = ChatFlow::new();
        let pending = flow.open();
        drain(&mut flow, pending);

        let pending = flow.select_option(ChatStep::RequestType, &REQUEST_OPTIONS[0]);
        drain(&mut flow, pending);
        let pending = flow.select_option(ChatStep::Equipment, &EQUIPMENT_OPTIONS[0]);
        drain(&mut flow, pending);
        let pending = flow.submit_postcode("3012CD");
        drain(&mut flow, pending);

        assert_eq!(
            flow.request(),
            &ServiceRequest {
                request_type: Some(RequestType::Install),
                equipment: Some(EquipmentKind::Airco),
                postcode: Some("3012CD".to_string()),
            }
        );
        assert_eq!(flow.step(), ChatStep::Done);

        let json = serde_json::to_value(flow.request()).unwrap();
        assert_eq!(json["request_type"], "install");
        assert_eq!(json["equipment"], "airco");
        assert_eq!(json["postcode"], "3012CD");
    }
}
