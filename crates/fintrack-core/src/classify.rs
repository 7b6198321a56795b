//! Rule-based message risk scoring
//!
//! Scores a free-text message (SMS, email, DM) for social-engineering tactics.
//! Each tactic has a fixed lexicon of Spanish trigger phrases; a tactic is
//! detected when any phrase occurs as a literal substring of the lowercased
//! message. Partial matches inside longer words count.
//!
//! Scoring:
//! - 0.10 per detected tactic
//! - +0.25 for account suspension / blocking language
//! - +0.25 for credential (PIN / code) requests
//! - clamped to 1.0 and rounded to two decimals

use tracing::debug;

use crate::models::{AnalysisResult, RiskLabel, Tactic};

const URGENCY: &[&str] = &[
    "urgente",
    "ahora",
    "inmediato",
    "última oportunidad",
    "vence",
    "suspende",
    "expira",
];

const AUTHORITY: &[&str] = &[
    "banco",
    "soporte",
    "verificado",
    "certificado",
    "seguridad",
    "aviso",
    "su cuenta",
];

const SCARCITY: &[&str] = &["solo hoy", "hoy", "cupos", "últimos", "edición limitada"];

const REQUEST_MONEY: &[&str] = &[
    "transfiere",
    "envía",
    "wallet",
    "cript",
    "clave",
    "código",
    "datos",
    "verifique",
];

const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl", "goo.gl", "ow.ly"];

const RAW_PROTOCOLS: &[&str] = &["http://", "https://"];

/// Suspension / blocking language
const SUSPENSION_BOOST: &[&str] = &["suspend", "bloque"];

/// PIN / code requests
const CREDENTIAL_BOOST: &[&str] = &["clave", "código"];

/// Scores are kept in hundredths so thresholds compare exactly
const TACTIC_POINTS: u32 = 10;
const BOOST_POINTS: u32 = 25;
const MAX_POINTS: u32 = 100;

const MANIPULATIVE_MIN: f64 = 0.75;
const LEGITIMATE_MAX: f64 = 0.25;

pub const RATIONALE: &str =
    "Local heuristics: urgency/authority/link, request for data/payment.";

pub const RECOMMENDATION_CAUTION: &str =
    "Do not click or share data. Verify via official channel.";

pub const RECOMMENDATION_SAFE: &str = "No apparent risks. Stay cautious.";

/// Evaluation order of the tactic detectors
const TACTICS: [Tactic; 5] = [
    Tactic::Urgency,
    Tactic::Authority,
    Tactic::Scarcity,
    Tactic::RequestMoney,
    Tactic::SuspiciousUrl,
];

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

fn detects(tactic: Tactic, text: &str) -> bool {
    match tactic {
        Tactic::Urgency => contains_any(text, URGENCY),
        Tactic::Authority => contains_any(text, AUTHORITY),
        Tactic::Scarcity => contains_any(text, SCARCITY),
        Tactic::RequestMoney => contains_any(text, REQUEST_MONEY),
        Tactic::SuspiciousUrl => {
            contains_any(text, URL_SHORTENERS) || contains_any(text, RAW_PROTOCOLS)
        }
    }
}

/// Score a message. Never fails; empty text is legitimate with score 0.
pub fn classify(text: &str) -> AnalysisResult {
    let text = text.to_lowercase();

    let tactics: Vec<Tactic> = TACTICS
        .iter()
        .copied()
        .filter(|t| detects(*t, &text))
        .collect();

    let mut points = TACTIC_POINTS * tactics.len() as u32;
    if contains_any(&text, SUSPENSION_BOOST) {
        points += BOOST_POINTS;
    }
    if contains_any(&text, CREDENTIAL_BOOST) {
        points += BOOST_POINTS;
    }
    let risk_score = f64::from(points.min(MAX_POINTS)) / 100.0;

    let label = label_for(risk_score, tactics.len());

    debug!(
        tactics = tactics.len(),
        risk_score,
        label = %label,
        "Classified message"
    );

    AnalysisResult {
        risk_score,
        label,
        rationale: rationale_for(&tactics),
        recommendation: recommendation_for(label).to_string(),
        tactics_detected: tactics,
    }
}

/// Score a message received over a channel.
///
/// The rule set targets one language's vocabulary, so `locale` and `channel`
/// are recorded but do not change the result.
pub fn classify_message(
    text: &str,
    locale: Option<&str>,
    channel: Option<&str>,
) -> AnalysisResult {
    debug!(
        locale = locale.unwrap_or("es"),
        channel = channel.unwrap_or("sms"),
        len = text.len(),
        "Classifying message"
    );
    classify(text)
}

fn label_for(risk_score: f64, tactic_count: usize) -> RiskLabel {
    if risk_score >= MANIPULATIVE_MIN {
        RiskLabel::Manipulative
    } else if risk_score <= LEGITIMATE_MAX && tactic_count == 0 {
        RiskLabel::Legitimate
    } else {
        RiskLabel::Uncertain
    }
}

fn rationale_for(tactics: &[Tactic]) -> String {
    if tactics.is_empty() {
        return RATIONALE.to_string();
    }
    let names: Vec<&str> = tactics.iter().map(Tactic::as_str).collect();
    format!("{} Detected: {}.", RATIONALE, names.join(", "))
}

fn recommendation_for(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::Legitimate => RECOMMENDATION_SAFE,
        RiskLabel::Uncertain | RiskLabel::Manipulative => RECOMMENDATION_CAUTION,
    }
}
