//! Ordered keyword rule table for the reply engine.
//!
//! Each rule pairs a predicate over the lower-cased utterance with a canned
//! reply. Declaration order is priority order: the first rule whose
//! predicate matches wins, then the greeting pattern, then the fallback.

use regex::Regex;

// =============================================================================
// Topics
// =============================================================================

/// Topic tag for a rule, used for auditing and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Services,
    Contact,
    Address,
    Hours,
    CaseStudy,
    News,
    About,
    Quote,
    Map,
    Faq,
    Greeting,
}

// =============================================================================
// Predicates and rules
// =============================================================================

/// Predicate over the normalized (lower-cased) utterance.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Matches when any keyword occurs as a substring anywhere in the text.
    AnyOf(&'static [&'static str]),
    /// Matches when the pattern is found anywhere in the text.
    ///
    /// The greeting alternation is deliberately unanchored, so a token
    /// embedded in a longer word still matches.
    Pattern(Regex),
}

impl Predicate {
    /// Evaluate the predicate against an already lower-cased utterance.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::AnyOf(keywords) => keywords.iter().any(|k| normalized.contains(k)),
            Predicate::Pattern(re) => re.is_match(normalized),
        }
    }
}

/// A single predicate-to-reply mapping.
#[derive(Debug, Clone)]
pub struct Rule {
    pub topic: Topic,
    pub predicate: Predicate,
    pub reply: &'static str,
}

// =============================================================================
// Reply texts
// =============================================================================

const SERVICES_REPLY: &str = "We offer a comprehensive suite of media solutions, including Broadcast Solutions, Digital Advertising, Content Production, Media Analytics, Audience Development, and Radio Broadcasting. Visit our Services page for details!";

const CONTACT_REPLY: &str = "You can contact us via the form on our Contact page, by emailing info@nexstar.com, or by calling (214) 555-5555. Our headquarters are in Irving, TX.";

const ADDRESS_REPLY: &str = "Our headquarters are at 545 E John Carpenter Freeway, Suite 700, Irving, TX 75062. We also have offices in New York and Los Angeles.";

const HOURS_REPLY: &str =
    "We're available Monday to Friday: 9:00 AM - 5:00 PM. Closed on weekends.";

const CASE_STUDY_REPLY: &str =
    "You can read our latest client success stories on the Case Study section of our website.";

const NEWS_REPLY: &str =
    "Our News page features the latest updates and announcements from Nexstar Media Group.";

const ABOUT_REPLY: &str = "Nexstar Media Group is a leading provider of media solutions, helping businesses grow with data-driven strategies and expert guidance. Check our About page for more info!";

const QUOTE_REPLY: &str =
    "You can request a free quote or consultation by filling out the form on our Contact page.";

const MAP_REPLY: &str = "You'll find an interactive map on our Contact page, showing our headquarters and other locations.";

const FAQ_REPLY: &str = "Our FAQ section answers common questions about our services and partnership process. Let me know your specific question!";

const GREETING_REPLY: &str = "Hello! \u{1f44b} How can I help you today? Ask me anything about our services, locations, or how to get in touch!";

const FALLBACK_REPLY: &str = "I'm Nexstar's AI assistant \u{1f916}. I can answer questions about our services, company info, contact details, and more. Feel free to ask anything!";

/// Greeting alternation, matched against the lower-cased utterance.
const GREETING_PATTERN: &str = "hi|hello|hey|greetings|namaste|hola|bonjour|hii|sup|yo";

// =============================================================================
// RuleSet
// =============================================================================

/// The fixed, ordered collection of topic rules plus the greeting rule and
/// the fallback reply.
///
/// Constructed once at startup and never mutated. Evaluation walks the
/// topic rules in declaration order, then the greeting rule, then returns
/// the fallback.
#[derive(Debug, Clone)]
pub struct RuleSet {
    topics: Vec<Rule>,
    greeting: Rule,
    fallback: &'static str,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// Build the default rule table.
    pub fn new() -> Self {
        let table: &[(Topic, &'static [&'static str], &'static str)] = &[
            (Topic::Services, &["services", "offer"], SERVICES_REPLY),
            (Topic::Contact, &["contact"], CONTACT_REPLY),
            (
                Topic::Address,
                &["address", "location", "located"],
                ADDRESS_REPLY,
            ),
            (Topic::Hours, &["hours", "timing"], HOURS_REPLY),
            (Topic::CaseStudy, &["case study"], CASE_STUDY_REPLY),
            (Topic::News, &["news"], NEWS_REPLY),
            (Topic::About, &["about"], ABOUT_REPLY),
            (Topic::Quote, &["quote", "consult"], QUOTE_REPLY),
            (Topic::Map, &["map", "find"], MAP_REPLY),
            (Topic::Faq, &["faq"], FAQ_REPLY),
        ];

        let topics = table
            .iter()
            .map(|&(topic, keywords, reply)| Rule {
                topic,
                predicate: Predicate::AnyOf(keywords),
                reply,
            })
            .collect();

        let greeting = Rule {
            topic: Topic::Greeting,
            predicate: Predicate::Pattern(
                Regex::new(GREETING_PATTERN).expect("Invalid greeting regex"),
            ),
            reply: GREETING_REPLY,
        };

        Self {
            topics,
            greeting,
            fallback: FALLBACK_REPLY,
        }
    }

    /// Resolve the reply for one utterance.
    ///
    /// Total over all string inputs: lower-cases the utterance, returns the
    /// reply of the first matching topic rule, else the greeting reply if
    /// the greeting pattern matches, else the fallback.
    pub fn reply_for(&self, utterance: &str) -> &'static str {
        let normalized = utterance.to_lowercase();

        for rule in &self.topics {
            if rule.predicate.matches(&normalized) {
                return rule.reply;
            }
        }

        if self.greeting.predicate.matches(&normalized) {
            return self.greeting.reply;
        }

        self.fallback
    }

    /// The topic rules in priority order, for auditing.
    pub fn topic_rules(&self) -> &[Rule] {
        &self.topics
    }

    /// The greeting rule, evaluated after all topic rules.
    pub fn greeting_rule(&self) -> &Rule {
        &self.greeting
    }

    /// The reply returned when nothing matches.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Look up the canned reply for a topic, if the table declares one.
    pub fn reply_for_topic(&self, topic: Topic) -> Option<&'static str> {
        if topic == Topic::Greeting {
            return Some(self.greeting.reply);
        }
        self.topics
            .iter()
            .find(|r| r.topic == topic)
            .map(|r| r.reply)
    }
}

// =============================================================================
// Tests
// =============================================================================
