use aho_corasick::AhoCorasick;

/// A single help centre question.

#[derive(PartialEq, Debug)]
pub struct FaqEntry {
    pub topic: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        topic: "Getting started",
        question: "How do I create an account?",
        answer: "Click sign up on the home page and enter your email and a password. We'll send you a link to verify your email address.",
    },
    FaqEntry {
        topic: "Getting started",
        question: "Is the planning toolkit free?",
        answer: "Yes. Couples can use the checklist, guest list, budget tracker, timeline and seating chart at no cost.",
    },
    FaqEntry {
        topic: "Vendors",
        question: "How do I list my business?",
        answer: "Go to the vendor sign up page, choose your business category and fill in your details. Your listing goes live once your email is verified.",
    },
    FaqEntry {
        topic: "Vendors",
        question: "Can I change my plan later?",
        answer: "You can upgrade or downgrade your vendor plan at any time from your dashboard. Changes apply from the next billing period.",
    },
    FaqEntry {
        topic: "Vendors",
        question: "Why can't I sign in to the vendor dashboard?",
        answer: "Vendor sign in only works for accounts registered as a business. If you signed up as a couple, create a separate vendor account with a different email.",
    },
    FaqEntry {
        topic: "Planning tools",
        question: "Can my partner edit our wedding plan?",
        answer: "Yes. Invite your partner or planner from the settings page and they can edit your checklist, budget and guest list.",
    },
    FaqEntry {
        topic: "Planning tools",
        question: "How do guests RSVP?",
        answer: "Share your wedding website link. Guests enter their name to find their invitation and respond, including meal choices.",
    },
    FaqEntry {
        topic: "Billing",
        question: "Which payment methods do you accept?",
        answer: "We accept all major credit and debit cards. Yearly billing is discounted compared to monthly billing.",
    },
    FaqEntry {
        topic: "Billing",
        question: "How do I cancel my subscription?",
        answer: "Cancel from the billing section of your dashboard. Your listing stays active until the end of the current period.",
    },
    FaqEntry {
        topic: "Privacy",
        question: "Who can see my guest list?",
        answer: "Only you and the collaborators you invite. Vendors never see your guest list.",
    },
];

/// A piece of text that either matched the search or didn't.

#[derive(Clone, PartialEq, Debug)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

fn matcher(query: &str) -> Option<AhoCorasick> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([query])
        .ok()
}

/// Return the entries whose question or answer contain the query, in table
/// order. A blank query returns everything.

pub fn search(query: &str) -> Vec<&'static FaqEntry> {
    let Some(ac) = matcher(query) else {
        return FAQS.iter().collect();
    };
    FAQS.iter()
        .filter(|entry| ac.is_match(entry.question) || ac.is_match(entry.answer))
        .collect()
}

/// Split text into matched and unmatched runs for the given query.

pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let Some(ac) = matcher(query) else {
        return vec![Segment { text, matched: false }];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in ac.find_iter(text) {
        if m.start() > last {
            segments.push(Segment { text: &text[last..m.start()], matched: false });
        }
        segments.push(Segment { text: &text[m.start()..m.end()], matched: true });
        last = m.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment { text: &text[last..], matched: false });
    }
    segments
}

/// Distinct topics in the order they first appear.

pub fn topics() -> Vec<&'static str> {
    let mut topics: Vec<&'static str> = Vec::new();
    for entry in FAQS {
        if !topics.contains(&entry.topic) {
            topics.push(entry.topic);
        }
    }
    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(search("").len(), FAQS.len());
        assert_eq!(search("   ").len(), FAQS.len());
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let results = search("VENDOR");
        assert!(!results.is_empty());
        for entry in &results {
            let haystack = format!("{} {}", entry.question, entry.answer).to_lowercase();
            assert!(haystack.contains("vendor"));
        }
        let positions: Vec<usize> = results
            .iter()
            .map(|r| FAQS.iter().position(|e| e.question == r.question).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn search_matches_answers_too() {
        let results = search("meal choices");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question, "How do guests RSVP?");
    }

    #[test]
    fn no_match_returns_nothing() {
        assert!(search("helicopter").is_empty());
    }

    #[test]
    fn highlight_marks_every_hit() {
        let segments = highlight("Plan the plan", "plan");
        assert_eq!(
            segments,
            vec![
                Segment { text: "Plan", matched: true },
                Segment { text: " the ", matched: false },
                Segment { text: "plan", matched: true },
            ]
        );
    }

    #[test]
    fn highlight_without_query_is_one_plain_segment() {
        assert_eq!(highlight("hello", ""), vec![Segment { text: "hello", matched: false }]);
        assert_eq!(highlight("", "x"), vec![Segment { text: "", matched: false }]);
    }

    #[test]
    fn topics_are_distinct() {
        assert_eq!(topics(), vec!["Getting started", "Vendors", "Planning tools", "Billing", "Privacy"]);
    }
}
