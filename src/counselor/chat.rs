//! Canned answers for the virtual advisor box. There is no model behind
//! it: a question is matched against an ordered keyword table and the first
//! rule that fits supplies the reply.

struct ChatRule {
    /// Every keyword must appear.
    all_of: &'static [&'static str],
    /// At least one must appear; empty means no extra condition.
    any_of: &'static [&'static str],
    reply: &'static str,
}

impl ChatRule {
    fn matches(&self, question: &str) -> bool {
        self.all_of.iter().all(|k| question.contains(k))
            && (self.any_of.is_empty() || self.any_of.iter().any(|k| question.contains(k)))
    }
}

const WHY_FRONT_END: &str = "Your interest test shows strong creative and technical leanings, which makes front-end development a natural fit. Your logical reasoning and eye for detail also line up closely with what the field asks for.";

const SKILLS_TO_BUILD: &str = "Focus on deepening your JavaScript and React, and pick up the basics of user experience design. Build practical projects as you learn and start a portfolio that stands out.";

const DATA_ANALYSIS: &str = "To get into data analysis, start with Python and basic statistics, then move on to libraries such as Pandas and NumPy. The 'Complete Data Science' course on DataCamp is a good first step, followed by practice on real datasets.";

const FALLBACK: &str = "I can help you understand the recommendations you received and put together a development plan for your goals. Do you have a specific question about career paths, in-demand skills or next steps?";

// Order matters: "why front-end development" must win over the generic
// "develop" rule below it.
const RULES: &[ChatRule] = &[
    ChatRule {
        all_of: &["why", "front-end"],
        any_of: &[],
        reply: WHY_FRONT_END,
    },
    ChatRule {
        all_of: &[],
        any_of: &["skill", "develop"],
        reply: SKILLS_TO_BUILD,
    },
    ChatRule {
        all_of: &["data analysis"],
        any_of: &[],
        reply: DATA_ANALYSIS,
    },
];

/// Reply for `question`, or `None` when it is blank.
pub fn canned_reply(question: &str) -> Option<&'static str> {
    let question = question.trim();
    if question.is_empty() {
        return None;
    }
    let question = question.to_lowercase();
    let reply = RULES
        .iter()
        .find(|rule| rule.matches(&question))
        .map_or(FALLBACK, |rule| rule.reply);
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_questions_get_no_reply() {
        assert_eq!(canned_reply(""), None);
        assert_eq!(canned_reply("   \n\t"), None);
    }

    #[test]
    fn why_front_end_takes_priority_over_develop() {
        let reply = canned_reply("Why was Front-End Development recommended for me?");
        assert_eq!(reply, Some(WHY_FRONT_END));
    }

    #[test]
    fn skills_question_matches_either_keyword() {
        assert_eq!(canned_reply("Which skills should I learn?"), Some(SKILLS_TO_BUILD));
        assert_eq!(canned_reply("How do I develop further?"), Some(SKILLS_TO_BUILD));
    }

    #[test]
    fn data_analysis_question() {
        assert_eq!(canned_reply("How do I get into Data Analysis?"), Some(DATA_ANALYSIS));
    }

    #[test]
    fn unmatched_question_gets_fallback() {
        assert_eq!(canned_reply("hello there"), Some(FALLBACK));
        // "why" alone is not enough for the first rule.
        assert_eq!(canned_reply("why?"), Some(FALLBACK));
    }

    proptest! {
        #[test]
        fn any_non_blank_question_gets_some_reply(q in ".*\\S.*") {
            prop_assert!(canned_reply(&q).is_some());
        }

        #[test]
        fn reply_ignores_case(q in "[a-zA-Z ]{1,40}") {
            prop_assert_eq!(canned_reply(&q), canned_reply(&q.to_uppercase()));
        }
    }
}
