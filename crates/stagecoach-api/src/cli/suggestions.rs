//! Stage-keyed suggested questions for the chat client.
//!
//! Each project stage carries three starter questions a student can pick
//! instead of typing. The stage key doubles as the section tag sent to the
//! gateway.

/// Suggested questions for a stage key, if the key is known.
pub fn for_stage(stage: &str) -> Option<[&'static str; 3]> {
    match stage {
        "stage1" => Some([
            "I'm on Stage 1 and I don't really understand what a digital system is. Can you explain it simply?",
            "Can you help me think of examples of hardware, software and networks for my workbook?",
            "How do digital systems and networks connect to AC9TDI8K01 and AC9TDI8K02?",
        ]),
        "stage2" => Some([
            "I'm on Stage 2 and binary is confusing. Can you explain why computers use binary and how it links to AC9TDI8K04?",
            "How do I explain my pixel art activity in my own words for the workbook?",
            "Can you help me describe what my data chart shows in Stage 2?",
        ]),
        "stage3" => Some([
            "I'm on Stage 3 and I don't know how to explain what an API is. Can you give me a simple definition?",
            "Can you help me turn the API response I see into a game idea?",
            "I tested an API but I don't understand the JSON. Which parts should I focus on?",
        ]),
        "stage4" => Some([
            "I'm on Stage 4 and I'm stuck writing user stories. Can you help me with the 'As a player I want...' structure?",
            "How can I improve my screen design so it's easier for players to use?",
            "Can you help me write 3 user stories that match AC9TDI8P04?",
        ]),
        "stage5" => Some([
            "I'm on Stage 5 and I don't know how to turn my game into an algorithm. Can you help me list the steps?",
            "How do I turn my steps into a flowchart for AC9TDI8P05?",
            "Can you help me trace my algorithm to check if it will work properly?",
        ]),
        "stage6" => Some([
            "I'm on Stage 6 and my code has errors. Can you help me debug it if I describe what's happening?",
            "How do I connect my API call to my game screen?",
            "Can you give me tips for organising my code so it's easier to understand?",
        ]),
        "stage7" => Some([
            "I'm on Stage 7 and need help filling in my bug log. What kind of information should I write?",
            "How can I decide what to improve in my game to make it more user-friendly?",
            "Can you help me evaluate my app against my user stories for AC9TDI8P10?",
        ]),
        "stage8" => Some([
            "I'm on Stage 8 and need help planning my 1-minute video. What should I say?",
            "How can I reflect on what I learned across the whole project?",
            "Can you help me write a reflection that links to AC9TDI8P10 and AC9TDI8P14?",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_three_suggestions() {
        for n in 1..=8 {
            let key = format!("stage{n}");
            let suggestions = for_stage(&key).expect("known stage");
            assert_eq!(suggestions.len(), 3);
            for suggestion in suggestions {
                assert!(!suggestion.is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_stage_has_none() {
        assert!(for_stage("stage9").is_none());
        assert!(for_stage("").is_none());
    }
}
