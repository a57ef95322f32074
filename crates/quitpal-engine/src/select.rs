use crate::similarity::rank_descending;

/// Reply used when no corpus sentence scores above zero.
pub const FALLBACK_REPLY: &str = "I apologize, I don't understand.";

/// Maximum number of corpus sentences concatenated into one reply.
pub const MAX_REPLY_SENTENCES: usize = 3;

/// Assemble the reply from ranked candidates.
///
/// Walks the rows in descending-score order, skipping the query row
/// itself, and collects up to [`MAX_REPLY_SENTENCES`] sentences with a
/// strictly positive score, joined by single spaces. Matched sentences
/// keep their original corpus casing and punctuation. With no positive
/// match the reply is exactly [`FALLBACK_REPLY`].
pub fn select_reply(sentences: &[String], scores: &[f32], query_row: usize) -> String {
    let mut picked: Vec<&str> = Vec::new();
    for index in rank_descending(scores) {
        // Exclude the utterance row by index rather than assuming it ranks
        // first; a corpus sentence with the same token multiset would tie.
        if index == query_row {
            continue;
        }
        if scores[index] > 0.0 {
            if let Some(sentence) = sentences.get(index) {
                picked.push(sentence);
            }
            if picked.len() == MAX_REPLY_SENTENCES {
                break;
            }
        }
    }

    if picked.is_empty() {
        FALLBACK_REPLY.to_string()
    } else {
        picked.join(" ")
    }
}
