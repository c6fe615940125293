use answerset::Answer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TEXTS: &[&str] = &["True", "False", "true", "FALSE", "8", "8.0", "Jelly", "", "  false "];

/// Deterministic batch of random answer lists, including empty ones.
pub fn random_answer_lists(count: usize) -> Vec<Vec<Answer>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..6);
            (0..len)
                .map(|_| {
                    let text = TEXTS[rng.gen_range(0..TEXTS.len())];
                    let answer = Answer::new(text, rng.gen_bool(0.4));
                    if rng.gen_bool(0.5) {
                        answer.with_order(rng.gen_range(0..10))
                    } else {
                        answer
                    }
                })
                .collect()
        })
        .collect()
}

pub fn answers(items: &[(&str, bool, u32)]) -> Vec<Answer> {
    items
        .iter()
        .map(|(text, correct, order)| Answer::new(*text, *correct).with_order(*order))
        .collect()
}
