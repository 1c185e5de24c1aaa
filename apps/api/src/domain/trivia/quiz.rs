// Quiz question picker
// The server keeps no session: callers resend the ids they have already seen.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every question in the store
    All,
    /// Only questions in the given category
    Category(i32),
}

impl From<i32> for QuizScope {
    /// Category id `0` is the "all categories" selector.
    fn from(id: i32) -> Self {
        if id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Picks the next question id for a quiz
///
/// Chooses uniformly among `candidates` that are not in `previous`.
/// Returns `None` once every candidate has been served, which ends the quiz.
///
/// # Example
/// ```
/// use cafe_trivia_api::domain::trivia::quiz::select_next;
///
/// let mut rng = rand::rng();
/// assert_eq!(select_next(&[1, 2], &[1], &mut rng), Some(2));
/// assert_eq!(select_next(&[1, 2], &[2, 1], &mut rng), None);
/// ```
pub fn select_next<R>(candidates: &[i32], previous: &[i32], rng: &mut R) -> Option<i32>
where
    R: Rng + ?Sized,
{
    let served: HashSet<i32> = previous.iter().copied().collect();
    let available: Vec<i32> = candidates
        .iter()
        .copied()
        .filter(|id| !served.contains(id))
        .collect();

    available.choose(rng).copied()
}
