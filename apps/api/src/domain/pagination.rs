// Page slicing for list endpoints

/// Number of questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, `per_page` items at a time
///
/// Input order is preserved. A page past the end, or any page below 1,
/// yields an empty list rather than an error.
///
/// # Example
/// ```
/// use cafe_trivia_api::domain::pagination::paginate;
///
/// let items: Vec<u32> = (1..=12).collect();
/// assert_eq!(paginate(items.clone(), 2, 10), vec![11, 12]);
/// assert!(paginate(items, 3, 10).is_empty());
/// ```
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    let start = match page
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| index.checked_mul(per_page))
    {
        Some(start) => start,
        None => return Vec::new(),
    };

    items.into_iter().skip(start).take(per_page).collect()
}
