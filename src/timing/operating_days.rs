use super::weekday::{day_index, MONDAY, SATURDAY, SUNDAY};

/// The weekdays a schedule applies to, indexed 0=Sunday..6=Saturday.
///
/// Never empty when produced by [`parse_operating_days`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperatingDays {
    days: [bool; 7],
}

impl OperatingDays {
    pub fn all() -> Self {
        Self { days: [true; 7] }
    }

    pub fn single(index: u8) -> Self {
        Self::from_indices([index])
    }

    /// Indices above 6 are ignored.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        let mut days = [false; 7];
        for index in indices {
            if let Some(day) = days.get_mut(index as usize) {
                *day = true;
            }
        }
        Self { days }
    }

    /// Inclusive range that wraps past Saturday when `start > end`.
    pub fn range(start: u8, end: u8) -> Self {
        if start <= end {
            return Self::from_indices(start..=end);
        }
        Self::from_indices((start..=SATURDAY).chain(SUNDAY..=end))
    }

    pub fn contains(&self, index: u8) -> bool {
        self.days.get(index as usize).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.days.iter().filter(|day| **day).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full_week(&self) -> bool {
        self.len() == 7
    }

    pub fn indices(&self) -> Vec<u8> {
        (0..7u8).filter(|index| self.contains(*index)).collect()
    }

    /// The first operating day strictly after `today`, wrapping through the week.
    /// Returns `None` when `today` is the only candidate left.
    pub fn next_after(&self, today: u8) -> Option<u8> {
        (1..7u8)
            .map(|offset| (today + offset) % 7)
            .find(|index| self.contains(*index))
    }
}

impl Default for OperatingDays {
    fn default() -> Self {
        Self::all()
    }
}

type Matcher = fn(&str) -> Option<OperatingDays>;

/// Tried in order on the normalised input. The first `Some` wins.
const MATCHERS: [Matcher; 4] = [match_keyword, match_range, match_list, match_single_day];

fn match_keyword(text: &str) -> Option<OperatingDays> {
    ["24/7", "everyday", "daily"]
        .iter()
        .any(|keyword| text.contains(keyword))
        .then(OperatingDays::all)
}

/// A separator with an unknown day on either side still claims the input, and yields
/// the whole week.
fn match_range(text: &str) -> Option<OperatingDays> {
    if !text.contains(" - ") {
        return None;
    }
    let mut tokens = text.split(" - ");
    let start = tokens.next().and_then(day_index);
    let end = tokens.next().and_then(day_index);
    let days = match (start, end) {
        (Some(MONDAY), Some(SUNDAY)) => OperatingDays::all(),
        (Some(start), Some(end)) => OperatingDays::range(start, end),
        _ => OperatingDays::all(),
    };
    Some(days)
}

fn match_list(text: &str) -> Option<OperatingDays> {
    if !text.contains(',') {
        return None;
    }
    let days = OperatingDays::from_indices(text.split(',').filter_map(day_index));
    if days.is_empty() {
        return Some(OperatingDays::all());
    }
    Some(days)
}

fn match_single_day(text: &str) -> Option<OperatingDays> {
    day_index(text).map(OperatingDays::single)
}

/// Interprets a free-form `businessDays` string.
///
/// Total: empty or unrecognised input opens the whole week.
pub fn parse_operating_days(business_days: &str) -> OperatingDays {
    let normalized = business_days.trim().to_lowercase();
    if normalized.is_empty() {
        return OperatingDays::all();
    }
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(&normalized))
        .unwrap_or_default()
}
