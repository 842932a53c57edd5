/*!
 * Column layout for slide bodies.
 *
 * A slide switches to multi-column layout when it has at least two column
 * markers with an integer `width=`. Widths are relative: each column gets
 * `floor(width / total * 100)` percent of the text width, so the declared
 * percentages may sum to less than 100.
 */

use crate::deck::lines;

/// Minimum number of width-bearing markers for a multi-column slide
pub const MIN_COLUMNS: usize = 2;

/// One column of a multi-column slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    /// Declared relative width
    pub width: u64,
    /// Whole percent of the text width
    pub percent: u64,
    /// Body lines belonging to this column
    pub lines: Vec<&'a str>,
}

impl Column<'_> {
    /// Width argument for `\begin{column}`, e.g. `0.25\textwidth`
    pub fn latex_width(&self) -> String {
        format!(r"{}.{:02}\textwidth", self.percent / 100, self.percent % 100)
    }
}

/// Layout decision for one slide body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideLayout<'a> {
    Single(Vec<&'a str>),
    Columns(Vec<Column<'a>>),
}

/// Widths of every column marker that declares one, in order
pub fn detect_column_widths(lines: &[&str]) -> Vec<u64> {
    lines
        .iter()
        .filter_map(|line| lines::column_width(line))
        .collect()
}

/// Whole-percent share of each width.
///
/// A zero total splits the space evenly.
pub fn proportional_percents(widths: &[u64]) -> Vec<u64> {
    let total = match widths.iter().try_fold(0u64, |acc, &width| acc.checked_add(width)) {
        Some(0) => {
            let even = if widths.is_empty() { 0 } else { 100 / widths.len() as u64 };
            return vec![even; widths.len()];
        }
        Some(total) => total as f64,
        // Widths sum past u64::MAX
        None => widths.iter().map(|&width| width as f64).sum(),
    };

    widths
        .iter()
        .map(|&width| {
            let proportion = width as f64 / total;
            (proportion * 100.0).floor() as u64
        })
        .collect()
}

/// Assign lines to the most recent column marker.
///
/// Every column marker advances the bucket, declared width or not. Lines
/// before the first marker and lines past the last bucket are dropped.
pub fn partition<'a>(lines: &[&'a str], bucket_count: usize) -> Vec<Vec<&'a str>> {
    let mut buckets: Vec<Vec<&'a str>> = vec![Vec::new(); bucket_count];
    let mut current: Option<usize> = None;

    for line in lines {
        if lines::is_column_marker(line) {
            current = Some(current.map_or(0, |idx| idx + 1));
            continue;
        }
        if let Some(bucket) = current.and_then(|idx| buckets.get_mut(idx)) {
            bucket.push(line);
        }
    }

    buckets
}

/// Decide between single and multi-column rendering
pub fn plan(content: &str) -> SlideLayout<'_> {
    let lines: Vec<&str> = content.lines().collect();
    let widths = detect_column_widths(&lines);

    if widths.len() < MIN_COLUMNS {
        return SlideLayout::Single(lines);
    }

    let percents = proportional_percents(&widths);
    let buckets = partition(&lines, widths.len());

    let columns = widths
        .into_iter()
        .zip(percents)
        .zip(buckets)
        .map(|((width, percent), lines)| Column {
            width,
            percent,
            lines,
        })
        .collect();

    SlideLayout::Columns(columns)
}
